// crates/imgpack-core/src/hdl/vhdl.rs
//
// Text form of the palette lookup, consumed by the FPGA synthesis flow.

use std::fmt::Write as _;

use crate::error::Result;
use crate::hdl::cascade::{build_cascades, Cascade, Literal};
use crate::video::encode::PaletteEntry;

/// License block carried at the top of every generated file, byte for byte.
pub const LICENSE_PREAMBLE: &str = "\
-- Copyright (c) 2014, Juha Turunen
-- All rights reserved.
--
-- Redistribution and use in source and binary forms, with or without
-- modification, are permitted provided that the following conditions are met: 
--
-- 1. Redistributions of source code must retain the above copyright notice, this
--    list of conditions and the following disclaimer. 
-- 2. Redistributions in binary form must reproduce the above copyright notice,
--    this list of conditions and the following disclaimer in the documentation
--    and/or other materials provided with the distribution. 
--
-- THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\" AND
-- ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED
-- WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
-- DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE FOR
-- ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES
-- (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;
-- LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND
-- ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
-- (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
-- SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
";

const LIBRARIES: &str = "\
library IEEE;
use IEEE.STD_LOGIC_1164.ALL;
use IEEE.STD_LOGIC_ARITH.ALL;
use IEEE.STD_LOGIC_UNSIGNED.ALL;
";

const ENTITY: &str = "\
entity palette is Port ( 
    index : in std_logic_vector(3 downto 0);
    luma : out std_logic_vector(10 downto 0);
    phase : out std_logic_vector(7 downto 0);
    chroma : out std_logic_vector(2 downto 0)
 );
end palette;
";

const ARCH_BEGIN: &str = "\
architecture Behavioral of palette is
begin
";

const ARCH_END: &str = "end Behavioral;\n";

impl Literal {
    pub fn render(&self) -> String {
        match self {
            Literal::Conv { value, width } => format!("conv_std_logic_vector({value}, {width})"),
            Literal::Bits(bits) => format!("\"{bits}\""),
        }
    }
}

/// One concurrent assignment:
///
/// ```text
///     luma <=
///         <lit> when index = "0000" else
///         <lit>;
/// ```
pub fn render_cascade(c: &Cascade) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\t{} <=", c.signal.name());
    for clause in &c.clauses {
        let lit = clause.literal.render();
        match clause.selector.as_deref() {
            Some(sel) => {
                let _ = writeln!(s, "\t\t{lit} when index = \"{sel}\" else");
            }
            None => {
                let _ = writeln!(s, "\t\t{lit};");
            }
        }
    }
    s
}

/// Complete `palette` entity for the given entries (already in index order).
pub fn render_palette_vhdl(entries: &[PaletteEntry]) -> Result<String> {
    let cascades = build_cascades(entries)?;

    let mut s = String::with_capacity(4096);
    s.push_str(LICENSE_PREAMBLE);
    s.push('\n');
    s.push_str(LIBRARIES);
    s.push('\n');
    s.push_str(ENTITY);
    s.push('\n');
    s.push_str(ARCH_BEGIN);
    s.push('\n');
    for c in &cascades {
        s.push_str(&render_cascade(c));
        s.push('\n');
    }
    s.push_str(ARCH_END);
    Ok(s)
}
