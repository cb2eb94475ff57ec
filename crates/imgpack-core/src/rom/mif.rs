// crates/imgpack-core/src/rom/mif.rs
//
// Memory Initialization File writer (Quartus ROM init format).
//
// Layout:
//   WIDTH=<bits>;
//   DEPTH=<words>;
//
//   ADDRESS_RADIX=UNS;
//   DATA_RADIX=BIN;
//
//   CONTENT BEGIN
//   \t<addr> : <bits>;
//   END;

use std::fmt::Write as _;

use crate::error::{PackError, Result};
use crate::hdl::binfield::bin_field;

pub fn render_mif(words: &[i64], width: u32) -> Result<String> {
    if words.is_empty() {
        return Err(PackError::Validation("mif needs at least one word".into()));
    }

    let mut s = String::with_capacity(64 + words.len() * (width as usize + 12));
    let _ = writeln!(s, "WIDTH={width};");
    let _ = writeln!(s, "DEPTH={};", words.len());
    s.push('\n');
    s.push_str("ADDRESS_RADIX=UNS;\n");
    s.push_str("DATA_RADIX=BIN;\n");
    s.push('\n');
    s.push_str("CONTENT BEGIN\n");
    for (addr, &w) in words.iter().enumerate() {
        let _ = writeln!(s, "\t{addr} : {};", bin_field(w, width)?);
    }
    s.push_str("END;\n");
    Ok(s)
}

/// 8-bit wide image of a byte stream, e.g. the packed pixel ROM.
pub fn render_byte_mif(bytes: &[u8]) -> Result<String> {
    let words: Vec<i64> = bytes.iter().map(|&b| b as i64).collect();
    render_mif(&words, 8)
}
