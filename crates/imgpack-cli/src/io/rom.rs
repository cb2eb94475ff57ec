// crates/imgpack-cli/src/io/rom.rs

use anyhow::Context;
use clap::ValueEnum;
use imgpack_core::rom::mif::render_byte_mif;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RomFormat {
    /// Raw bytes, one packed pixel pair per byte.
    Bin,
    /// Memory Initialization File, 8-bit words.
    Mif,
}

impl RomFormat {
    pub fn label(self) -> &'static str {
        match self {
            RomFormat::Bin => "bin",
            RomFormat::Mif => "mif",
        }
    }
}

/// File contents for the pixel ROM in the requested container.
pub fn render_rom(packed: &[u8], fmt: RomFormat) -> anyhow::Result<Vec<u8>> {
    Ok(match fmt {
        RomFormat::Bin => packed.to_vec(),
        RomFormat::Mif => render_byte_mif(packed)?.into_bytes(),
    })
}

pub fn write_file(path: &str, bytes: &[u8], what: &str) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("couldn't write {what}: {path}"))?;
    Ok(())
}
