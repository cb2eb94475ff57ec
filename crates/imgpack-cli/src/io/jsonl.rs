// crates/imgpack-cli/src/io/jsonl.rs

use imgpack_core::{PaletteEntry, Rgb};

/// One palette row as JSON.
/// Format: {"index":N,"rgb":[r,g,b],"luma":N,"chroma":N,"phase":N}
pub fn entry_line(rgb: Rgb, e: &PaletteEntry) -> String {
    format!(
        "{{\"index\":{},\"rgb\":[{},{},{}],\"luma\":{},\"chroma\":{},\"phase\":{}}}",
        e.index, rgb.r, rgb.g, rgb.b, e.luma, e.chroma, e.phase
    )
}

/// Write palette rows as JSONL to stdout.
pub fn write_entries_stdout(rows: &[(Rgb, PaletteEntry)]) -> anyhow::Result<()> {
    for (rgb, e) in rows {
        println!("{}", entry_line(*rgb, e));
    }
    Ok(())
}
