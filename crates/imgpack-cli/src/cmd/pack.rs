// crates/imgpack-cli/src/cmd/pack.rs

use std::path::{Path, PathBuf};

use clap::Args;
use imgpack_core::checksum::{artifact_id_hex, crc32};
use imgpack_core::hdl::vhdl::render_palette_vhdl;
use imgpack_core::{default_calibration, encode_palette, pack_raster};

use crate::io::indexed_png::load_indexed_png;
use crate::io::rom::{render_rom, write_file, RomFormat};

#[derive(Args)]
pub struct PackArgs {
    /// Input image (indexed PNG, at most 16 colors, even width)
    #[arg(long)]
    pub r#in: String,

    /// Output pixel ROM path
    #[arg(long)]
    pub rom: String,

    /// Output palette VHDL path
    #[arg(long)]
    pub vhdl: String,

    /// Pixel ROM container
    #[arg(long, value_enum, default_value_t = RomFormat::Bin)]
    pub rom_format: RomFormat,

    /// Luma black level (DAC code). Override only when the output stage is recalibrated.
    #[arg(long, default_value_t = 278)]
    pub pedestal: u16,
}

pub fn run(args: PackArgs) -> anyhow::Result<()> {
    if same_destination(&args.rom, &args.vhdl) {
        anyhow::bail!("--rom and --vhdl must be different files (both are {})", args.rom);
    }

    let img = load_indexed_png(&args.r#in)?;
    let (w, h) = (img.raster.width(), img.raster.height());

    if w & 1 != 0 {
        anyhow::bail!("image width must be an even number (got {w})");
    }

    let cal = default_calibration().with_pedestal(args.pedestal);

    // Build both artifacts before touching the filesystem so a bad palette
    // entry never leaves a ROM without its matching VHDL.
    let packed = pack_raster(&img.raster)?;
    let entries = encode_palette(&img.colors, &cal)?;
    let vhdl = render_palette_vhdl(&entries)?;
    let rom = render_rom(&packed, args.rom_format)?;

    write_file(&args.rom, &rom, "pixel rom")?;
    if let Err(e) = write_file(&args.vhdl, vhdl.as_bytes(), "palette vhdl") {
        // best effort: don't leave half an output set behind
        let _ = std::fs::remove_file(&args.rom);
        return Err(e);
    }

    eprintln!(
        "pack ok: in={} size={}x{} depth={} colors={} rom={} rom_format={} rom_bytes={} rom_crc32={:08x} vhdl={} vhdl_id={} pedestal={}",
        args.r#in,
        w,
        h,
        img.bit_depth,
        img.colors.len(),
        args.rom,
        args.rom_format.label(),
        packed.len(),
        crc32(&packed),
        args.vhdl,
        artifact_id_hex(vhdl.as_bytes()),
        cal.pedestal
    );

    Ok(())
}

/// True when both outputs would land in the same file.
fn same_destination(a: &str, b: &str) -> bool {
    let (pa, pb) = (Path::new(a), Path::new(b));
    if pa == pb {
        return true;
    }
    match (resolve(pa), resolve(pb)) {
        (Some(ra), Some(rb)) => ra == rb,
        _ => false,
    }
}

/// Canonical parent directory joined with the file name; the file itself need not exist.
fn resolve(p: &Path) -> Option<PathBuf> {
    let name = p.file_name()?;
    let parent = match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(name))
}
