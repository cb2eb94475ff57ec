// crates/imgpack-cli/src/cmd/inspect.rs

use clap::{Args, ValueEnum};
use imgpack_core::hdl::binfield::bin_field;
use imgpack_core::video::encode::PHASE_BITS;
use imgpack_core::{default_calibration, encode_palette, PaletteEntry, Rgb};

use crate::io::indexed_png::load_indexed_png;
use crate::io::jsonl;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Fmt {
    Text,
    Jsonl,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input image (indexed PNG)
    #[arg(long)]
    pub r#in: String,

    /// Row format on stdout
    #[arg(long, value_enum, default_value_t = Fmt::Text)]
    pub fmt: Fmt,

    /// Luma black level (DAC code)
    #[arg(long, default_value_t = 278)]
    pub pedestal: u16,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let img = load_indexed_png(&args.r#in)?;
    let cal = default_calibration().with_pedestal(args.pedestal);

    eprintln!("--- inspect ---");
    eprintln!("file        = {}", args.r#in);
    eprintln!("size        = {}x{}", img.raster.width(), img.raster.height());
    eprintln!("bit_depth   = {}", img.bit_depth);
    eprintln!("colors      = {}", img.colors.len());
    eprintln!("max_index   = {}", img.raster.max_index());
    eprintln!("even_width  = {}", img.raster.width() % 2 == 0);
    eprintln!("pedestal    = {}", cal.pedestal);

    let entries = encode_palette(&img.colors, &cal)?;
    let rows: Vec<(Rgb, PaletteEntry)> = img.colors.colors().iter().copied().zip(entries).collect();

    match args.fmt {
        Fmt::Jsonl => jsonl::write_entries_stdout(&rows)?,
        Fmt::Text => {
            for (rgb, e) in &rows {
                println!(
                    "{:>2}  #{:02x}{:02x}{:02x}  luma={:>4}  chroma={}  phase={:>4} ({})",
                    e.index,
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    e.luma,
                    e.chroma,
                    e.phase,
                    bin_field(e.phase as i64, PHASE_BITS)?
                );
            }
        }
    }

    Ok(())
}
