// crates/imgpack-cli/src/io/indexed_png.rs

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use imgpack_core::validate::MAX_COLORS;
use imgpack_core::{ColorTable, IndexedRaster};

/// Indexed PNG decoded into the core's input model.
pub struct DecodedImage {
    pub raster: IndexedRaster,
    pub colors: ColorTable,
    /// Source bit depth (1, 2, 4 or 8).
    pub bit_depth: u8,
}

/// Decode an indexed-color PNG without palette expansion.
///
/// Rejects non-indexed images, palettes over 16 colors, and pixels that
/// point past the end of the palette.
pub fn load_indexed_png(path: &str) -> anyhow::Result<DecodedImage> {
    let file = File::open(path).with_context(|| format!("couldn't open input image {path}"))?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("decode png header: {path}"))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .with_context(|| format!("decode png data: {path}"))?;

    if frame.color_type != png::ColorType::Indexed {
        anyhow::bail!(
            "pixel format must be indexed color (got {:?})",
            frame.color_type
        );
    }

    let plte = reader
        .info()
        .palette
        .as_ref()
        .map(|p| p.to_vec())
        .ok_or_else(|| anyhow::anyhow!("indexed png has no PLTE chunk: {path}"))?;
    let color_count = plte.len() / 3;
    if color_count > MAX_COLORS {
        anyhow::bail!(
            "color count must be <= {}. The source file has {} colors.",
            MAX_COLORS,
            color_count
        );
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let bit_depth = frame.bit_depth as u8;
    let pixels = unpack_rows(&buf, width, height, frame.line_size, bit_depth)?;

    if let Some(pos) = pixels.iter().position(|&p| p as usize >= color_count) {
        anyhow::bail!(
            "pixel ({},{}) uses index {} but the palette has {} colors",
            pos % width,
            pos / width,
            pixels[pos],
            color_count
        );
    }

    Ok(DecodedImage {
        raster: IndexedRaster::new(width, height, pixels)?,
        colors: ColorTable::from_rgb_bytes(&plte)?,
        bit_depth,
    })
}

/// Expand PNG scanlines (1/2/4/8 bits per pixel, MSB-first) into one index per byte.
fn unpack_rows(
    buf: &[u8],
    width: usize,
    height: usize,
    line_size: usize,
    bit_depth: u8,
) -> anyhow::Result<Vec<u8>> {
    if !matches!(bit_depth, 1 | 2 | 4 | 8) {
        anyhow::bail!("unsupported indexed bit depth {bit_depth}");
    }
    if buf.len() < line_size * height {
        anyhow::bail!(
            "png frame short: need {} bytes, got {}",
            line_size * height,
            buf.len()
        );
    }

    let bits = bit_depth as usize;
    let mask: u8 = ((1u16 << bits) - 1) as u8;

    let mut out = Vec::with_capacity(width * height);
    for row in buf.chunks_exact(line_size).take(height) {
        for x in 0..width {
            let bit = x * bits;
            let shift = 8 - bits - (bit % 8);
            out.push((row[bit / 8] >> shift) & mask);
        }
    }
    Ok(out)
}
