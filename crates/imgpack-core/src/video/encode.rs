// crates/imgpack-core/src/video/encode.rs
//
// RGB -> (luma, chroma, phase) for the composite palette ROM.

use crate::error::{PackError, Result};
use crate::raster::ColorTable;
use crate::validate::validate_calibration;
use crate::video::calibration::Calibration;
use crate::video::color::Rgb;
use crate::video::quantize::{quantize_signed, quantize_unsigned};

pub const INDEX_BITS: u32 = 4;
pub const LUMA_BITS: u32 = 11;
pub const CHROMA_BITS: u32 = 3;
pub const PHASE_BITS: u32 = 8;

/// Derived drive values for one palette index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub index: u8,
    /// 11-bit unsigned.
    pub luma: u16,
    /// 3-bit unsigned, inverted: 0 is full carrier, `chroma_steps` is none.
    pub chroma: u8,
    /// 8-bit two's complement, relative to the burst.
    pub phase: i16,
}

/// Unrounded luma code.
pub fn luma_level(rgb: Rgb, cal: &Calibration) -> f64 {
    let [r, g, b] = rgb.to_unit();
    let [wr, wg, wb] = cal.luma_weights;
    let y = r * wr + g * wg + b * wb;
    cal.pedestal as f64 + y * cal.luma_scale
}

/// Chroma code from HSV saturation.
///
/// Colors under the gray threshold get the no-carrier code even where the
/// general formula would land one step lower.
pub fn chroma_level(rgb: Rgb, cal: &Calibration) -> f64 {
    let s = rgb.saturation();
    let steps = cal.chroma_steps as f64;
    if s < cal.gray_threshold {
        return steps;
    }
    ((1.0 - s) * steps).round().clamp(0.0, steps)
}

/// Burst-relative hue in turns, wrapped into [-0.5, 0.5).
pub fn burst_relative_hue(hue: f64, cal: &Calibration) -> f64 {
    let h = hue - cal.burst_offset;
    if h >= 0.5 {
        h - 1.0
    } else {
        h
    }
}

/// Unrounded phase code for a hue given in turns.
pub fn phase_from_hue(hue: f64, cal: &Calibration) -> f64 {
    burst_relative_hue(hue, cal) * cal.phase_scale
}

pub fn encode_entry(index: usize, rgb: Rgb, cal: &Calibration) -> Result<PaletteEntry> {
    let malformed = |field: &'static str, value: f64| PackError::MalformedColorEntry {
        index,
        field,
        value,
    };

    let idx = u8::try_from(index)
        .ok()
        .filter(|&i| u32::from(i) < (1 << INDEX_BITS))
        .ok_or(PackError::PaletteOverflow { count: index + 1 })?;

    let l = luma_level(rgb, cal);
    let luma = quantize_unsigned(l, LUMA_BITS).ok_or_else(|| malformed("luma", l))?;

    let c = chroma_level(rgb, cal);
    let chroma = quantize_unsigned(c, CHROMA_BITS).ok_or_else(|| malformed("chroma", c))?;

    let p = phase_from_hue(rgb.hue_turns(), cal);
    let phase = quantize_signed(p, PHASE_BITS).ok_or_else(|| malformed("phase", p))?;

    Ok(PaletteEntry {
        index: idx,
        luma: luma as u16,
        chroma: chroma as u8,
        phase: phase as i16,
    })
}

/// Encode every color in table order. Any bad entry fails the whole table.
pub fn encode_palette(table: &ColorTable, cal: &Calibration) -> Result<Vec<PaletteEntry>> {
    validate_calibration(cal)?;
    table
        .iter()
        .map(|(i, rgb)| encode_entry(i, rgb, cal))
        .collect()
}
