use crate::error::{PackError, Result};
use crate::video::calibration::Calibration;

/// Largest palette the 4-bit index bus can address.
pub const MAX_COLORS: usize = 16;

/// Largest value a pixel index may hold.
pub const MAX_INDEX: u8 = 0x0F;

pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PackError::InvalidDimension {
            width,
            height,
            reason: "width and height must be non-zero".into(),
        });
    }
    Ok(())
}

/// Packing pairs horizontal neighbours, so every row needs an even pixel count.
pub fn validate_even_width(width: usize, height: usize) -> Result<()> {
    if width & 1 != 0 {
        return Err(PackError::InvalidDimension {
            width,
            height,
            reason: "width must be an even number".into(),
        });
    }
    Ok(())
}

pub fn validate_color_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(PackError::EmptyPalette);
    }
    if count > MAX_COLORS {
        return Err(PackError::PaletteOverflow { count });
    }
    Ok(())
}

pub fn validate_calibration(cal: &Calibration) -> Result<()> {
    if !(cal.gray_threshold >= 0.0 && cal.gray_threshold <= 1.0) {
        return Err(PackError::Validation(format!(
            "gray_threshold must be in 0..=1, got {}",
            cal.gray_threshold
        )));
    }
    for (name, v) in [("luma_scale", cal.luma_scale), ("phase_scale", cal.phase_scale)] {
        if !v.is_finite() || v <= 0.0 {
            return Err(PackError::Validation(format!("{name} must be positive, got {v}")));
        }
    }
    if cal.chroma_steps == 0 || cal.chroma_steps > 7 {
        return Err(PackError::Validation(format!(
            "chroma_steps must be in 1..=7, got {}",
            cal.chroma_steps
        )));
    }
    Ok(())
}
