// crates/imgpack-core/src/pixel/pack.rs

use crate::error::{PackError, Result};
use crate::raster::IndexedRaster;
use crate::validate::validate_even_width;

/// Two horizontally adjacent palette indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelPair {
    /// Left pixel, lands in the high nibble.
    pub left: u8,
    /// Right pixel, lands in the low nibble.
    pub right: u8,
}

impl PixelPair {
    /// Pack into one ROM byte: (left<<4)|right
    #[inline]
    pub fn pack_byte(self) -> u8 {
        ((self.left & 0x0F) << 4) | (self.right & 0x0F)
    }

    #[inline]
    pub fn unpack_byte(x: u8) -> Self {
        Self {
            left: (x >> 4) & 0x0F,
            right: x & 0x0F,
        }
    }
}

/// Pack a raster into the pixel ROM stream.
///
/// Byte `k` holds scan-order pixels `2k` (high nibble) and `2k+1` (low nibble).
/// Rows go top to bottom, pairs left to right; the ROM addressing on the
/// hardware side depends on exactly this order.
pub fn pack_raster(raster: &IndexedRaster) -> Result<Vec<u8>> {
    validate_even_width(raster.width(), raster.height())?;

    let mut out = Vec::with_capacity(raster.width() * raster.height() / 2);
    for row in raster.rows() {
        for pair in row.chunks_exact(2) {
            out.push(
                PixelPair {
                    left: pair[0],
                    right: pair[1],
                }
                .pack_byte(),
            );
        }
    }

    Ok(out)
}

/// Inverse of `pack_raster` for a known geometry.
pub fn unpack_bytes(bytes: &[u8], width: usize, height: usize) -> Result<IndexedRaster> {
    validate_even_width(width, height)?;

    let need = width
        .checked_mul(height)
        .map(|n| n / 2)
        .ok_or_else(|| PackError::InvalidDimension {
            width,
            height,
            reason: "pixel count overflows usize".into(),
        })?;
    if bytes.len() != need {
        return Err(PackError::InvalidDimension {
            width,
            height,
            reason: format!("expected {} packed bytes, got {}", need, bytes.len()),
        });
    }

    let mut pixels = Vec::with_capacity(need * 2);
    for &b in bytes {
        let p = PixelPair::unpack_byte(b);
        pixels.push(p.left);
        pixels.push(p.right);
    }

    IndexedRaster::new(width, height, pixels)
}
