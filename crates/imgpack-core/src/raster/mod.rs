// crates/imgpack-core/src/raster/mod.rs
//
// Decoded input model. The CLI's image decoder builds these; the core only reads them.

use crate::error::{PackError, Result};
use crate::validate::{validate_color_count, validate_dimensions, MAX_INDEX};
use crate::video::color::Rgb;

/// Row-major grid of 4-bit palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedRaster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl IndexedRaster {
    /// Requires `pixels.len() == width * height` and every index <= 15.
    /// Width parity is checked by the packer, not here.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        validate_dimensions(width, height)?;

        let expected = width.checked_mul(height).ok_or_else(|| PackError::InvalidDimension {
            width,
            height,
            reason: "pixel count overflows usize".into(),
        })?;
        if pixels.len() != expected {
            return Err(PackError::InvalidDimension {
                width,
                height,
                reason: format!("expected {} pixels, got {}", expected, pixels.len()),
            });
        }

        if let Some(pos) = pixels.iter().position(|&p| p > MAX_INDEX) {
            return Err(PackError::PixelIndexOutOfRange {
                x: pos % width,
                y: pos / width,
                index: pixels[pos],
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Highest index used by any pixel.
    pub fn max_index(&self) -> u8 {
        self.pixels.iter().copied().max().unwrap_or(0)
    }
}

/// Ordered palette of 1..=16 colors. Position is the palette index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

impl ColorTable {
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        validate_color_count(colors.len())?;
        Ok(Self { colors })
    }

    /// Build from a packed `r,g,b,r,g,b,...` byte run (PNG PLTE layout).
    pub fn from_rgb_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 3 != 0 {
            return Err(PackError::Validation(format!(
                "palette byte length {} is not a multiple of 3",
                bytes.len()
            )));
        }
        let colors = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        self.colors.iter().copied().enumerate()
    }
}
