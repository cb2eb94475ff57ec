pub mod error;
pub mod validate;

pub mod checksum;
pub mod raster;
pub mod pixel;
pub mod video;
pub mod hdl;
pub mod rom;

pub use crate::error::{PackError, Result};
pub use crate::pixel::pack::{pack_raster, PixelPair};
pub use crate::raster::{ColorTable, IndexedRaster};
pub use crate::video::calibration::{default_calibration, Calibration};
pub use crate::video::color::Rgb;
pub use crate::video::encode::{encode_palette, PaletteEntry};
