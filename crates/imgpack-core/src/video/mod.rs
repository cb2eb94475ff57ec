// crates/imgpack-core/src/video/mod.rs

pub mod calibration;
pub mod color;
pub mod encode;
pub mod quantize;
