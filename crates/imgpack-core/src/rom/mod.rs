// crates/imgpack-core/src/rom/mod.rs

pub mod carrier;
pub mod mif;
