// crates/imgpack-core/src/hdl/mod.rs

pub mod binfield;
pub mod cascade;
pub mod vhdl;
