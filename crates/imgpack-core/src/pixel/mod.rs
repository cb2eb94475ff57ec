// crates/imgpack-core/src/pixel/mod.rs

pub mod pack;
