// crates/imgpack-cli/src/cmd/mod.rs

pub mod carrier;
pub mod inspect;
pub mod pack;
