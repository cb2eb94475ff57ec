// crates/imgpack-cli/src/io/mod.rs

pub mod indexed_png;
pub mod jsonl;
pub mod rom;
