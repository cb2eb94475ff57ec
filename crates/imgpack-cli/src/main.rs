// crates/imgpack-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "imgpack-cli")]
#[command(about = "Indexed image -> composite video ROM + palette VHDL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack an indexed PNG into a pixel ROM and a palette VHDL entity
    Pack(cmd::pack::PackArgs),

    /// Show the derived luma/chroma/phase table for an indexed PNG
    Inspect(cmd::inspect::InspectArgs),

    /// Generate the color-carrier sine ROM (.mif)
    Carrier(cmd::carrier::CarrierArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Pack(args) => cmd::pack::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Carrier(args) => cmd::carrier::run(args),
    }
}
