// crates/imgpack-cli/src/cmd/carrier.rs

use clap::Args;
use imgpack_core::rom::carrier::{amplitude_schedule, render_carrier_mif, CarrierParams};

use crate::io::rom::write_file;

#[derive(Args, Debug)]
pub struct CarrierArgs {
    /// Output .mif path
    #[arg(long)]
    pub out: String,

    /// Peak amplitude of the first table
    #[arg(long, default_value_t = 150)]
    pub amplitude: u32,

    /// Samples per carrier period
    #[arg(long, default_value_t = 256)]
    pub length: usize,

    /// Signed word width in bits
    #[arg(long, default_value_t = 9)]
    pub width: u32,

    /// Number of amplitude steps (tables)
    #[arg(long, default_value_t = 7)]
    pub steps: u32,
}

pub fn run(args: CarrierArgs) -> anyhow::Result<()> {
    let params = CarrierParams {
        amplitude: args.amplitude,
        length: args.length,
        width: args.width,
        steps: args.steps,
    };

    let mif = render_carrier_mif(&params)?;
    write_file(&args.out, mif.as_bytes(), "carrier mif")?;

    eprintln!(
        "carrier ok: out={} tables={} length={} width={} depth={} amplitudes={:?}",
        args.out,
        params.steps,
        params.length,
        params.width,
        params.depth(),
        amplitude_schedule(&params)
    );

    Ok(())
}
