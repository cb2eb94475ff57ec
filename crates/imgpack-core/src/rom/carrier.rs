// crates/imgpack-core/src/rom/carrier.rs
//
// Color-carrier sine ROM. One table per chroma amplitude step, largest first,
// concatenated into a single signed word stream.

use std::f64::consts::TAU;

use crate::error::{PackError, Result};
use crate::rom::mif::render_mif;

/// Largest ROM the generator will build, in words.
pub const MAX_DEPTH: usize = 1 << 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarrierParams {
    /// Peak of the first (most saturated) table.
    pub amplitude: u32,
    /// Samples per carrier period.
    pub length: usize,
    /// Signed word width.
    pub width: u32,
    /// Number of tables.
    pub steps: u32,
}

impl Default for CarrierParams {
    fn default() -> Self {
        Self {
            amplitude: 150,
            length: 256,
            width: 9,
            steps: 7,
        }
    }
}

impl CarrierParams {
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(PackError::InvalidCarrier("length must be non-zero".into()));
        }
        if self.steps == 0 {
            return Err(PackError::InvalidCarrier("steps must be non-zero".into()));
        }
        if !(2..=32).contains(&self.width) {
            return Err(PackError::InvalidCarrier(format!(
                "width must be in 2..=32, got {}",
                self.width
            )));
        }
        match self.length.checked_mul(self.steps as usize) {
            Some(depth) if depth <= MAX_DEPTH => {}
            _ => {
                return Err(PackError::InvalidCarrier(format!(
                    "length*steps must be at most {} words, got length={} steps={}",
                    MAX_DEPTH, self.length, self.steps
                )));
            }
        }
        let peak = (1i64 << (self.width - 1)) - 1;
        if self.amplitude as i64 > peak {
            return Err(PackError::FieldOverflow {
                value: self.amplitude as i64,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Words in the concatenated ROM (saturates; `validate` bounds it).
    pub fn depth(&self) -> usize {
        self.length.saturating_mul(self.steps as usize)
    }
}

/// Peak amplitude per table: start at `amplitude`, drop by `amplitude / steps` each step.
pub fn amplitude_schedule(p: &CarrierParams) -> Vec<u32> {
    let step = p.amplitude / p.steps.max(1);
    (0..p.steps).map(|i| p.amplitude - i * step).collect()
}

/// One full period: `round(amplitude * sin(2*pi*i/length))`.
pub fn sine_table(amplitude: u32, length: usize) -> Vec<i64> {
    (0..length)
        .map(|i| {
            let theta = TAU * i as f64 / length as f64;
            (amplitude as f64 * theta.sin()).round() as i64
        })
        .collect()
}

pub fn carrier_rom(p: &CarrierParams) -> Result<Vec<i64>> {
    p.validate()?;
    let mut out = Vec::with_capacity(p.depth());
    for a in amplitude_schedule(p) {
        out.extend(sine_table(a, p.length));
    }
    Ok(out)
}

pub fn render_carrier_mif(p: &CarrierParams) -> Result<String> {
    let words = carrier_rom(p)?;
    render_mif(&words, p.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule() {
        let p = CarrierParams::default();
        assert_eq!(amplitude_schedule(&p), vec![150, 129, 108, 87, 66, 45, 24]);
    }

    #[test]
    fn quarter_points() {
        let t = sine_table(150, 256);
        assert_eq!(t.len(), 256);
        assert_eq!(t[0], 0);
        assert_eq!(t[64], 150);
        assert_eq!(t[128], 0);
        assert_eq!(t[192], -150);
    }

    #[test]
    fn rom_depth_and_order() {
        let p = CarrierParams::default();
        let rom = carrier_rom(&p).unwrap();
        assert_eq!(rom.len(), 256 * 7);
        assert_eq!(rom[64], 150);
        assert_eq!(rom[256 + 64], 129);
        assert_eq!(rom[6 * 256 + 192], -24);
    }

    #[test]
    fn amplitude_must_fit_signed_width() {
        let p = CarrierParams {
            amplitude: 256,
            ..Default::default()
        };
        assert!(matches!(
            carrier_rom(&p),
            Err(PackError::FieldOverflow { value: 256, width: 9 })
        ));
        let p = CarrierParams {
            amplitude: 255,
            ..Default::default()
        };
        assert!(carrier_rom(&p).is_ok());
    }

    #[test]
    fn degenerate_params_rejected() {
        for p in [
            CarrierParams { length: 0, ..Default::default() },
            CarrierParams { steps: 0, ..Default::default() },
            CarrierParams { width: 1, ..Default::default() },
            CarrierParams { length: usize::MAX / 2 + 1, steps: 2, ..Default::default() },
            CarrierParams { length: MAX_DEPTH, steps: 2, ..Default::default() },
        ] {
            assert!(carrier_rom(&p).is_err(), "{p:?}");
        }
    }
}
