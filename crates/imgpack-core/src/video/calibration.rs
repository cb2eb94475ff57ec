// crates/imgpack-core/src/video/calibration.rs

/// Analog calibration constants for the composite output stage.
///
/// These are properties of the DAC and sync generator, not of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct Calibration {
    /// Black level added to every luma code.
    pub pedestal: u16,
    /// Full-scale luma swing above the pedestal.
    pub luma_scale: f64,
    /// Rec.601 weights for R, G, B.
    pub luma_weights: [f64; 3],
    /// Below this HSV saturation a color is sent without carrier.
    pub gray_threshold: f64,
    /// Chroma code used for "no color"; also the number of amplitude steps.
    pub chroma_steps: u8,
    /// Color-burst reference phase, in turns.
    pub burst_offset: f64,
    /// Phase code units per turn.
    pub phase_scale: f64,
}

pub fn default_calibration() -> Calibration {
    Calibration {
        pedestal: 278,
        luma_scale: 1023.0,
        luma_weights: [0.299, 0.587, 0.114],
        gray_threshold: 0.1,
        chroma_steps: 7,
        // 60 degrees
        burst_offset: 60.0 / 360.0,
        phase_scale: 255.0,
    }
}

impl Calibration {
    /// Same constants with a different black level.
    pub fn with_pedestal(mut self, pedestal: u16) -> Self {
        self.pedestal = pedestal;
        self
    }
}
