// crates/imgpack-core/src/video/color.rs

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components normalized to 0.0..=1.0.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// HSV saturation: (max-min)/max, 0 for black.
    pub fn saturation(self) -> f64 {
        let [r, g, b] = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == 0.0 {
            0.0
        } else {
            (max - min) / max
        }
    }

    /// HSL hue as a fraction of a turn in 0.0..1.0.
    ///
    /// Achromatic colors have no hue; they report 0.
    pub fn hue_turns(self) -> f64 {
        let [r, g, b] = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        if d == 0.0 {
            return 0.0;
        }

        let sector = if max == r {
            (g - b) / d
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let h = sector / 6.0;
        if h < 0.0 {
            h + 1.0
        } else {
            h
        }
    }
}
