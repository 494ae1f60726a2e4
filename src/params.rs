//! Run configuration for the blur/sharpen cycle.
//!
//! [`TurifyParams`] is the single source of truth for defaults. The CLI maps
//! only the flags the user actually passed onto this struct; everything else
//! falls through to [`TurifyParams::default`].
//!
//! The sharpen radius is never stored: it is always derived from
//! `blur_radius / ratio` via [`TurifyParams::sharp_radius`], so the two can
//! never drift apart.

/// Parameters controlling one turify run.
#[derive(Debug, Clone, PartialEq)]
pub struct TurifyParams {
    /// Number of blur+sharpen rounds.
    pub iterations: u32,
    /// Blur-radius-to-sharpen-radius divisor. Must be positive; validated at
    /// session construction.
    pub ratio: f64,
    /// Radius of the Gaussian blur. The sharpen radius is derived from this
    /// and `ratio`.
    pub blur_radius: f64,
    /// Unsharp mask strength in percent. 100 is the usual choice; lower
    /// values are allowed and produce stranger-looking output.
    pub percentage_sharp: i32,
    /// Divisor applied to both image dimensions before processing, to trade
    /// fidelity for speed. Values <= 1 leave the image untouched.
    pub shrink_factor: f64,
    /// Keep colour channels instead of converting to grayscale.
    pub colour: bool,
    /// Print a progress line per iteration.
    pub verbose: bool,
}

impl Default for TurifyParams {
    fn default() -> Self {
        Self {
            iterations: 50,
            ratio: 0.5,
            blur_radius: 5.0,
            percentage_sharp: 100,
            shrink_factor: 1.0,
            colour: false,
            verbose: false,
        }
    }
}

impl TurifyParams {
    /// Sharpen radius derived from the blur radius and the ratio.
    pub fn sharp_radius(&self) -> f64 {
        self.blur_radius / self.ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let p = TurifyParams::default();
        assert_eq!(p.iterations, 50);
        assert_eq!(p.ratio, 0.5);
        assert_eq!(p.blur_radius, 5.0);
        assert_eq!(p.percentage_sharp, 100);
        assert_eq!(p.shrink_factor, 1.0);
        assert!(!p.colour);
        assert!(!p.verbose);
    }

    #[test]
    fn sharp_radius_is_blur_radius_over_ratio() {
        let cases = [(5.0, 0.5, 10.0), (2.0, 0.5, 4.0), (3.0, 1.5, 2.0), (7.0, 2.0, 3.5)];
        for (blur_radius, ratio, expected) in cases {
            let p = TurifyParams {
                blur_radius,
                ratio,
                ..TurifyParams::default()
            };
            assert!(
                (p.sharp_radius() - expected).abs() < 1e-12,
                "blur {blur_radius} / ratio {ratio} should give {expected}"
            );
        }
    }

    #[test]
    fn default_sharp_radius_is_double_the_blur() {
        // radius 5 / ratio 0.5
        assert_eq!(TurifyParams::default().sharp_radius(), 10.0);
    }
}
