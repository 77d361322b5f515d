//! Brightness estimation policies
//!
//! Each policy reduces an RGB triple to a single scalar. Channels are signed so
//! that corrupted upstream data stays representable: such pixels simply
//! produce a brightness outside [0, 255], which the glyph mapper deals with.

use image::Rgb;

/// An RGB color triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Pixel {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    fn channels(&self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(rgb: Rgb<u8>) -> Self {
        let [r, g, b] = rgb.0;
        Self::new(r as i32, g as i32, b as i32)
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }
}

/// Luminosity weights for red, green and blue. They sum to exactly 1.0.
pub const LUMINOSITY_WEIGHTS: [f64; 3] = [0.21, 0.72, 0.07];

/// How a pixel is reduced to a brightness value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BrightnessPolicy {
    /// Mean of the three channels
    Average,
    /// Mean of the brightest and darkest channel
    MinMax,
    /// Weighted sum `0.21*R + 0.72*G + 0.07*B`
    #[default]
    Luminosity,
}

impl BrightnessPolicy {
    pub const ALL: [BrightnessPolicy; 3] = [
        BrightnessPolicy::Average,
        BrightnessPolicy::MinMax,
        BrightnessPolicy::Luminosity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BrightnessPolicy::Average => "average",
            BrightnessPolicy::MinMax => "min-max",
            BrightnessPolicy::Luminosity => "luminosity",
        }
    }
}

/// Rounding applied to the fractional brightness before it becomes an integer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Rounding {
    /// 0.5 rounds away from zero (20.5 -> 21)
    #[default]
    HalfAwayFromZero,
    /// 0.5 rounds to the nearest even integer (20.5 -> 20)
    HalfToEven,
}

impl Rounding {
    pub fn apply(self, value: f64) -> i32 {
        let rounded = match self {
            Rounding::HalfAwayFromZero => value.round(),
            Rounding::HalfToEven => value.round_ties_even(),
        };
        rounded as i32
    }
}

/// Estimate the brightness of a pixel under the given policy
///
/// Pure and total: out-of-range channels are accepted and produce an
/// out-of-range brightness.
///
/// # Arguments
/// * `pixel` - The RGB triple to reduce
/// * `policy` - Which estimator to use
/// * `rounding` - How to round the fractional result
///
/// # Returns
/// The rounded brightness, in [0, 255] for valid channels
pub fn estimate(pixel: Pixel, policy: BrightnessPolicy, rounding: Rounding) -> i32 {
    rounding.apply(raw_brightness(pixel, policy))
}

/// Unrounded brightness of a pixel
pub fn raw_brightness(pixel: Pixel, policy: BrightnessPolicy) -> f64 {
    // Channels are summed as f64 so extreme values cannot overflow
    let [r, g, b] = pixel.channels();
    match policy {
        BrightnessPolicy::Average => (r + g + b) / 3.0,
        BrightnessPolicy::MinMax => (r.max(g).max(b) + r.min(g).min(b)) / 2.0,
        BrightnessPolicy::Luminosity => {
            let [wr, wg, wb] = LUMINOSITY_WEIGHTS;
            wr * r + wg * g + wb * b
        }
    }
}
