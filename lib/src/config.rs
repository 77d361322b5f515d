use crate::brightness::{BrightnessPolicy, Rounding};
use crate::error::{AsciiError, Result};
use crate::lut::Overflow;
use image::imageops::FilterType;

/// Largest accepted canvas side, in characters
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, Copy)]
pub struct AsciiConfig {
    /// Canvas size in characters
    pub width: u32,              // 1-4096, default 200
    pub height: u32,             // 1-4096, default 200

    /// Brightness
    pub policy: BrightnessPolicy, // default Luminosity
    pub rounding: Rounding,       // default HalfAwayFromZero

    /// Glyph selection
    pub overflow: Overflow,      // default Clamp
    pub invert: bool,            // default false

    /// Resampling filter used when the source is not already canvas-sized
    pub filter: FilterType,      // default CatmullRom

    /// Run the per-cell stages on the rayon pool
    pub parallel: bool,          // default true
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            // Canvas
            width: 200,
            height: 200,

            // Brightness
            policy: BrightnessPolicy::Luminosity,
            rounding: Rounding::HalfAwayFromZero,

            // Glyph selection
            overflow: Overflow::Clamp,
            invert: false,

            filter: FilterType::CatmullRom,
            parallel: true,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.width > MAX_CANVAS_SIDE {
            return Err(AsciiError::InvalidConfig(format!(
                "width must be between 1 and {MAX_CANVAS_SIDE}, got {}",
                self.width
            )));
        }
        if self.height < 1 || self.height > MAX_CANVAS_SIDE {
            return Err(AsciiError::InvalidConfig(format!(
                "height must be between 1 and {MAX_CANVAS_SIDE}, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AsciiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (200, 200));
        assert_eq!(config.policy, BrightnessPolicy::Luminosity);
        assert_eq!(config.overflow, Overflow::Clamp);
    }

    #[test]
    fn test_invalid_width() {
        let mut config = AsciiConfig::default();
        config.width = 0;
        assert!(config.validate().is_err());

        config.width = MAX_CANVAS_SIDE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_height() {
        let config = AsciiConfig {
            height: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("height"));
    }
}
