//! Brightness ramp lookup
//!
//! The ramp runs from sparse, light-looking glyphs at index 0 to dense,
//! dark-looking glyphs at the last index.

use crate::error::{AsciiError, Result};

/// Number of glyphs in [`RAMP`].
pub const RAMP_LEN: usize = 69;

/// Density ramp, lightest first.
pub const RAMP: &str = ".'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

const _: () = assert!(RAMP.len() == RAMP_LEN);

/// Brightness values are divided by this before scaling to the ramp length,
/// so 255 lands on the last index instead of one past it.
pub const BRIGHTNESS_DIVISOR: i64 = 256;

/// What to do with a brightness value outside [0, 255]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Clamp the ramp index to the first or last glyph
    #[default]
    Clamp,
    /// Fail with [`AsciiError::IndexOutOfRange`]
    Fail,
}

/// Get the glyph at a ramp index
///
/// # Panics
/// If `index >= RAMP_LEN`
pub fn ramp_char(index: usize) -> char {
    RAMP.as_bytes()[index] as char
}

/// Ramp index for a brightness value: `floor(brightness / 256 * 69)`
///
/// Not bounded; values outside [0, 255] give indices outside the ramp.
pub fn glyph_index(brightness: i32) -> i64 {
    (brightness as i64 * RAMP_LEN as i64).div_euclid(BRIGHTNESS_DIVISOR)
}

/// Map a brightness value to a ramp glyph, clamping out-of-range input
pub fn map_glyph(brightness: i32) -> char {
    let index = glyph_index(brightness).clamp(0, RAMP_LEN as i64 - 1);
    ramp_char(index as usize)
}

/// Map a brightness value to a ramp glyph under an explicit overflow policy
///
/// # Arguments
/// * `brightness` - Brightness value, nominally [0, 255]
/// * `overflow` - Whether to clamp or reject out-of-range values
/// * `invert` - Map bright pixels to sparse glyphs instead of dense ones
///
/// # Returns
/// The glyph, or `IndexOutOfRange` when `overflow` is `Fail` and the value
/// does not fit the ramp
pub fn select_glyph(brightness: i32, overflow: Overflow, invert: bool) -> Result<char> {
    let index = glyph_index(brightness);
    let last = RAMP_LEN as i64 - 1;

    let index = match overflow {
        Overflow::Clamp => index.clamp(0, last),
        Overflow::Fail if (0..=last).contains(&index) => index,
        Overflow::Fail => {
            return Err(AsciiError::IndexOutOfRange {
                brightness,
                index,
                len: RAMP_LEN,
            });
        }
    };

    let index = if invert { last - index } else { index };
    Ok(ramp_char(index as usize))
}
