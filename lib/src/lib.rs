//! ASCII Ramp - image to ASCII art converter
//!
//! Every pixel is reduced to a brightness value, and that value picks one
//! glyph from a fixed 69-character density ramp. The resulting glyph grid can
//! be written to a text file or printed to a terminal.
//!
//! # Example
//! ```no_run
//! use ascii_ramp::{AsciiConfig, ConsoleStyle, process_file, print_to_stdout, write_to_file};
//! use std::path::Path;
//!
//! let config = AsciiConfig::default();
//! let glyphs = process_file(Path::new("photo.jpg"), &config).unwrap();
//! write_to_file(&glyphs, Path::new("output/photo.txt")).unwrap();
//! print_to_stdout(&glyphs, &ConsoleStyle::plain()).unwrap();
//! ```

pub mod brightness;
pub mod config;
pub mod error;
pub mod lut;
pub mod matrix;
pub mod output;
pub mod processor;
pub mod source;

// Re-export main types for convenience
pub use brightness::{BrightnessPolicy, Pixel, Rounding, estimate};
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use lut::{Overflow, RAMP, map_glyph};
pub use matrix::{Grid, transform};
pub use output::{ConsoleStyle, print_to_console, print_to_stdout, write_to_file};
pub use processor::{process_file, process_image, process_pixels};
pub use source::{PixelSource, pixel_grid};
