//! Error types for the conversion pipeline.

use std::path::PathBuf;

/// Errors that can occur while converting an image to ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The source path could not be opened or decoded as an image.
    #[error("cannot load image {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A brightness value fell outside [0, 255] and overflow is configured to fail.
    #[error("brightness {brightness} maps to ramp index {index}, outside 0..{len}")]
    IndexOutOfRange {
        brightness: i32,
        index: i64,
        len: usize,
    },

    /// The output directory could not be created or the file could not be written.
    #[error("cannot write output {}: {source}", path.display())]
    OutputPathUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rows handed to a grid do not all have the same length.
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A configuration value is out of its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing to the console failed.
    #[error("console write failed: {0}")]
    Console(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
