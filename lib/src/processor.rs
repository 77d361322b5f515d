use crate::brightness::{Pixel, estimate};
use crate::config::AsciiConfig;
use crate::error::{AsciiError, Result};
use crate::lut::select_glyph;
use crate::matrix::{Grid, par_transform, transform, try_par_transform, try_transform};
use crate::source::pixel_grid;
use image::{RgbImage, imageops};
use std::path::Path;
use std::time::Instant;

/// Load an image from disk as RGB, discarding any alpha channel
///
/// # Errors
/// `SourceNotFound` if the path cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .map_err(|source| AsciiError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    log::info!("Loaded image {}", path.display());
    log::info!("Image size: {} x {}", img.height(), img.width());
    Ok(img)
}

/// Resize image to exactly the canvas dimensions
///
/// # Returns
/// A tuple of (resized_image, was_resized) where was_resized indicates if resizing occurred
pub fn resize_to_canvas(input: &RgbImage, config: &AsciiConfig) -> (RgbImage, bool) {
    let (width, height) = input.dimensions();

    if width == config.width && height == config.height {
        return (input.clone(), false);
    }

    log::info!(
        "Resizing image to {} x {} so the ASCII text fits the screen",
        config.width,
        config.height
    );
    let resized = imageops::resize(input, config.width, config.height, config.filter);
    (resized, true)
}

/// Reduce every pixel to a brightness value under the configured policy
pub fn brightness_grid(pixels: &Grid<Pixel>, config: &AsciiConfig) -> Grid<i32> {
    let (policy, rounding) = (config.policy, config.rounding);
    let estimate_cell = move |pixel: &Pixel| estimate(*pixel, policy, rounding);

    if config.parallel {
        par_transform(pixels, estimate_cell)
    } else {
        transform(pixels, estimate_cell)
    }
}

/// Map every brightness value to a ramp glyph
///
/// # Errors
/// `IndexOutOfRange` when a value falls outside [0, 255] and overflow is `Fail`
pub fn glyph_grid(brightness: &Grid<i32>, config: &AsciiConfig) -> Result<Grid<char>> {
    let (overflow, invert) = (config.overflow, config.invert);
    let map_cell = move |value: &i32| select_glyph(*value, overflow, invert);

    if config.parallel {
        try_par_transform(brightness, map_cell)
    } else {
        try_transform(brightness, map_cell)
    }
}

/// Converts an already sampled pixel grid to glyphs
///
/// Shape is preserved: the returned grid has the same rows and columns as
/// `pixels`.
pub fn process_pixels(pixels: &Grid<Pixel>, config: &AsciiConfig) -> Result<Grid<char>> {
    let start = Instant::now();
    let brightness = brightness_grid(pixels, config);
    log::debug!(
        "Estimated brightness ({}) for {} cells in {:?}",
        config.policy.name(),
        brightness.cells().len(),
        start.elapsed()
    );

    let start = Instant::now();
    let glyphs = glyph_grid(&brightness, config)?;
    log::debug!("Mapped glyphs in {:?}", start.elapsed());

    Ok(glyphs)
}

/// Processes an input image and converts it to ASCII art
///
/// Pipeline:
/// 1. Resize to the canvas size from the config (skipped if already that size)
/// 2. Sample the RGB pixel grid
/// 3. Estimate brightness per pixel
/// 4. Map brightness to ramp glyphs
///
/// # Arguments
/// * `input` - The input RGB image to convert
/// * `config` - Configuration parameters for the ASCII conversion
///
/// # Returns
/// A glyph grid of `config.height` rows by `config.width` columns
pub fn process_image(input: &RgbImage, config: &AsciiConfig) -> Result<Grid<char>> {
    config.validate()?;
    convert_image(input, config)
}

/// Loads the image at `path` and converts it to ASCII art
///
/// The config is validated before the image is decoded.
pub fn process_file(path: &Path, config: &AsciiConfig) -> Result<Grid<char>> {
    config.validate()?;
    let img = load_image(path)?;
    convert_image(&img, config)
}

/// Resize and convert; `config` must already be validated
fn convert_image(input: &RgbImage, config: &AsciiConfig) -> Result<Grid<char>> {
    let (working_image, _was_resized) = resize_to_canvas(input, config);
    let pixels = pixel_grid(&working_image);

    process_pixels(&pixels, config)
}
