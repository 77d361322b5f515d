//! Image sources the pipeline can sample pixels from.

use crate::brightness::Pixel;
use crate::matrix::Grid;
use image::RgbImage;

/// Anything with a width, a height and an RGB accessor
///
/// Dimensions are `usize` so that both `u32`-sized images and in-memory
/// grids fit without truncation.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// # Panics
    /// If `(x, y)` lies outside the source
    fn pixel(&self, x: usize, y: usize) -> Pixel;
}

impl PixelSource for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Pixel {
        // x < width <= u32::MAX, so the casts are lossless for in-bounds reads
        Pixel::from(*self.get_pixel(x as u32, y as u32))
    }
}

impl PixelSource for Grid<Pixel> {
    fn width(&self) -> usize {
        Grid::width(self)
    }

    fn height(&self) -> usize {
        Grid::height(self)
    }

    fn pixel(&self, x: usize, y: usize) -> Pixel {
        assert!(
            x < Grid::width(self) && y < Grid::height(self),
            "pixel ({x}, {y}) outside {}x{} grid",
            Grid::width(self),
            Grid::height(self)
        );
        self.cells()[y * Grid::width(self) + x]
    }
}

/// Sample every pixel of a source into a row-major grid
pub fn pixel_grid<S: PixelSource + ?Sized>(source: &S) -> Grid<Pixel> {
    Grid::from_fn(source.width(), source.height(), |x, y| source.pixel(x, y))
}
