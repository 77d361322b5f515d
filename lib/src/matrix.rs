//! Rectangular row-major grids and the shape-preserving transform over them
//!
//! A [`Grid`] is never mutated by a transform; every stage allocates a new
//! grid of the same shape.

use crate::error::{AsciiError, Result};
use rayon::prelude::*;

/// Rectangular, row-major two-dimensional container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by calling `f(x, y)` for every cell in row-major order
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build a grid from a list of rows
    ///
    /// Fails with `RaggedGrid` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);

        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(AsciiError::RaggedGrid {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let width = self.width;
        let mut cells = self.cells.into_iter();
        (0..self.height)
            .map(|_| cells.by_ref().take(width).collect())
            .collect()
    }
}

/// Apply `f` to every cell, producing a new grid of the same shape
///
/// Cells are visited in row-major order.
pub fn transform<I, O>(grid: &Grid<I>, f: impl Fn(&I) -> O) -> Grid<O> {
    Grid {
        width: grid.width,
        height: grid.height,
        cells: grid.cells.iter().map(f).collect(),
    }
}

/// Fallible [`transform`]; stops at the first error
pub fn try_transform<I, O, E>(
    grid: &Grid<I>,
    f: impl Fn(&I) -> std::result::Result<O, E>,
) -> std::result::Result<Grid<O>, E> {
    Ok(Grid {
        width: grid.width,
        height: grid.height,
        cells: grid.cells.iter().map(f).collect::<std::result::Result<_, _>>()?,
    })
}

/// Parallel [`transform`]
///
/// Cells may be evaluated in any order on the rayon pool; the output is still
/// assembled in row-major order.
pub fn par_transform<I, O>(grid: &Grid<I>, f: impl Fn(&I) -> O + Sync + Send) -> Grid<O>
where
    I: Sync,
    O: Send,
{
    Grid {
        width: grid.width,
        height: grid.height,
        cells: grid.cells.par_iter().map(f).collect(),
    }
}

/// Parallel [`try_transform`]
pub fn try_par_transform<I, O, E>(
    grid: &Grid<I>,
    f: impl Fn(&I) -> std::result::Result<O, E> + Sync + Send,
) -> std::result::Result<Grid<O>, E>
where
    I: Sync,
    O: Send,
    E: Send,
{
    Ok(Grid {
        width: grid.width,
        height: grid.height,
        cells: grid
            .cells
            .par_iter()
            .map(f)
            .collect::<std::result::Result<_, _>>()?,
    })
}
