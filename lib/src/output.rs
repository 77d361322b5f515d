//! Output sinks for glyph grids
//!
//! Monospace cells are roughly twice as tall as they are wide, so every glyph
//! is written [`HORIZONTAL_REPEAT`] times to keep the picture from looking
//! squashed.

use crate::error::{AsciiError, Result};
use crate::matrix::Grid;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// How many times each glyph is repeated horizontally
pub const HORIZONTAL_REPEAT: usize = 3;

/// Opaque strings wrapped around console output
///
/// The prefix starts every printed line; the suffix is written once after
/// the whole grid. Usually an escape sequence pair such as a color and reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub prefix: String,
    pub suffix: String,
}

impl ConsoleStyle {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// No decoration at all
    pub fn plain() -> Self {
        Self::default()
    }
}

/// Render one row with each glyph repeated
pub fn render_row(row: &[char]) -> String {
    let mut line = String::with_capacity(row.len() * HORIZONTAL_REPEAT);
    for &glyph in row {
        for _ in 0..HORIZONTAL_REPEAT {
            line.push(glyph);
        }
    }
    line
}

/// Write the grid as plain text, one newline-terminated line per row
pub fn write_glyphs<W: Write>(grid: &Grid<char>, writer: &mut W) -> io::Result<()> {
    for row in grid.rows() {
        writer.write_all(render_row(row).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the grid to a text file, creating missing parent directories
///
/// # Errors
/// `OutputPathUnwritable` if a directory cannot be created or the file
/// cannot be opened or written
pub fn write_to_file(grid: &Grid<char>, path: &Path) -> Result<()> {
    let unwritable = |source| AsciiError::OutputPathUnwritable {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(unwritable)?);
    write_glyphs(grid, &mut writer).map_err(unwritable)?;
    writer.flush().map_err(unwritable)?;

    log::info!("Wrote {} rows to {}", grid.height(), path.display());
    Ok(())
}

/// Print the grid to a console writer wrapped in `style`
pub fn print_to_console<W: Write>(
    grid: &Grid<char>,
    writer: &mut W,
    style: &ConsoleStyle,
) -> Result<()> {
    for row in grid.rows() {
        writer.write_all(style.prefix.as_bytes())?;
        writer.write_all(render_row(row).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.write_all(style.suffix.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Print the grid to stdout
pub fn print_to_stdout(grid: &Grid<char>, style: &ConsoleStyle) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    print_to_console(grid, &mut lock, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid<char> {
        Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap()
    }

    #[test]
    fn test_render_row_triples_glyphs() {
        assert_eq!(render_row(&['x', '$']), "xxx$$$");
        assert_eq!(render_row(&[]), "");
    }

    #[test]
    fn test_write_glyphs() {
        let mut out = Vec::new();
        write_glyphs(&grid(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "aaabbb\ncccddd\n");
    }

    #[test]
    fn test_print_to_console_wraps_in_style() {
        let mut out = Vec::new();
        let style = ConsoleStyle::new("<g>", "<reset>");
        print_to_console(&grid(), &mut out, &style).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<g>aaabbb\n<g>cccddd\n<reset>"
        );
    }

    #[test]
    fn test_print_to_console_plain() {
        let mut out = Vec::new();
        print_to_console(&grid(), &mut out, &ConsoleStyle::plain()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "aaabbb\ncccddd\n");
    }
}
