//! ANSI color escapes for console output.

use ascii_ramp::ConsoleStyle;
use clap::ValueEnum;

/// SGR reset, written once after the whole grid
pub const RESET: &str = "\x1b[0m";

/// Foreground color of the printed art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Color {
    /// No escape codes at all
    None,
    Black,
    Red,
    #[default]
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// SGR foreground escape, empty for `None`
    pub fn escape(self) -> &'static str {
        match self {
            Color::None => "",
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    pub fn style(self) -> ConsoleStyle {
        match self {
            Color::None => ConsoleStyle::plain(),
            color => ConsoleStyle::new(color.escape(), RESET),
        }
    }
}
