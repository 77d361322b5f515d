//! Command-line arguments.

use ascii_ramp::{AsciiConfig, BrightnessPolicy, Overflow, Rounding};
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use std::path::PathBuf;

use crate::color::Color;

/// Convert an image to ASCII art, write it to a text file and print it
#[derive(Parser, Debug)]
#[command(name = "ascii-ramp")]
#[command(version, about = "Image to ASCII art converter", long_about = None)]
pub struct Args {
    /// Image to convert
    #[arg(default_value = "images/ascii-pineapple.jpg")]
    pub input: PathBuf,

    /// Text file to write the art to
    #[arg(short, long, default_value = "output/ascii-pineapple.txt")]
    pub output: PathBuf,

    /// Canvas width in characters (each is printed three times)
    #[arg(long, default_value_t = 200)]
    pub width: u32,

    /// Canvas height in characters
    #[arg(long, default_value_t = 200)]
    pub height: u32,

    /// Brightness estimator
    #[arg(short, long, default_value = "luminosity")]
    pub policy: Policy,

    /// Rounding rule for fractional brightness
    #[arg(long, default_value = "half-away-from-zero")]
    pub rounding: RoundingArg,

    /// What to do with brightness outside 0-255
    #[arg(long, default_value = "clamp")]
    pub overflow: OverflowArg,

    /// Map bright pixels to sparse glyphs (for light-on-dark viewing)
    #[arg(long)]
    pub invert: bool,

    /// Resampling filter used for resizing
    #[arg(long, default_value = "catmull-rom")]
    pub filter: Filter,

    /// Run on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Console color
    #[arg(short, long, default_value = "green")]
    pub color: Color,

    /// Do not print to the console
    #[arg(long)]
    pub no_console: bool,

    /// Do not write the output file
    #[arg(long)]
    pub no_file: bool,
}

impl Args {
    pub fn config(&self) -> AsciiConfig {
        AsciiConfig {
            width: self.width,
            height: self.height,
            policy: self.policy.into(),
            rounding: self.rounding.into(),
            overflow: self.overflow.into(),
            invert: self.invert,
            filter: self.filter.into(),
            parallel: !self.sequential,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    Average,
    MinMax,
    Luminosity,
}

impl From<Policy> for BrightnessPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Average => BrightnessPolicy::Average,
            Policy::MinMax => BrightnessPolicy::MinMax,
            Policy::Luminosity => BrightnessPolicy::Luminosity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    HalfAwayFromZero,
    HalfToEven,
}

impl From<RoundingArg> for Rounding {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::HalfAwayFromZero => Rounding::HalfAwayFromZero,
            RoundingArg::HalfToEven => Rounding::HalfToEven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    Clamp,
    Fail,
}

impl From<OverflowArg> for Overflow {
    fn from(o: OverflowArg) -> Self {
        match o {
            OverflowArg::Clamp => Overflow::Clamp,
            OverflowArg::Fail => Overflow::Fail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ascii-ramp"]).unwrap();
        assert_eq!(args.input, PathBuf::from("images/ascii-pineapple.jpg"));
        assert_eq!(args.output, PathBuf::from("output/ascii-pineapple.txt"));
        assert_eq!(args.color, Color::Green);
        assert!(!args.no_console && !args.no_file);

        let config = args.config();
        assert_eq!((config.width, config.height), (200, 200));
        assert_eq!(config.policy, BrightnessPolicy::Luminosity);
        assert_eq!(config.rounding, Rounding::HalfAwayFromZero);
        assert_eq!(config.overflow, Overflow::Clamp);
        assert_eq!(config.filter, FilterType::CatmullRom);
        assert!(config.parallel);
    }

    #[test]
    fn test_explicit_flags() {
        let args = Args::try_parse_from([
            "ascii-ramp",
            "cat.png",
            "-o",
            "out/cat.txt",
            "--width",
            "80",
            "--height",
            "40",
            "--policy",
            "min-max",
            "--rounding",
            "half-to-even",
            "--overflow",
            "fail",
            "--invert",
            "--filter",
            "nearest",
            "--sequential",
            "--color",
            "none",
        ])
        .unwrap();

        assert_eq!(args.input, PathBuf::from("cat.png"));
        assert_eq!(args.color, Color::None);

        let config = args.config();
        assert_eq!((config.width, config.height), (80, 40));
        assert_eq!(config.policy, BrightnessPolicy::MinMax);
        assert_eq!(config.rounding, Rounding::HalfToEven);
        assert_eq!(config.overflow, Overflow::Fail);
        assert_eq!(config.filter, FilterType::Nearest);
        assert!(config.invert);
        assert!(!config.parallel);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Args::try_parse_from(["ascii-ramp", "--policy", "median"]).is_err());
    }
}
