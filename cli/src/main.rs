mod args;
mod color;

use anyhow::{Context, Result};
use args::Args;
use ascii_ramp::{print_to_stdout, process_file, write_to_file};
use clap::Parser;

fn main() -> Result<()> {
    // Configure logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let glyphs = process_file(&args.input, &config)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    if !args.no_file {
        write_to_file(&glyphs, &args.output).context("failed to write ASCII art")?;
    }

    if !args.no_console {
        print_to_stdout(&glyphs, &args.color.style()).context("failed to print ASCII art")?;
    }

    log::debug!("Done: {} x {} glyphs", glyphs.height(), glyphs.width());
    Ok(())
}
