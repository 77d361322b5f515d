/// Basic example: Convert a synthetic test image to ASCII art
///
/// Draws a radial gradient with a dark ring, converts it and prints the
/// result to the terminal in green.
use ascii_ramp::{AsciiConfig, ConsoleStyle, print_to_stdout, process_image, write_to_file};
use image::{Rgb, RgbImage};
use std::path::Path;

fn main() -> ascii_ramp::Result<()> {
    println!("ASCII Ramp - Basic Example");
    println!("==========================\n");

    let width = 240;
    let height = 240;
    let center = width as f32 / 2.0;

    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dist = (dx * dx + dy * dy).sqrt();

        if (dist - 70.0).abs() < 6.0 {
            Rgb([0, 0, 0])
        } else {
            let level = (255.0 * (1.0 - dist / (center * 1.5))).clamp(0.0, 255.0) as u8;
            Rgb([level, level / 2, 255 - level])
        }
    });

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig {
        width: 40,
        height: 40,
        ..Default::default()
    };

    println!("Processing with config:");
    println!("  - Canvas: {}x{}", config.width, config.height);
    println!("  - Policy: {}", config.policy.name());
    println!();

    let glyphs = process_image(&img, &config)?;

    print_to_stdout(&glyphs, &ConsoleStyle::new("\x1b[32m", "\x1b[0m"))?;
    write_to_file(&glyphs, Path::new("basic_output/gradient.txt"))?;

    println!("\n✓ Saved output to: basic_output/gradient.txt");
    Ok(())
}
