use ascii_ramp::brightness::{BrightnessPolicy, Pixel, Rounding, estimate};
use ascii_ramp::lut::map_glyph;
use ascii_ramp::matrix::Grid;
use ascii_ramp::{AsciiConfig, ConsoleStyle, print_to_stdout, process_pixels};

fn main() -> ascii_ramp::Result<()> {
    println!("ASCII Ramp - Brightness Policy Comparison");
    println!("=========================================\n");

    let samples = [
        Pixel::new(200, 50, 10),
        Pixel::new(10, 200, 50),
        Pixel::new(50, 10, 200),
        Pixel::new(128, 128, 128),
    ];

    for pixel in samples {
        println!("Pixel ({}, {}, {}):", pixel.r, pixel.g, pixel.b);
        for policy in BrightnessPolicy::ALL {
            let value = estimate(pixel, policy, Rounding::HalfAwayFromZero);
            println!("  {:<11} {:>3} -> '{}'", policy.name(), value, map_glyph(value));
        }
        println!();
    }

    // A horizontal hue sweep makes the policy differences visible
    let sweep = Grid::from_fn(48, 6, |x, _| {
        let t = x as i32 * 255 / 47;
        Pixel::new(255 - t, t, (t * 2) % 256)
    });

    for policy in BrightnessPolicy::ALL {
        let config = AsciiConfig {
            policy,
            width: 48,
            height: 6,
            ..Default::default()
        };
        println!("{}:", policy.name());
        let glyphs = process_pixels(&sweep, &config)?;
        print_to_stdout(&glyphs, &ConsoleStyle::plain())?;
        println!();
    }

    Ok(())
}
