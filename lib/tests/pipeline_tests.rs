use ascii_ramp::lut::{RAMP_LEN, ramp_char};
use ascii_ramp::output::HORIZONTAL_REPEAT;
use ascii_ramp::*;
use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;
use std::fs;

fn two_by_two() -> RgbImage {
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([0, 0, 0]));
    img.put_pixel(1, 0, Rgb([255, 255, 255]));
    img.put_pixel(0, 1, Rgb([128, 128, 128]));
    img.put_pixel(1, 1, Rgb([10, 20, 30]));
    img
}

fn average_config(width: u32, height: u32) -> AsciiConfig {
    AsciiConfig {
        width,
        height,
        policy: BrightnessPolicy::Average,
        ..Default::default()
    }
}

#[test]
fn test_two_by_two_end_to_end() {
    let config = average_config(2, 2);
    let glyphs = process_image(&two_by_two(), &config).unwrap();

    let expected = vec![
        vec![ramp_char(0), ramp_char(68)],
        vec![ramp_char(34), ramp_char(5)],
    ];
    assert_eq!(glyphs.clone().into_rows(), expected);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("art.txt");
    write_to_file(&glyphs, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["...$$$", "nnn,,,"]);
    assert!(text.ends_with('\n'));
}

#[test]
fn test_loaded_file_matches_in_memory_image() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    two_by_two().save(&source).unwrap();

    let config = average_config(2, 2);
    let from_file = process_file(&source, &config).unwrap();
    let in_memory = process_image(&two_by_two(), &config).unwrap();
    assert_eq!(from_file, in_memory);
}

#[test]
fn test_shape_preserved_for_many_sizes() {
    let img = RgbImage::from_fn(37, 23, |x, y| Rgb([(x * 7) as u8, (y * 11) as u8, 3]));
    for (width, height) in [(1, 1), (5, 9), (37, 23), (64, 10)] {
        for policy in BrightnessPolicy::ALL {
            let config = AsciiConfig {
                width,
                height,
                policy,
                ..Default::default()
            };
            let glyphs = process_image(&img, &config).unwrap();
            assert_eq!(glyphs.shape(), (height as usize, width as usize));
            assert!(glyphs.cells().iter().all(|c| RAMP.contains(*c)));
        }
    }
}

#[test]
fn test_ramp_unchanged_across_runs() {
    let before = RAMP.to_string();
    for _ in 0..3 {
        process_image(&two_by_two(), &average_config(2, 2)).unwrap();
    }
    assert_eq!(RAMP, before);
    assert_eq!(RAMP.chars().count(), RAMP_LEN);
}

#[test]
fn test_console_output_has_single_reset() {
    let glyphs = process_image(&two_by_two(), &average_config(2, 2)).unwrap();
    let style = ConsoleStyle::new("\x1b[32m", "\x1b[0m");

    let mut out = Vec::new();
    print_to_console(&glyphs, &mut out, &style).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("\x1b[0m").count(), 1);
    assert!(text.ends_with("\x1b[0m"));
    assert_eq!(text.lines().count(), 3);
    let first = text.lines().next().unwrap();
    assert_eq!(first.trim_start_matches("\x1b[32m").len(), 2 * HORIZONTAL_REPEAT);
}

#[test]
fn test_missing_source_is_reported() {
    let err = process_file(std::path::Path::new("images/nope.jpg"), &AsciiConfig::default())
        .unwrap_err();
    assert!(matches!(err, AsciiError::SourceNotFound { .. }));
    assert!(err.to_string().contains("images/nope.jpg"));
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let glyphs = process_image(&two_by_two(), &average_config(2, 2)).unwrap();
    let err = write_to_file(&glyphs, &blocker.join("art.txt")).unwrap_err();
    assert!(matches!(err, AsciiError::OutputPathUnwritable { .. }));
}
