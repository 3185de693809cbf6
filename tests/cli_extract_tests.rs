//! End-to-end tests for `hueforge extract`.
#![cfg(feature = "image")]

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn write_png(dir: &TempDir, name: &str, image: &RgbaImage) -> String {
    let path = dir.path().join(name);
    image.save(&path).expect("Failed to write PNG");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_extract_single_color_image() {
    let dir = TempDir::new().unwrap();
    let image = RgbaImage::from_pixel(10, 10, Rgba([0x33, 0x99, 0x66, 255]));
    let png = write_png(&dir, "solid.png", &image);

    let output = run(&["extract", &png, "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["primary"], "#339966");
    assert_eq!(json["secondary"], "#f0f4f8");
    assert_eq!(json["accent"], "#0052cc");
    assert_eq!(json["neutral"], "#ffffff");
    assert_eq!(json["dark"], "#1a1d21");
}

#[test]
fn test_extract_ranks_by_frequency() {
    let dir = TempDir::new().unwrap();
    // Top row red, everything else blue.
    let image = RgbaImage::from_fn(10, 10, |_, y| {
        if y == 0 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let png = write_png(&dir, "two.png", &image);

    let output = run(&["extract", &png, "--stride", "1"]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("primary: #0000ff"));
    assert!(text.contains("secondary: #ff0000"));
}

#[test]
fn test_extract_zero_stride_rejected() {
    let dir = TempDir::new().unwrap();
    let png = write_png(&dir, "solid.png", &RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255])));

    let output = run(&["extract", &png, "--stride", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_extract_missing_file() {
    let output = run(&["extract", "/nonexistent/image.png"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_extract_undecodable_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "fake.png", "this is not a png");

    let output = run(&["extract", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("decode"));
}
