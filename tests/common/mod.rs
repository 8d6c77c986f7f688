//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;

/// Write a gradient RGB image of the given size; the format follows the extension.
pub fn write_image(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}

/// Width and height of the image at `path`.
pub fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

/// Parse a generated media list back into its variable and entries.
pub fn parse_media_list(script: &str) -> (String, Vec<String>) {
    let (variable, rest) = script.split_once(" = [").expect("assignment");
    let body = rest.strip_suffix("];\n").expect("terminator");
    let entries = if body.is_empty() {
        Vec::new()
    } else {
        body.split(", ")
            .map(|item| item.trim_matches('\'').to_string())
            .collect()
    };
    (variable.to_string(), entries)
}
