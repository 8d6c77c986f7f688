//! Bounding-box resizing and encoding.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageResult};

/// Dimensions of `width`x`height` scaled to fit a `size`x`size` box.
///
/// The aspect ratio is kept, images already inside the box are returned
/// unchanged (never upscaled) and neither side drops below one pixel. A zero
/// `size` is treated as a one-pixel box.
pub fn thumbnail_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    let size = size.max(1);
    if width <= size && height <= size {
        return (width, height);
    }

    let scale = f64::min(
        f64::from(size) / f64::from(width),
        f64::from(size) / f64::from(height),
    );
    let fit = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, size);
    (fit(width), fit(height))
}

/// Downscale `img` to fit the bounding box using Lanczos resampling.
pub fn resize_to_fit(img: &DynamicImage, size: u32) -> DynamicImage {
    let (width, height) = thumbnail_dimensions(img.width(), img.height(), size);
    if (width, height) == (img.width(), img.height()) {
        return img.clone();
    }
    img.resize_exact(width, height, FilterType::Lanczos3)
}

/// Encode `img` in `format`.
///
/// JPEG has no alpha channel and no 16-bit mode, so other color types are
/// flattened to 8-bit RGB first.
pub fn encode(img: &DynamicImage, format: ImageFormat) -> ImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    match (format, img) {
        (ImageFormat::Jpeg, DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_)) => {
            img.write_to(&mut buf, format)?
        }
        (ImageFormat::Jpeg, _) => {
            DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut buf, format)?
        }
        _ => img.write_to(&mut buf, format)?,
    }
    Ok(buf.into_inner())
}
