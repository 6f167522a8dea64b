//! Test support utilities for badgefactory.
//!
//! This module provides probes over rendered images that are useful for
//! testing badge output, but are not part of the public rendering API.

use image::RgbaImage;

/// RGBA channels of the pixel at (x, y).
pub fn pixel(img: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

/// Number of pixels with any coverage at all.
pub fn covered_pixels(img: &RgbaImage) -> usize {
    img.pixels().filter(|p| p.0[3] > 0).count()
}

/// Number of fully opaque, pure white pixels (the text color).
pub fn white_pixels(img: &RgbaImage) -> usize {
    img.pixels().filter(|p| p.0 == [255, 255, 255, 255]).count()
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of all covered pixels, or
/// `None` for a fully transparent image.
pub fn opaque_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if p.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}
