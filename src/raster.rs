//! Anti-aliased fills over an RGBA surface.
//!
//! Coverage-based scanline fills: each pixel gets the fraction of its unit
//! square covered by the shape (exact for axis-aligned rects, a 1px
//! signed-distance ramp for circles and ellipses), then src-over blends.

use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::geometry::Rect;

pub(crate) fn fill_rect(img: &mut RgbaImage, rect: &Rect, color: Color) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = clip(
        img,
        rect.left.floor(),
        rect.top.floor(),
        rect.right.ceil(),
        rect.bottom.ceil(),
    );
    for y in y0..y1 {
        let cy = ((y as f32 + 1.0).min(rect.bottom) - (y as f32).max(rect.top)).clamp(0.0, 1.0);
        for x in x0..x1 {
            let cx = ((x as f32 + 1.0).min(rect.right) - (x as f32).max(rect.left)).clamp(0.0, 1.0);
            blend(img, x, y, color, cx * cy);
        }
    }
}

pub(crate) fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = clip(
        img,
        (cx - radius - 1.0).floor(),
        (cy - radius - 1.0).floor(),
        (cx + radius + 1.0).ceil(),
        (cy + radius + 1.0).ceil(),
    );
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt() - radius;
            blend(img, x, y, color, (0.5 - dist).clamp(0.0, 1.0));
        }
    }
}

/// Side a half-ellipse cap opens toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CapSide {
    Left,
    Right,
}

/// Fill the half of the ellipse inscribed in `rect` that opens toward
/// `side`, with the flat edge on the rect's vertical center line.
///
/// Coverage is the product of the ellipse coverage and the half-plane
/// coverage, so a pixel is never filled twice when the abutting band is
/// drawn up to the same center line. Translucent fills stay uniform.
pub(crate) fn fill_half_ellipse(img: &mut RgbaImage, rect: &Rect, side: CapSide, color: Color) {
    let a = rect.width() / 2.0;
    let b = rect.height() / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return;
    }
    let (cx, cy) = (rect.left + a, rect.top + b);
    let (x0, y0, x1, y1) = clip(
        img,
        rect.left.floor(),
        rect.top.floor(),
        rect.right.ceil(),
        rect.bottom.ceil(),
    );
    let ramp = a.min(b);
    for y in y0..y1 {
        for x in x0..x1 {
            let plane = match side {
                CapSide::Left => (cx - x as f32).clamp(0.0, 1.0),
                CapSide::Right => (x as f32 + 1.0 - cx).clamp(0.0, 1.0),
            };
            if plane <= 0.0 {
                continue;
            }
            let nx = (x as f32 + 0.5 - cx) / a;
            let ny = (y as f32 + 0.5 - cy) / b;
            // Distance approximated by scaling the normalized radius error
            // with the smaller semi-axis.
            let dist = ((nx * nx + ny * ny).sqrt() - 1.0) * ramp;
            blend(img, x, y, color, (0.5 - dist).clamp(0.0, 1.0) * plane);
        }
    }
}

/// Src-over blend `color` at `coverage` into the pixel at (x, y).
pub(crate) fn blend(img: &mut RgbaImage, x: u32, y: u32, color: Color, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let sa = color.a as f32 / 255.0 * coverage.min(1.0);
    if sa <= 0.0 {
        return;
    }
    let Rgba([dr, dg, db, da]) = *img.get_pixel(x, y);
    let da = da as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let ch = |s: u8, d: u8| {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        ((s * sa + d * da * (1.0 - sa)) / out_a * 255.0).round() as u8
    };
    img.put_pixel(
        x,
        y,
        Rgba([
            ch(color.r, dr),
            ch(color.g, dg),
            ch(color.b, db),
            (out_a * 255.0).round() as u8,
        ]),
    );
}

fn clip(img: &RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32) -> (u32, u32, u32, u32) {
    let w = img.width() as f32;
    let h = img.height() as f32;
    (
        x0.clamp(0.0, w) as u32,
        y0.clamp(0.0, h) as u32,
        x1.clamp(0.0, w) as u32,
        y1.clamp(0.0, h) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> RgbaImage {
        RgbaImage::new(w, h)
    }

    #[test]
    fn rect_fill_is_exact_on_pixel_edges() {
        let mut img = surface(8, 8);
        fill_rect(&mut img, &Rect::new(2.0, 2.0, 6.0, 6.0), Color::RED);
        assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 3).0[3], 0);
        assert_eq!(img.get_pixel(6, 6).0[3], 0);
    }

    #[test]
    fn rect_fill_partial_coverage_on_half_pixel() {
        let mut img = surface(4, 4);
        fill_rect(&mut img, &Rect::new(0.5, 0.0, 1.5, 4.0), Color::WHITE);
        // Both straddled columns get half coverage.
        assert_eq!(img.get_pixel(0, 1).0[3], 128);
        assert_eq!(img.get_pixel(1, 1).0[3], 128);
    }

    #[test]
    fn circle_fill_opaque_center_clear_corners() {
        let mut img = surface(20, 20);
        fill_circle(&mut img, 10.0, 10.0, 8.0, Color::BLUE);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(19, 19).0[3], 0);
    }

    #[test]
    fn half_ellipse_fills_only_the_open_side() {
        let mut img = surface(30, 20);
        let rect = Rect::new(0.0, 0.0, 30.0, 20.0);
        fill_half_ellipse(&mut img, &rect, CapSide::Left, Color::RED);
        assert_eq!(img.get_pixel(10, 10).0[3], 255);
        // Nothing lands past the flat edge at the center line.
        assert_eq!(img.get_pixel(15, 10).0[3], 0);
        assert_eq!(img.get_pixel(20, 10).0[3], 0);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn half_ellipse_right_mirrors_left() {
        let rect = Rect::new(0.0, 0.0, 30.0, 20.0);
        let mut left = surface(30, 20);
        let mut right = surface(30, 20);
        fill_half_ellipse(&mut left, &rect, CapSide::Left, Color::RED);
        fill_half_ellipse(&mut right, &rect, CapSide::Right, Color::RED);
        assert_eq!(right.get_pixel(20, 10).0[3], 255);
        assert_eq!(right.get_pixel(10, 10).0[3], 0);
        for y in 0..20 {
            for x in 0..30 {
                assert_eq!(left.get_pixel(x, y).0, right.get_pixel(29 - x, y).0);
            }
        }
    }

    #[test]
    fn shapes_clip_to_the_surface() {
        let mut img = surface(4, 4);
        fill_circle(&mut img, 0.0, 0.0, 10.0, Color::WHITE);
        fill_rect(&mut img, &Rect::new(-5.0, -5.0, 50.0, 50.0), Color::RED);
        assert_eq!(img.get_pixel(3, 3).0[3], 255);
    }
}
