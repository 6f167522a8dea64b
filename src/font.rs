//! Text faces used to measure and draw the count.

use std::collections::HashMap;

use image::RgbaImage;
use once_cell::sync::Lazy;

use crate::color::Color;
use crate::geometry::Rect;
use crate::raster;

#[cfg(feature = "ttf")]
use crate::error::{BadgeError, Result};

/// Measured extents of a count string at a given pixel size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Distance from the baseline to the top of the glyphs.
    pub ascent: f32,
}

/// Unified face enum encapsulating the supported text sources.
///
/// A simple tagged union rather than trait objects: only two faces exist and
/// the call sites stay free of generics.
#[derive(Clone, Debug)]
pub enum TextFont {
    /// Built-in scalable bitmap face; renders with zero external assets.
    Bitmap(BitmapFont),
    /// Vector face loaded from caller-supplied font bytes.
    #[cfg(feature = "ttf")]
    Vector(VectorFont),
}

impl Default for TextFont {
    fn default() -> Self {
        TextFont::Bitmap(BitmapFont)
    }
}

impl TextFont {
    pub fn measure(&self, text: &str, px: f32) -> TextMetrics {
        match self {
            TextFont::Bitmap(f) => f.measure(text, px),
            #[cfg(feature = "ttf")]
            TextFont::Vector(f) => f.measure(text, px),
        }
    }

    /// Draw `text` with its left edge at `left` and baseline at `baseline`.
    pub fn draw(
        &self,
        img: &mut RgbaImage,
        text: &str,
        px: f32,
        left: f32,
        baseline: f32,
        color: Color,
    ) {
        match self {
            TextFont::Bitmap(f) => f.draw(img, text, px, left, baseline, color),
            #[cfg(feature = "ttf")]
            TextFont::Vector(f) => f.draw(img, text, px, left, baseline, color),
        }
    }
}

const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;
// Horizontal advance between glyph origins, in cells (one cell of tracking).
const GLYPH_ADVANCE: usize = 6;
const FALLBACK_CHAR: char = '?';

// 5x7 cell bitmaps, one row per byte, bit 4 = leftmost column. The face is
// heavy enough to read as bold at small raster sizes.
static GLYPHS: Lazy<HashMap<char, [u8; GLYPH_HEIGHT]>> = Lazy::new(|| {
    HashMap::from([
        (
            '0',
            [
                0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110,
            ],
        ),
        (
            '1',
            [
                0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
            ],
        ),
        (
            '2',
            [
                0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111,
            ],
        ),
        (
            '3',
            [
                0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110,
            ],
        ),
        (
            '4',
            [
                0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010,
            ],
        ),
        (
            '5',
            [
                0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110,
            ],
        ),
        (
            '6',
            [
                0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110,
            ],
        ),
        (
            '7',
            [
                0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000,
            ],
        ),
        (
            '8',
            [
                0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110,
            ],
        ),
        (
            '9',
            [
                0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100,
            ],
        ),
        (
            '+',
            [
                0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000,
            ],
        ),
        (
            '-',
            [
                0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000,
            ],
        ),
        (
            '?',
            [
                0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100,
            ],
        ),
    ])
});

/// Built-in 5x7 face, scaled by whole cells to approximate the requested
/// pixel size. Covers digits, sign characters and a fallback glyph.
#[derive(Copy, Clone, Debug, Default)]
pub struct BitmapFont;

impl BitmapFont {
    // Cell multiplier for a requested pixel size; a 16px request maps to
    // 2x2 cells (14px tall digits).
    fn cell_scale(px: f32) -> u32 {
        (px / 8.0).round().max(1.0) as u32
    }

    pub fn measure(&self, text: &str, px: f32) -> TextMetrics {
        let s = Self::cell_scale(px) as f32;
        let n = text.chars().count();
        let width = if n == 0 {
            0.0
        } else {
            (n * GLYPH_ADVANCE - 1) as f32 * s
        };
        let height = GLYPH_HEIGHT as f32 * s;
        TextMetrics {
            width,
            height,
            ascent: height,
        }
    }

    pub fn draw(
        &self,
        img: &mut RgbaImage,
        text: &str,
        px: f32,
        left: f32,
        baseline: f32,
        color: Color,
    ) {
        let s = Self::cell_scale(px) as f32;
        let top = baseline - GLYPH_HEIGHT as f32 * s;
        let mut x = left;
        for ch in text.chars() {
            let rows = GLYPHS
                .get(&ch)
                .or_else(|| GLYPHS.get(&FALLBACK_CHAR))
                .copied()
                .unwrap_or([0; GLYPH_HEIGHT]);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1u8 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        let cx = x + col as f32 * s;
                        let cy = top + row as f32 * s;
                        raster::fill_rect(img, &Rect::new(cx, cy, cx + s, cy + s), color);
                    }
                }
            }
            x += GLYPH_ADVANCE as f32 * s;
        }
    }
}

/// Vector face backed by `ab_glyph`, for embedders that supply a real font.
#[cfg(feature = "ttf")]
#[derive(Clone)]
pub struct VectorFont {
    font: ab_glyph::FontArc,
}

#[cfg(feature = "ttf")]
impl VectorFont {
    pub fn new(font: ab_glyph::FontArc) -> Self {
        Self { font }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font =
            ab_glyph::FontArc::try_from_vec(bytes.to_vec()).map_err(|_| BadgeError::InvalidFont)?;
        Ok(Self { font })
    }

    pub fn measure(&self, text: &str, px: f32) -> TextMetrics {
        use ab_glyph::{Font as _, ScaleFont as _};
        let scale = ab_glyph::PxScale::from(px);
        let (width, height) = imageproc::drawing::text_size(scale, &self.font, text);
        TextMetrics {
            width: width as f32,
            height: height as f32,
            ascent: self.font.as_scaled(scale).ascent(),
        }
    }

    pub fn draw(
        &self,
        img: &mut RgbaImage,
        text: &str,
        px: f32,
        left: f32,
        baseline: f32,
        color: Color,
    ) {
        use ab_glyph::{Font as _, ScaleFont as _};
        let scale = ab_glyph::PxScale::from(px);
        let top = baseline - self.font.as_scaled(scale).ascent();
        imageproc::drawing::draw_text_mut(
            img,
            color.into(),
            left.round() as i32,
            top.round() as i32,
            scale,
            &self.font,
            text,
        );
    }
}

#[cfg(feature = "ttf")]
impl std::fmt::Debug for VectorFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorFont").finish_non_exhaustive()
    }
}
