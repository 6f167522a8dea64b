//! Badge geometry: shape classification and rect carving.
//!
//! Geometry is a pure function of the count, its measured text extents and
//! the style constants. Nothing here is cached; callers recompute per render
//! so the rects can never go stale behind a setter.

use crate::font::TextMetrics;

/// Axis-aligned rectangle in device pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Badge shape, derived from the count length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BadgeKind {
    /// Filled circle, used for short counts.
    Circular,
    /// Rectangle with semicircular caps, used for longer counts.
    Pill,
}

/// Horizontal placement of the count within the text band.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    #[default]
    Center,
    Left,
}

/// Style constants for badge rendering.
///
/// Everything callers may want to tune lives here, so differing badge
/// flavors are configurations of one component rather than copies of the
/// code. [`BadgeStyle::classic`] keeps the permissive single-digit
/// behavior; [`BadgeStyle::strict`] (the default) switches to pill above two
/// characters and refuses to render without a fill color.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BadgeStyle {
    /// Maximum count length rendered as a circle; longer counts get a pill.
    pub pill_threshold: usize,
    /// Cap radius of the pill, in device pixels.
    pub corner_radius: f32,
    /// Badge height as a multiple of the text pixel size (vertical padding).
    pub height_factor: f32,
    /// Text baseline position as a fraction of the band height.
    pub baseline_factor: f32,
    pub text_align: TextAlign,
    /// When true, `build` fails with `ColorUnset` if no fill color was set;
    /// when false an unset color renders as a fully transparent fill.
    pub require_color: bool,
}

impl BadgeStyle {
    /// The permissive variant: circle for single characters only, silent
    /// transparent fill when no color was configured.
    pub fn classic() -> Self {
        Self {
            pill_threshold: 1,
            corner_radius: 30.0,
            height_factor: 1.25,
            baseline_factor: 0.8,
            text_align: TextAlign::Center,
            require_color: false,
        }
    }

    /// The validating variant: circle up to two characters, rendering
    /// without a configured color is an error.
    pub fn strict() -> Self {
        Self {
            pill_threshold: 2,
            require_color: true,
            ..Self::classic()
        }
    }
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self::strict()
    }
}

/// Rects derived for one render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BadgeGeometry {
    pub kind: BadgeKind,
    /// Overall bounding box; the output image matches its truncated size.
    pub total: Rect,
    /// Band the count is drawn in. Equals `total` for circular badges.
    pub band: Rect,
    /// Left and right cap rects, pill badges only.
    pub caps: Option<(Rect, Rect)>,
}

impl BadgeGeometry {
    pub fn pixel_width(&self) -> u32 {
        self.total.width() as u32
    }

    pub fn pixel_height(&self) -> u32 {
        self.total.height() as u32
    }
}

/// Carve the badge rects for a count of `count_len` characters measured as
/// `metrics` at `text_px` pixels.
///
/// Circular badges are a square sized from the padded text height. Pill
/// badges take the classic rounded-rectangle construction: a stretched
/// middle band plus a cap rect on each end, caps one radius wide and the
/// band inset half a radius from both sides.
pub fn compute(
    count_len: usize,
    metrics: &TextMetrics,
    style: &BadgeStyle,
    text_px: f32,
) -> BadgeGeometry {
    let height = text_px * style.height_factor;

    if count_len <= style.pill_threshold {
        let total = Rect::new(0.0, 0.0, height, height);
        return BadgeGeometry {
            kind: BadgeKind::Circular,
            total,
            band: total,
            caps: None,
        };
    }

    let radius = style.corner_radius;
    let total = Rect::new(0.0, 0.0, metrics.width + radius * 2.0, height);
    let band = Rect::new(radius / 2.0, 0.0, total.right - radius / 2.0, height);
    let left = Rect::new(0.0, 0.0, radius, height);
    let right = Rect::new(total.right - radius, 0.0, total.right, height);
    BadgeGeometry {
        kind: BadgeKind::Pill,
        total,
        band,
        caps: Some((left, right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: f32) -> TextMetrics {
        TextMetrics {
            width,
            height: 14.0,
            ascent: 14.0,
        }
    }

    #[test]
    fn short_count_is_circular_square() {
        let geo = compute(1, &metrics(10.0), &BadgeStyle::classic(), 16.0);
        assert_eq!(geo.kind, BadgeKind::Circular);
        assert_eq!(geo.total.width(), geo.total.height());
        assert_eq!(geo.total.height(), 20.0);
        assert!(geo.caps.is_none());
    }

    #[test]
    fn long_count_is_pill_with_caps() {
        let style = BadgeStyle::classic();
        let geo = compute(3, &metrics(34.0), &style, 16.0);
        assert_eq!(geo.kind, BadgeKind::Pill);
        assert_eq!(geo.total.width(), 34.0 + 60.0);
        assert_eq!(geo.total.height(), 20.0);
        let (left, right) = geo.caps.unwrap();
        assert_eq!(left.width(), style.corner_radius);
        assert_eq!(right.width(), style.corner_radius);
        assert_eq!(right.right, geo.total.right);
        assert_eq!(geo.band.left, style.corner_radius / 2.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let classic = BadgeStyle::classic();
        let strict = BadgeStyle::strict();
        assert_eq!(compute(1, &metrics(8.0), &classic, 16.0).kind, BadgeKind::Circular);
        assert_eq!(compute(2, &metrics(20.0), &classic, 16.0).kind, BadgeKind::Pill);
        assert_eq!(compute(2, &metrics(20.0), &strict, 16.0).kind, BadgeKind::Circular);
        assert_eq!(compute(3, &metrics(34.0), &strict, 16.0).kind, BadgeKind::Pill);
    }

    #[test]
    fn pill_width_monotone_in_text_width() {
        let style = BadgeStyle::classic();
        let mut last = 0.0;
        for w in [10.0, 20.0, 20.0, 35.5, 80.0] {
            let geo = compute(4, &metrics(w), &style, 16.0);
            assert!(geo.total.width() >= last);
            last = geo.total.width();
        }
    }

    #[test]
    fn pixel_size_truncates() {
        let geo = compute(4, &metrics(35.5), &BadgeStyle::classic(), 16.0);
        assert_eq!(geo.pixel_width(), 95);
        assert_eq!(geo.pixel_height(), 20);
    }
}
