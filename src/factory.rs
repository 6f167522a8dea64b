//! The badge renderer: configure a count and a fill color, build an image.

use image::RgbaImage;

use crate::color::{Color, ColorResolver};
use crate::error::{BadgeError, Result};
use crate::font::TextFont;
use crate::geometry::{self, BadgeGeometry, BadgeKind, BadgeStyle, TextAlign};
use crate::DisplayScale;

/// Default text size in scale-independent units.
const DEFAULT_TEXT_SIZE: f32 = 16.0;

// Sub-pixel nudges carried by the circular draw path: the circle center is
// shifted to sit between samples and the radius grows slightly so the
// anti-aliased rim reaches the box edge without a seam.
const CENTER_FUDGE: f32 = 0.7;
const RADIUS_FUDGE: f32 = 0.1;

/// Renders a count badge into an RGBA raster image.
///
/// A filled circle carries short counts; longer counts get a pill (a
/// stretched rectangle with semicircular caps). The count is drawn in
/// opaque white. Mostly useful for decorating list rows or notification
/// icons: configure once, then [`build`](Self::build) per item.
///
/// The factory is reusable; building never consumes or mutates it. It is
/// not meant for concurrent mutation — use one instance per thread.
pub struct BadgeFactory {
    scale: DisplayScale,
    style: BadgeStyle,
    font: TextFont,
    count: String,
    fill: Option<Color>,
    text_px: f32,
}

impl BadgeFactory {
    /// Create a factory with an empty count, no fill color and a 16 unit
    /// text size converted through `scale`.
    pub fn new(scale: DisplayScale) -> Self {
        Self {
            scale,
            style: BadgeStyle::default(),
            font: TextFont::default(),
            count: String::new(),
            fill: None,
            text_px: scale.to_px(DEFAULT_TEXT_SIZE),
        }
    }

    /// Like [`new`](Self::new) with an initial fill color.
    pub fn with_color(scale: DisplayScale, color: Color) -> Self {
        let mut factory = Self::new(scale);
        factory.fill = Some(color);
        factory
    }

    /// Store the count to display. Empty is legal and renders the minimal
    /// badge with no text.
    pub fn set_count(&mut self, count: impl Into<String>) {
        self.count = count.into();
    }

    /// Store an integer count, coerced to its decimal form.
    pub fn set_count_value(&mut self, count: i64) {
        self.count = count.to_string();
    }

    /// Set the text size in scale-independent units.
    pub fn set_text_size(&mut self, units: f32) {
        self.text_px = self.scale.to_px(units);
    }

    pub fn set_style(&mut self, style: BadgeStyle) {
        self.style = style;
    }

    pub fn set_font(&mut self, font: TextFont) {
        self.font = font;
    }

    /// Set the fill color directly.
    pub fn set_badge_color(&mut self, color: Color) {
        self.fill = Some(color);
    }

    /// Set the fill color from a color string such as `"#FF0000"` or
    /// `"red"`. Fails immediately with `InvalidColorFormat` on an
    /// unparseable string; the previous color is left untouched.
    pub fn set_badge_color_str(&mut self, color: &str) -> Result<()> {
        self.fill = Some(Color::parse(color)?);
        Ok(())
    }

    /// Set the fill color through an injected resource resolver.
    pub fn set_badge_color_res(&mut self, resolver: &impl ColorResolver, id: u32) -> Result<()> {
        let color = resolver
            .resolve(id)
            .ok_or(BadgeError::UnknownColorResource(id))?;
        self.fill = Some(color);
        Ok(())
    }

    /// Geometry for the current count, text size and style. Computed fresh
    /// on every call; it cannot go stale behind a setter.
    pub fn geometry(&self) -> BadgeGeometry {
        let metrics = self.font.measure(&self.count, self.text_px);
        geometry::compute(
            self.count.chars().count(),
            &metrics,
            &self.style,
            self.text_px,
        )
    }

    /// Render the badge for the current state.
    ///
    /// The output surface is transparent ARGB, sized exactly to the
    /// truncated overall bounding box. Fails with `ColorUnset` when no fill
    /// color was configured and the style requires one; the permissive
    /// styles fall back to a fully transparent fill instead.
    pub fn build(&self) -> Result<RgbaImage> {
        let fill = match self.fill {
            Some(color) => color,
            None if self.style.require_color => return Err(BadgeError::ColorUnset),
            None => Color::TRANSPARENT,
        };
        let geo = self.geometry();
        let mut img = RgbaImage::new(geo.pixel_width(), geo.pixel_height());

        match geo.kind {
            BadgeKind::Pill => {
                crate::raster::fill_rect(&mut img, &geo.band, fill);
                if let Some((left, right)) = geo.caps {
                    // Cap arcs as the outward half of the ellipse inscribed
                    // in each cap rect; the flat edges meet the band without
                    // overlap so translucent fills stay uniform.
                    crate::raster::fill_half_ellipse(
                        &mut img,
                        &left,
                        crate::raster::CapSide::Left,
                        fill,
                    );
                    crate::raster::fill_half_ellipse(
                        &mut img,
                        &right,
                        crate::raster::CapSide::Right,
                        fill,
                    );
                }
            }
            BadgeKind::Circular => {
                let radius =
                    geo.total.width().min(geo.total.height()) / 2.0 + RADIUS_FUDGE;
                let cx = geo.total.center_x() + CENTER_FUDGE;
                let cy = geo.total.center_y() + CENTER_FUDGE;
                crate::raster::fill_circle(&mut img, cx, cy, radius, fill);
            }
        }

        self.draw_count(&mut img, &geo);
        Ok(img)
    }

    /// Set the count, then build. Identical contract to calling the two
    /// steps separately.
    pub fn build_with(&mut self, count: impl Into<String>) -> Result<RgbaImage> {
        self.set_count(count);
        self.build()
    }

    /// Integer form of [`build_with`](Self::build_with).
    pub fn build_value(&mut self, count: i64) -> Result<RgbaImage> {
        self.set_count_value(count);
        self.build()
    }

    fn draw_count(&self, img: &mut RgbaImage, geo: &BadgeGeometry) {
        if self.count.is_empty() {
            return;
        }
        let metrics = self.font.measure(&self.count, self.text_px);
        let band = &geo.band;
        let left = match self.style.text_align {
            TextAlign::Center => band.center_x() - metrics.width / 2.0,
            TextAlign::Left => band.left,
        };
        let baseline = band.top + band.height() * self.style.baseline_factor;
        self.font
            .draw(img, &self.count, self.text_px, left, baseline, Color::WHITE);
    }
}
