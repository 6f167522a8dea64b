//! badgefactory: numeric count badge rasterizer.
//! Renders circle or pill count badges with centered text into RGBA images.

pub mod color;
mod error;
mod factory;
pub mod font;
pub mod geometry;
mod raster;

pub use color::{Color, ColorResolver, Palette};
pub use error::{BadgeError, Result};
pub use factory::BadgeFactory;
#[cfg(feature = "ttf")]
pub use font::VectorFont;
pub use font::{BitmapFont, TextFont, TextMetrics};
pub use geometry::{BadgeGeometry, BadgeKind, BadgeStyle, Rect, TextAlign};

// Test utilities
pub mod test_support;

/// Display scaling context.
///
/// Converts a logical text size in scale-independent units into device
/// pixels. Embedders wire this to their platform's display metrics; the
/// default density of 1.0 makes units and pixels coincide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayScale {
    pub density: f32,
}

impl DisplayScale {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Scale-independent units to device pixels.
    pub fn to_px(&self, units: f32) -> f32 {
        units * self.density
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}
