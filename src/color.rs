//! RGBA color values, color-string parsing and resource resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{BadgeError, Result};

/// An RGBA color value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack from a packed 0xAARRGGBB integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a 0xAARRGGBB integer.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a color string: `#RGB`, `#RRGGBB`, `#AARRGGBB` or a named
    /// color such as `"red"` or `"navy"`.
    pub fn parse(s: &str) -> Result<Color> {
        let invalid = || BadgeError::InvalidColorFormat(s.to_string());
        if let Some(hex) = s.strip_prefix('#') {
            // from_str_radix tolerates a leading sign; only digits are hex.
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                3 => {
                    let expand = |nibble: u32| (nibble as u8) * 0x11;
                    Ok(Color::rgb(
                        expand((value >> 8) & 0xF),
                        expand((value >> 4) & 0xF),
                        expand(value & 0xF),
                    ))
                }
                6 => Ok(Color::from_argb(0xFF00_0000 | value)),
                8 => Ok(Color::from_argb(value)),
                _ => Err(invalid()),
            };
        }
        NAMED
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(invalid)
    }
}

impl std::str::FromStr for Color {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

// Named colors recognized by the string parser (the classic CSS-1 era set).
static NAMED: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color::from_argb(0xFF00_0000)),
        ("darkgray", Color::from_argb(0xFF44_4444)),
        ("darkgrey", Color::from_argb(0xFF44_4444)),
        ("gray", Color::from_argb(0xFF88_8888)),
        ("grey", Color::from_argb(0xFF88_8888)),
        ("lightgray", Color::from_argb(0xFFCC_CCCC)),
        ("lightgrey", Color::from_argb(0xFFCC_CCCC)),
        ("white", Color::from_argb(0xFFFF_FFFF)),
        ("red", Color::from_argb(0xFFFF_0000)),
        ("green", Color::from_argb(0xFF00_FF00)),
        ("blue", Color::from_argb(0xFF00_00FF)),
        ("yellow", Color::from_argb(0xFFFF_FF00)),
        ("cyan", Color::from_argb(0xFF00_FFFF)),
        ("magenta", Color::from_argb(0xFFFF_00FF)),
        ("aqua", Color::from_argb(0xFF00_FFFF)),
        ("fuchsia", Color::from_argb(0xFFFF_00FF)),
        ("lime", Color::from_argb(0xFF00_FF00)),
        ("maroon", Color::from_argb(0xFF80_0000)),
        ("navy", Color::from_argb(0xFF00_0080)),
        ("olive", Color::from_argb(0xFF80_8000)),
        ("purple", Color::from_argb(0xFF80_0080)),
        ("silver", Color::from_argb(0xFFC0_C0C0)),
        ("teal", Color::from_argb(0xFF00_8080)),
    ])
});

/// Resolves a platform color resource identifier to a concrete color.
///
/// Supplied by the embedding environment; the rendering core never touches
/// any particular platform's resource system.
pub trait ColorResolver {
    fn resolve(&self, id: u32) -> Option<Color>;
}

/// Map-backed [`ColorResolver`] for embedders without a resource system.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    colors: HashMap<u32, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u32, color: Color) {
        self.colors.insert(id, color);
    }
}

impl ColorResolver for Palette {
    fn resolve(&self, id: u32) -> Option<Color> {
        self.colors.get(&id).copied()
    }
}
