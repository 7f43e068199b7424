use std::fmt;
use std::str::FromStr;

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

/// An RGBA color with every channel normalized to `[0.0, 1.0]`.
///
/// Channels are not validated; out-of-range values are carried as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digits {0:?}")]
    Digit(String),
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        crate::relative_luminance(self)
    }

    #[must_use]
    pub fn text_color(self) -> crate::TextColor {
        crate::optimal_text_color_for_background(self)
    }

    /// Draws a random opaque color from the thread-local generator.
    pub fn random() -> Self {
        crate::random_color(&mut rand::thread_rng())
    }

    pub fn to_rgb8(self) -> Rgb<u8> {
        Rgb([to_u8(self.r), to_u8(self.g), to_u8(self.b)])
    }

    pub fn to_rgba8(self) -> Rgba<u8> {
        Rgba([to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)])
    }
}

fn to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn from_u8(c: u8) -> f64 {
    c as f64 / 255.0
}

impl From<Rgb<u8>> for Color {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Self::rgb(from_u8(r), from_u8(g), from_u8(b))
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self::rgba(from_u8(r), from_u8(g), from_u8(b), from_u8(a))
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::Length(hex.len()));
        }

        // from_str_radix accepts a leading sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::Digit(hex.to_string()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ParseColorError::Digit(hex.to_string()))?;

        let [r, g, b, a] = if hex.len() == 6 {
            let [_, r, g, b] = value.to_be_bytes();
            [r, g, b, 255]
        } else {
            value.to_be_bytes()
        };

        Ok(Rgba([r, g, b, a]).into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba([r, g, b, a]) = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")?;
        if a != 255 {
            write!(f, "{a:02x}")?;
        }
        Ok(())
    }
}
