use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{relative_luminance, Color};

const THRESHOLD: f64 = 0.5;

/// Text color that stays readable on a given background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn color(self) -> Color {
        match self {
            TextColor::Black => Color::BLACK,
            TextColor::White => Color::WHITE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks black text above luminance 0.5 and white text otherwise.
/// A luminance of exactly 0.5 gets white text.
pub fn text_color_for_luminance(luminance: f64) -> TextColor {
    if luminance > THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

pub fn is_light(color: Color) -> bool {
    relative_luminance(color) > THRESHOLD
}

pub fn optimal_text_color_for_background(bg_color: Color) -> TextColor {
    text_color_for_luminance(relative_luminance(bg_color))
}
