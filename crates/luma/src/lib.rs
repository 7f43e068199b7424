//! Relative luminance of sRGB colors, black/white text selection for a
//! background, and uniformly random opaque colors.

mod color;
mod contrast;
mod luminance;
mod random;

pub use color::{Color, ParseColorError};
pub use contrast::{is_light, optimal_text_color_for_background, text_color_for_luminance, TextColor};
pub use luminance::{gamma_expand, relative_luminance};
pub use random::random_color;
