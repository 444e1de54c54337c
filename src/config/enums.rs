//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// stroke_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// send_color = [0, 69, 255]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true if the specification names a known color or is an RGB triple.
    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    #[test]
    fn named_and_rgb_colors_convert() {
        assert_eq!(ColorSpec::Name("white".into()).to_color(), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 69, 0]).to_color(),
            Color::from_rgb8(255, 69, 0)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        let spec = ColorSpec::Name("chartreuse".into());
        assert!(!spec.is_known());
        assert_eq!(spec.to_color(), BLACK);
    }
}
