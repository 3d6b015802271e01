//! Color validation for rendered diagrams.
//!
//! [`Color`] wraps the `DynamicColor` type from the color crate. Style
//! colors from the configuration and block colors from documents are parsed
//! through it before they reach the SVG output.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color, kept together with the string it was parsed from.
///
/// The original spelling is what gets written to the SVG, so `White` in a
/// document stays `White` in the output.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    source: String,
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "goldenrod", "rgb(255, 0, 0)", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use wirebox::color::Color;
    ///
    /// let red = Color::new("#ff0505").unwrap();
    /// let gold = Color::new("goldenrod").unwrap();
    /// assert!(Color::new("no_such_color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        // CSS color keywords are ASCII case-insensitive.
        match DynamicColor::from_str(&color_str.to_ascii_lowercase()) {
            Ok(color) => Ok(Self {
                source: color_str.to_string(),
                color,
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the string the color was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the alpha component, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_hex_colors() {
        for name in ["lightgray", "White", "goldenrod", "#ff0505", "#00CCDE"] {
            let color = Color::new(name).unwrap();
            assert_eq!(color.to_string(), name);
            assert_eq!(color.alpha(), 1.0);
        }
    }

    #[test]
    fn test_invalid_color() {
        let err = Color::new("dark_blue_2").unwrap_err();
        assert!(err.starts_with("invalid color `dark_blue_2`"));
    }
}
