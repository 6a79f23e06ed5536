//! RGB color handling with HSL construction and hex serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a lowercase `#rrggbb` string in CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from HSL (Hue, Saturation, Lightness) color space.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees (0.0-360.0, will be clamped)
    /// * `s` - Saturation in percent (0.0-100.0, will be clamped)
    /// * `l` - Lightness in percent (0.0-100.0, will be clamped)
    ///
    /// # Examples
    ///
    /// ```
    /// use shortcuts_popup::models::RgbColor;
    ///
    /// let red = RgbColor::from_hsl(0.0, 100.0, 50.0);
    /// assert_eq!(red, RgbColor::new(255, 0, 0));
    ///
    /// let dark_red = RgbColor::from_hsl(0.0, 90.0, 18.0);
    /// assert_eq!(dark_red.to_hex(), "#570505");
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.clamp(0.0, 360.0);
        let s = s.clamp(0.0, 100.0) / 100.0;
        let l = l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use shortcuts_popup::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(10, 171, 205).to_hex(), "#0aabcd");
    }

    #[test]
    fn test_display_matches_hex() {
        let color = RgbColor::new(87, 5, 5);
        assert_eq!(color.to_string(), "#570505");
    }

    #[test]
    fn test_hsl_primary_colors() {
        assert_eq!(RgbColor::from_hsl(0.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hsl(240.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_grayscale() {
        assert_eq!(RgbColor::from_hsl(200.0, 0.0, 0.0), RgbColor::new(0, 0, 0));
        assert_eq!(RgbColor::from_hsl(200.0, 0.0, 100.0), RgbColor::new(255, 255, 255));
        assert_eq!(RgbColor::from_hsl(42.0, 0.0, 50.0), RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_dark_spectrum_endpoints() {
        assert_eq!(RgbColor::from_hsl(0.0, 90.0, 18.0).to_hex(), "#570505");
        assert_eq!(RgbColor::from_hsl(275.0, 90.0, 18.0).to_hex(), "#350557");
    }

    #[test]
    fn test_hsl_clamping() {
        assert_eq!(
            RgbColor::from_hsl(-30.0, 150.0, 50.0),
            RgbColor::from_hsl(0.0, 100.0, 50.0)
        );
        assert_eq!(
            RgbColor::from_hsl(400.0, 100.0, 50.0),
            RgbColor::from_hsl(360.0, 100.0, 50.0)
        );
    }
}
