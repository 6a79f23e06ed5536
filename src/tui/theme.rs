//! Colors for the overlay chrome in dark and light modes.
//!
//! Group bands always use the dark banding colors, so text drawn on them is
//! light in both modes. Everything around the bands follows the OS theme.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Search text and highlights
    pub accent: Color,
    /// Error view
    pub error: Color,
    /// Primary text outside the bands
    pub text: Color,
    /// Help text and dim content
    pub text_muted: Color,
    /// Screen background
    pub background: Color,
    /// Text drawn on a group band
    pub band_text: Color,
    /// Key labels drawn on a group band
    pub band_key: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for the configured mode; `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            band_text: Color::White,
            band_key: Color::Rgb(255, 220, 120),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            band_text: Color::White,
            band_key: Color::Rgb(255, 220, 120),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_band_text_is_light_in_both_modes() {
        // Bands are dark regardless of mode
        assert_eq!(Theme::dark().band_text, Color::White);
        assert_eq!(Theme::light().band_text, Color::White);
        assert_ne!(Theme::light().text, Theme::light().band_text);
    }

    #[test]
    fn test_theme_detect() {
        // Just verify detect() returns a valid theme without panicking
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }
}
