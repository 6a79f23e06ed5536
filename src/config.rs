//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_BINARY_NAME;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SHORTCUTS_POPUP_CONFIG_DIR";

/// Smallest and largest allowed column count.
pub const COLUMNS_RANGE: (usize, usize) = (1, 12);
/// Smallest and largest allowed entry font size, in points.
pub const FONT_SIZE_RANGE: (u32, u32) = (6, 48);
/// Narrowest allowed display width, in pixels.
pub const MIN_DISPLAY_WIDTH: u32 = 200;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses `auto`, `dark` or `light`, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Lowercase name as written in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Shortcuts JSON file shown in the overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts_file: Option<PathBuf>,
}

/// Layout settings. Any change triggers a full relayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of overlay columns
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Entry font size in points, used for pixel layouts
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Display width in pixels, used for pixel layouts
    #[serde(default = "default_display_width")]
    pub display_width: u32,
}

const fn default_columns() -> usize {
    4
}

const fn default_font_size() -> u32 {
    14
}

const fn default_display_width() -> u32 {
    1920
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            font_size: default_font_size(),
            display_width: default_display_width(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/shortcuts-popup/config.toml`
/// - macOS: `~/Library/Application Support/shortcuts-popup/config.toml`
/// - Windows: `%APPDATA%\shortcuts-popup\config.toml`
///
/// The directory can be overridden with `SHORTCUTS_POPUP_CONFIG_DIR`.
///
/// # Validation
///
/// - `columns` must be between 1 and 12
/// - `font_size` must be between 6 and 48
/// - `display_width` must be at least 200
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Layout settings
    #[serde(default)]
    pub layout: LayoutConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `SHORTCUTS_POPUP_CONFIG_DIR` when set, otherwise the platform
    /// config directory joined with the binary name.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default shortcuts file, next to the config file.
    pub fn default_shortcuts_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("shortcuts.json"))
    }

    /// The configured shortcuts file, or the default one.
    pub fn shortcuts_file(&self) -> Result<PathBuf> {
        match &self.paths.shortcuts_file {
            Some(path) => Ok(path.clone()),
            None => Self::default_shortcuts_file(),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let (min_columns, max_columns) = COLUMNS_RANGE;
        if !(min_columns..=max_columns).contains(&self.layout.columns) {
            anyhow::bail!(
                "Column count must be between {min_columns} and {max_columns}, got {}",
                self.layout.columns
            );
        }

        let (min_font, max_font) = FONT_SIZE_RANGE;
        if !(min_font..=max_font).contains(&self.layout.font_size) {
            anyhow::bail!(
                "Font size must be between {min_font} and {max_font}, got {}",
                self.layout.font_size
            );
        }

        if self.layout.display_width < MIN_DISPLAY_WIDTH {
            anyhow::bail!(
                "Display width must be at least {MIN_DISPLAY_WIDTH}, got {}",
                self.layout.display_width
            );
        }

        Ok(())
    }

    /// Sets the column count with validation.
    pub fn set_columns(&mut self, columns: usize) -> Result<()> {
        let previous = self.layout.columns;
        self.layout.columns = columns;
        if let Err(e) = self.validate() {
            self.layout.columns = previous;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.shortcuts_file, None);
        assert_eq!(config.layout.columns, 4);
        assert_eq!(config.layout.font_size, 14);
        assert_eq!(config.layout.display_width, 1920);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_ranges() {
        let mut config = Config::new();
        config.layout.columns = 0;
        assert!(config.validate().is_err());
        config.layout.columns = 13;
        assert!(config.validate().is_err());
        config.layout.columns = 12;
        assert!(config.validate().is_ok());

        config.layout.font_size = 5;
        assert!(config.validate().is_err());
        config.layout.font_size = 48;
        assert!(config.validate().is_ok());

        config.layout.display_width = 199;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("at least 200"), "{err}");
    }

    #[test]
    fn test_set_columns_keeps_previous_on_error() {
        let mut config = Config::new();
        assert!(config.set_columns(20).is_err());
        assert_eq!(config.layout.columns, 4);
        config.set_columns(2).unwrap();
        assert_eq!(config.layout.columns, 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[layout]\ncolumns = 3\n").unwrap();
        assert_eq!(config.layout.columns, 3);
        assert_eq!(config.layout.font_size, 14);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);

        let empty = Config::from_toml("").unwrap();
        assert_eq!(empty, Config::new());
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        assert!(Config::from_toml("[layout]\ncolumns = 40\n").is_err());
        assert!(Config::from_toml("[ui]\ntheme_mode = \"neon\"\n").is_err());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::new();
        config.paths.shortcuts_file = Some(PathBuf::from("/tmp/shortcuts.json"));
        config.ui.theme_mode = ThemeMode::Light;

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("theme_mode = \"light\""));
        assert_eq!(Config::from_toml(&content).unwrap(), config);
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("AUTO"), Some(ThemeMode::Auto));
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
