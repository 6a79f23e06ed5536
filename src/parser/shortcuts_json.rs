//! Shortcuts JSON loader with structural validation.
//!
//! The structure is checked on the raw JSON value before deserializing, so a
//! broken file yields a message that names the offending application, type,
//! or shortcut instead of a serde position.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::App;

/// Reasons a shortcuts file cannot be turned into apps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The file does not exist
    Missing(PathBuf),
    /// The file exists but could not be read
    Unreadable(PathBuf, String),
    /// The contents are not JSON
    Syntax(String),
    /// The JSON value is null, false, zero, or an empty string
    Empty,
    /// The JSON does not have the expected structure
    Invalid(String),
}

impl SourceError {
    /// True for errors caused by the file system rather than the file contents.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Missing(_) | Self::Unreadable(..))
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(_) => write!(f, "File does not exist"),
            Self::Unreadable(_, reason) => write!(f, "Failed to load file contents: {reason}"),
            Self::Syntax(message) => write!(f, "{message}"),
            Self::Empty => write!(f, "JSON data is empty or null"),
            Self::Invalid(message) => write!(f, "JSON validation failed - {message}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Reads, validates and deserializes a shortcuts file.
pub fn read_shortcuts_json(path: &Path) -> Result<Vec<App>, SourceError> {
    if !path.exists() {
        return Err(SourceError::Missing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| SourceError::Unreadable(path.to_path_buf(), e.to_string()))?;

    parse_shortcuts_json(&content)
}

/// Validates and deserializes shortcuts JSON text.
pub fn parse_shortcuts_json(content: &str) -> Result<Vec<App>, SourceError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| SourceError::Syntax(e.to_string()))?;

    if is_falsy(&value) {
        return Err(SourceError::Empty);
    }

    validate_structure(&value).map_err(SourceError::Invalid)?;

    // The structure check guarantees the shape serde expects
    serde_json::from_value(value).map_err(|e| SourceError::Invalid(e.to_string()))
}

/// Writes apps as pretty-printed JSON (two-space indentation).
pub fn write_shortcuts_json(path: &Path, apps: &[App]) -> Result<()> {
    let content =
        serde_json::to_string_pretty(apps).context("Failed to serialize shortcuts to JSON")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).context(format!(
        "Failed to write temp shortcuts file: {}",
        temp_path.display()
    ))?;
    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp shortcuts file to: {}",
        path.display()
    ))?;

    Ok(())
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn key_count(value: &Value) -> usize {
    value.as_object().map_or(0, serde_json::Map::len)
}

/// Checks the app/type/shortcut structure and returns the first problem found.
///
/// Every object must carry exactly its two expected keys.
pub fn validate_structure(data: &Value) -> Result<(), String> {
    let apps = data
        .as_array()
        .ok_or_else(|| "Root element must be an array of applications".to_string())?;

    for (app_index, app) in apps.iter().enumerate() {
        let Some(app_name) = app.get("name").and_then(Value::as_str) else {
            return Err(format!(
                "Application #{} is missing valid 'name' string",
                app_index + 1
            ));
        };
        let Some(types) = app.get("types").and_then(Value::as_array) else {
            return Err(format!("Application '{app_name}' is missing 'types' array"));
        };
        if key_count(app) != 2 {
            return Err(format!(
                "Application '{app_name}' contains unexpected properties (only 'name' and 'types' allowed)"
            ));
        }

        for (type_index, shortcut_type) in types.iter().enumerate() {
            let Some(type_name) = shortcut_type.get("name").and_then(Value::as_str) else {
                return Err(format!(
                    "Type #{} in '{app_name}' is missing valid 'name' string",
                    type_index + 1
                ));
            };
            let Some(shortcuts) = shortcut_type.get("shortcuts").and_then(Value::as_array) else {
                return Err(format!(
                    "Type '{type_name}' in '{app_name}' is missing 'shortcuts' array"
                ));
            };
            if key_count(shortcut_type) != 2 {
                return Err(format!(
                    "Type '{type_name}' in '{app_name}' contains unexpected properties (only 'name' and 'shortcuts' allowed)"
                ));
            }

            for (shortcut_index, shortcut) in shortcuts.iter().enumerate() {
                let Some(key) = shortcut.get("key").and_then(Value::as_str) else {
                    return Err(format!(
                        "Shortcut #{} in '{type_name}' is missing 'key' string",
                        shortcut_index + 1
                    ));
                };
                if shortcut.get("description").and_then(Value::as_str).is_none() {
                    return Err(format!(
                        "Shortcut '{key}' in '{type_name}' is missing 'description' string"
                    ));
                }
                if key_count(shortcut) != 2 {
                    return Err(format!(
                        "Shortcut '{key}' in '{type_name}' contains unexpected properties (only 'key' and 'description' allowed)"
                    ));
                }
            }
        }
    }

    Ok(())
}
