//! Typed records of the shortcuts JSON source file.
//!
//! The file is an array of applications, each with named categories ("types")
//! of shortcuts:
//!
//! ```json
//! [
//!   { "name": "Vim", "types": [
//!       { "name": "Motion", "shortcuts": [
//!           { "key": "w", "description": "Next word" }
//!       ] }
//!   ] }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A single shortcut as stored in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shortcut {
    /// Key combination text (e.g., "Ctrl + S")
    pub key: String,
    /// What the shortcut does
    pub description: String,
}

/// A named category of shortcuts inside one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShortcutType {
    /// Category name (e.g., "Navigation")
    pub name: String,
    /// Shortcuts in display order
    pub shortcuts: Vec<Shortcut>,
}

/// An application with its shortcut categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct App {
    /// Application name (e.g., "Firefox")
    pub name: String,
    /// Categories in display order
    pub types: Vec<ShortcutType>,
}

impl App {
    /// Total number of shortcuts across all categories of this app.
    #[must_use]
    pub fn shortcut_count(&self) -> usize {
        self.types.iter().map(|t| t.shortcuts.len()).sum()
    }
}

impl Shortcut {
    /// Creates a new shortcut.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}
