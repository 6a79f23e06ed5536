//! Data models for shortcut sources and column layouts.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and layout logic.

pub mod group;
pub mod rgb;
pub mod shortcut_file;

// Re-export all model types
pub use group::{total_height, Column, Entry, EntryId, Group, CONTINUATION_SUFFIX};
pub use rgb::RgbColor;
pub use shortcut_file::{App, Shortcut, ShortcutType};
