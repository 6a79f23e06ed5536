//! Reading, validating and cleaning shortcut source files.

pub mod format;
pub mod shortcuts_json;

// Re-export commonly used functions
pub use format::{format_apps, format_shortcut, format_text, FormatOutcome};
pub use shortcuts_json::{
    parse_shortcuts_json, read_shortcuts_json, validate_structure, write_shortcuts_json,
    SourceError,
};
