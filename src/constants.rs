//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shortcuts Popup";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "shortcuts-popup";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SHORTCUTS_POPUP_LOG";

/// Log file name, created in the config directory by the overlay.
pub const LOG_FILE_NAME: &str = "shortcuts-popup.log";
