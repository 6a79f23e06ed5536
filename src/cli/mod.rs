//! CLI command handlers.
//!
//! Headless, scriptable access to the loader, formatter and layout engine for
//! automation and testing.

pub mod colors;
pub mod columns;
pub mod common;
pub mod config;
pub mod format;
pub mod validate;

// Re-export types used by main.rs and tests
pub use colors::ColorsArgs;
pub use columns::ColumnsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use format::FormatArgs;
pub use validate::ValidateArgs;
