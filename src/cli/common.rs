//! Shared error and exit-code types for CLI commands.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::App;
use crate::parser::{read_shortcuts_json, SourceError};

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was read but rejected (invalid data, bad arguments)
    ValidationError = 1,
    /// Input could not be read or output could not be written
    IoError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error returned by a command, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Error for rejected input, exit code 1.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// Error for failed reads or writes, exit code 2.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        if err.is_io() {
            Self::io(err.to_string())
        } else {
            Self::validation(err.to_string())
        }
    }
}

/// Result type of every command.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves the shortcuts file from `--file` or the configuration.
pub fn resolve_shortcuts_file(file: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = file {
        return Ok(path.to_path_buf());
    }
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    config
        .shortcuts_file()
        .map_err(|e| CliError::io(format!("Failed to locate shortcuts file: {e}")))
}

/// Reads and validates a shortcuts file.
pub fn load_apps(path: &Path) -> CliResult<Vec<App>> {
    read_shortcuts_json(path).map_err(|e| {
        let err = CliError::from(e);
        CliError {
            message: format!("{}: {}", path.display(), err.message),
            ..err
        }
    })
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json(value: &impl serde::Serialize) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code as u8, 1);
        assert_eq!(CliError::io("gone").exit_code as u8, 2);
        assert_eq!(ExitCode::Success as u8, 0);
    }

    #[test]
    fn test_source_error_mapping() {
        let missing = CliError::from(SourceError::Missing(PathBuf::from("x.json")));
        assert_eq!(missing.exit_code, ExitCode::IoError);

        let invalid = CliError::from(SourceError::Empty);
        assert_eq!(invalid.exit_code, ExitCode::ValidationError);
        assert_eq!(invalid.to_string(), SourceError::Empty.to_string());
    }
}
