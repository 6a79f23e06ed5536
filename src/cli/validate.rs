//! Validation command for shortcuts files.

use crate::cli::common::{print_json, resolve_shortcuts_file, CliError, CliResult};
use crate::models::App;
use crate::parser::read_shortcuts_json;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a shortcuts file
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to shortcuts JSON file (defaults to the configured file)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response of the validate command
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    apps: usize,
    types: usize,
    shortcuts: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_shortcuts_file(self.file.as_deref())?;

        let (apps, error) = match read_shortcuts_json(&path) {
            Ok(apps) => (apps, None),
            Err(e) if e.is_io() => {
                return Err(CliError::io(format!("{}: {e}", path.display())));
            }
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        let response = ValidationResponse {
            valid: error.is_none(),
            file: path.display().to_string(),
            error,
            apps: apps.len(),
            types: apps.iter().map(|a| a.types.len()).sum(),
            shortcuts: apps.iter().map(App::shortcut_count).sum(),
        };

        if self.json {
            print_json(&response)?;
        } else if let Some(error) = &response.error {
            println!("✗ Validation failed: {}", response.file);
            println!("  {error}");
        } else {
            println!("✓ Validation passed: {}", response.file);
            println!(
                "  {} applications, {} types, {} shortcuts",
                response.apps, response.types, response.shortcuts
            );
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        Ok(())
    }
}
