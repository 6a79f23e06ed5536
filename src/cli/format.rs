//! Format command: clean up, sort and regroup a shortcuts file.

use crate::cli::common::{load_apps, print_json, resolve_shortcuts_file, CliError, CliResult};
use crate::parser::{format_apps, write_shortcuts_json};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

/// Normalize the text of every shortcut, sort rows and regroup them
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Path to shortcuts JSON file (defaults to the configured file)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write the result back to the file instead of printing it
    #[arg(short, long)]
    pub write: bool,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_shortcuts_file(self.file.as_deref())?;
        let apps = load_apps(&path)?;
        let outcome = format_apps(&apps);

        for row in &outcome.skipped {
            warn!("Skipped row {row}");
        }

        if self.write {
            write_shortcuts_json(&path, &outcome.apps)
                .map_err(|e| CliError::io(format!("Failed to write shortcuts file: {e:#}")))?;
            info!(
                kept = outcome.kept,
                skipped = outcome.skipped.len(),
                "formatted {}",
                path.display()
            );
            println!(
                "Formatted {} shortcuts in {} ({} rows skipped)",
                outcome.kept,
                path.display(),
                outcome.skipped.len()
            );
        } else {
            print_json(&outcome.apps)?;
        }

        Ok(())
    }
}
