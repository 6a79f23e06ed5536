//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Shortcuts JSON file shown in the overlay
    #[arg(long, value_name = "FILE")]
    shortcuts_file: Option<PathBuf>,

    /// Number of columns
    #[arg(long, value_name = "N")]
    columns: Option<usize>,

    /// Entry font size in points
    #[arg(long, value_name = "PT")]
    font_size: Option<u32>,

    /// Display width in pixels
    #[arg(long, value_name = "PX")]
    display_width: Option<u32>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    layout: LayoutOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    shortcuts_file: String,
}

#[derive(Serialize, Debug)]
struct LayoutOutput {
    columns: usize,
    font_size: u32,
    display_width: u32,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.shortcuts_file.is_none()
            && self.columns.is_none()
            && self.font_size.is_none()
            && self.display_width.is_none()
            && self.theme.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --shortcuts-file, --columns, --font-size, --display-width, or --theme",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.shortcuts_file {
            config.paths.shortcuts_file = Some(path.clone());
        }
        if let Some(columns) = self.columns {
            config.layout.columns = columns;
        }
        if let Some(font_size) = self.font_size {
            config.layout.font_size = font_size;
        }
        if let Some(width) = self.display_width {
            config.layout.display_width = width;
        }
        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?;
    let shortcuts_file = config
        .shortcuts_file()
        .map_err(|e| CliError::io(format!("Failed to locate shortcuts file: {e}")))?;

    Ok(ConfigOutput {
        config_file: config_file.display().to_string(),
        paths: PathsOutput {
            shortcuts_file: shortcuts_file.display().to_string(),
        },
        layout: LayoutOutput {
            columns: config.layout.columns,
            font_size: config.layout.font_size,
            display_width: config.layout.display_width,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str().to_string(),
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("File: {}", output.config_file);
    println!();

    println!("Paths:");
    println!("  Shortcuts File: {}", output.paths.shortcuts_file);
    println!();

    println!("Layout:");
    println!("  Columns:       {}", output.layout.columns);
    println!("  Font Size:     {}", output.layout.font_size);
    println!("  Display Width: {}", output.layout.display_width);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!();
}
