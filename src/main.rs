//! Shortcuts Popup - full-screen keyboard shortcut cheat sheet
//!
//! Without a subcommand the overlay is shown in the terminal. Subcommands give
//! headless access to validation, formatting and the layout engine.

use clap::{Parser, Subcommand};
use shortcuts_popup::cli::{
    CliError, ColorsArgs, ColumnsArgs, ConfigArgs, ExitCode, FormatArgs, ValidateArgs,
};
use shortcuts_popup::logging;
use std::path::PathBuf;

/// Shortcuts Popup - full-screen keyboard shortcut cheat sheet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Shortcuts JSON file to show (defaults to the configured file)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Number of columns for this session
    #[arg(short, long, value_name = "N")]
    columns: Option<usize>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a shortcuts file
    Validate(ValidateArgs),
    /// Clean up, sort and regroup a shortcuts file
    Format(FormatArgs),
    /// Compute the balanced column layout of a shortcuts file
    Columns(ColumnsArgs),
    /// Print the background colors for N top-level groups
    Colors(ColorsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(command) => {
            logging::init_stderr(cli.verbose);
            run_command(command)
        }
        None => run_overlay(cli.file, cli.columns, cli.verbose),
    };

    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code.into()
        }
    }
}

fn run_command(command: Command) -> Result<(), CliError> {
    match command {
        Command::Validate(args) => args.execute(),
        Command::Format(args) => args.execute(),
        Command::Columns(args) => args.execute(),
        Command::Colors(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

#[cfg(feature = "ratatui")]
fn run_overlay(
    file: Option<PathBuf>,
    columns: Option<usize>,
    verbose: bool,
) -> Result<(), CliError> {
    use shortcuts_popup::config::Config;
    use shortcuts_popup::tui;

    let log_path = logging::init_file(verbose)
        .map_err(|e| CliError::io(format!("Failed to set up logging: {e:#}")))?;

    let mut config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    let overrides = tui::SessionOverrides { file, columns };
    overrides
        .apply(&mut config)
        .map_err(|e| CliError::validation(e.to_string()))?;
    let source = overrides
        .source(&config)
        .map_err(|e| CliError::io(format!("Failed to locate shortcuts file: {e}")))?;

    tracing::info!(log = %log_path.display(), source = %source.display(), "starting overlay");

    let mut state = tui::OverlayState::new(config, source, overrides);
    let mut terminal = tui::setup_terminal().map_err(|e| CliError::io(format!("{e:#}")))?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal).map_err(|e| CliError::io(format!("{e:#}")))?;

    result.map_err(|e| CliError::io(format!("{e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_overlay(
    _file: Option<PathBuf>,
    _columns: Option<usize>,
    _verbose: bool,
) -> Result<(), CliError> {
    Err(CliError::validation(
        "This build has no terminal overlay; use a subcommand (see --help)",
    ))
}
