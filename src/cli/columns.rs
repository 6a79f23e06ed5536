//! Columns command: run the layout pipeline headless and print the result.

use crate::cli::common::{load_apps, print_json, CliError, CliResult};
use crate::config::{Config, COLUMNS_RANGE};
use crate::layout::{CellMeasure, CycleStage, GlyphEstimate, LayoutCycle, LayoutStyle};
use crate::models::{Column, Entry, EntryId};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Compute the balanced column layout of a shortcuts file
#[derive(Debug, Clone, Args)]
pub struct ColumnsArgs {
    /// Path to shortcuts JSON file (defaults to the configured file)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Number of columns (defaults to the configured count)
    #[arg(short, long, value_name = "N")]
    pub columns: Option<usize>,

    /// Entry font size in points for pixel layouts
    #[arg(long, value_name = "PT")]
    pub font_size: Option<u32>,

    /// Display width in pixels for pixel layouts
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Lay out for a terminal this many cells wide instead of a display
    #[arg(long, value_name = "CELLS", conflicts_with_all = ["font_size", "width"])]
    pub cells: Option<u16>,

    /// Skip the overflow correction round
    #[arg(long)]
    pub no_correct: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutOutput {
    column_count: usize,
    target_height: f64,
    iterations: usize,
    stage: CycleStage,
    promoted: Vec<EntryId>,
    columns: Vec<ColumnOutput>,
}

#[derive(Debug, Serialize)]
struct ColumnOutput {
    height: f64,
    groups: Vec<GroupOutput>,
}

#[derive(Debug, Serialize)]
struct GroupOutput {
    app: String,
    category: String,
    continued: bool,
    color: Option<String>,
    entries: Vec<Entry>,
}

impl ColumnsArgs {
    /// Execute the columns command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = match &self.file {
            Some(file) => file.clone(),
            None => config
                .shortcuts_file()
                .map_err(|e| CliError::io(format!("Failed to locate shortcuts file: {e}")))?,
        };

        let column_count = self.columns.unwrap_or(config.layout.columns);
        let (min_columns, max_columns) = COLUMNS_RANGE;
        if !(min_columns..=max_columns).contains(&column_count) {
            return Err(CliError::validation(format!(
                "Column count must be between {min_columns} and {max_columns}"
            )));
        }

        let apps = load_apps(&path)?;

        let cycle = if let Some(cells) = self.cells {
            let mut cycle = LayoutCycle::new(&apps, LayoutStyle::for_terminal(column_count, cells));
            if !self.no_correct {
                cycle.measure_and_correct(&CellMeasure);
            }
            cycle
        } else {
            let font_size = self.font_size.unwrap_or(config.layout.font_size);
            let width = self.width.unwrap_or(config.layout.display_width);
            let style = LayoutStyle::for_display(column_count, font_size, width);
            let mut cycle = LayoutCycle::new(&apps, style);
            if !self.no_correct {
                cycle.measure_and_correct(&GlyphEstimate::for_font_size(font_size));
            }
            cycle
        };

        let output = build_output(&cycle);
        if self.json {
            print_json(&output)?;
        } else {
            print_human(&output);
        }

        Ok(())
    }
}

fn build_output(cycle: &LayoutCycle) -> LayoutOutput {
    let header_height = cycle.style().header_height;
    let promoted = cycle
        .groups()
        .iter()
        .flat_map(|g| &g.entries)
        .filter(|e| e.is_promoted())
        .map(|e| e.id)
        .collect();

    let columns = cycle
        .columns()
        .iter()
        .map(|column: &Column| ColumnOutput {
            height: column.charged_height(header_height),
            groups: column
                .groups
                .iter()
                .map(|g| GroupOutput {
                    app: g.app_name.clone(),
                    category: g.category_name.clone(),
                    continued: g.continued,
                    color: cycle.color_for(g.app_index).map(|c| c.to_hex()),
                    entries: g.entries.clone(),
                })
                .collect(),
        })
        .collect();

    LayoutOutput {
        column_count: cycle.style().column_count,
        target_height: cycle.target_height(),
        iterations: cycle.iterations(),
        stage: cycle.stage(),
        promoted,
        columns,
    }
}

fn print_human(output: &LayoutOutput) {
    println!(
        "{} columns, target height {:.0} ({} passes, {} entries promoted)",
        output.column_count,
        output.target_height,
        output.iterations,
        output.promoted.len()
    );

    for (index, column) in output.columns.iter().enumerate() {
        println!();
        println!("Column {} (height {:.0})", index + 1, column.height);
        for group in &column.groups {
            let color = group.color.as_deref().unwrap_or("-");
            println!("  {} / {} [{}]", group.app, group.category, color);
            for entry in &group.entries {
                let marker = if entry.is_promoted() { "*" } else { " " };
                println!("   {marker} {:<20} {}", entry.key, entry.description);
            }
        }
    }
}
