//! Shortcuts Popup Library
//!
//! Lays out a grouped list of keyboard shortcuts (application, category,
//! shortcut) into a fixed number of columns of near-equal height, splitting
//! categories across columns where needed and correcting the layout once real
//! text widths are known.
//!
//! ```
//! use shortcuts_popup::layout::{CellMeasure, LayoutCycle, LayoutStyle};
//! use shortcuts_popup::parser::parse_shortcuts_json;
//!
//! let apps = parse_shortcuts_json(
//!     r#"[{"name": "Vim", "types": [{"name": "Motion", "shortcuts": [
//!         {"key": "w", "description": "Next word"},
//!         {"key": "b", "description": "Previous word"}
//!     ]}]}]"#,
//! )
//! .unwrap();
//!
//! let mut cycle = LayoutCycle::new(&apps, LayoutStyle::for_terminal(2, 80));
//! cycle.measure_and_correct(&CellMeasure);
//! assert_eq!(cycle.columns().len(), 2);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod layout;
pub mod logging;
pub mod models;
pub mod parser;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use layout::{apply_overflow_corrections, assign_colors, compute_columns};
