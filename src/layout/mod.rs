//! Column layout engine.
//!
//! The pipeline runs leaf-first: [`normalize`] flattens apps into groups,
//! [`balance`] partitions them into columns from single-line estimates, the
//! renderer measures what actually wrapped, and [`apply_overflow_corrections`]
//! promotes those entries before one final balancing run. [`LayoutCycle`]
//! threads the state through these stages.

pub mod balance;
pub mod colors;
pub mod correct;
pub mod cycle;
pub mod measure;
pub mod normalize;
pub mod style;

pub use balance::{balance, compute_columns, Balance, MAX_BALANCE_ITERATIONS};
pub use colors::assign_colors;
pub use correct::apply_overflow_corrections;
pub use cycle::{CycleStage, LayoutCycle};
pub use measure::{measure_overflow, CellMeasure, GlyphEstimate, OverflowReport, TextMeasure};
pub use normalize::normalize;
pub use style::{LayoutStyle, KEY_LABEL_RATIO};
