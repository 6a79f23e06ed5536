//! One relayout cycle: estimate, render, correct once.

use serde::Serialize;
use tracing::{debug, info};

use super::{
    apply_overflow_corrections, assign_colors, balance, measure_overflow, normalize, LayoutStyle,
    OverflowReport, TextMeasure,
};
use crate::models::{App, Column, Group, RgbColor};

/// Where a cycle stands in the estimate/correct pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStage {
    /// Columns come from single-line height estimates; one overflow report
    /// will be accepted.
    Estimated,
    /// Overflow corrections were applied; further reports are ignored.
    Corrected,
}

/// Layout state for one load of the source data under one set of settings.
///
/// A new cycle is built whenever the source file or the settings change; the
/// only in-place mutation is the single correction round.
#[derive(Debug, Clone)]
pub struct LayoutCycle {
    groups: Vec<Group>,
    style: LayoutStyle,
    colors: Vec<RgbColor>,
    columns: Vec<Column>,
    target_height: f64,
    iterations: usize,
    stage: CycleStage,
}

impl LayoutCycle {
    /// Normalizes `apps` and computes the estimated columns.
    #[must_use]
    pub fn new(apps: &[App], style: LayoutStyle) -> Self {
        Self::from_groups(normalize(apps, style.entry_height), style)
    }

    /// Builds a cycle from an already normalized group sequence.
    #[must_use]
    pub fn from_groups(groups: Vec<Group>, style: LayoutStyle) -> Self {
        let app_count = groups.iter().map(|g| g.app_index + 1).max().unwrap_or(0);
        Self::build(groups, assign_colors(app_count), style)
    }

    fn build(groups: Vec<Group>, colors: Vec<RgbColor>, style: LayoutStyle) -> Self {
        let result = balance(&groups, style.column_count, style.header_height);
        debug!(
            groups = groups.len(),
            columns = result.columns.len(),
            target_height = result.target_height,
            iterations = result.iterations,
            "estimated layout"
        );
        Self {
            groups,
            style,
            colors,
            columns: result.columns,
            target_height: result.target_height,
            iterations: result.iterations,
            stage: CycleStage::Estimated,
        }
    }

    /// Columns to render.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Pre-split groups, with any promoted heights.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Style the cycle was built with.
    #[must_use]
    pub const fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// One color per app, by app ordinal.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    /// Background color for the app at `app_index`.
    #[must_use]
    pub fn color_for(&self, app_index: usize) -> Option<RgbColor> {
        self.colors.get(app_index).copied()
    }

    /// Target height of the last balancing pass.
    #[must_use]
    pub const fn target_height(&self) -> f64 {
        self.target_height
    }

    /// Passes used by the last balancing run.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Current stage of the cycle.
    #[must_use]
    pub const fn stage(&self) -> CycleStage {
        self.stage
    }

    /// True until an overflow report has been applied.
    #[must_use]
    pub fn needs_measurement(&self) -> bool {
        self.stage == CycleStage::Estimated
    }

    /// Records the column width observed after rendering.
    ///
    /// Only affects overflow measurement; the partition does not depend on it.
    pub fn set_column_width(&mut self, column_width: f64) {
        self.style = self.style.with_column_width(column_width);
    }

    /// Applies an overflow report and re-balances.
    ///
    /// Only the first report of a cycle is applied. Returns `false` if the
    /// report was ignored because the cycle was already corrected.
    pub fn correct(&mut self, report: &OverflowReport) -> bool {
        if self.stage == CycleStage::Corrected {
            debug!("layout already corrected, ignoring overflow report");
            return false;
        }

        let promoted = apply_overflow_corrections(&mut self.groups, report.flagged());
        let result = balance(&self.groups, self.style.column_count, self.style.header_height);
        self.columns = result.columns;
        self.target_height = result.target_height;
        self.iterations = result.iterations;
        self.stage = CycleStage::Corrected;

        info!(
            measured = report.measured(),
            promoted,
            target_height = self.target_height,
            "corrected layout"
        );
        true
    }

    /// Measures the current columns with `measure` and applies the result.
    ///
    /// Returns the report, or `None` if the cycle was already corrected.
    pub fn measure_and_correct(&mut self, measure: &impl TextMeasure) -> Option<OverflowReport> {
        if !self.needs_measurement() {
            return None;
        }
        let report = measure_overflow(&self.columns, &self.style, measure);
        self.correct(&report);
        Some(report)
    }
}
