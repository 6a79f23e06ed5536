//! Overflow detection against real label widths.
//!
//! The balancer assumes every entry fits on one line. Once the width of a
//! rendered column is known, each entry's key and description are measured
//! against their labels; entries that would wrap are reported so the cycle can
//! give them a second line.

use std::collections::BTreeSet;

use unicode_width::UnicodeWidthStr;

use super::style::{average_glyph_width, LayoutStyle};
use crate::models::{Column, EntryId};

/// Measures rendered text width in layout units.
pub trait TextMeasure {
    /// Width of `text` on a single line.
    fn text_width(&self, text: &str) -> f64;
}

/// Terminal measure: one unit per display cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn text_width(&self, text: &str) -> f64 {
        text.width() as f64
    }
}

/// Pixel estimate: display cells times an average glyph width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphEstimate {
    /// Pixels per display cell
    pub glyph_width: f64,
}

impl GlyphEstimate {
    /// Estimate for a bold sans face at `font_size` points.
    #[must_use]
    pub fn for_font_size(font_size: u32) -> Self {
        Self {
            glyph_width: average_glyph_width(font_size),
        }
    }
}

impl TextMeasure for GlyphEstimate {
    fn text_width(&self, text: &str) -> f64 {
        text.width() as f64 * self.glyph_width
    }
}

/// Per-entry overflow results collected from one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowReport {
    flagged: BTreeSet<EntryId>,
    measured: usize,
}

impl OverflowReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the measurement of one rendered label.
    ///
    /// An entry is flagged if any of its labels overflowed.
    pub fn record(&mut self, id: EntryId, overflowed: bool) {
        self.measured += 1;
        if overflowed {
            self.flagged.insert(id);
        }
    }

    /// Ids of entries that need a second line, in ascending order.
    #[must_use]
    pub const fn flagged(&self) -> &BTreeSet<EntryId> {
        &self.flagged
    }

    /// Number of labels recorded.
    #[must_use]
    pub const fn measured(&self) -> usize {
        self.measured
    }

    /// True if no label overflowed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }
}

/// Measures every entry of `columns` against the labels of `style`.
///
/// Key and description are reported separately, matching one callback per
/// rendered label.
pub fn measure_overflow(
    columns: &[Column],
    style: &LayoutStyle,
    measure: &impl TextMeasure,
) -> OverflowReport {
    let key_limit = style.key_label_width() - style.label_padding;
    let description_limit = style.description_label_width() - style.label_padding;

    let mut report = OverflowReport::new();
    for entry in columns.iter().flat_map(Column::entries) {
        report.record(entry.id, measure.text_width(&entry.key) >= key_limit);
        report.record(
            entry.id,
            measure.text_width(&entry.description) >= description_limit,
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, Group};

    fn column(texts: &[(&str, &str)]) -> Column {
        let entries = texts
            .iter()
            .enumerate()
            .map(|(i, (key, description))| Entry::new(EntryId(i), *key, *description, 1.0))
            .collect();
        Column {
            groups: vec![Group::new("App", 0, "Type", entries)],
        }
    }

    #[test]
    fn test_cell_measure_counts_display_width() {
        assert!((CellMeasure.text_width("Ctrl + S") - 8.0).abs() < f64::EPSILON);
        assert!((CellMeasure.text_width("漢字") - 4.0).abs() < f64::EPSILON);
        assert!(CellMeasure.text_width("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_glyph_estimate_scales_cells() {
        let measure = GlyphEstimate { glyph_width: 10.0 };
        assert!((measure.text_width("abc") - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_flags_long_labels() {
        // Column 24 wide: inner 22, key label 8 (limit 7), description 14 (limit 13)
        let style = LayoutStyle::for_terminal(1, 26);
        let columns = vec![column(&[
            ("Ctrl+S", "Save"),
            ("Ctrl+Shift", "Save"),
            ("K", "Describe at length"),
            ("Alt+F4", "Close window!"),
        ])];

        let report = measure_overflow(&columns, &style, &CellMeasure);
        assert_eq!(report.measured(), 8);
        let flagged: Vec<usize> = report.flagged().iter().map(|id| id.0).collect();
        // "Close window!" is 13 wide, meeting the limit
        assert_eq!(flagged, vec![1, 2, 3]);
    }

    #[test]
    fn test_report_record() {
        let mut report = OverflowReport::new();
        assert!(report.is_clean());
        report.record(EntryId(4), false);
        report.record(EntryId(4), true);
        report.record(EntryId(1), true);
        assert!(!report.is_clean());
        assert_eq!(report.measured(), 3);
        assert_eq!(
            report.flagged().iter().copied().collect::<Vec<_>>(),
            vec![EntryId(1), EntryId(4)]
        );
    }
}
