//! Layout metrics for terminal cells and desktop pixels.

use serde::Serialize;

/// Share of the inner column width given to the key label.
pub const KEY_LABEL_RATIO: f64 = 0.35;

/// Points to pixels at 96 DPI.
const PX_PER_PT: f64 = 96.0 / 72.0;
/// Line box height of a bold sans face relative to its size.
const LINE_SPACING: f64 = 1.17;
/// Rendered entries are tighter than the face's full line box.
const ENTRY_LINE_FACTOR: f64 = 0.57;
/// Header font size relative to entry font size.
const HEADER_FONT_DELTA: u32 = 6;

const DISPLAY_COLUMN_MARGIN: f64 = 8.0;
const DISPLAY_GROUP_PADDING: f64 = 16.0;
const DISPLAY_HEADER_MARGIN: f64 = 24.0;
const DISPLAY_LABEL_PADDING: f64 = 6.0;

/// Metrics that drive balancing and overflow measurement.
///
/// Heights and widths share one unit: terminal cells for
/// [`LayoutStyle::for_terminal`], pixels for [`LayoutStyle::for_display`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutStyle {
    /// Number of columns (at least one)
    pub column_count: usize,
    /// Single-line entry height
    pub entry_height: f64,
    /// Category header height including its margins
    pub header_height: f64,
    /// Width of one column
    pub column_width: f64,
    /// Horizontal padding inside a group box, per side
    pub group_padding: f64,
    /// Padding reserved inside each text label
    pub label_padding: f64,
}

impl LayoutStyle {
    /// Metrics for a terminal `total_width` cells wide.
    ///
    /// Entries take one row; headers take a title row plus a spacer row.
    /// Each column keeps one cell of margin on either side.
    #[must_use]
    pub fn for_terminal(column_count: usize, total_width: u16) -> Self {
        let column_count = column_count.max(1);
        let per_column = f64::from(total_width) / column_count as f64;
        Self {
            column_count,
            entry_height: 1.0,
            header_height: 2.0,
            column_width: (per_column.floor() - 2.0).max(1.0),
            group_padding: 1.0,
            label_padding: 1.0,
        }
    }

    /// Metrics for a desktop display `total_width` pixels wide at
    /// `font_size` points.
    #[must_use]
    pub fn for_display(column_count: usize, font_size: u32, total_width: u32) -> Self {
        let column_count = column_count.max(1);
        let per_column = (f64::from(total_width) / column_count as f64).round();
        Self {
            column_count,
            entry_height: label_height(font_size),
            header_height: label_height(font_size + HEADER_FONT_DELTA)
                + 2.0 * DISPLAY_HEADER_MARGIN,
            column_width: (per_column - 2.0 * DISPLAY_COLUMN_MARGIN).max(1.0),
            group_padding: DISPLAY_GROUP_PADDING,
            label_padding: DISPLAY_LABEL_PADDING,
        }
    }

    /// Same metrics with a different column width, as measured after render.
    #[must_use]
    pub fn with_column_width(mut self, column_width: f64) -> Self {
        self.column_width = column_width;
        self
    }

    /// Width of the column interior once group padding is removed.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.column_width - 2.0 * self.group_padding).max(0.0)
    }

    /// Width allotted to the key label.
    #[must_use]
    pub fn key_label_width(&self) -> f64 {
        (self.inner_width() * KEY_LABEL_RATIO).ceil()
    }

    /// Width allotted to the description label.
    #[must_use]
    pub fn description_label_width(&self) -> f64 {
        (self.inner_width() - self.key_label_width()).max(0.0)
    }
}

/// Estimated single-line label height in pixels for `font_size` points.
fn label_height(font_size: u32) -> f64 {
    let line_box = (f64::from(font_size) * PX_PER_PT * LINE_SPACING).round();
    (ENTRY_LINE_FACTOR * line_box).round()
}

/// Average bold sans glyph width in pixels for `font_size` points.
pub(crate) fn average_glyph_width(font_size: u32) -> f64 {
    f64::from(font_size) * PX_PER_PT * 0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_metrics() {
        let style = LayoutStyle::for_terminal(4, 200);
        assert_eq!(style.column_count, 4);
        assert!((style.column_width - 48.0).abs() < f64::EPSILON);
        assert!((style.inner_width() - 46.0).abs() < f64::EPSILON);
        // ceil(46 * 0.35) = ceil(16.1)
        assert!((style.key_label_width() - 17.0).abs() < f64::EPSILON);
        assert!((style.description_label_width() - 29.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_terminal_metrics_never_collapse() {
        let style = LayoutStyle::for_terminal(0, 3);
        assert_eq!(style.column_count, 1);
        assert!(style.column_width >= 1.0);
        assert!(style.description_label_width() >= 0.0);
    }

    #[test]
    fn test_display_metrics() {
        let style = LayoutStyle::for_display(4, 14, 1920);
        // 1920 / 4 - 2 * 8
        assert!((style.column_width - 464.0).abs() < f64::EPSILON);
        // line box round(14 * 1.333 * 1.17) = 22, entry round(0.57 * 22) = 13
        assert!((style.entry_height - 13.0).abs() < f64::EPSILON);
        // header font 20: line box 31, label 18, plus two 24 px margins
        assert!((style.header_height - 66.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_column_width() {
        let style = LayoutStyle::for_terminal(2, 100).with_column_width(20.0);
        assert!((style.column_width - 20.0).abs() < f64::EPSILON);
        assert_eq!(style.column_count, 2);
    }
}
