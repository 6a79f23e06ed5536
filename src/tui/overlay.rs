//! Rendering of the balanced columns.
//!
//! Each group is drawn as a band in its app's color: a title row (preceded by
//! a spacer row for fresh groups) and one or two rows per entry, description
//! on the left and key on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use super::search::SearchQuery;
use super::theme::Theme;
use crate::layout::LayoutCycle;
use crate::models::{Column, Entry, Group};

/// Horizontal margin around each column, per side.
pub const COLUMN_MARGIN: u16 = 1;

/// Splits `area` into `count` equal column slots.
pub fn column_slots(area: Rect, count: usize) -> Vec<Rect> {
    let count = u32::try_from(count.max(1)).unwrap_or(1);
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Narrowest column width once margins are removed.
pub fn narrowest_column_width(slots: &[Rect]) -> Option<f64> {
    slots
        .iter()
        .map(|slot| slot.width.saturating_sub(2 * COLUMN_MARGIN))
        .min()
        .map(f64::from)
}

/// Renders all columns of `cycle` into `area`.
///
/// Returns the narrowest rendered column width, for overflow measurement.
pub fn render_columns(
    f: &mut Frame,
    area: Rect,
    cycle: &LayoutCycle,
    query: &SearchQuery,
    theme: &Theme,
) -> Option<f64> {
    let slots = column_slots(area, cycle.columns().len());
    for (slot, column) in slots.iter().zip(cycle.columns()) {
        let inner = Rect {
            x: slot.x + COLUMN_MARGIN,
            width: slot.width.saturating_sub(2 * COLUMN_MARGIN),
            ..*slot
        };
        render_column(f, inner, column, cycle, query, theme);
    }
    narrowest_column_width(&slots)
}

fn render_column(
    f: &mut Frame,
    area: Rect,
    column: &Column,
    cycle: &LayoutCycle,
    query: &SearchQuery,
    theme: &Theme,
) {
    let mut y = area.y;
    let bottom = area.bottom();

    for group in &column.groups {
        let Some(entries) = query.visible_entries(group) else {
            continue;
        };
        if !group.continued {
            y = y.saturating_add(1);
        }
        if y >= bottom {
            return;
        }
        render_title(f, Rect::new(area.x, y, area.width, 1), group, theme);
        y += 1;

        let band = cycle
            .color_for(group.app_index)
            .map(|c| c.to_ratatui_color())
            .unwrap_or(theme.background);

        for entry in entries {
            if y >= bottom {
                return;
            }
            let rows = entry_rows(entry).min(bottom - y);
            render_entry(f, Rect::new(area.x, y, area.width, rows), entry, band, theme);
            y += rows;
        }
    }
}

/// Rows taken by an entry: its layout height in cells.
fn entry_rows(entry: &Entry) -> u16 {
    if entry.height >= 2.0 {
        2
    } else {
        1
    }
}

fn render_title(f: &mut Frame, area: Rect, group: &Group, theme: &Theme) {
    let mut spans = vec![Span::styled(
        group.category_name.clone(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    if !group.continued {
        spans.push(Span::styled(
            format!("  {}", group.app_name),
            Style::default().fg(theme.text_muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_entry(f: &mut Frame, area: Rect, entry: &Entry, band: ratatui::style::Color, theme: &Theme) {
    f.render_widget(Block::default().style(Style::default().bg(band)), area);

    let inner = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let key_width = label_width(inner.width);
    let [description_area, key_area] = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(key_width)])
        .areas(inner);

    let text_style = Style::default().bg(band).add_modifier(Modifier::BOLD);
    f.render_widget(
        Paragraph::new(entry.description.as_str())
            .style(text_style.fg(theme.band_text))
            .wrap(Wrap { trim: true }),
        description_area,
    );
    f.render_widget(
        Paragraph::new(format!(" {}", entry.key))
            .style(text_style.fg(theme.band_key))
            .wrap(Wrap { trim: true }),
        key_area,
    );
}

/// Key label width for an inner width, rounded up.
fn label_width(inner_width: u16) -> u16 {
    let width = (f64::from(inner_width) * crate::layout::KEY_LABEL_RATIO).ceil();
    // Bounded by inner_width, which fits in u16
    width.min(f64::from(inner_width)) as u16
}
