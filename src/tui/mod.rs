//! Full-screen overlay showing the balanced shortcut columns.
//!
//! The loop polls input every 100 ms. On each tick it also checks the
//! modification times of the shortcuts file and the config file; any change
//! discards the current layout cycle and builds a new one. The first frame of
//! every cycle is measured and corrected once.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod overlay;
pub mod search;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

use crate::config::{Config, COLUMNS_RANGE};
use crate::layout::{CellMeasure, LayoutCycle, LayoutStyle};
use crate::models::App;
use crate::parser::read_shortcuts_json;

pub use search::SearchQuery;
pub use theme::Theme;

/// Rows above the columns (search box).
const SEARCH_ROWS: u16 = 3;
/// Rows below the columns (status line).
const STATUS_ROWS: u16 = 1;

/// Command-line settings that hold for the whole session.
///
/// They are laid over every configuration loaded from disk, so an external
/// `config set` never undoes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOverrides {
    /// Shortcuts file shown instead of the configured one
    pub file: Option<PathBuf>,
    /// Column count used instead of the configured one
    pub columns: Option<usize>,
}

impl SessionOverrides {
    /// Applies the column override to `config`.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(columns) = self.columns {
            config.set_columns(columns)?;
        }
        Ok(())
    }

    /// Shortcuts file for `config`, honoring the file override.
    pub fn source(&self, config: &Config) -> Result<PathBuf> {
        match &self.file {
            Some(file) => Ok(file.clone()),
            None => config.shortcuts_file(),
        }
    }
}

/// What the overlay currently shows.
#[derive(Debug)]
enum Content {
    /// Source loaded; the cycle is built on the next frame
    Loaded {
        apps: Vec<App>,
        cycle: Option<LayoutCycle>,
    },
    /// Source could not be loaded
    Failed(String),
}

/// Overlay state, rebuilt piecewise as the source and settings change.
#[derive(Debug)]
pub struct OverlayState {
    config: Config,
    overrides: SessionOverrides,
    source: PathBuf,
    source_stamp: Option<SystemTime>,
    config_stamp: Option<SystemTime>,
    content: Content,
    search: String,
    query: SearchQuery,
    theme: Theme,
    status: Option<String>,
    should_quit: bool,
}

impl OverlayState {
    /// Loads `source` and prepares the first layout cycle.
    ///
    /// `config` must already have `overrides` applied.
    pub fn new(config: Config, source: PathBuf, overrides: SessionOverrides) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let mut state = Self {
            config,
            overrides,
            source,
            source_stamp: None,
            config_stamp: Config::config_file_path().ok().and_then(|p| modified(&p)),
            content: Content::Failed(String::new()),
            search: String::new(),
            query: SearchQuery::default(),
            theme,
            status: None,
            should_quit: false,
        };
        state.reload_source();
        state
    }

    /// Current layout cycle, if the source loaded and a frame was drawn.
    pub fn cycle(&self) -> Option<&LayoutCycle> {
        match &self.content {
            Content::Loaded { cycle, .. } => cycle.as_ref(),
            Content::Failed(_) => None,
        }
    }

    /// Load error shown instead of the columns.
    pub fn error(&self) -> Option<&str> {
        match &self.content {
            Content::Failed(message) => Some(message),
            Content::Loaded { .. } => None,
        }
    }

    /// Column count in effect.
    pub const fn column_count(&self) -> usize {
        self.config.layout.columns
    }

    /// Re-reads the shortcuts file and drops the current cycle.
    fn reload_source(&mut self) {
        self.source_stamp = modified(&self.source);
        self.content = match read_shortcuts_json(&self.source) {
            Ok(apps) => {
                info!(apps = apps.len(), "loaded {}", self.source.display());
                Content::Loaded { apps, cycle: None }
            }
            Err(e) => {
                warn!("failed to load {}: {e}", self.source.display());
                Content::Failed(e.to_string())
            }
        };
    }

    /// Drops the current cycle so the next frame builds a fresh one.
    fn relayout(&mut self) {
        if let Content::Loaded { cycle, .. } = &mut self.content {
            *cycle = None;
        }
    }

    /// Builds the cycle for a columns area `width` cells wide, if none exists.
    fn ensure_cycle(&mut self, width: u16) {
        let columns = self.config.layout.columns;
        if let Content::Loaded { apps, cycle } = &mut self.content {
            if cycle.is_none() {
                let style = LayoutStyle::for_terminal(columns, width);
                debug!(columns, width, "building layout cycle");
                *cycle = Some(LayoutCycle::new(apps, style));
            }
        }
    }

    /// Feeds the rendered column width back to a cycle awaiting correction.
    fn apply_measured_width(&mut self, column_width: f64) {
        if let Content::Loaded {
            cycle: Some(cycle), ..
        } = &mut self.content
        {
            if cycle.needs_measurement() {
                cycle.set_column_width(column_width);
                cycle.measure_and_correct(&CellMeasure);
            }
        }
    }

    /// Checks the source and config files for changes since the last tick.
    pub fn poll_files(&mut self) {
        if modified(&self.source) != self.source_stamp {
            info!("shortcuts file changed, reloading");
            self.reload_source();
        }

        let Ok(config_path) = Config::config_file_path() else {
            return;
        };
        let stamp = modified(&config_path);
        if stamp != self.config_stamp {
            self.config_stamp = stamp;
            match Config::load() {
                Ok(config) => self.apply_config(config),
                Err(e) => warn!("ignoring invalid configuration: {e:#}"),
            }
        }
    }

    /// Replaces the settings, reloading or relaying out as needed.
    ///
    /// Session overrides are applied on top of `config` first.
    fn apply_config(&mut self, mut config: Config) {
        if let Err(e) = self.overrides.apply(&mut config) {
            warn!("ignoring configuration that rejects session columns: {e:#}");
            return;
        }
        let source = match self.overrides.source(&config) {
            Ok(source) => source,
            Err(e) => {
                warn!("keeping {}: {e:#}", self.source.display());
                self.source.clone()
            }
        };
        let source_changed = source != self.source;
        let layout_changed = config.layout != self.config.layout;

        self.theme = Theme::from_mode(config.ui.theme_mode);
        self.config = config;

        if source_changed {
            self.source = source;
            self.reload_source();
        } else if layout_changed {
            info!(columns = self.config.layout.columns, "settings changed, relaying out");
            self.relayout();
        }
    }

    /// Steps the column count by `delta`, persisting the new value.
    fn change_columns(&mut self, delta: isize) {
        let (min_columns, max_columns) = COLUMNS_RANGE;
        let columns = self
            .config
            .layout
            .columns
            .saturating_add_signed(delta)
            .clamp(min_columns, max_columns);
        if columns == self.config.layout.columns {
            return;
        }

        if let Err(e) = self.config.set_columns(columns) {
            self.status = Some(format!("{e}"));
            return;
        }
        if self.overrides.columns.is_some() {
            self.overrides.columns = Some(columns);
        }
        match self.config.save() {
            Ok(()) => {
                self.config_stamp = Config::config_file_path().ok().and_then(|p| modified(&p));
                self.status = Some(format!("{columns} columns"));
            }
            Err(e) => {
                warn!("failed to save configuration: {e:#}");
                self.status = Some(format!("{columns} columns (not saved: {e})"));
            }
        }
        self.relayout();
    }

    fn set_search(&mut self, text: String) {
        self.query = SearchQuery::parse(&text);
        self.search = text;
    }

    /// Handles one key press. Returns true when the overlay should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_search(String::new());
            }
            KeyCode::Esc => {
                if self.search.is_empty() {
                    self.should_quit = true;
                } else {
                    self.set_search(String::new());
                }
            }
            KeyCode::Tab => self.change_columns(1),
            KeyCode::BackTab => self.change_columns(-1),
            KeyCode::Backspace => {
                let mut text = self.search.clone();
                text.pop();
                self.set_search(text);
            }
            KeyCode::Char(c) => {
                let mut text = self.search.clone();
                text.push(c);
                self.set_search(text);
            }
            _ => {}
        }

        self.should_quit
    }
}

/// Modification time of `path`, or `None` if it does not exist.
fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut OverlayState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.ensure_cycle(size.width);

        let mut measured = None;
        terminal.draw(|f| measured = render(f, state))?;
        if let Some(width) = measured {
            state.apply_measured_width(width);
        }

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if state.handle_key(key) {
                    break;
                }
            }
        }

        state.poll_files();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the overlay. Returns the narrowest column width drawn.
fn render(f: &mut Frame, state: &OverlayState) -> Option<f64> {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_ROWS),
            Constraint::Min(1),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(f.area());

    render_search(f, chunks[0], state);
    render_status(f, chunks[2], state);

    match &state.content {
        Content::Failed(message) => {
            render_error(f, chunks[1], message, &state.source, &state.theme);
            None
        }
        Content::Loaded { cycle: Some(cycle), .. } => {
            overlay::render_columns(f, chunks[1], cycle, &state.query, &state.theme)
        }
        Content::Loaded { cycle: None, .. } => None,
    }
}

fn render_search(f: &mut Frame, area: Rect, state: &OverlayState) {
    let theme = &state.theme;
    let area = centered_width(area, 44);
    let text = if state.search.is_empty() {
        Span::styled("Search for...", Style::default().fg(theme.text_muted))
    } else {
        Span::styled(
            state.search.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background)),
    );
    f.render_widget(search, area);
}

fn render_status(f: &mut Frame, area: Rect, state: &OverlayState) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(
        format!(
            " {} columns | Tab/Shift+Tab: columns | Esc: clear/close | Ctrl+C: quit",
            state.config.layout.columns
        ),
        Style::default().fg(theme.text_muted),
    )];
    if let Some(status) = &state.status {
        spans.push(Span::styled(
            format!(" | {status}"),
            Style::default().fg(theme.accent),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str, source: &Path, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            format!("Error: {message}."),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Please ensure that {} matches the structure described in the README.",
                source.display()
            ),
            Style::default().fg(theme.text),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let area = Rect {
        y: area.y + area.height / 3,
        height: area.height - area.height / 3,
        ..area
    };
    f.render_widget(paragraph, area);
}

/// Horizontally centered slice of `area`, at most `width` wide.
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
