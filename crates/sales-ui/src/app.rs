//! Main application state and TUI event loop for the sales dashboard.
//!
//! [`App`] owns the theme, view mode, the immutable dataset, and the
//! snapshot computed for the current filter selection. Every filter change
//! re-runs the explicit `filter + aggregate` pipeline; nothing is cached
//! between selections.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use sales_core::error::Result;
use sales_core::models::{FilterSelection, MonthlyRecord};
use sales_data::aggregator::Aggregator;
use sales_data::dataset::SalesDataSet;
use sales_data::snapshot::DashboardSnapshot;

use crate::dashboard_view;
use crate::table_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Summary metrics plus the two charts.
    Dashboard,
    /// One table row per record.
    Table,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the sales dashboard TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// The immutable twelve-record dataset.
    dataset: SalesDataSet,
    /// Month labels in calendar order, cached for filter cycling.
    labels: Vec<String>,
    /// Current filter selection.
    selection: FilterSelection,
    /// Snapshot computed for `selection`.
    snapshot: DashboardSnapshot,
    /// Records of the current filtered view, for the table.
    records: Vec<MonthlyRecord>,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct the application, computing the snapshot for the initial
    /// selection.
    ///
    /// Fails with `InvalidFilter` when the initial selection names an
    /// unknown month; once running, rejected selections keep the prior
    /// valid one instead.
    pub fn new(
        theme_name: &str,
        view_mode: ViewMode,
        dataset: SalesDataSet,
        selection: FilterSelection,
    ) -> Result<Self> {
        let snapshot = DashboardSnapshot::compute(&dataset, &selection)?;
        let records = Aggregator::filter(&dataset, &selection)?.records().to_vec();
        let labels = dataset.month_labels();

        Ok(Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            dataset,
            labels,
            selection,
            snapshot,
            records,
            should_quit: false,
        })
    }

    /// The current filter selection.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The snapshot computed for the current selection.
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the TUI event loop until `q` or `Ctrl+C`.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        KeyCode::Left => self.select_prev(),
                        KeyCode::Right => self.select_next(),
                        KeyCode::Char('a') | KeyCode::Char('A') => self.select_all(),
                        KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_view(),
                        _ => {}
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Selection handling ────────────────────────────────────────────────────

    /// Move the filter forward through `전체, 01월, …, 12월`, wrapping.
    pub fn select_next(&mut self) {
        let count = self.labels.len() + 1;
        let pos = (self.position() + 1) % count;
        self.apply_selection(self.selection_at(pos));
    }

    /// Move the filter backward through `전체, 01월, …, 12월`, wrapping.
    pub fn select_prev(&mut self) {
        let count = self.labels.len() + 1;
        let pos = (self.position() + count - 1) % count;
        self.apply_selection(self.selection_at(pos));
    }

    /// Reset the filter to the full view.
    pub fn select_all(&mut self) {
        self.apply_selection(FilterSelection::All);
    }

    /// Switch between the dashboard and the table.
    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Dashboard => ViewMode::Table,
            ViewMode::Table => ViewMode::Dashboard,
        };
    }

    /// Recompute the snapshot for `selection`, keeping the prior valid
    /// selection when the new one is rejected.
    fn apply_selection(&mut self, selection: FilterSelection) {
        match DashboardSnapshot::compute(&self.dataset, &selection) {
            Ok(snapshot) => {
                // The filter cannot fail if the snapshot computed.
                if let Ok(view) = Aggregator::filter(&self.dataset, &selection) {
                    self.records = view.records().to_vec();
                }
                self.selection = selection;
                self.snapshot = snapshot;
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected filter selection; keeping previous");
            }
        }
    }

    /// Position of the current selection in the cycle: `0` for 전체,
    /// `1..=12` for the months.
    fn position(&self) -> usize {
        match &self.selection {
            FilterSelection::All => 0,
            FilterSelection::Month(label) => self
                .labels
                .iter()
                .position(|l| l == label)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    /// Selection at a cycle position.
    fn selection_at(&self, pos: usize) -> FilterSelection {
        if pos == 0 {
            FilterSelection::All
        } else {
            FilterSelection::Month(self.labels[pos - 1].clone())
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.view_mode {
            ViewMode::Dashboard => {
                dashboard_view::render_dashboard(frame, area, &self.snapshot, &self.theme);
            }
            ViewMode::Table => {
                table_view::render_table_view(frame, area, &self.records, &self.theme);
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app(selection: FilterSelection) -> App {
        let dataset = SalesDataSet::load().unwrap();
        App::new("dark", ViewMode::Dashboard, dataset, selection).expect("app must construct")
    }

    // ── construction ─────────────────────────────────────────────────────────

    #[test]
    fn test_new_with_all_selection() {
        let app = make_app(FilterSelection::All);
        assert_eq!(app.selection(), &FilterSelection::All);
        assert_eq!(app.snapshot().total_revenue, 244_000_000);
        assert_eq!(app.records.len(), 12);
    }

    #[test]
    fn test_new_with_month_selection() {
        let app = make_app(FilterSelection::Month("07월".to_string()));
        assert_eq!(app.snapshot().total_revenue, 22_500_000);
        assert_eq!(app.records.len(), 1);
    }

    #[test]
    fn test_new_with_invalid_selection_fails() {
        let dataset = SalesDataSet::load().unwrap();
        let result = App::new(
            "dark",
            ViewMode::Dashboard,
            dataset,
            FilterSelection::Month("13월".to_string()),
        );
        assert!(result.is_err());
    }

    // ── selection cycling ────────────────────────────────────────────────────

    #[test]
    fn test_select_next_from_all_is_january() {
        let mut app = make_app(FilterSelection::All);
        app.select_next();
        assert_eq!(app.selection(), &FilterSelection::Month("01월".to_string()));
        assert_eq!(app.snapshot().total_revenue, 12_000_000);
    }

    #[test]
    fn test_select_prev_from_all_wraps_to_december() {
        let mut app = make_app(FilterSelection::All);
        app.select_prev();
        assert_eq!(app.selection(), &FilterSelection::Month("12월".to_string()));
        assert_eq!(app.snapshot().total_revenue, 28_000_000);
    }

    #[test]
    fn test_select_next_from_december_wraps_to_all() {
        let mut app = make_app(FilterSelection::Month("12월".to_string()));
        app.select_next();
        assert_eq!(app.selection(), &FilterSelection::All);
        assert_eq!(app.records.len(), 12);
    }

    #[test]
    fn test_select_all_resets_filter() {
        let mut app = make_app(FilterSelection::Month("05월".to_string()));
        app.select_all();
        assert_eq!(app.selection(), &FilterSelection::All);
        assert_eq!(app.snapshot().total_revenue, 244_000_000);
    }

    #[test]
    fn test_full_cycle_returns_to_all() {
        let mut app = make_app(FilterSelection::All);
        for _ in 0..13 {
            app.select_next();
        }
        assert_eq!(app.selection(), &FilterSelection::All);
    }

    // ── rejected selections ──────────────────────────────────────────────────

    #[test]
    fn test_rejected_selection_keeps_previous() {
        let mut app = make_app(FilterSelection::Month("07월".to_string()));
        app.apply_selection(FilterSelection::Month("13월".to_string()));

        assert_eq!(app.selection(), &FilterSelection::Month("07월".to_string()));
        assert_eq!(app.snapshot().total_revenue, 22_500_000);
    }

    // ── view toggling ────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_view_round_trip() {
        let mut app = make_app(FilterSelection::All);
        assert_eq!(app.view_mode, ViewMode::Dashboard);
        app.toggle_view();
        assert_eq!(app.view_mode, ViewMode::Table);
        app.toggle_view();
        assert_eq!(app.view_mode, ViewMode::Dashboard);
    }
}
