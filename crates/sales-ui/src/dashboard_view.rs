//! The main dashboard view: summary metrics plus the two charts.
//!
//! Everything is drawn as a single [`Paragraph`] whose lines mirror the
//! sections of the original dashboard page: header, KPI summary, revenue
//! trend, growth comparison, key hints.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use sales_data::snapshot::DashboardSnapshot;

use crate::components::charts::{GrowthBarChart, RevenueTrendChart};
use crate::components::header::Header;
use crate::components::metrics::summary_rows;
use crate::themes::Theme;

/// Render the dashboard for one computed snapshot into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    // Header.
    lines.extend(Header::new(snapshot.selection.label(), theme).to_lines());

    // KPI summary.
    lines.push(Line::from(Span::styled("📈 주요 지표 요약", theme.bold)));
    lines.push(Line::from(""));
    lines.extend(summary_rows(snapshot, theme));
    lines.push(Line::from(""));

    // Revenue trend.
    lines.push(Line::from(Span::styled("📊 월별 매출액 추이", theme.bold)));
    lines.push(Line::from(""));
    lines.extend(RevenueTrendChart::new(&snapshot.revenue_series, theme).to_lines());
    lines.push(Line::from(""));

    // Year-over-year growth.
    lines.push(Line::from(Span::styled(
        "📊 전년 동월 대비 증감률",
        theme.bold,
    )));
    lines.push(Line::from(""));
    lines.extend(GrowthBarChart::new(&snapshot.growth_series, theme).to_lines());
    lines.push(Line::from(""));

    // Key hints.
    lines.push(Line::from(Span::styled(
        "←/→ month · a all · t table · q quit",
        theme.dim,
    )));

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

// ── Tests ──────────────────────────────────────────────────────────────────────
