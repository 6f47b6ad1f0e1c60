use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use sales_core::formatting::format_currency;
use sales_data::snapshot::DashboardSnapshot;

use crate::themes::Theme;

/// A single `label : value` summary row.
///
/// Labels are padded to a common display width so the values line up in a
/// column; padding is display-width aware because the labels are Korean
/// (double-width) text.
pub struct MetricRow<'a> {
    /// Metric name (e.g. `"총 매출액"`).
    pub label: &'a str,
    /// Pre-formatted display value (e.g. `"₩244,000,000"`).
    pub value: String,
    /// Display width the label is padded to.
    pub label_width: usize,
    /// Theme providing the label and value styles.
    pub theme: &'a Theme,
}

impl<'a> MetricRow<'a> {
    /// Render the row as a [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                pad_to_width(self.label, self.label_width),
                self.theme.metric_label,
            ),
            Span::styled(" : ", self.theme.dim),
            Span::styled(self.value.clone(), self.theme.metric_value),
        ])
    }
}

/// Build the four summary rows of the dashboard: total revenue, monthly
/// average, best month, and worst month.
pub fn summary_rows<'a>(snapshot: &DashboardSnapshot, theme: &'a Theme) -> Vec<Line<'a>> {
    let rows = [
        (
            "총 매출액",
            format_currency(snapshot.total_revenue as f64),
        ),
        ("월평균 매출액", format_currency(snapshot.average_revenue)),
        (
            "최고 매출 월",
            format!(
                "{} ({})",
                snapshot.max_record.month,
                format_currency(snapshot.max_record.revenue as f64)
            ),
        ),
        (
            "최저 매출 월",
            format!(
                "{} ({})",
                snapshot.min_record.month,
                format_currency(snapshot.min_record.revenue as f64)
            ),
        ),
    ];

    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    rows.into_iter()
        .map(|(label, value)| {
            MetricRow {
                label,
                value,
                label_width,
                theme,
            }
            .to_line()
        })
        .collect()
}

/// Append spaces until `s` reaches `width` display columns.
pub(crate) fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
