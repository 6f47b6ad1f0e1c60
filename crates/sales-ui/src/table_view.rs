//! Tabular view of the filtered sales records.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per record
//! plus a highlighted totals row at the bottom.

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use sales_core::formatting::{change_percent, format_currency, format_percent};
use sales_core::models::MonthlyRecord;

use crate::themes::Theme;

/// Render the sales table into `area`.
///
/// The table has one data row per record, followed by a totals row that sums
/// the revenue columns and shows the aggregate change of the revenue totals
/// (a display-only derivation; per-record growth rates come straight from
/// the source data).
pub fn render_table_view(frame: &mut Frame, area: Rect, records: &[MonthlyRecord], theme: &Theme) {
    let header_cells = ["월", "매출액", "전년동월", "증감률"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(record.month.clone()),
                Cell::from(format_currency(record.revenue as f64)),
                Cell::from(format_currency(record.prior_year_revenue as f64)),
                Cell::from(format_percent(record.growth_rate))
                    .style(theme.growth_style(record.growth_rate)),
            ])
            .style(style)
        })
        .collect();

    // Totals row – styled separately to stand out.
    let total_revenue: u64 = records.iter().map(|r| r.revenue).sum();
    let total_prior: u64 = records.iter().map(|r| r.prior_year_revenue).sum();
    let total_change = change_percent(total_revenue as f64, total_prior as f64);

    let total_row = Row::new(vec![
        Cell::from("합계"),
        Cell::from(format_currency(total_revenue as f64)),
        Cell::from(format_currency(total_prior as f64)),
        Cell::from(format_percent(total_change)),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(10),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 2024년 월별 매출 "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

// ── Tests ──────────────────────────────────────────────────────────────────────
