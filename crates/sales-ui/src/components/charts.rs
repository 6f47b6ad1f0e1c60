use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use sales_core::formatting::{format_currency, format_percent};

use crate::components::metrics::pad_to_width;
use crate::themes::Theme;

// ── RevenueTrendChart ────────────────────────────────────────────────────────

/// Horizontal bar chart of monthly revenue, one line per month.
///
/// Bars are scaled against the largest revenue in the series; every nonzero
/// revenue gets at least one cell so small months stay visible. The
/// formatted amount sits between the month label and the bar:
///
/// ```text
/// 01월   ₩12,000,000  █████████████████
/// ```
pub struct RevenueTrendChart<'a> {
    /// Ordered `(month, revenue)` pairs in calendar order.
    pub series: &'a [(String, u64)],
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Width in terminal columns of the longest bar.
    pub width: u16,
}

impl<'a> RevenueTrendChart<'a> {
    /// Construct a chart with the default 40-column bar width.
    pub fn new(series: &'a [(String, u64)], theme: &'a Theme) -> Self {
        Self {
            series,
            theme,
            width: 40,
        }
    }

    /// Render one [`Line`] per series entry.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let max_revenue = self.series.iter().map(|(_, r)| *r).max().unwrap_or(0);
        let label_width = self.series.iter().map(|(m, _)| m.width()).max().unwrap_or(0);

        let values: Vec<String> = self
            .series
            .iter()
            .map(|(_, r)| format_currency(*r as f64))
            .collect();
        let value_width = values.iter().map(|v| v.width()).max().unwrap_or(0);

        self.series
            .iter()
            .zip(values)
            .map(|((month, revenue), value)| {
                let bar_len = scaled_len(*revenue as f64, max_revenue as f64, self.width);
                let value_pad = " ".repeat(value_width.saturating_sub(value.width()));

                Line::from(vec![
                    Span::styled(pad_to_width(month, label_width), self.theme.label),
                    Span::raw("  "),
                    Span::styled(format!("{}{}", value_pad, value), self.theme.value),
                    Span::raw("  "),
                    Span::styled("█".repeat(bar_len), self.theme.chart_bar),
                ])
            })
            .collect()
    }
}

// ── GrowthBarChart ───────────────────────────────────────────────────────────

/// Signed horizontal bar chart of year-over-year growth around a zero axis.
///
/// Negative rates extend left of the axis in the negative colour, positive
/// rates extend right in the positive colour, both scaled against the
/// largest absolute rate in the series:
///
/// ```text
/// 02월             │████████████████   20.5%
/// 03월  ███████████│                  -14.1%
/// ```
pub struct GrowthBarChart<'a> {
    /// Ordered `(month, growth-rate)` pairs in calendar order.
    pub series: &'a [(String, f64)],
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Width in terminal columns of each side of the axis.
    pub half_width: u16,
}

impl<'a> GrowthBarChart<'a> {
    /// Construct a chart with the default 16-column half width.
    pub fn new(series: &'a [(String, f64)], theme: &'a Theme) -> Self {
        Self {
            series,
            theme,
            half_width: 16,
        }
    }

    /// Render one [`Line`] per series entry.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let scale = self
            .series
            .iter()
            .map(|(_, g)| g.abs())
            .fold(0.0_f64, f64::max);
        let label_width = self.series.iter().map(|(m, _)| m.width()).max().unwrap_or(0);
        let half = self.half_width as usize;

        self.series
            .iter()
            .map(|(month, rate)| {
                let len = scaled_len(rate.abs(), scale, self.half_width);
                let (neg_len, pos_len) = if *rate < 0.0 { (len, 0) } else { (0, len) };

                Line::from(vec![
                    Span::styled(pad_to_width(month, label_width), self.theme.label),
                    Span::raw("  "),
                    Span::raw(" ".repeat(half - neg_len)),
                    Span::styled("█".repeat(neg_len), self.theme.growth_negative),
                    Span::styled("│", self.theme.chart_axis),
                    Span::styled("█".repeat(pos_len), self.theme.growth_positive),
                    Span::raw(" ".repeat(half - pos_len)),
                    Span::raw("  "),
                    Span::styled(
                        format!("{:>6}", format_percent(*rate)),
                        self.theme.growth_style(*rate),
                    ),
                ])
            })
            .collect()
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

/// Bar length for `value` against `scale`, capped at `width` columns.
///
/// A nonzero value always gets at least one cell; a zero scale yields no bar.
fn scaled_len(value: f64, scale: f64, width: u16) -> usize {
    if scale <= 0.0 || value <= 0.0 {
        return 0;
    }
    let len = ((value / scale) * width as f64).round() as usize;
    len.clamp(1, width as usize)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    fn revenue_series() -> Vec<(String, u64)> {
        vec![
            ("01월".to_string(), 12_000_000),
            ("03월".to_string(), 11_000_000),
            ("12월".to_string(), 28_000_000),
        ]
    }

    fn growth_series() -> Vec<(String, f64)> {
        vec![
            ("02월".to_string(), 20.5),
            ("03월".to_string(), -14.1),
            ("09월".to_string(), 8.3),
        ]
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // ── scaled_len ───────────────────────────────────────────────────────────

    #[test]
    fn test_scaled_len_full_scale() {
        assert_eq!(scaled_len(28.0, 28.0, 40), 40);
    }

    #[test]
    fn test_scaled_len_proportional() {
        // 12 / 28 * 40 = 17.14… → 17
        assert_eq!(scaled_len(12.0, 28.0, 40), 17);
    }

    #[test]
    fn test_scaled_len_small_value_gets_one_cell() {
        assert_eq!(scaled_len(0.01, 100.0, 40), 1);
    }

    #[test]
    fn test_scaled_len_zero_value_and_zero_scale() {
        assert_eq!(scaled_len(0.0, 100.0, 40), 0);
        assert_eq!(scaled_len(10.0, 0.0, 40), 0);
    }

    // ── RevenueTrendChart ────────────────────────────────────────────────────

    #[test]
    fn test_trend_chart_one_line_per_entry() {
        let theme = Theme::dark();
        let series = revenue_series();
        let chart = RevenueTrendChart::new(&series, &theme);
        assert_eq!(chart.to_lines().len(), 3);
    }

    #[test]
    fn test_trend_chart_span_structure() {
        let theme = Theme::dark();
        let series = revenue_series();
        let chart = RevenueTrendChart::new(&series, &theme);
        let lines = chart.to_lines();

        // label, gap, value, gap, bar.
        assert_eq!(lines[0].spans.len(), 5);
        assert!(line_text(&lines[0]).contains("₩12,000,000"));
    }

    #[test]
    fn test_trend_chart_max_month_fills_width() {
        let theme = Theme::dark();
        let series = revenue_series();
        let chart = RevenueTrendChart::new(&series, &theme);
        let lines = chart.to_lines();

        // 12월 holds the maximum → its bar spans the full width.
        let bar = &lines[2].spans[4];
        assert_eq!(bar.content.chars().count(), 40);
        assert!(bar.content.chars().all(|c| c == '█'));
    }

    #[test]
    fn test_trend_chart_bars_scale_proportionally() {
        let theme = Theme::dark();
        let series = revenue_series();
        let chart = RevenueTrendChart::new(&series, &theme);
        let lines = chart.to_lines();

        // 12,000,000 / 28,000,000 * 40 = 17.14… → 17 cells.
        assert_eq!(lines[0].spans[4].content.chars().count(), 17);
        // 11,000,000 / 28,000,000 * 40 = 15.7… → 16 cells.
        assert_eq!(lines[1].spans[4].content.chars().count(), 16);
    }

    #[test]
    fn test_trend_chart_values_right_aligned() {
        let theme = Theme::dark();
        let series = vec![
            ("01월".to_string(), 5_000_000),
            ("02월".to_string(), 28_000_000),
        ];
        let chart = RevenueTrendChart::new(&series, &theme);
        let lines = chart.to_lines();

        let w0 = lines[0].spans[2].content.width();
        let w1 = lines[1].spans[2].content.width();
        assert_eq!(w0, w1, "value column must share one width");
        assert!(lines[0].spans[2].content.starts_with(' '));
    }

    #[test]
    fn test_trend_chart_zero_revenue_has_no_bar() {
        let theme = Theme::dark();
        let series = vec![
            ("01월".to_string(), 0),
            ("02월".to_string(), 1_000_000),
        ];
        let chart = RevenueTrendChart::new(&series, &theme);
        let lines = chart.to_lines();
        assert!(lines[0].spans[4].content.is_empty());
    }

    // ── GrowthBarChart ───────────────────────────────────────────────────────

    #[test]
    fn test_growth_chart_one_line_per_entry() {
        let theme = Theme::dark();
        let series = growth_series();
        let chart = GrowthBarChart::new(&series, &theme);
        assert_eq!(chart.to_lines().len(), 3);
    }

    #[test]
    fn test_growth_chart_span_structure() {
        let theme = Theme::dark();
        let series = growth_series();
        let chart = GrowthBarChart::new(&series, &theme);
        let lines = chart.to_lines();

        // label, gap, left pad, negative bar, axis, positive bar, right pad,
        // gap, value.
        assert_eq!(lines[0].spans.len(), 9);
        assert_eq!(lines[0].spans[4].content.as_ref(), "│");
    }

    #[test]
    fn test_growth_chart_positive_rate_extends_right() {
        let theme = Theme::dark();
        let series = growth_series();
        let chart = GrowthBarChart::new(&series, &theme);
        let lines = chart.to_lines();

        // 02월 holds the maximum absolute rate → full positive side.
        let line = &lines[0];
        assert!(line.spans[3].content.is_empty(), "no negative bar");
        assert_eq!(line.spans[5].content.chars().count(), 16);
        assert!(line_text(line).contains("20.5%"));
    }

    #[test]
    fn test_growth_chart_negative_rate_extends_left() {
        let theme = Theme::dark();
        let series = growth_series();
        let chart = GrowthBarChart::new(&series, &theme);
        let lines = chart.to_lines();

        // 14.1 / 20.5 * 16 = 11.0… → 11 cells on the negative side.
        let line = &lines[1];
        assert_eq!(line.spans[3].content.chars().count(), 11);
        assert!(line.spans[5].content.is_empty(), "no positive bar");
        assert!(line_text(line).contains("-14.1%"));
    }

    #[test]
    fn test_growth_chart_axis_column_aligned() {
        let theme = Theme::dark();
        let series = growth_series();
        let chart = GrowthBarChart::new(&series, &theme);
        let lines = chart.to_lines();

        // Pad + bar on each side must always total the half width, keeping
        // the axis in one column.
        for line in &lines {
            let left: usize = line.spans[2].content.width() + line.spans[3].content.width();
            let right: usize = line.spans[5].content.width() + line.spans[6].content.width();
            assert_eq!(left, 16, "left side must fill the half width");
            assert_eq!(right, 16, "right side must fill the half width");
        }
    }

    #[test]
    fn test_growth_chart_all_zero_rates_have_no_bars() {
        let theme = Theme::dark();
        let series = vec![("01월".to_string(), 0.0), ("02월".to_string(), 0.0)];
        let chart = GrowthBarChart::new(&series, &theme);
        for line in chart.to_lines() {
            assert!(line.spans[3].content.is_empty());
            assert!(line.spans[5].content.is_empty());
        }
    }
}
