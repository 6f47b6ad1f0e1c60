use serde::{Deserialize, Serialize};

/// One row of the fixed monthly sales table.
///
/// The serde renames map the Korean column headers of the source CSV
/// (`월,매출액,전년동월,증감률`) onto the typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar month label, `"01월"` through `"12월"`.
    #[serde(rename = "월")]
    pub month: String,
    /// Current-year revenue in KRW. Non-negative by construction (`u64`).
    #[serde(rename = "매출액")]
    pub revenue: u64,
    /// Revenue for the same month one year prior, in KRW.
    #[serde(rename = "전년동월")]
    pub prior_year_revenue: u64,
    /// Year-over-year growth in percent, one decimal place in the source
    /// data. Authoritative input: never recomputed from the revenue fields.
    #[serde(rename = "증감률")]
    pub growth_rate: f64,
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// The label the original UI uses for the unfiltered view.
pub const ALL_MONTHS_LABEL: &str = "전체";

/// A month filter chosen by the presentation layer on each render request.
///
/// Either every month or exactly one. Request-scoped: a selection is never
/// persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    /// Show all twelve months.
    All,
    /// Show the single month with this label.
    Month(String),
}

impl FilterSelection {
    /// Parse a raw selection string.
    ///
    /// `"all"` (case-insensitive) and `"전체"` map to [`FilterSelection::All`];
    /// anything else is treated as a month label. Whether that label actually
    /// exists is decided later by the filter step, which fails with
    /// `InvalidFilter` for unknown months.
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_core::models::FilterSelection;
    ///
    /// assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
    /// assert_eq!(FilterSelection::parse("전체"), FilterSelection::All);
    /// assert_eq!(
    ///     FilterSelection::parse("07월"),
    ///     FilterSelection::Month("07월".to_string())
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == ALL_MONTHS_LABEL {
            FilterSelection::All
        } else {
            FilterSelection::Month(trimmed.to_string())
        }
    }

    /// The display label for this selection (`"전체"` for the full view).
    pub fn label(&self) -> &str {
        match self {
            FilterSelection::All => ALL_MONTHS_LABEL,
            FilterSelection::Month(month) => month,
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
