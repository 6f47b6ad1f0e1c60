//! Summary statistics and chart feeds over a filtered view of the dataset.
//!
//! Every operation here is a pure function of `(dataset, selection)`; no
//! state is carried between calls.

use sales_core::error::{DashboardError, Result};
use sales_core::models::{FilterSelection, MonthlyRecord};

use crate::dataset::SalesDataSet;

// ── FilteredView ──────────────────────────────────────────────────────────────

/// The subsequence of the dataset matching one filter selection.
///
/// Either all twelve records or exactly one, always in calendar order.
/// Recomputed on every filter change, never stored across requests.
#[derive(Debug, Clone)]
pub struct FilteredView {
    selection: FilterSelection,
    records: Vec<MonthlyRecord>,
}

impl FilteredView {
    /// The selection this view was built from.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The matching records in calendar order.
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    /// Number of records in the view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view holds no records. Unreachable for a valid selection
    /// over a validated dataset; the aggregate functions still guard on it.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Stateless collection of filter and summary computations.
pub struct Aggregator;

impl Aggregator {
    /// Produce the view matching `selection`.
    ///
    /// [`FilterSelection::All`] returns every record unchanged in order; a
    /// month label returns the single matching record. Unknown labels fail
    /// with [`DashboardError::InvalidFilter`] and leave the dataset
    /// untouched.
    pub fn filter(dataset: &SalesDataSet, selection: &FilterSelection) -> Result<FilteredView> {
        let records = match selection {
            FilterSelection::All => dataset.records().to_vec(),
            FilterSelection::Month(label) => {
                let record = dataset
                    .records()
                    .iter()
                    .find(|r| r.month == *label)
                    .ok_or_else(|| DashboardError::InvalidFilter(label.clone()))?;
                vec![record.clone()]
            }
        };

        Ok(FilteredView {
            selection: selection.clone(),
            records,
        })
    }

    /// Sum of `revenue` across the view. For a single-record view this is
    /// that record's revenue.
    pub fn total_revenue(view: &FilteredView) -> u64 {
        view.records.iter().map(|r| r.revenue).sum()
    }

    /// Arithmetic mean of `revenue` across the view.
    ///
    /// Fails with [`DashboardError::EmptyView`] on an empty view rather than
    /// dividing by zero.
    pub fn average_revenue(view: &FilteredView) -> Result<f64> {
        if view.is_empty() {
            return Err(DashboardError::EmptyView);
        }
        Ok(Self::total_revenue(view) as f64 / view.len() as f64)
    }

    /// The record with the greatest `revenue`; the first such record in
    /// calendar order on ties.
    pub fn max_revenue_record(view: &FilteredView) -> Result<&MonthlyRecord> {
        let mut best = view.records.first().ok_or(DashboardError::EmptyView)?;
        for record in &view.records[1..] {
            if record.revenue > best.revenue {
                best = record;
            }
        }
        Ok(best)
    }

    /// The record with the least `revenue`; the first such record in
    /// calendar order on ties.
    pub fn min_revenue_record(view: &FilteredView) -> Result<&MonthlyRecord> {
        let mut best = view.records.first().ok_or(DashboardError::EmptyView)?;
        for record in &view.records[1..] {
            if record.revenue < best.revenue {
                best = record;
            }
        }
        Ok(best)
    }

    /// Ordered `(month, revenue)` pairs feeding the trend chart.
    pub fn revenue_series(view: &FilteredView) -> Vec<(String, u64)> {
        view.records
            .iter()
            .map(|r| (r.month.clone(), r.revenue))
            .collect()
    }

    /// Ordered `(month, growth-rate)` pairs feeding the comparison chart.
    pub fn growth_series(view: &FilteredView) -> Vec<(String, f64)> {
        view.records
            .iter()
            .map(|r| (r.month.clone(), r.growth_rate))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
