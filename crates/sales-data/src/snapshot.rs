//! The data contract between aggregation and presentation.
//!
//! [`DashboardSnapshot`] bundles everything one render of the dashboard
//! needs: the four summary values and the two chart series for the current
//! filter selection. The UI recomputes it on every filter change.

use sales_core::error::Result;
use sales_core::models::{FilterSelection, MonthlyRecord};

use crate::aggregator::Aggregator;
use crate::dataset::SalesDataSet;

/// One fully-computed render input for a given filter selection.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// The selection this snapshot was computed for.
    pub selection: FilterSelection,
    /// Sum of revenue across the view, in KRW.
    pub total_revenue: u64,
    /// Arithmetic mean of revenue across the view, in KRW.
    pub average_revenue: f64,
    /// The record with the greatest revenue in the view.
    pub max_record: MonthlyRecord,
    /// The record with the least revenue in the view.
    pub min_record: MonthlyRecord,
    /// Ordered `(month, revenue)` pairs for the trend chart.
    pub revenue_series: Vec<(String, u64)>,
    /// Ordered `(month, growth-rate)` pairs for the comparison chart.
    pub growth_series: Vec<(String, f64)>,
}

impl DashboardSnapshot {
    /// Run `filter` plus every aggregate for `selection`.
    ///
    /// Pure: same inputs always produce the same snapshot. Errors from the
    /// filter step ([`InvalidFilter`]) and the defensive empty-view guards
    /// propagate to the caller unchanged.
    ///
    /// [`InvalidFilter`]: sales_core::error::DashboardError::InvalidFilter
    pub fn compute(dataset: &SalesDataSet, selection: &FilterSelection) -> Result<Self> {
        let view = Aggregator::filter(dataset, selection)?;

        Ok(Self {
            selection: selection.clone(),
            total_revenue: Aggregator::total_revenue(&view),
            average_revenue: Aggregator::average_revenue(&view)?,
            max_record: Aggregator::max_revenue_record(&view)?.clone(),
            min_record: Aggregator::min_revenue_record(&view)?.clone(),
            revenue_series: Aggregator::revenue_series(&view),
            growth_series: Aggregator::growth_series(&view),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
