//! Data layer for the monthly sales dashboard.
//!
//! Holds the fixed twelve-record dataset, the aggregation functions that
//! drive the summary metrics and chart feeds, and the snapshot type consumed
//! by the UI layer.

pub mod aggregator;
pub mod dataset;
pub mod snapshot;

pub use sales_core as core;
