//! Terminal UI layer for the monthly sales dashboard.
//!
//! Provides themes, the header, metric-card and chart components, dashboard
//! and table views, and the main application event loop built on top of
//! [`ratatui`].

pub mod app;
pub mod components;
pub mod dashboard_view;
pub mod table_view;
pub mod themes;

pub use sales_core as core;
