//! Dashboard module
//!
//! Provides an overview page showing running totals, a summary of today's
//! transactions, the monthly budget check, and charts.

mod charts;
mod handlers;
mod metrics;

pub use handlers::get_dashboard_page;
