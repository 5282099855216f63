//! The URIs for the app's pages and API endpoints.
//!
//! For endpoints that take a row ID parameter, use [format_endpoint].

use crate::ledger::RowId;

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with summaries, the budget check, and charts.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page that lists all transactions as a table.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for adding a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{row_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{row_id}";

/// Replace the `{...}` parameter in `endpoint_path` with `id`.
///
/// Endpoint paths are assumed to be ASCII and contain at most one parameter.
/// Paths without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: RowId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
