//! The endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{ledger::RowId, transactions::LedgerState};

/// A route handler for deleting a transaction.
///
/// On success the response body is empty with status 200 OK so HTMX removes
/// the table row that issued the request. A stale row ID responds with a 404
/// alert instead.
pub async fn delete_transaction_endpoint(
    State(state): State<LedgerState>,
    Path(row_id): Path<RowId>,
) -> Response {
    let mut ledger = state.store.load();

    if let Err(error) = ledger.remove(row_id) {
        return error.into_alert_response();
    }

    if let Err(error) = state.store.save(&ledger) {
        tracing::error!("Could not save ledger after deleting {row_id}: {error}");
        return error.into_alert_response();
    }

    // The status code has to be 200 OK or HTMX will not delete the table row.
    ().into_response()
}
