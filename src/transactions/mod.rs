//! Transactions module
//!
//! Provides the transactions table page, the create and edit forms, and the
//! API endpoints that mutate the ledger. Every mutation reloads the CSV file,
//! applies one change, and rewrites the whole file.

mod create;
mod delete;
mod edit;
mod form;
mod table;

pub use create::{create_transaction_endpoint, get_new_transaction_page};
pub use delete::delete_transaction_endpoint;
pub use edit::{edit_transaction_endpoint, get_edit_transaction_page};
pub use table::get_transactions_page;

use axum::extract::FromRef;

use crate::{AppState, store::CsvStore};

/// The state needed by handlers that read or mutate the ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The CSV-backed transaction store.
    pub store: CsvStore,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}
