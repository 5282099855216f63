//! The page and endpoint for editing an existing transaction.

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    endpoints::format_endpoint,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    ledger::RowId,
    navigation::NavBar,
    store::CsvStore,
    timezone::current_local_date,
    transaction::Transaction,
    transactions::{LedgerState, form::form_fields},
};

use super::form::TransactionForm;

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The CSV-backed transaction store.
    pub store: CsvStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn edit_transaction_view(row_id: RowId, transaction: &Transaction, max_date: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let edit_route = format_endpoint(endpoints::TRANSACTION, row_id);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(edit_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Transaction" }

                (form_fields(Some(transaction), max_date))

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Save Changes"
                }
            }
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content)
}

/// Renders the page for editing a transaction.
///
/// Responds with the 404 page if the row ID no longer refers to a ledger row.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(row_id): Path<RowId>,
) -> Result<Response, Error> {
    let ledger = state.store.load();

    let transaction = ledger.get(row_id).ok_or(Error::RowNotFound(row_id))?;

    // Keep the row's own date selectable even when it is ahead of today.
    let max_date = transaction
        .date
        .max(current_local_date(&state.local_timezone)?);

    Ok(edit_transaction_view(row_id, transaction, max_date).into_response())
}

/// A route handler for updating a transaction, redirects to the transactions
/// view on success.
pub async fn edit_transaction_endpoint(
    State(state): State<LedgerState>,
    Path(row_id): Path<RowId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut ledger = state.store.load();

    if let Err(error) = ledger.update(row_id, form.into_transaction()) {
        return error.into_alert_response();
    }

    if let Err(error) = state.store.save(&ledger) {
        tracing::error!("Could not save edited transaction {row_id}: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
