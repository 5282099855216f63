//! The page and endpoint for creating a new transaction.

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    timezone::current_local_date,
    transactions::{LedgerState, form::form_fields},
};

use super::form::TransactionForm;

/// The state needed for the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn new_transaction_view(max_date: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(endpoints::TRANSACTIONS_API)
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "New Transaction" }

                (form_fields(None, max_date))

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Create Transaction"
                }
            }
        }
    };

    base("New Transaction", &[dollar_input_styles()], &content)
}

/// Renders the page for creating a transaction.
pub async fn get_new_transaction_page(
    State(state): State<NewTransactionPageState>,
) -> Result<Response, Error> {
    let max_date = current_local_date(&state.local_timezone)?;

    Ok(new_transaction_view(max_date).into_response())
}

/// A route handler for creating a new transaction from submitted form data.
///
/// Appends a row to the ledger, rewrites the CSV file, and redirects to the
/// transactions page.
pub async fn create_transaction_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let mut ledger = state.store.load();
    let row_id = ledger.append(form.into_transaction());

    state
        .store
        .save(&ledger)
        .inspect_err(|error| tracing::error!("Could not save new transaction: {error}"))?;

    tracing::info!("Created transaction with row ID {row_id}");

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}
