//! The page that displays all transactions as a table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    endpoints::format_endpoint,
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, link,
    },
    ledger::RowId,
    navigation::NavBar,
    transaction::{Transaction, TransactionKind},
    transactions::LedgerState,
};

/// Render an overview of the ledger's transactions, newest first.
pub async fn get_transactions_page(
    State(state): State<LedgerState>,
) -> Result<Response, Error> {
    let ledger = state.store.load();
    let rows = ledger.sorted_by_date_descending();

    Ok(transactions_view(&rows).into_response())
}

fn transactions_view(rows: &[(RowId, &Transaction)]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                div class="flex items-baseline justify-between mb-4"
                {
                    h2 class="text-xl font-bold" { "Transactions" }

                    a
                        href=(endpoints::NEW_TRANSACTION_VIEW)
                        class=(LINK_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                @if rows.is_empty() {
                    (empty_table_view())
                } @else {
                    div class="relative overflow-x-auto shadow-md sm:rounded-lg"
                    {
                        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                                }
                            }

                            tbody
                            {
                                @for (row_id, transaction) in rows {
                                    (transaction_table_row(*row_id, transaction))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

fn transaction_table_row(row_id: RowId, transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, row_id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, row_id);
    let amount_class = match transaction.kind {
        TransactionKind::Income => "text-green-600 dark:text-green-400",
        TransactionKind::Expense => "text-red-600 dark:text-red-400",
    };
    let confirm_message = format!(
        "Are you sure you want to delete the {} of {} on {}? This cannot be undone.",
        transaction.kind,
        format_currency(transaction.amount),
        transaction.date,
    );

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.kind) }
            td class={ (TABLE_CELL_STYLE) " font-medium " (amount_class) }
            {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                @if transaction.category.is_empty() {
                    span class="text-gray-400 dark:text-gray-500" { "-" }
                } @else {
                    (transaction.category)
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-confirm=(confirm_message)
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn empty_table_view() -> Markup {
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "add your first transaction");

    html! {
        div class="flex flex-col items-center py-8"
        {
            h3 class="text-lg font-bold" { "Nothing here yet..." }

            p
            {
                "Your transactions will show up here. Go ahead and "
                (new_transaction_link) "."
            }
        }
    }
}

#[cfg(test)]
mod transactions_page_tests {
    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use scraper::{Html, Selector};
    use tempfile::tempdir;
    use time::macros::date;

    use crate::{
        endpoints::{self, format_endpoint},
        ledger::Ledger,
        store::CsvStore,
        transaction::{Transaction, TransactionKind},
        transactions::LedgerState,
    };

    use super::get_transactions_page;

    fn get_test_state(ledger: &Ledger) -> (tempfile::TempDir, LedgerState) {
        let directory = tempdir().unwrap();
        let store = CsvStore::new(directory.path().join("transactions.csv"));
        store.save(ledger).unwrap();

        (directory, LedgerState { store })
    }

    #[tokio::test]
    async fn lists_transactions_newest_first() {
        let ledger = Ledger::from_rows([
            Transaction {
                date: date!(2024 - 03 - 01),
                kind: TransactionKind::Expense,
                amount: 30.0,
                category: "Food".to_owned(),
            },
            Transaction {
                date: date!(2024 - 03 - 02),
                kind: TransactionKind::Income,
                amount: 500.0,
                category: "Salary".to_owned(),
            },
        ]);
        let (_directory, state) = get_test_state(&ledger);

        let response = get_transactions_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let cell_selector = Selector::parse("tbody td:first-child").unwrap();
        let dates: Vec<String> = html
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(dates, vec!["2024-03-02", "2024-03-01"]);
    }

    #[tokio::test]
    async fn rows_carry_stable_edit_and_delete_urls() {
        let mut ledger = Ledger::new();
        let older = ledger.append(Transaction {
            date: date!(2024 - 03 - 01),
            kind: TransactionKind::Expense,
            amount: 30.0,
            category: "Food".to_owned(),
        });
        let newer = ledger.append(Transaction {
            date: date!(2024 - 03 - 02),
            kind: TransactionKind::Income,
            amount: 500.0,
            category: "Salary".to_owned(),
        });
        let (_directory, state) = get_test_state(&ledger);

        let response = get_transactions_page(State(state)).await.unwrap();
        let html = parse_html(response).await;

        // The first display row is the newer transaction, so its delete
        // button must address the newer row ID even though it was appended
        // second.
        let delete_selector = Selector::parse("tbody button[hx-delete]").unwrap();
        let delete_urls: Vec<String> = html
            .select(&delete_selector)
            .filter_map(|button| button.value().attr("hx-delete"))
            .map(str::to_owned)
            .collect();

        assert_eq!(
            delete_urls,
            vec![
                format_endpoint(endpoints::TRANSACTION, newer),
                format_endpoint(endpoints::TRANSACTION, older),
            ]
        );
    }

    #[tokio::test]
    async fn empty_ledger_shows_prompt() {
        let (_directory, state) = get_test_state(&Ledger::new());

        let response = get_transactions_page(State(state)).await.unwrap();
        let html = parse_html(response).await;

        assert!(html.html().contains("Nothing here yet..."));
        assert_eq!(html.select(&Selector::parse("table").unwrap()).count(), 0);
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }
}
