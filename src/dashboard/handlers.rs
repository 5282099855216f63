//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - State and query types used by the handler

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Deserializer};

use crate::{
    AppState, Error,
    aggregation::{budget_status, month_of, monthly_expense, today_summary, totals},
    dashboard::{
        charts::{
            DashboardChart, charts_script, charts_view, expenses_by_category_chart,
            monthly_overview_chart,
        },
        metrics::{budget_view, summary_view, today_view},
    },
    endpoints,
    html::{HeadElement, base, dollar_input_styles, link},
    ledger::Ledger,
    navigation::NavBar,
    store::CsvStore,
    timezone::current_local_date,
};

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The CSV-backed transaction store.
    pub store: CsvStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The monthly expense limit to use when the limit form has not supplied one.
    pub default_budget_limit: f64,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
            default_budget_limit: state.default_budget_limit,
        }
    }
}

/// The query string for the dashboard page.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// The monthly expense limit entered in the budget check form.
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<f64>,
}

/// Clearing the limit input submits `limit=`. An empty or unparseable value
/// counts as no limit rather than a bad request.
fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

/// Display a page with an overview of the ledger.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);
    let ledger = state.store.load();

    if ledger.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let budget_limit = match query.limit {
        Some(limit) if limit.is_finite() && limit > 0.0 => limit,
        _ => state.default_budget_limit,
    };

    let today = current_local_date(&state.local_timezone)?;
    let current_month = month_of(today);
    let spent_this_month = monthly_expense(&ledger, current_month);

    let charts = build_dashboard_charts(&ledger);
    let metrics = [
        summary_view(&totals(&ledger)),
        today_view(&today_summary(&ledger, today)),
        budget_view(
            current_month,
            spent_this_month,
            budget_limit,
            budget_status(spent_this_month, budget_limit),
        ),
    ];

    Ok(dashboard_view(nav_bar, &metrics, &charts).into_response())
}

/// Creates the array of dashboard charts from the ledger.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(ledger: &Ledger) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "monthly-overview-chart",
            options: monthly_overview_chart(ledger).to_string(),
        },
        DashboardChart {
            id: "expenses-by-category-chart",
            options: expenses_by_category_chart(ledger).to_string(),
        },
    ]
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding a transaction");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Summaries and charts will show up here once you add some
                transactions. Get started by " (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with metric cards and charts.
fn dashboard_view(nav_bar: NavBar, metrics: &[Markup], charts: &[DashboardChart]) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            @for metric in metrics {
                (metric)
            }

            (charts_view(charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_CDN.to_owned()),
        charts_script(charts),
        dollar_input_styles(),
    ];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod dashboard_tests {
    use axum::{
        body::Body,
        extract::{Query, State},
        http::{Response, StatusCode},
    };
    use scraper::{Html, Selector};
    use tempfile::tempdir;
    use time::OffsetDateTime;

    use crate::{
        store::CsvStore,
        transaction::{Transaction, TransactionKind},
    };

    use super::{DashboardQuery, DashboardState, get_dashboard_page};

    fn get_test_state(transactions: &[Transaction]) -> (tempfile::TempDir, DashboardState) {
        let directory = tempdir().expect("Could not create temp directory");
        let store = CsvStore::new(directory.path().join("transactions.csv"));

        let mut ledger = store.load();
        for transaction in transactions {
            ledger.append(transaction.clone());
        }
        store.save(&ledger).expect("Could not save test ledger");

        let state = DashboardState {
            store,
            local_timezone: "Etc/UTC".to_owned(),
            default_budget_limit: 500.0,
        };

        (directory, state)
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let today = OffsetDateTime::now_utc().date();
        let (_directory, state) = get_test_state(&[
            Transaction {
                date: today,
                kind: TransactionKind::Income,
                amount: 100.0,
                category: "Salary".to_owned(),
            },
            Transaction {
                date: today,
                kind: TransactionKind::Expense,
                amount: 50.0,
                category: "Groceries".to_owned(),
            },
        ]);

        let response = get_dashboard_page(State(state), Query(DashboardQuery { limit: None }))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);
        assert_chart_exists(&html, "monthly-overview-chart");
        assert_chart_exists(&html, "expenses-by-category-chart");
    }

    #[tokio::test]
    async fn displays_prompt_text_on_no_data() {
        let (_directory, state) = get_test_state(&[]);

        let response = get_dashboard_page(State(state), Query(DashboardQuery { limit: None }))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        let text = html.html();
        assert!(text.contains("Nothing here yet..."));
    }

    #[tokio::test]
    async fn reports_over_budget_with_query_limit() {
        let today = OffsetDateTime::now_utc().date();
        let (_directory, state) = get_test_state(&[Transaction {
            date: today,
            kind: TransactionKind::Expense,
            amount: 100.0,
            category: "Groceries".to_owned(),
        }]);

        let response = get_dashboard_page(
            State(state),
            Query(DashboardQuery { limit: Some(80.0) }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert!(html.html().contains("exceeded your budget"));
    }

    #[tokio::test]
    async fn falls_back_to_default_limit_for_invalid_query() {
        let today = OffsetDateTime::now_utc().date();
        let (_directory, state) = get_test_state(&[Transaction {
            date: today,
            kind: TransactionKind::Expense,
            amount: 100.0,
            category: "Groceries".to_owned(),
        }]);

        let response = get_dashboard_page(
            State(state),
            Query(DashboardQuery { limit: Some(-1.0) }),
        )
        .await
        .unwrap();

        let html = parse_html(response).await;
        // The default limit of $500 leaves $400 remaining.
        assert!(html.html().contains("within your budget"));
    }

    #[test]
    fn query_tolerates_empty_and_unparseable_limits() {
        let query: DashboardQuery = serde_urlencoded::from_str("limit=").unwrap();
        assert_eq!(query.limit, None);

        let query: DashboardQuery = serde_urlencoded::from_str("limit=oops").unwrap();
        assert_eq!(query.limit, None);

        let query: DashboardQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.limit, None);

        let query: DashboardQuery = serde_urlencoded::from_str("limit=80").unwrap();
        assert_eq!(query.limit, Some(80.0));
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

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("#{}", chart_id)).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Chart with id '{}' not found",
            chart_id
        );
    }
}
