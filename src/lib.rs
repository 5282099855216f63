//! Pocketbook is a web app for tracking a personal budget in a plain CSV
//! file.
//!
//! Every interaction reloads the CSV file into an in-memory [ledger::Ledger],
//! applies at most one mutation, rewrites the whole file, and recomputes the
//! dashboard summaries from scratch. There is no database and no cache; the
//! CSV file is the single source of truth.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

use crate::{
    alert::Alert,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
    ledger::RowId,
    not_found::get_404_not_found_response,
};

pub mod aggregation;
mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
pub mod ledger;
mod navigation;
mod not_found;
mod routing;
pub mod store;
mod timezone;
pub mod transaction;
mod transactions;

pub use app_state::{AppState, DEFAULT_BUDGET_LIMIT};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The row ID used for an edit or delete no longer refers to a ledger
    /// row, e.g. because the row was deleted by an earlier interaction.
    #[error("no transaction with row ID {0}")]
    RowNotFound(RowId),

    /// The ledger could not be written to the backing CSV file.
    ///
    /// This is surfaced to the user as a failed interaction; the write is
    /// never retried.
    #[error("could not write the ledger: {0}")]
    WriteFailed(String),

    /// The configured timezone is not a canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::RowNotFound(_) => get_404_not_found_response(),
            Error::InvalidTimezone(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                        and ensure the timezone has been set to a valid, canonical timezone string."
                    ),
                })
            }
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    pub(crate) fn into_alert_response(self) -> Response {
        match self {
            Error::RowNotFound(_) => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not find transaction",
                    "The transaction is no longer in the ledger. \
                    Try refreshing the page to see the current transactions.",
                )
                .into_html(),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    )
                    .into_html(),
                )
                    .into_response()
            }
        }
    }
}
