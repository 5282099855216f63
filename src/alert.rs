//! Alerts for showing the outcome of HTMX requests.
//!
//! Alerts are rendered as out-of-band swaps targeting the alert container in
//! the page base template, so an endpoint can report an error without
//! replacing the element that triggered the request.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A dismissable message displayed at the bottom of the page.
pub enum Alert {
    /// Reports an interaction that completed.
    Success {
        /// A one line summary.
        message: String,
        /// Extra detail displayed below the message.
        details: String,
    },
    /// Reports an interaction that failed.
    Error {
        /// A one line summary.
        message: String,
        /// Extra detail displayed below the message, e.g. how to recover.
        details: String,
    },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an out-of-band swap into the alert container.
    pub fn into_html(self) -> Markup {
        let (message, details, container_style, accent_style) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "flex items-start gap-3 rounded-lg border border-green-300 \
                bg-green-50 p-4 shadow-lg dark:border-green-800 \
                dark:bg-green-900/90",
                "text-green-800 dark:text-green-200",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "flex items-start gap-3 rounded-lg border border-red-300 \
                bg-red-50 p-4 shadow-lg dark:border-red-800 \
                dark:bg-red-900/90",
                "text-red-800 dark:text-red-200",
            ),
        };

        html!(
            div hx-swap-oob="beforeend:#alert-container"
            {
                div role="alert" class=(container_style)
                {
                    div class="flex-1"
                    {
                        h3 class={ "text-sm font-semibold " (accent_style) } { (message) }

                        @if !details.is_empty() {
                            p class={ "mt-1 text-sm " (accent_style) } { (details) }
                        }
                    }

                    button
                        type="button"
                        class={ "text-lg leading-none " (accent_style) }
                        aria-label="Dismiss"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "\u{00d7}"
                    }
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_renders_message_and_details() {
        let markup = Alert::error("Could not save", "Try again later.").into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let h3 = Selector::parse("h3").unwrap();
        let p = Selector::parse("p").unwrap();

        let heading: String = html.select(&h3).flat_map(|el| el.text()).collect();
        let details: String = html.select(&p).flat_map(|el| el.text()).collect();

        assert_eq!(heading.trim(), "Could not save");
        assert_eq!(details.trim(), "Try again later.");
    }

    #[test]
    fn alert_swaps_into_alert_container() {
        let markup = Alert::success("Saved", "").into_html();

        assert!(
            markup
                .into_string()
                .contains("hx-swap-oob=\"beforeend:#alert-container\"")
        );
    }

    #[test]
    fn empty_details_are_omitted() {
        let markup = Alert::success("Saved", "").into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let p = Selector::parse("p").unwrap();

        assert_eq!(html.select(&p).count(), 0);
    }
}
