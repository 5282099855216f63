//! Implements a struct that holds the state of the web server.

use crate::store::CsvStore;

/// The monthly expense limit used when none has been configured or entered.
pub const DEFAULT_BUDGET_LIMIT: f64 = 5000.0;

/// The state of the web server.
///
/// Route handlers extract the slices they need through `FromRef` substates,
/// so most of the app only sees the store or the timezone, not all of this.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The CSV-backed transaction store.
    pub store: CsvStore,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// "Today" and "current month" on the dashboard are derived from this.
    pub local_timezone: String,

    /// The monthly expense limit the dashboard uses when the limit form has
    /// not supplied one.
    pub default_budget_limit: f64,
}

impl AppState {
    /// Create a new [AppState] backed by the given store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland".
    pub fn new(store: CsvStore, local_timezone: &str, default_budget_limit: f64) -> Self {
        Self {
            store,
            local_timezone: local_timezone.to_owned(),
            default_budget_limit,
        }
    }
}
