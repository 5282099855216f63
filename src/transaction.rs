//! The core data model for ledger entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The format used for dates in the backing CSV file.
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Whether a transaction adds money to the budget or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned.
    #[serde(alias = "income")]
    Income,

    /// Money spent.
    #[serde(alias = "expense")]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry: money earned or spent on a given day.
///
/// The serde field names match the columns of the backing CSV file:
/// `Date`, `Type`, `Amount`, `Category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The calendar day the transaction happened. Time of day is irrelevant.
    #[serde(rename = "Date", with = "csv_date")]
    pub date: Date,

    /// Whether this entry is income or an expense.
    #[serde(rename = "Type")]
    pub kind: TransactionKind,

    /// The amount of money that changed hands.
    ///
    /// The input form enforces a non-negative amount for new rows; the core
    /// imposes no further invariant on sign.
    #[serde(rename = "Amount")]
    pub amount: f64,

    /// A free-text label such as "Groceries". May be empty.
    #[serde(rename = "Category", default)]
    pub category: String,
}

/// Parse a calendar date string, tolerating a trailing time-of-day component
/// such as `2024-03-01 00:00:00` left behind by other tools.
pub fn parse_date(text: &str) -> Option<Date> {
    let date_part = text.split_once([' ', 'T']).map_or(text, |(date, _)| date);

    Date::parse(date_part.trim(), DATE_FORMAT).ok()
}

/// Serde (de)serialization of dates as `YYYY-MM-DD` strings for the CSV file.
mod csv_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    use super::{DATE_FORMAT, parse_date};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date.format(&DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;

        parse_date(&text).ok_or_else(|| D::Error::custom(format!("unparseable date {text:?}")))
    }
}
