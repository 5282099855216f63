//! Pure read-only summaries derived from a ledger snapshot.
//!
//! Everything here is recomputed from scratch on every call. At personal
//! ledger sizes there is nothing to gain from caching or incremental
//! aggregation, so every function is a plain O(n) pass over the rows.

use std::collections::{BTreeMap, HashMap, HashSet};

use time::Date;

use crate::{ledger::Ledger, transaction::TransactionKind};

/// Running totals over the whole ledger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
    /// `income - expense`.
    pub balance: f64,
}

/// Sum amounts grouped by transaction kind.
pub fn totals(ledger: &Ledger) -> Totals {
    let mut totals = Totals::default();

    for transaction in ledger.iter() {
        match transaction.kind {
            TransactionKind::Income => totals.income += transaction.amount,
            TransactionKind::Expense => totals.expense += transaction.amount,
        }
    }

    totals.balance = totals.income - totals.expense;

    totals
}

/// Totals restricted to a single calendar day, plus the row count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TodaySummary {
    /// Income recorded on the day.
    pub income: f64,
    /// Expenses recorded on the day.
    pub expense: f64,
    /// `income - expense` for the day.
    pub net: f64,
    /// How many transactions were recorded on the day.
    pub count: usize,
}

/// Summarize the rows whose date equals `today`.
pub fn today_summary(ledger: &Ledger, today: Date) -> TodaySummary {
    let mut summary = TodaySummary::default();

    for transaction in ledger.iter().filter(|t| t.date == today) {
        match transaction.kind {
            TransactionKind::Income => summary.income += transaction.amount,
            TransactionKind::Expense => summary.expense += transaction.amount,
        }
        summary.count += 1;
    }

    summary.net = summary.income - summary.expense;

    summary
}

/// The first day of the month `date` falls in, used as the grouping key for
/// monthly aggregates.
pub fn month_of(date: Date) -> Date {
    date.replace_day(1).unwrap()
}

/// The total of expense-type amounts falling in the given calendar month.
///
/// `month` should be a date with day 1, as produced by [month_of].
pub fn monthly_expense(ledger: &Ledger, month: Date) -> f64 {
    ledger
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && month_of(t.date) == month)
        .map(|t| t.amount)
        .sum()
}

/// Whether a month's spending sits within the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Spending is at or below the limit.
    WithinBudget,
    /// Spending exceeds the limit.
    OverBudget,
}

/// Compare a month's spending against a limit.
///
/// Spending exactly equal to the limit still counts as within budget.
pub fn budget_status(monthly_expense: f64, limit: f64) -> BudgetStatus {
    if monthly_expense > limit {
        BudgetStatus::OverBudget
    } else {
        BudgetStatus::WithinBudget
    }
}

/// Sum amounts grouped by calendar month and transaction kind.
///
/// Months with no rows of a given kind have no entry here; chart rendering
/// fills those in as zero so months are never omitted from the x-axis.
pub fn monthly_totals(ledger: &Ledger) -> HashMap<(Date, TransactionKind), f64> {
    let mut totals = HashMap::new();

    for transaction in ledger.iter() {
        let month = month_of(transaction.date);
        *totals.entry((month, transaction.kind)).or_insert(0.0) += transaction.amount;
    }

    totals
}

/// The unique months appearing in the ledger, oldest first.
pub fn sorted_months(ledger: &Ledger) -> Vec<Date> {
    let months: HashSet<_> = ledger.iter().map(|t| month_of(t.date)).collect();

    let mut sorted: Vec<_> = months.into_iter().collect();
    sorted.sort();

    sorted
}

/// Total expense amount per category.
///
/// Income rows never appear here. The map is empty when the ledger has no
/// expenses.
pub fn category_breakdown(ledger: &Ledger) -> BTreeMap<String, f64> {
    let mut breakdown = BTreeMap::new();

    for transaction in ledger
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        *breakdown.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    breakdown
}
