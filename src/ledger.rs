//! The in-memory transaction table and its stable row addressing.

use crate::{Error, transaction::Transaction};

/// The key used to address a ledger row for edit and delete.
///
/// Row IDs are handed out once per row when the ledger is built or appended
/// to, so sorting the display view never changes which row a mutation
/// targets. IDs are not persisted; they are only meaningful within a single
/// load-mutate-save cycle.
pub type RowId = u64;

/// An ordered collection of transactions for one interaction cycle.
///
/// Rows keep the order they appear in the backing file (append order). The
/// date-descending order used for display is a separate, non-mutating view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    rows: Vec<(RowId, Transaction)>,
    next_id: RowId,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from transactions in storage order, assigning row IDs
    /// in that same order.
    pub fn from_rows(rows: impl IntoIterator<Item = Transaction>) -> Self {
        let mut ledger = Self::new();

        for transaction in rows {
            ledger.append(transaction);
        }

        ledger
    }

    /// Add a row at the end of the ledger and return its ID.
    pub fn append(&mut self, transaction: Transaction) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push((id, transaction));

        id
    }

    /// Overwrite the row with `id`.
    ///
    /// # Errors
    /// Returns [Error::RowNotFound] if no row has the given ID, e.g. because
    /// it was deleted by an earlier interaction.
    pub fn update(&mut self, id: RowId, transaction: Transaction) -> Result<(), Error> {
        let row = self
            .rows
            .iter_mut()
            .find(|(row_id, _)| *row_id == id)
            .ok_or(Error::RowNotFound(id))?;
        row.1 = transaction;

        Ok(())
    }

    /// Delete the row with `id` and return it.
    ///
    /// # Errors
    /// Returns [Error::RowNotFound] if no row has the given ID.
    pub fn remove(&mut self, id: RowId) -> Result<Transaction, Error> {
        let index = self
            .rows
            .iter()
            .position(|(row_id, _)| *row_id == id)
            .ok_or(Error::RowNotFound(id))?;

        Ok(self.rows.remove(index).1)
    }

    /// The row with `id`, if it is still in the ledger.
    pub fn get(&self, id: RowId) -> Option<&Transaction> {
        self.rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, transaction)| transaction)
    }

    /// The rows sorted by date, newest first, paired with their row IDs.
    ///
    /// Rows sharing a date keep their storage order. Storage order itself is
    /// left untouched.
    pub fn sorted_by_date_descending(&self) -> Vec<(RowId, &Transaction)> {
        let mut view: Vec<_> = self
            .rows
            .iter()
            .map(|(id, transaction)| (*id, transaction))
            .collect();
        view.sort_by(|(_, a), (_, b)| b.date.cmp(&a.date));

        view
    }

    /// Iterate over the rows in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.rows.iter().map(|(_, transaction)| transaction)
    }

    /// The number of rows in the ledger.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the ledger has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{
        Error,
        transaction::{Transaction, TransactionKind},
    };

    use super::Ledger;

    fn transaction(date: Date, amount: f64) -> Transaction {
        Transaction {
            date,
            kind: TransactionKind::Expense,
            amount,
            category: "Food".to_owned(),
        }
    }

    #[test]
    fn append_assigns_increasing_ids() {
        let mut ledger = Ledger::new();

        let first = ledger.append(transaction(date!(2024 - 01 - 01), 1.0));
        let second = ledger.append(transaction(date!(2024 - 01 - 02), 2.0));

        assert!(second > first);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn ids_survive_removal_of_other_rows() {
        let mut ledger = Ledger::new();
        let first = ledger.append(transaction(date!(2024 - 01 - 01), 1.0));
        let second = ledger.append(transaction(date!(2024 - 01 - 02), 2.0));
        let third = ledger.append(transaction(date!(2024 - 01 - 03), 3.0));

        ledger.remove(second).unwrap();

        assert_eq!(ledger.get(first).map(|t| t.amount), Some(1.0));
        assert_eq!(ledger.get(third).map(|t| t.amount), Some(3.0));
        assert_eq!(ledger.get(second), None);
    }

    #[test]
    fn update_overwrites_the_addressed_row() {
        let mut ledger = Ledger::new();
        let id = ledger.append(transaction(date!(2024 - 01 - 01), 1.0));
        ledger.append(transaction(date!(2024 - 01 - 02), 2.0));

        let replacement = Transaction {
            date: date!(2024 - 02 - 03),
            kind: TransactionKind::Income,
            amount: 99.0,
            category: "Salary".to_owned(),
        };
        ledger.update(id, replacement.clone()).unwrap();

        assert_eq!(ledger.get(id), Some(&replacement));
    }

    #[test]
    fn update_missing_row_fails() {
        let mut ledger = Ledger::new();

        let result = ledger.update(42, transaction(date!(2024 - 01 - 01), 1.0));

        assert_eq!(result, Err(Error::RowNotFound(42)));
    }

    #[test]
    fn remove_missing_row_fails() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.remove(7), Err(Error::RowNotFound(7)));
    }

    #[test]
    fn sorted_view_is_newest_first_and_keeps_ties_stable() {
        let mut ledger = Ledger::new();
        let oldest = ledger.append(transaction(date!(2024 - 01 - 01), 1.0));
        let tied_a = ledger.append(transaction(date!(2024 - 02 - 01), 2.0));
        let tied_b = ledger.append(transaction(date!(2024 - 02 - 01), 3.0));
        let newest = ledger.append(transaction(date!(2024 - 03 - 01), 4.0));

        let view = ledger.sorted_by_date_descending();
        let ids: Vec<_> = view.iter().map(|(id, _)| *id).collect();

        assert_eq!(ids, vec![newest, tied_a, tied_b, oldest]);
    }

    #[test]
    fn sorting_does_not_change_which_row_a_mutation_targets() {
        let mut ledger = Ledger::new();
        ledger.append(transaction(date!(2024 - 03 - 01), 30.0));
        ledger.append(transaction(date!(2024 - 03 - 02), 500.0));

        // The first display row is the newest transaction, not the first
        // appended one.
        let (first_display_id, _) = ledger.sorted_by_date_descending()[0];
        ledger.remove(first_display_id).unwrap();

        let remaining: Vec<_> = ledger.iter().map(|t| t.amount).collect();
        assert_eq!(remaining, vec![30.0]);
    }
}
