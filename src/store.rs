//! Loading and saving the ledger as a flat CSV file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, ledger::Ledger, transaction::Transaction};

/// Reads and writes the full transaction table at a fixed file path.
///
/// The store is the sole persistence boundary. Every load reads the whole
/// file from scratch and every save rewrites it in full; there is no partial
/// update and no locking, matching the one-interaction-at-a-time model.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store backed by the CSV file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into a ledger.
    ///
    /// A missing file yields an empty ledger. Rows that fail to parse, such
    /// as rows with an unreadable date, are logged and dropped rather than
    /// failing the whole load.
    pub fn load(&self) -> Ledger {
        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(error) => {
                if !is_not_found(&error) {
                    tracing::warn!(
                        "could not open {}, starting with an empty ledger: {error}",
                        self.path.display()
                    );
                }

                return Ledger::new();
            }
        };

        let mut ledger = Ledger::new();

        for record in reader.deserialize::<Transaction>() {
            match record {
                Ok(transaction) => {
                    ledger.append(transaction);
                }
                Err(error) => {
                    tracing::warn!(
                        "dropping unparseable row in {}: {error}",
                        self.path.display()
                    );
                }
            }
        }

        ledger
    }

    /// Overwrite the backing file with the full contents of `ledger`.
    ///
    /// The containing directory is created if it does not exist yet.
    ///
    /// # Errors
    /// Returns [Error::WriteFailed] if the file cannot be written. The write
    /// is not retried.
    pub fn save(&self, ledger: &Ledger) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|error| Error::WriteFailed(error.to_string()))?;
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|error| Error::WriteFailed(error.to_string()))?;

        for transaction in ledger.iter() {
            writer
                .serialize(transaction)
                .map_err(|error| Error::WriteFailed(error.to_string()))?;
        }

        writer
            .flush()
            .map_err(|error| Error::WriteFailed(error.to_string()))
    }
}

fn is_not_found(error: &csv::Error) -> bool {
    matches!(error.kind(), csv::ErrorKind::Io(io_error) if io_error.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;
    use time::macros::date;

    use crate::{
        ledger::Ledger,
        transaction::{Transaction, TransactionKind},
    };

    use super::CsvStore;

    fn sample_ledger() -> Ledger {
        Ledger::from_rows([
            Transaction {
                date: date!(2024 - 01 - 01),
                kind: TransactionKind::Income,
                amount: 100.0,
                category: "Salary".to_owned(),
            },
            Transaction {
                date: date!(2024 - 01 - 02),
                kind: TransactionKind::Expense,
                amount: 40.0,
                category: "Food".to_owned(),
            },
        ])
    }

    #[test]
    fn load_missing_file_yields_empty_ledger() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("transactions.csv"));

        let ledger = store.load();

        assert!(ledger.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_ledger() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("transactions.csv"));
        let ledger = sample_ledger();

        store.save(&ledger).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("data").join("transactions.csv"));

        store.save(&sample_ledger()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn save_writes_expected_header_and_columns() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("transactions.csv"));

        store.save(&sample_ledger()).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        let mut lines = contents.lines();

        assert_eq!(lines.next(), Some("Date,Type,Amount,Category"));
        assert_eq!(lines.next(), Some("2024-01-01,Income,100.0,Salary"));
        assert_eq!(lines.next(), Some("2024-01-02,Expense,40.0,Food"));
    }

    #[test]
    fn load_drops_rows_with_unparseable_dates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        fs::write(
            &path,
            "Date,Type,Amount,Category\n\
             2024-01-01,Income,100.0,Salary\n\
             not-a-date,Expense,40.0,Food\n\
             2024-01-03,Expense,15.5,Transport\n",
        )
        .unwrap();
        let store = CsvStore::new(path);

        let ledger = store.load();

        assert_eq!(ledger.len(), 2);
        let amounts: Vec<_> = ledger.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100.0, 15.5]);
    }

    #[test]
    fn load_accepts_dates_with_time_of_day() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        fs::write(
            &path,
            "Date,Type,Amount,Category\n2024-03-01 00:00:00,Expense,30.0,Food\n",
        )
        .unwrap();
        let store = CsvStore::new(path);

        let ledger = store.load();

        assert_eq!(ledger.len(), 1);
        let transaction = ledger.iter().next().unwrap();
        assert_eq!(transaction.date, date!(2024 - 03 - 01));
    }

    #[test]
    fn round_trips_categories_with_commas_and_empty_categories() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("transactions.csv"));
        let ledger = Ledger::from_rows([
            Transaction {
                date: date!(2024 - 05 - 06),
                kind: TransactionKind::Expense,
                amount: 12.5,
                category: "Eating out, snacks".to_owned(),
            },
            Transaction {
                date: date!(2024 - 05 - 07),
                kind: TransactionKind::Income,
                amount: 1.0,
                category: String::new(),
            },
        ]);

        store.save(&ledger).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("transactions.csv"));
        store.save(&sample_ledger()).unwrap();

        let mut ledger = store.load();
        let (first_display_id, _) = ledger.sorted_by_date_descending()[0];
        ledger.remove(first_display_id).unwrap();
        store.save(&ledger).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.len(), 1);
        let survivor = reloaded.iter().next().unwrap();
        assert_eq!(survivor.category, "Salary");
    }
}
