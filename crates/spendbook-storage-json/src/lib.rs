//! spendbook-storage-json
//!
//! Filesystem persistence for the category and transaction lists. Each list is
//! one pretty-printed JSON array in its own file, rewritten in full on save.

use std::{
    fs,
    path::{Path, PathBuf},
};

use once_cell::sync::OnceCell;
use serde::{de::DeserializeOwned, Serialize};
use spendbook_core::{
    utils::{executable_dir, write_atomic},
    CoreError, EntityStorage, FinanceStore,
};
use spendbook_domain::{Category, Transaction};
use tracing::debug;

pub const TRANSACTIONS_FILE: &str = "transactions.txt";
pub const CATEGORIES_FILE: &str = "categories.txt";

/// Locations of the two list files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub transactions: PathBuf,
    pub categories: PathBuf,
}

impl StoragePaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            transactions: dir.join(TRANSACTIONS_FILE),
            categories: dir.join(CATEGORIES_FILE),
        }
    }

    /// Default file names next to the running executable, falling back to the
    /// working directory when its location is unknown.
    pub fn beside_executable() -> Self {
        Self::in_dir(executable_dir())
    }
}

/// JSON-file implementation of [`EntityStorage`].
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    paths: StoragePaths,
}

impl JsonFileStorage {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(StoragePaths::in_dir(dir))
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }
}

impl EntityStorage for JsonFileStorage {
    fn read_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        read_list(&self.paths.transactions)
    }

    fn write_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        ensure_finite_amounts(&self.paths.transactions, transactions)?;
        write_list(&self.paths.transactions, transactions)
    }

    fn read_categories(&self) -> Result<Vec<Category>, CoreError> {
        read_list(&self.paths.categories)
    }

    fn write_categories(&self, categories: &[Category]) -> Result<(), CoreError> {
        write_list(&self.paths.categories, categories)
    }
}

static SHARED_STORE: OnceCell<FinanceStore> = OnceCell::new();

/// Process-wide store over the files next to the executable, built on first use.
pub fn shared_store() -> &'static FinanceStore {
    SHARED_STORE.get_or_init(|| {
        let paths = StoragePaths::beside_executable();
        debug!(?paths, "initialising shared store");
        FinanceStore::new(JsonFileStorage::new(paths))
    })
}

/// Reads and parses a list file.
pub fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CoreError> {
    let data = fs::read_to_string(path).map_err(|err| CoreError::io(path, err))?;
    debug!(path = %path.display(), bytes = data.len(), "read list file");
    serde_json::from_str(&data).map_err(|err| CoreError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Replaces a list file with the pretty-printed `items`.
pub fn write_list<T: Serialize>(path: &Path, items: &[T]) -> Result<(), CoreError> {
    let mut json = serde_json::to_string_pretty(items).map_err(|err| CoreError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    json.push('\n');
    write_atomic(path, &json).map_err(|err| CoreError::io(path, err))?;
    debug!(path = %path.display(), items = items.len(), "wrote list file");
    Ok(())
}

/// serde_json writes NaN and infinities as `null`, which would make the whole
/// file unreadable on the next load.
fn ensure_finite_amounts(path: &Path, transactions: &[Transaction]) -> Result<(), CoreError> {
    match transactions.iter().find(|txn| !txn.amount.is_finite()) {
        Some(txn) => Err(CoreError::Validation(format!(
            "transaction {} has non-finite amount {}; `{}` left unchanged",
            txn.id,
            txn.amount,
            path.display()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_use_default_file_names() {
        let paths = StoragePaths::in_dir("/srv/spendbook");
        assert_eq!(paths.transactions, PathBuf::from("/srv/spendbook/transactions.txt"));
        assert_eq!(paths.categories, PathBuf::from("/srv/spendbook/categories.txt"));
    }
}
