//! Best-effort access to the persisted lists.
//!
//! [`FinanceStore`] never hands a failure back to its caller: a list that was
//! never written is initialised empty, an unreadable list is reported through
//! the [`Notifier`] and replaced by an empty one, and a failed save is
//! reported and dropped. Callers that need the typed failure go through
//! [`FinanceStore::storage`] instead.

use spendbook_domain::{Category, Transaction};
use tracing::debug;

use crate::{CoreError, EntityStorage, Notifier, TracingNotifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Transactions,
    Categories,
}

impl ListKind {
    fn label(self) -> &'static str {
        match self {
            ListKind::Transactions => "transactions",
            ListKind::Categories => "categories",
        }
    }

    fn read_failed(self) -> &'static str {
        match self {
            ListKind::Transactions => "An error occurred while reading the transactions file!",
            ListKind::Categories => "An error occurred while reading the categories file!",
        }
    }

    fn write_failed(self) -> &'static str {
        match self {
            ListKind::Transactions => "An error occurred while writing transactions to file!",
            ListKind::Categories => "An error occurred while writing categories to file!",
        }
    }
}

pub struct FinanceStore {
    storage: Box<dyn EntityStorage>,
    notifier: Box<dyn Notifier>,
}

impl FinanceStore {
    pub fn new(storage: impl EntityStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            notifier: Box::new(TracingNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Strict access to the underlying backend.
    pub fn storage(&self) -> &dyn EntityStorage {
        self.storage.as_ref()
    }

    pub fn load_transactions(&self) -> Vec<Transaction> {
        self.load_or_initialize(
            ListKind::Transactions,
            |storage| storage.read_transactions(),
            |storage| storage.write_transactions(&[]),
        )
    }

    pub fn load_categories(&self) -> Vec<Category> {
        self.load_or_initialize(
            ListKind::Categories,
            |storage| storage.read_categories(),
            |storage| storage.write_categories(&[]),
        )
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) {
        if let Err(err) = self.storage.write_transactions(transactions) {
            self.report(ListKind::Transactions.write_failed(), &err);
        }
    }

    pub fn save_categories(&self, categories: &[Category]) {
        if let Err(err) = self.storage.write_categories(categories) {
            self.report(ListKind::Categories.write_failed(), &err);
        }
    }

    fn load_or_initialize<T>(
        &self,
        kind: ListKind,
        read: impl FnOnce(&dyn EntityStorage) -> Result<Vec<T>, CoreError>,
        initialize: impl FnOnce(&dyn EntityStorage) -> Result<(), CoreError>,
    ) -> Vec<T> {
        match read(self.storage()) {
            Ok(items) => items,
            Err(CoreError::NotFound(path)) => {
                debug!(list = kind.label(), path = %path.display(), "creating empty list");
                if let Err(err) = initialize(self.storage()) {
                    self.report(kind.write_failed(), &err);
                }
                Vec::new()
            }
            Err(err) => {
                self.report(kind.read_failed(), &err);
                Vec::new()
            }
        }
    }

    fn report(&self, message: &str, err: &CoreError) {
        debug!(error = ?err, "persistence failure");
        self.notifier.notify_error(&format!("{message} ({err})"));
    }
}
