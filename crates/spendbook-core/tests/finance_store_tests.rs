use std::{
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use spendbook_core::{CoreError, EntityStorage, FinanceStore, Notifier};
use spendbook_domain::{Category, Transaction};

enum Slot<T> {
    Missing,
    Stored(Vec<T>),
    Corrupt,
}

struct MemoryStorage {
    categories: Mutex<Slot<Category>>,
    transactions: Mutex<Slot<Transaction>>,
    fail_writes: bool,
}

impl MemoryStorage {
    fn empty() -> Self {
        Self {
            categories: Mutex::new(Slot::Missing),
            transactions: Mutex::new(Slot::Missing),
            fail_writes: false,
        }
    }
}

fn read_slot<T: Clone>(slot: &Mutex<Slot<T>>, name: &str) -> Result<Vec<T>, CoreError> {
    match &*slot.lock().unwrap() {
        Slot::Missing => Err(CoreError::NotFound(PathBuf::from(name))),
        Slot::Stored(items) => Ok(items.clone()),
        Slot::Corrupt => Err(CoreError::Parse {
            path: PathBuf::from(name),
            message: "expected value at line 1 column 1".into(),
        }),
    }
}

impl MemoryStorage {
    fn write_slot<T: Clone>(
        &self,
        slot: &Mutex<Slot<T>>,
        name: &str,
        items: &[T],
    ) -> Result<(), CoreError> {
        if self.fail_writes {
            return Err(CoreError::io(
                name,
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        *slot.lock().unwrap() = Slot::Stored(items.to_vec());
        Ok(())
    }
}

impl EntityStorage for MemoryStorage {
    fn read_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        read_slot(&self.transactions, "transactions.txt")
    }

    fn write_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        self.write_slot(&self.transactions, "transactions.txt", transactions)
    }

    fn read_categories(&self) -> Result<Vec<Category>, CoreError> {
        read_slot(&self.categories, "categories.txt")
    }

    fn write_categories(&self, categories: &[Category]) -> Result<(), CoreError> {
        self.write_slot(&self.categories, "categories.txt", categories)
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

fn store_with(storage: MemoryStorage) -> (FinanceStore, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let store = FinanceStore::new(storage).with_notifier(notifier.clone());
    (store, notifier)
}

#[test]
fn missing_lists_are_initialised_empty() {
    let (store, notifier) = store_with(MemoryStorage::empty());

    assert!(store.load_categories().is_empty());
    assert!(store.load_transactions().is_empty());

    assert!(store.storage().read_categories().unwrap().is_empty());
    assert!(store.storage().read_transactions().unwrap().is_empty());
    assert!(notifier.messages().is_empty());
}

#[test]
fn corrupt_list_is_reported_and_left_alone() {
    let storage = MemoryStorage::empty();
    *storage.transactions.lock().unwrap() = Slot::Corrupt;
    let (store, notifier) = store_with(storage);

    assert!(store.load_transactions().is_empty());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("reading the transactions file"));
    assert!(matches!(
        store.storage().read_transactions(),
        Err(CoreError::Parse { .. })
    ));
}

#[test]
fn saved_lists_load_back_in_order() {
    let (store, _notifier) = store_with(MemoryStorage::empty());
    let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let transactions = vec![
        Transaction::new(9.99, "Food", date).with_description("lunch"),
        Transaction::new(45.0, "Fuel", date),
    ];

    store.save_transactions(&transactions);
    store.save_categories(&[Category::new("Food"), Category::new("Fuel")]);

    assert_eq!(store.load_transactions(), transactions);
    assert_eq!(
        store.load_categories(),
        vec![Category::new("Food"), Category::new("Fuel")]
    );
}

#[test]
fn failed_save_is_reported_not_raised() {
    let storage = MemoryStorage {
        fail_writes: true,
        ..MemoryStorage::empty()
    };
    let (store, notifier) = store_with(storage);

    store.save_categories(&[Category::new("Food")]);

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("writing categories"));
}

#[test]
fn failed_initialisation_still_returns_empty_list() {
    let storage = MemoryStorage {
        fail_writes: true,
        ..MemoryStorage::empty()
    };
    let (store, notifier) = store_with(storage);

    assert!(store.load_categories().is_empty());
    assert_eq!(notifier.messages().len(), 1);
}
