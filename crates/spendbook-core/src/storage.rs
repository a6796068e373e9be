use std::collections::HashSet;

use spendbook_domain::{normalize_name, Category, Transaction};

use crate::CoreError;

/// Abstraction over persistence backends holding the category and transaction lists.
///
/// Every write replaces the whole list. Reads of a list that was never written
/// fail with [`CoreError::NotFound`].
pub trait EntityStorage: Send + Sync {
    fn read_transactions(&self) -> Result<Vec<Transaction>, CoreError>;
    fn write_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError>;
    fn read_categories(&self) -> Result<Vec<Category>, CoreError>;
    fn write_categories(&self, categories: &[Category]) -> Result<(), CoreError>;
}

/// Detects transactions booked against categories that are not in the list.
pub fn category_warnings(categories: &[Category], transactions: &[Transaction]) -> Vec<String> {
    let known: HashSet<String> = categories
        .iter()
        .map(|category| normalize_name(&category.name))
        .collect();
    transactions
        .iter()
        .filter(|txn| !known.contains(&normalize_name(&txn.category)))
        .map(|txn| {
            format!(
                "transaction {} references unknown category `{}`",
                txn.id, txn.category
            )
        })
        .collect()
}
