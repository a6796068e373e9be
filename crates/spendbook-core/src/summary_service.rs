use spendbook_domain::{Amounted, Category, Transaction};

/// Per-category activity derived from the transaction list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub transaction_count: usize,
    pub total: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Summarises transactions per category, in category list order.
    pub fn by_category(categories: &[Category], transactions: &[Transaction]) -> Vec<CategorySummary> {
        categories
            .iter()
            .map(|category| {
                let matching = transactions
                    .iter()
                    .filter(|txn| txn.belongs_to(&category.name));
                let (transaction_count, total) = matching
                    .fold((0, 0.0), |(count, sum), txn| (count + 1, sum + txn.amount()));
                CategorySummary {
                    name: category.name.clone(),
                    transaction_count,
                    total,
                }
            })
            .collect()
    }

    pub fn total(transactions: &[Transaction]) -> f64 {
        transactions.iter().map(Amounted::amount).sum()
    }
}
