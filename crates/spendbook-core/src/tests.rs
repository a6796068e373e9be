use chrono::NaiveDate;

use crate::{
    category_service::CategoryService, storage::category_warnings,
    summary_service::SummaryService, transaction_service::TransactionService, CoreError,
};
use spendbook_domain::{Category, Transaction};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

#[test]
fn category_service_adds_trimmed_name() {
    let mut categories = Vec::new();
    let added = CategoryService::add(&mut categories, "  Food ").expect("add category");

    assert_eq!(added.name, "Food");
    assert_eq!(categories, vec![Category::new("Food")]);
}

#[test]
fn category_service_rejects_duplicates_and_blanks() {
    let mut categories = vec![Category::new("Rent")];

    let duplicate = CategoryService::add(&mut categories, "rent");
    assert!(matches!(duplicate, Err(CoreError::DuplicateCategory(name)) if name == "rent"));

    let blank = CategoryService::add(&mut categories, "   ");
    assert!(matches!(blank, Err(CoreError::Validation(_))));
    assert_eq!(categories.len(), 1);
}

#[test]
fn transaction_service_records_in_insertion_order() {
    let mut transactions = Vec::new();
    TransactionService::record(&mut transactions, Transaction::new(10.0, "Food", day(1)))
        .expect("record first");
    TransactionService::record(&mut transactions, Transaction::new(5.0, "Fuel", day(2)))
        .expect("record second");

    let categories: Vec<_> = transactions.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(categories, vec!["Food", "Fuel"]);
}

#[test]
fn transaction_service_rejects_non_finite_amounts() {
    let mut transactions = Vec::new();
    let result = TransactionService::record(
        &mut transactions,
        Transaction::new(f64::NAN, "Food", day(1)),
    );
    assert!(result.is_err());
    assert!(transactions.is_empty());
}

#[test]
fn transaction_service_parses_amounts() {
    assert_eq!(TransactionService::parse_amount("12.50").unwrap(), 12.5);
    assert_eq!(TransactionService::parse_amount(" 3,25 ").unwrap(), 3.25);
    assert_eq!(TransactionService::parse_amount("-7").unwrap(), -7.0);
    assert!(TransactionService::parse_amount("abc").is_err());
    assert!(TransactionService::parse_amount("inf").is_err());
}

#[test]
fn transaction_service_parses_dates() {
    let today = day(15);
    assert_eq!(TransactionService::parse_date("", today).unwrap(), today);
    assert_eq!(TransactionService::parse_date("Today", today).unwrap(), today);
    assert_eq!(
        TransactionService::parse_date("2024-02-29", today).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert_eq!(
        TransactionService::parse_date("2024.03.01", today).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert!(TransactionService::parse_date("01/02/2024", today).is_err());
}

#[test]
fn summary_service_totals_per_category() {
    let categories = vec![Category::new("Food"), Category::new("Fuel")];
    let transactions = vec![
        Transaction::new(10.0, "Food", day(1)),
        Transaction::new(2.5, "food", day(2)),
        Transaction::new(40.0, "Travel", day(3)),
    ];

    let summary = SummaryService::by_category(&categories, &transactions);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].name, "Food");
    assert_eq!(summary[0].transaction_count, 2);
    assert_eq!(summary[0].total, 12.5);
    assert_eq!(summary[1].transaction_count, 0);
    assert_eq!(SummaryService::total(&transactions), 52.5);
}

#[test]
fn category_warnings_flag_unknown_references() {
    let categories = vec![Category::new("Food")];
    let transactions = vec![
        Transaction::new(1.0, "Food", day(1)),
        Transaction::new(1.0, "Hobby", day(1)),
    ];

    let warnings = category_warnings(&categories, &transactions);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("`Hobby`"));
}
