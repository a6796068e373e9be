use chrono::NaiveDate;
use spendbook_domain::Transaction;

use crate::CoreError;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

pub struct TransactionService;

impl TransactionService {
    /// Appends a transaction after checking its amount and category reference
    /// are usable. The category is not checked against the category list.
    pub fn record(
        transactions: &mut Vec<Transaction>,
        transaction: Transaction,
    ) -> Result<&Transaction, CoreError> {
        if !transaction.amount.is_finite() {
            return Err(CoreError::Validation("amount must be a finite number".into()));
        }
        if transaction.category.trim().is_empty() {
            return Err(CoreError::Validation("category cannot be empty".into()));
        }
        transactions.push(transaction);
        let index = transactions.len() - 1;
        Ok(&transactions[index])
    }

    /// Parses a user-entered amount. A lone comma is accepted as the decimal
    /// separator.
    pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
        let trimmed = raw.trim();
        let normalized = if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            trimmed.replacen(',', ".", 1)
        };
        let amount = normalized
            .parse::<f64>()
            .map_err(|_| CoreError::Validation(format!("`{}` is not a valid amount", trimmed)))?;
        if !amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "`{}` is not a valid amount",
                trimmed
            )));
        }
        Ok(amount)
    }

    /// Parses a user-entered date; `today` and an empty string resolve to `today`.
    pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("today") {
            return Ok(today);
        }
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "`{}` is not a valid date (expected YYYY-MM-DD)",
                    trimmed
                ))
            })
    }
}
