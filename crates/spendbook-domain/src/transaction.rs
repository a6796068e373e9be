//! Domain model for recorded transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single financial event booked against a category.
///
/// The category is referenced by name and is not owned; nothing guarantees
/// that a category with that name exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Returns `true` when this transaction is booked against `category`.
    pub fn belongs_to(&self, category: &str) -> bool {
        normalize_name(&self.category) == normalize_name(category)
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        match &self.description {
            Some(description) => format!(
                "{} {:.2} [{}] {}",
                self.date, self.amount, self.category, description
            ),
            None => format!("{} {:.2} [{}]", self.date, self.amount, self.category),
        }
    }
}
