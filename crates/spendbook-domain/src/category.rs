//! Domain type representing a spending category.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// A named spending bucket transactions can be classified under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns `true` when `other` names this category, ignoring case and
    /// surrounding whitespace.
    pub fn matches(&self, other: &str) -> bool {
        normalize_name(&self.name) == normalize_name(other)
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        self.name.clone()
    }
}
