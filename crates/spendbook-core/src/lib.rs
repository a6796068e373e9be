//! spendbook-core
//!
//! Persistence contracts and services for Spendbook.
//! Depends on spendbook-domain. No CLI, no terminal I/O, no file format knowledge.

pub mod category_service;
pub mod error;
pub mod notifier;
pub mod storage;
pub mod store;
pub mod summary_service;
pub mod transaction_service;
pub mod utils;

pub use category_service::*;
pub use error::CoreError;
pub use notifier::{Notifier, TracingNotifier};
pub use storage::{category_warnings, EntityStorage};
pub use store::FinanceStore;
pub use summary_service::*;
pub use transaction_service::*;

#[cfg(test)]
mod tests;
