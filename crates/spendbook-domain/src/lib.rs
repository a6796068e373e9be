//! spendbook-domain
//!
//! Plain data records for spending categories and transactions.
//! No I/O, no CLI, no storage. Only data types and the traits they share.

pub mod category;
pub mod common;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use transaction::*;
