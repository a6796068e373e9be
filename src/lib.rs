#![doc(test(attr(deny(warnings))))]

//! Spendbook is a console tracker for spending categories and the
//! transactions booked against them, persisted as JSON text files.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Spendbook tracing initialized.");
    });
}
