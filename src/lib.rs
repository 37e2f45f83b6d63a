#![doc(test(attr(deny(warnings))))]

//! Tally Core offers read-only query and reporting primitives over immutable
//! transaction journals, plus the CLI walkthrough built on top of them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod journal;
pub mod query;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally Core tracing initialized.");
    });
}
