//! Read-only queries over a journal slice.
//!
//! Every function borrows the journal and returns a derived value; nothing
//! here mutates records or keeps state between calls. Empty journals yield
//! empty collections, zero totals, or `None` rather than errors.

pub mod filters;
pub mod months;
pub mod projections;
pub mod totals;

pub use filters::{before_date, by_kind, by_merchant, find_by_id, in_amount_range, in_date_span};
pub use months::{busiest_debit_month, busiest_month, tally_by_month};
pub use projections::{descriptions, dominant_kind, unique_kinds, KindDominance};
pub use totals::{average_amount, total_amount, total_amount_matching, total_debit_amount};
