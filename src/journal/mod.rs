//! Transaction records and the calendar types queries filter on.

pub mod sample;
pub mod span;
pub mod transaction;

pub use sample::sample_journal;
pub use span::{DateMask, DateSpan};
pub use transaction::{CardKind, Transaction, TransactionId, TransactionKind};
