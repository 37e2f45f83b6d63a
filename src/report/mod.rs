//! Plain-text rendering of journals and their aggregates.

pub mod format;
pub mod summary;
pub mod table;

pub use format::{format_amount, format_date, month_label, month_name, symbol_for};
pub use summary::{render_listing, render_summary, JournalSummary};
pub use table::{Alignment, Table, TableColumn};
