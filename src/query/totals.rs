use crate::journal::{DateMask, Transaction};

/// Sum of all amounts in the journal. Zero when the journal is empty.
pub fn total_amount(journal: &[Transaction]) -> f64 {
    journal.iter().map(|transaction| transaction.amount).sum()
}

/// Sum of amounts whose date matches `mask`.
pub fn total_amount_matching(journal: &[Transaction], mask: DateMask) -> f64 {
    journal
        .iter()
        .filter(|transaction| mask.matches(transaction.date))
        .map(|transaction| transaction.amount)
        .sum()
}

/// Arithmetic mean of all amounts. An empty journal averages to zero rather
/// than dividing by zero.
pub fn average_amount(journal: &[Transaction]) -> f64 {
    if journal.is_empty() {
        return 0.0;
    }
    total_amount(journal) / journal.len() as f64
}

/// Sum of debit amounts only. Zero when no debits exist.
pub fn total_debit_amount(journal: &[Transaction]) -> f64 {
    journal
        .iter()
        .filter(|transaction| transaction.kind.is_debit())
        .map(|transaction| transaction.amount)
        .sum()
}
