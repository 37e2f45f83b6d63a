use std::collections::BTreeMap;

use chrono::Datelike;

use crate::journal::Transaction;

/// Transaction counts keyed by calendar month (1-12).
///
/// Months are collapsed across years: January 2023 and January 2024 land in
/// the same bucket. Months with no transactions are absent from the map.
pub fn tally_by_month(journal: &[Transaction]) -> BTreeMap<u32, usize> {
    tally_months(journal.iter())
}

/// Calendar month carrying the most transactions, or `None` for an empty
/// journal. Ties resolve to the earliest month in the calendar.
pub fn busiest_month(journal: &[Transaction]) -> Option<u32> {
    peak_month(&tally_by_month(journal))
}

/// Calendar month carrying the most debit transactions.
///
/// `None` when the journal holds no debits at all, including the case of a
/// non-empty journal made of credits only. Ties resolve to the earliest
/// month in the calendar.
pub fn busiest_debit_month(journal: &[Transaction]) -> Option<u32> {
    let tally = tally_months(
        journal
            .iter()
            .filter(|transaction| transaction.kind.is_debit()),
    );
    peak_month(&tally)
}

fn tally_months<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> BTreeMap<u32, usize> {
    let mut tally = BTreeMap::new();
    for transaction in transactions {
        *tally.entry(transaction.date.month()).or_insert(0) += 1;
    }
    tally
}

// BTreeMap iterates in ascending month order, so keeping only strict
// improvements leaves the earliest month on a tie.
fn peak_month(tally: &BTreeMap<u32, usize>) -> Option<u32> {
    let mut peak: Option<(u32, usize)> = None;
    for (&month, &count) in tally {
        match peak {
            Some((_, best)) if count <= best => {}
            _ => peak = Some((month, count)),
        }
    }
    peak.map(|(month, _)| month)
}
