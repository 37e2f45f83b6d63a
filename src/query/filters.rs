use chrono::NaiveDate;

use crate::journal::{DateSpan, Transaction, TransactionId, TransactionKind};

/// Transactions whose movement tag equals `kind`.
pub fn by_kind<'a>(journal: &'a [Transaction], kind: &TransactionKind) -> Vec<&'a Transaction> {
    journal
        .iter()
        .filter(|transaction| &transaction.kind == kind)
        .collect()
}

/// Transactions at an exact merchant name. Comparison is case-sensitive.
pub fn by_merchant<'a>(journal: &'a [Transaction], merchant: &str) -> Vec<&'a Transaction> {
    journal
        .iter()
        .filter(|transaction| transaction.merchant == merchant)
        .collect()
}

/// Transactions dated inside `span`, bounds included.
pub fn in_date_span<'a>(journal: &'a [Transaction], span: DateSpan) -> Vec<&'a Transaction> {
    journal
        .iter()
        .filter(|transaction| span.contains(transaction.date))
        .collect()
}

/// Transactions with `min <= amount <= max`.
///
/// An inverted range (`min > max`) selects nothing.
pub fn in_amount_range(journal: &[Transaction], min: f64, max: f64) -> Vec<&Transaction> {
    journal
        .iter()
        .filter(|transaction| transaction.amount >= min && transaction.amount <= max)
        .collect()
}

/// Transactions strictly before `cutoff`.
pub fn before_date(journal: &[Transaction], cutoff: NaiveDate) -> Vec<&Transaction> {
    journal
        .iter()
        .filter(|transaction| transaction.date < cutoff)
        .collect()
}

/// First transaction carrying `id`, if any.
pub fn find_by_id(journal: &[Transaction], id: TransactionId) -> Option<&Transaction> {
    journal.iter().find(|transaction| transaction.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::sample_journal;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn by_kind_partitions_the_journal() {
        let journal = sample_journal();
        let debits = by_kind(&journal, &TransactionKind::Debit);
        let credits = by_kind(&journal, &TransactionKind::Credit);

        assert_eq!(debits.len(), 2);
        assert_eq!(credits.len(), 1);
        assert_eq!(debits.len() + credits.len(), journal.len());
        assert_eq!(credits[0].id, 2);
    }

    #[test]
    fn by_merchant_is_exact_and_case_sensitive() {
        let journal = sample_journal();
        assert_eq!(by_merchant(&journal, "SuperMarket").len(), 1);
        assert!(by_merchant(&journal, "supermarket").is_empty());
        assert!(by_merchant(&journal, "Nowhere").is_empty());
    }

    #[test]
    fn date_span_keeps_boundary_transactions() {
        let journal = sample_journal();
        let span = DateSpan::new(date(2024, 1, 15), date(2024, 2, 10));
        let hits = in_date_span(&journal, span);
        let ids: Vec<_> = hits.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn inverted_span_selects_nothing() {
        let journal = sample_journal();
        let span = DateSpan::new(date(2024, 12, 1), date(2024, 1, 1));
        assert!(in_date_span(&journal, span).is_empty());
    }

    #[test]
    fn amount_range_includes_both_ends() {
        let journal = sample_journal();
        let hits = in_amount_range(&journal, 150.0, 300.0);
        let ids: Vec<_> = hits.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(in_amount_range(&journal, 300.0, 150.0).is_empty());
    }

    #[test]
    fn before_date_is_strict() {
        let journal = sample_journal();
        let hits = before_date(&journal, date(2024, 2, 10));
        let ids: Vec<_> = hits.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1]);

        assert!(before_date(&journal, date(2024, 1, 15)).is_empty());
    }

    #[test]
    fn find_by_id_returns_first_match_or_none() {
        let journal = sample_journal();
        let found = find_by_id(&journal, 2).expect("id 2 exists");
        assert_eq!(found.description, "Salary");
        assert!(find_by_id(&journal, 99).is_none());
    }

    #[test]
    fn everything_is_empty_on_an_empty_journal() {
        let journal: Vec<Transaction> = Vec::new();
        assert!(by_kind(&journal, &TransactionKind::Debit).is_empty());
        assert!(by_merchant(&journal, "SuperMarket").is_empty());
        assert!(in_amount_range(&journal, 0.0, f64::MAX).is_empty());
        assert!(find_by_id(&journal, 1).is_none());
    }
}
