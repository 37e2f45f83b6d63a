use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::journal::{Transaction, TransactionKind};

/// Verdict of [`dominant_kind`]: which movement tag appears more often.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KindDominance {
    Debit,
    Credit,
    Equal,
}

impl KindDominance {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindDominance::Debit => "debit",
            KindDominance::Credit => "credit",
            KindDominance::Equal => "equal",
        }
    }
}

impl fmt::Display for KindDominance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct movement tags in first-appearance order.
pub fn unique_kinds(journal: &[Transaction]) -> Vec<TransactionKind> {
    let mut kinds = Vec::new();
    for transaction in journal {
        if !kinds.contains(&transaction.kind) {
            kinds.push(transaction.kind.clone());
        }
    }
    kinds
}

/// Every description, borrowed, in journal order.
pub fn descriptions(journal: &[Transaction]) -> Vec<&str> {
    journal
        .iter()
        .map(|transaction| transaction.description.as_str())
        .collect()
}

/// Compares how many debits and credits the journal holds.
///
/// Tags outside debit/credit do not vote, so an empty journal and a journal
/// of only `Other` tags both come out [`KindDominance::Equal`].
pub fn dominant_kind(journal: &[Transaction]) -> KindDominance {
    let debits = journal
        .iter()
        .filter(|transaction| transaction.kind.is_debit())
        .count();
    let credits = journal
        .iter()
        .filter(|transaction| transaction.kind.is_credit())
        .count();

    match debits.cmp(&credits) {
        Ordering::Greater => KindDominance::Debit,
        Ordering::Less => KindDominance::Credit,
        Ordering::Equal => KindDominance::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{sample_journal, CardKind};
    use chrono::NaiveDate;

    fn tagged(id: u32, kind: TransactionKind) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            10.0,
            kind,
            "item",
            "shop",
            CardKind::Debit,
        )
    }

    #[test]
    fn unique_kinds_keeps_first_appearance_order() {
        let journal = sample_journal();
        assert_eq!(
            unique_kinds(&journal),
            vec![TransactionKind::Debit, TransactionKind::Credit]
        );

        let mixed = vec![
            tagged(1, TransactionKind::Credit),
            tagged(2, TransactionKind::Other("voucher".into())),
            tagged(3, TransactionKind::Credit),
            tagged(4, TransactionKind::Debit),
        ];
        assert_eq!(
            unique_kinds(&mixed),
            vec![
                TransactionKind::Credit,
                TransactionKind::Other("voucher".into()),
                TransactionKind::Debit,
            ]
        );
    }

    #[test]
    fn descriptions_preserve_journal_order() {
        let journal = sample_journal();
        assert_eq!(
            descriptions(&journal),
            vec!["Grocery shopping", "Salary", "Electronics"]
        );
        assert!(descriptions(&[]).is_empty());
    }

    #[test]
    fn dominant_kind_of_sample_journal_is_debit() {
        assert_eq!(dominant_kind(&sample_journal()), KindDominance::Debit);
    }

    #[test]
    fn dominant_kind_ties_and_empty_journals_are_equal() {
        assert_eq!(dominant_kind(&[]), KindDominance::Equal);

        let balanced = vec![
            tagged(1, TransactionKind::Debit),
            tagged(2, TransactionKind::Credit),
        ];
        assert_eq!(dominant_kind(&balanced), KindDominance::Equal);
    }

    #[test]
    fn other_tags_do_not_vote() {
        let journal = vec![
            tagged(1, TransactionKind::Other("voucher".into())),
            tagged(2, TransactionKind::Other("voucher".into())),
            tagged(3, TransactionKind::Credit),
        ];
        assert_eq!(dominant_kind(&journal), KindDominance::Credit);
    }

    #[test]
    fn dominance_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&KindDominance::Equal).unwrap();
        assert_eq!(json, "\"equal\"");
    }
}
