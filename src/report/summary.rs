use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::journal::{Transaction, TransactionKind};
use crate::query::{
    average_amount, busiest_debit_month, busiest_month, dominant_kind, total_amount,
    total_debit_amount, unique_kinds, KindDominance,
};

use super::format::{format_amount, format_date, month_name};
use super::table::{Table, TableColumn};

/// Aggregated view of a journal, one call per headline number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalSummary {
    pub transaction_count: usize,
    pub unique_kinds: Vec<TransactionKind>,
    pub total_amount: f64,
    pub average_amount: f64,
    pub total_debit_amount: f64,
    pub busiest_month: Option<u32>,
    pub busiest_debit_month: Option<u32>,
    pub dominant_kind: KindDominance,
}

impl JournalSummary {
    pub fn from_journal(journal: &[Transaction]) -> Self {
        Self {
            transaction_count: journal.len(),
            unique_kinds: unique_kinds(journal),
            total_amount: total_amount(journal),
            average_amount: average_amount(journal),
            total_debit_amount: total_debit_amount(journal),
            busiest_month: busiest_month(journal),
            busiest_debit_month: busiest_debit_month(journal),
            dominant_kind: dominant_kind(journal),
        }
    }
}

/// Renders the journal as a listing table.
pub fn render_listing(journal: &[Transaction], config: &Config) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("Id"),
        TableColumn::left("Date"),
        TableColumn::right("Amount"),
        TableColumn::left("Kind"),
        TableColumn::left("Description"),
        TableColumn::left("Merchant"),
        TableColumn::left("Card"),
    ]);
    for transaction in journal {
        table.push_row(vec![
            transaction.id.to_string(),
            format_date(transaction.date, config.date_style),
            format_amount(transaction.amount, &config.currency),
            transaction.kind.to_string(),
            transaction.description.clone(),
            transaction.merchant.clone(),
            transaction.card.to_string(),
        ]);
    }
    table.render()
}

/// Renders the headline numbers as labelled lines.
pub fn render_summary(summary: &JournalSummary, config: &Config) -> String {
    let kinds: Vec<&str> = summary
        .unique_kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect();
    let lines = vec![
        format!("Transactions      {}", summary.transaction_count),
        format!("Kinds seen        {}", kinds.join(", ")),
        format!(
            "Total amount      {}",
            format_amount(summary.total_amount, &config.currency)
        ),
        format!(
            "Average amount    {}",
            format_amount(summary.average_amount, &config.currency)
        ),
        format!(
            "Debit total       {}",
            format_amount(summary.total_debit_amount, &config.currency)
        ),
        format!("Busiest month     {}", label_month(summary.busiest_month)),
        format!(
            "Busiest debit     {}",
            label_month(summary.busiest_debit_month)
        ),
        format!("Dominant kind     {}", summary.dominant_kind),
    ];
    lines.join("\n")
}

fn label_month(month: Option<u32>) -> String {
    match month {
        Some(month) => format!("{} ({})", month_name(month), month),
        None => "n/a".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::sample_journal;

    #[test]
    fn summary_of_sample_journal() {
        let summary = JournalSummary::from_journal(&sample_journal());
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(
            summary.unique_kinds,
            vec![TransactionKind::Debit, TransactionKind::Credit]
        );
        assert_eq!(summary.total_amount, 2450.0);
        assert_eq!(summary.total_debit_amount, 450.0);
        assert_eq!(summary.busiest_month, Some(2));
        assert_eq!(summary.busiest_debit_month, Some(1));
        assert_eq!(summary.dominant_kind, KindDominance::Debit);
    }

    #[test]
    fn summary_of_empty_journal_uses_neutral_values() {
        let summary = JournalSummary::from_journal(&[]);
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.unique_kinds.is_empty());
        assert_eq!(summary.total_amount, 0.0);
        assert_eq!(summary.average_amount, 0.0);
        assert_eq!(summary.busiest_month, None);
        assert_eq!(summary.busiest_debit_month, None);
        assert_eq!(summary.dominant_kind, KindDominance::Equal);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = JournalSummary::from_journal(&sample_journal());
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["transaction_count"], 3);
        assert_eq!(json["total_amount"], 2450.0);
        assert_eq!(json["busiest_month"], 2);
        assert_eq!(json["dominant_kind"], "debit");
        assert_eq!(json["unique_kinds"][0], "debit");
    }

    #[test]
    fn rendered_listing_includes_every_record() {
        let config = Config::default();
        let listing = render_listing(&sample_journal(), &config);
        assert!(listing.contains("SuperMarket"));
        assert!(listing.contains("$2,000.00"));
        assert!(listing.contains("10 Feb 2024"));
    }

    #[test]
    fn rendered_summary_reads_as_labelled_lines() {
        let config = Config::default();
        let summary = JournalSummary::from_journal(&sample_journal());
        let text = render_summary(&summary, &config);
        assert!(text.contains("Total amount      $2,450.00"));
        assert!(text.contains("Busiest month     February (2)"));
        assert!(text.contains("Busiest debit     January (1)"));
        assert!(text.contains("Dominant kind     debit"));
    }

    #[test]
    fn rendered_summary_of_empty_journal_uses_zero_and_not_available() {
        let config = Config::default();
        let summary = JournalSummary::from_journal(&[]);
        let text = render_summary(&summary, &config);
        assert!(text.contains("Average amount    $0.00"));
        assert!(text.contains("Busiest month     n/a"));
        assert!(text.contains("Busiest debit     n/a"));
    }
}
