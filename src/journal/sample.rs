use chrono::NaiveDate;

use super::{CardKind, Transaction, TransactionKind};

/// Built-in demo journal used by the CLI walkthrough and the test suite.
pub fn sample_journal() -> Vec<Transaction> {
    vec![
        Transaction::new(
            1,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            150.0,
            TransactionKind::Debit,
            "Grocery shopping",
            "SuperMarket",
            CardKind::Debit,
        ),
        Transaction::new(
            2,
            NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date"),
            2000.0,
            TransactionKind::Credit,
            "Salary",
            "Company",
            CardKind::Debit,
        ),
        Transaction::new(
            3,
            NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date"),
            300.0,
            TransactionKind::Debit,
            "Electronics",
            "TechStore",
            CardKind::Credit,
        ),
    ]
}
