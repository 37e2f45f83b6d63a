use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier supplied by the data producer.
///
/// Uniqueness within a journal is the producer's contract; the library never
/// mints or checks ids.
pub type TransactionId = u32;

/// A single money movement observed on a card.
///
/// Records are immutable once built: every query borrows them and returns
/// derived values, nothing in this crate writes a journal back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    /// Non-negative, currency-agnostic magnitude of the movement.
    pub amount: f64,
    pub kind: TransactionKind,
    pub description: String,
    pub merchant: String,
    pub card: CardKind,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        description: impl Into<String>,
        merchant: impl Into<String>,
        card: CardKind,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            kind,
            description: description.into(),
            merchant: merchant.into(),
            card,
        }
    }
}

/// Movement direction tag.
///
/// The wire form is the bare lowercase tag, so the two well-known values stay
/// `"debit"` / `"credit"`; any other tag round-trips verbatim through
/// [`TransactionKind::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Debit,
    Credit,
    Other(String),
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
            TransactionKind::Other(tag) => tag,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionKind::Debit)
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Credit)
    }
}

impl From<String> for TransactionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "debit" => TransactionKind::Debit,
            "credit" => TransactionKind::Credit,
            _ => TransactionKind::Other(tag),
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card rail the movement was made on.
///
/// Shares the tag vocabulary of [`TransactionKind`] but is an independent
/// attribute of the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum CardKind {
    Debit,
    Credit,
    Other(String),
}

impl CardKind {
    pub fn as_str(&self) -> &str {
        match self {
            CardKind::Debit => "debit",
            CardKind::Credit => "credit",
            CardKind::Other(tag) => tag,
        }
    }
}

impl From<String> for CardKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "debit" => CardKind::Debit,
            "credit" => CardKind::Credit,
            _ => CardKind::Other(tag),
        }
    }
}

impl From<&str> for CardKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<CardKind> for String {
    fn from(card: CardKind) -> Self {
        match card {
            CardKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
