//! Raw ledger records and their normalized rendering model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::category::{IconId, resolve_category};
use crate::time::{parse_instant, parse_timestamp};

/// A transaction as returned by `/api/Transacao/ultimas`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawTransaction {
    pub id: i64,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "valor", deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,
    /// ISO-8601 date or date-time, kept verbatim
    #[serde(rename = "data", default)]
    pub date: String,
    /// Free-form type hint; legacy records put the category name here
    #[serde(rename = "tipo", default)]
    pub kind_hint: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Income or expense
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxnKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TxnKind {
    /// Generic label used when a record has no category or description
    pub fn label(&self) -> &'static str {
        match self {
            TxnKind::Income => "Receita",
            TxnKind::Expense => "Despesa",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            TxnKind::Income => "+",
            TxnKind::Expense => "-",
        }
    }
}

const INCOME_HINTS: [&str; 5] = ["receita", "entrada", "credito", "credit", "income"];

/// Classify a raw `tipo` string.
///
/// Only the allow-listed income words (compared after trimming, lowercasing
/// and stripping diacritics) count as income; everything else is an expense.
pub fn classify(raw_kind: Option<&str>) -> TxnKind {
    let Some(raw) = raw_kind else {
        return TxnKind::Expense;
    };

    let folded: String = raw
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    if INCOME_HINTS.contains(&folded.as_str()) {
        TxnKind::Income
    } else {
        TxnKind::Expense
    }
}

/// Render-ready view of a [`RawTransaction`]. Built once, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizedTransaction {
    id: i64,
    kind: TxnKind,
    category: String,
    amount: f64,
    description: String,
    icon: IconId,
    date: String,
    #[serde(skip)]
    timestamp: Option<NaiveDateTime>,
    #[serde(skip)]
    instant: Option<NaiveDateTime>,
}

impl NormalizedTransaction {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn kind(&self) -> TxnKind {
        self.kind
    }

    /// Resolved category; empty for income without an explicit category
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> IconId {
        self.icon
    }

    /// The source date string, untouched
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parsed local timestamp, `None` when the date string is unparseable
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Ordering key within a day; see [`parse_instant`]
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    /// Calendar day used as the grouping key
    pub fn day(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// Card title: the category, or the generic kind label
    pub fn title(&self) -> &str {
        if self.category.is_empty() {
            self.kind.label()
        } else {
            &self.category
        }
    }
}

/// Normalize a single raw record. Total: every record yields exactly one output.
pub fn normalize(raw: &RawTransaction) -> NormalizedTransaction {
    let kind = classify(raw.kind_hint.as_deref());
    let resolved = resolve_category(raw.category.as_deref(), raw.kind_hint.as_deref(), kind);

    let description = match raw.description.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => kind.label().to_string(),
    };

    NormalizedTransaction {
        id: raw.id,
        kind,
        category: resolved.category,
        amount: raw.amount,
        description,
        icon: resolved.icon,
        date: raw.date.clone(),
        timestamp: parse_timestamp(&raw.date),
        instant: parse_instant(&raw.date),
    }
}

pub fn normalize_all(raw: &[RawTransaction]) -> Vec<NormalizedTransaction> {
    raw.iter().map(normalize).collect()
}

/// Backend amounts arrive as JSON numbers, but decimal columns are sometimes
/// serialized as strings.
pub(crate) fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{s}': {e}"))),
    }
}
