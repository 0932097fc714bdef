//! Ledger filter (Todos / Receitas / Despesas).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transaction::{NormalizedTransaction, TxnKind};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxnFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TxnFilter {
    pub fn matches(&self, kind: TxnKind) -> bool {
        match self {
            TxnFilter::All => true,
            TxnFilter::Income => kind == TxnKind::Income,
            TxnFilter::Expense => kind == TxnKind::Expense,
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            TxnFilter::All => "Todos",
            TxnFilter::Income => "Receitas",
            TxnFilter::Expense => "Despesas",
        }
    }
}

impl fmt::Display for TxnFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TxnFilter::All => "all",
            TxnFilter::Income => "income",
            TxnFilter::Expense => "expense",
        };
        f.write_str(s)
    }
}

impl FromStr for TxnFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(TxnFilter::All),
            "income" | "receitas" | "entrada" => Ok(TxnFilter::Income),
            "expense" | "despesas" | "saida" => Ok(TxnFilter::Expense),
            other => Err(format!(
                "unknown filter '{other}' (expected all, income or expense)"
            )),
        }
    }
}

/// Keep the transactions matching `filter`, in their original order.
pub fn apply_filter(
    transactions: impl IntoIterator<Item = NormalizedTransaction>,
    filter: TxnFilter,
) -> Vec<NormalizedTransaction> {
    transactions
        .into_iter()
        .filter(|t| filter.matches(t.kind()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_names() {
        assert_eq!("all".parse::<TxnFilter>(), Ok(TxnFilter::All));
        assert_eq!("Receitas".parse::<TxnFilter>(), Ok(TxnFilter::Income));
        assert_eq!("saida".parse::<TxnFilter>(), Ok(TxnFilter::Expense));
        assert!("both".parse::<TxnFilter>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for f in [TxnFilter::All, TxnFilter::Income, TxnFilter::Expense] {
            assert_eq!(f.to_string().parse::<TxnFilter>(), Ok(f));
        }
    }

    #[test]
    fn test_matches() {
        assert!(TxnFilter::All.matches(TxnKind::Income));
        assert!(TxnFilter::Income.matches(TxnKind::Income));
        assert!(!TxnFilter::Income.matches(TxnKind::Expense));
        assert!(TxnFilter::Expense.matches(TxnKind::Expense));
    }
}
