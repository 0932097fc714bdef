//! New-transaction drafts: masked user input turned into a create request.

use chrono::NaiveDate;
use thiserror::Error;

use crate::category::category_id;
use crate::masks::{parse_brl, parse_date_br};
use crate::transaction::TxnKind;

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("description, amount and date are required (and category for expenses)")]
    MissingFields,

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid date, use dd/mm/aaaa: {0}")]
    InvalidDate(String),
}

/// Raw form values as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TxnKind,
    pub description: String,
    /// Masked amount, e.g. `1.234,56`
    pub amount: String,
    /// `dd/mm/yyyy`
    pub date: String,
    /// Expense category name; ignored for income
    pub category: Option<String>,
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub kind: TxnKind,
    pub description: String,
    /// Always non-negative; the kind carries the direction
    pub amount: f64,
    pub date: NaiveDate,
    /// Backend `categoriaId`, expenses only
    pub category_id: Option<u32>,
}

impl ValidDraft {
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl TransactionDraft {
    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        if self.description.trim().is_empty()
            || self.amount.trim().is_empty()
            || self.date.trim().is_empty()
            || (self.kind == TxnKind::Expense && category.is_none())
        {
            return Err(DraftError::MissingFields);
        }

        let amount = parse_brl(&self.amount)
            .ok_or_else(|| DraftError::InvalidAmount(self.amount.clone()))?;
        let date =
            parse_date_br(&self.date).ok_or_else(|| DraftError::InvalidDate(self.date.clone()))?;

        let category_id = match self.kind {
            TxnKind::Expense => category.map(category_id),
            TxnKind::Income => None,
        };

        Ok(ValidDraft {
            kind: self.kind,
            description: self.description.trim().to_string(),
            amount: amount.abs(),
            date,
            category_id,
        })
    }
}
