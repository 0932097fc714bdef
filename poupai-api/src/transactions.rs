//! Ledger feed and the create-transaction side channel.

use poupai_core::{RawTransaction, TxnKind, ValidDraft};
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::expenses::{Expense, ExpenseCreate};
use crate::incomes::{Income, IncomeCreate};

/// What a successful create returned
#[derive(Debug, Clone, PartialEq)]
pub enum CreatedTransaction {
    Expense(Expense),
    Income(Income),
}

impl CreatedTransaction {
    pub fn id(&self) -> i64 {
        match self {
            CreatedTransaction::Expense(e) => e.id,
            CreatedTransaction::Income(i) => i.id,
        }
    }
}

impl ApiClient {
    /// Most recent transactions of `user_id`, newest page first.
    pub async fn latest_transactions(
        &self,
        user_id: i64,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<RawTransaction>> {
        self.get_json(
            &format!("/api/Transacao/ultimas/usuario/{user_id}"),
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    /// Create an expense or income from a validated draft.
    pub async fn create_transaction(
        &self,
        draft: &ValidDraft,
        user_id: i64,
    ) -> Result<CreatedTransaction> {
        let created = match draft.kind {
            TxnKind::Expense => CreatedTransaction::Expense(
                self.create_expense(&ExpenseCreate::from_draft(draft, user_id))
                    .await?,
            ),
            TxnKind::Income => CreatedTransaction::Income(
                self.create_income(&IncomeCreate::from_draft(draft, user_id))
                    .await?,
            ),
        };
        info!(id = created.id(), kind = ?draft.kind, "transaction created");
        Ok(created)
    }
}
