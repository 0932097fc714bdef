//! `/api/Despesa`

use poupai_core::ValidDraft;
use poupai_core::category::DEFAULT_CATEGORY_ID;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseCreate {
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub amount: f64,
    /// ISO date
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
    #[serde(rename = "categoriaId")]
    pub category_id: u32,
}

impl ExpenseCreate {
    pub fn from_draft(draft: &ValidDraft, user_id: i64) -> Self {
        Self {
            description: Some(draft.description.clone()),
            amount: draft.amount,
            date: draft.iso_date(),
            user_id,
            category_id: draft.category_id.unwrap_or(DEFAULT_CATEGORY_ID),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: i64,
    #[serde(flatten)]
    pub fields: ExpenseCreate,
}

/// Partial update; unset fields are left out of the body
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExpenseUpdate {
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "valor", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "categoriaId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
}

impl ApiClient {
    pub async fn create_expense(&self, body: &ExpenseCreate) -> Result<Expense> {
        self.post_json("/api/Despesa", body).await
    }

    /// All expenses, or only those of `user_id`
    pub async fn list_expenses(&self, user_id: Option<i64>) -> Result<Vec<Expense>> {
        let query: Vec<(&str, String)> = user_id
            .map(|id| vec![("usuarioId", id.to_string())])
            .unwrap_or_default();
        self.get_json("/api/Despesa", &query).await
    }

    pub async fn update_expense(&self, id: i64, body: &ExpenseUpdate) -> Result<Expense> {
        self.put_json(&format!("/api/Despesa/{id}"), body).await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/Despesa/{id}")).await
    }
}
