//! `/api/Receita`

use poupai_core::ValidDraft;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeCreate {
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
}

impl IncomeCreate {
    pub fn from_draft(draft: &ValidDraft, user_id: i64) -> Self {
        Self {
            description: Some(draft.description.clone()),
            amount: draft.amount,
            date: draft.iso_date(),
            user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: i64,
    #[serde(flatten)]
    pub fields: IncomeCreate,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct IncomeUpdate {
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "valor", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ApiClient {
    pub async fn create_income(&self, body: &IncomeCreate) -> Result<Income> {
        self.post_json("/api/Receita", body).await
    }

    pub async fn list_incomes(&self, user_id: Option<i64>) -> Result<Vec<Income>> {
        let query: Vec<(&str, String)> = user_id
            .map(|id| vec![("usuarioId", id.to_string())])
            .unwrap_or_default();
        self.get_json("/api/Receita", &query).await
    }

    pub async fn update_income(&self, id: i64, body: &IncomeUpdate) -> Result<Income> {
        self.put_json(&format!("/api/Receita/{id}"), body).await
    }

    pub async fn delete_income(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/Receita/{id}")).await
    }
}
