//! `/api/Dashboard`

use poupai_core::{CategoryTotal, MonthlySummary};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Balance, income and expense totals for one month (1-based)
    pub async fn monthly_summary(&self, user_id: i64, year: i32, month: u32) -> Result<MonthlySummary> {
        self.get_json(
            &format!("/api/Dashboard/resumo/{year}/{month}/usuario/{user_id}"),
            &[],
        )
        .await
    }

    pub async fn spending_by_category(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategoryTotal>> {
        self.get_json(
            &format!("/api/Dashboard/gastosPorCategoria/{year}/{month}/usuario/{user_id}"),
            &[],
        )
        .await
    }
}
