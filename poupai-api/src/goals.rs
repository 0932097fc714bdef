//! `/api/Meta`

use poupai_core::{Goal, GoalAdjustment};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn goals(&self, user_id: i64) -> Result<Vec<Goal>> {
        self.get_json(&format!("/api/Meta/usuario/{user_id}"), &[])
            .await
    }

    pub async fn create_goal(&self, goal: &Goal) -> Result<Goal> {
        self.post_json("/api/Meta", goal).await
    }

    /// Move money into or out of a goal; returns the updated goal.
    pub async fn adjust_goal(&self, goal_id: i64, adjustment: GoalAdjustment) -> Result<Goal> {
        self.patch_json(
            &format!("/api/Meta/{goal_id}/valor"),
            &[("delta", adjustment.delta().to_string())],
        )
        .await
    }

    pub async fn remove_goal(&self, goal_id: i64) -> Result<()> {
        self.delete(&format!("/api/Meta/{goal_id}")).await
    }
}
