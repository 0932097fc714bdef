//! Savings goals ("metas") and their progress bars

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::masks::{parse_brl, parse_date_br};
use crate::transaction::amount_from_number_or_string;

#[derive(Debug, Error, PartialEq)]
pub enum GoalError {
    #[error("goal name is required")]
    MissingName,

    #[error("target amount must be greater than zero: {0}")]
    InvalidTarget(String),

    #[error("invalid deadline, use dd/mm/aaaa: {0}")]
    InvalidDeadline(String),

    #[error("amount must be greater than zero: {0}")]
    InvalidAmount(String),
}

/// A goal as stored by `/api/Meta`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valorAlvo", deserialize_with = "amount_from_number_or_string")]
    pub target: f64,
    #[serde(rename = "valorAtual", deserialize_with = "amount_from_number_or_string")]
    pub current: f64,
    /// Deadline, ISO date
    #[serde(rename = "data")]
    pub deadline: String,
    #[serde(rename = "atingida", default)]
    pub reached: bool,
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
}

impl Goal {
    pub fn progress(&self) -> GoalProgress {
        GoalProgress::of(self.target, self.current, self.reached)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// 0..=100
    pub percent: u8,
    pub remaining: f64,
    pub reached: bool,
}

impl GoalProgress {
    pub fn of(target: f64, current: f64, reached: bool) -> Self {
        let percent = if target > 0.0 {
            (current / target * 100.0).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self {
            percent,
            remaining: (target - current).max(0.0),
            reached,
        }
    }
}

/// Money moved into or out of a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalAdjustment {
    Deposit(f64),
    Withdraw(f64),
}

impl GoalAdjustment {
    /// Parse a masked amount (`1.234,56`) into an adjustment
    pub fn parse(input: &str, deposit: bool) -> Result<Self, GoalError> {
        let amount = parse_brl(input)
            .filter(|v| *v > 0.0)
            .ok_or_else(|| GoalError::InvalidAmount(input.to_string()))?;
        Ok(if deposit {
            GoalAdjustment::Deposit(amount)
        } else {
            GoalAdjustment::Withdraw(amount)
        })
    }

    /// Signed delta for `PATCH /api/Meta/{id}/valor`
    pub fn delta(&self) -> f64 {
        match self {
            GoalAdjustment::Deposit(v) => *v,
            GoalAdjustment::Withdraw(v) => -*v,
        }
    }
}

/// "Nova meta" form input
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    /// Masked amount
    pub target: String,
    /// `dd/mm/yyyy`
    pub deadline: String,
}

impl NewGoal {
    /// Validate and build the goal to create. The backend assigns the id.
    pub fn into_goal(self, user_id: i64) -> Result<Goal, GoalError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(GoalError::MissingName);
        }
        let target = parse_brl(&self.target)
            .filter(|v| *v > 0.0)
            .ok_or_else(|| GoalError::InvalidTarget(self.target.clone()))?;
        let deadline: NaiveDate = parse_date_br(&self.deadline)
            .ok_or_else(|| GoalError::InvalidDeadline(self.deadline.clone()))?;

        Ok(Goal {
            id: 0,
            description: name.to_string(),
            target,
            current: 0.0,
            deadline: deadline.format("%Y-%m-%d").to_string(),
            reached: false,
            user_id,
        })
    }
}
