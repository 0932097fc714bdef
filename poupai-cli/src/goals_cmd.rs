use anyhow::{Context, Result};
use poupai_core::masks::mask_date_br;
use poupai_core::{GoalAdjustment, NewGoal};
use tracing::info;

use crate::Session;
use crate::render;

pub async fn list(session: &Session) -> Result<()> {
    let goals = session
        .client
        .goals(session.user_id)
        .await
        .context("load goals")?;
    if goals.is_empty() {
        println!("Nenhuma meta cadastrada");
        return Ok(());
    }
    for g in &goals {
        println!("{}", render::goal_block(g));
    }
    Ok(())
}

pub async fn create(session: &Session, name: String, target: String, deadline: String) -> Result<()> {
    let goal = NewGoal {
        name,
        target,
        deadline: mask_date_br(&deadline),
    }
    .into_goal(session.user_id)?;

    let created = session
        .client
        .create_goal(&goal)
        .await
        .context("create goal")?;
    info!(id = created.id, "goal created");
    print!("{}", render::goal_block(&created));
    Ok(())
}

pub async fn adjust(session: &Session, goal_id: i64, amount: &str, deposit: bool) -> Result<()> {
    let adjustment = GoalAdjustment::parse(amount, deposit)?;
    let updated = session
        .client
        .adjust_goal(goal_id, adjustment)
        .await
        .with_context(|| format!("update goal #{goal_id}"))?;
    print!("{}", render::goal_block(&updated));
    Ok(())
}

pub async fn remove(session: &Session, goal_id: i64) -> Result<()> {
    session
        .client
        .remove_goal(goal_id)
        .await
        .with_context(|| format!("remove goal #{goal_id}"))?;
    println!("Meta #{goal_id} removida");
    Ok(())
}
