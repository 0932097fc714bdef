use anyhow::{Context, Result, bail};
use chrono::Datelike;
use poupai_core::{category_shares, period_label};

use crate::Session;
use crate::render;

pub async fn show(session: &Session, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let year = year.unwrap_or_else(|| session.today.year());
    let month = month.unwrap_or_else(|| session.today.month());
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {month}");
    }

    let (summary, totals) = tokio::try_join!(
        session.client.monthly_summary(session.user_id, year, month),
        session.client.spending_by_category(session.user_id, year, month),
    )
    .context("load dashboard")?;

    print!("{}", render::summary_block(&period_label(year, month), &summary));
    println!("\nGastos por categoria");
    print!("{}", render::shares_block(&category_shares(&totals)));
    Ok(())
}
