use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use poupai_core::masks::{mask_date_br, today_br};
use poupai_core::{
    DraftError, FetchTicket, LedgerState, RawTransaction, TransactionDraft, TxnFilter, TxnKind,
    ValidDraft,
};
use tracing::debug;

use crate::Session;
use crate::render;

pub async fn show(
    session: &Session,
    filter: TxnFilter,
    limit: Option<u32>,
    offset: u32,
    json: bool,
) -> Result<()> {
    let limit = limit.unwrap_or(session.config.ledger.page_size);
    let mut ledger = LedgerState::with_filter(filter);
    fetch_into(session, &mut ledger, limit, offset).await?;

    if json {
        let groups = ledger.groups(session.today);
        println!("{}", serde_json::to_string_pretty(&groups).context("serialize ledger")?);
        return Ok(());
    }

    print_ledger(session, &ledger);
    Ok(())
}

async fn fetch_into(
    session: &Session,
    ledger: &mut LedgerState,
    limit: u32,
    offset: u32,
) -> Result<()> {
    let ticket = ledger.begin_fetch();
    let page = session
        .client
        .latest_transactions(session.user_id, limit, offset)
        .await
        .context("load transactions")?;
    debug!(count = page.len(), limit, offset, "ledger page");
    apply_page(ledger, ticket, page)
}

fn apply_page(ledger: &mut LedgerState, ticket: FetchTicket, page: Vec<RawTransaction>) -> Result<()> {
    if !ledger.complete_fetch(ticket, page) {
        bail!("ledger page superseded by a newer request");
    }
    Ok(())
}

fn print_ledger(session: &Session, ledger: &LedgerState) {
    println!("{}\n", render::filter_tabs(ledger.filter(), ledger.counts()));
    let groups = ledger.groups(session.today);
    if groups.is_empty() {
        println!("Nenhuma transação encontrada");
        return;
    }
    for g in &groups {
        println!("{}", render::group_block(g));
    }
}

pub struct AddArgs {
    pub kind: TxnKind,
    pub description: String,
    pub amount: String,
    pub date: Option<String>,
    pub category: Option<String>,
}

/// Build and validate the draft. Date errors quote the argument as typed,
/// not the masked form.
fn validate_args(args: AddArgs, today: NaiveDate) -> Result<ValidDraft, DraftError> {
    let typed_date = args.date.clone();
    let draft = TransactionDraft {
        kind: args.kind,
        description: args.description,
        amount: args.amount,
        date: args
            .date
            .map(|d| mask_date_br(&d))
            .unwrap_or_else(|| today_br(today)),
        category: args.category,
    };
    draft.validate().map_err(|err| match (err, typed_date) {
        (DraftError::InvalidDate(_), Some(typed)) => DraftError::InvalidDate(typed),
        (err, _) => err,
    })
}

pub async fn add(session: &Session, args: AddArgs) -> Result<()> {
    let valid = validate_args(args, session.today)?;

    let created = session
        .client
        .create_transaction(&valid, session.user_id)
        .await
        .with_context(|| format!("create {}", valid.kind.label().to_lowercase()))?;
    println!("{} #{} criada\n", valid.kind.label(), created.id());

    let mut ledger = LedgerState::new();
    fetch_into(session, &mut ledger, session.config.ledger.page_size, 0).await?;
    print_ledger(session, &ledger);
    Ok(())
}

pub async fn delete(session: &Session, kind: TxnKind, id: i64) -> Result<()> {
    if id <= 0 {
        bail!("invalid id {id}");
    }
    match kind {
        TxnKind::Expense => session.client.delete_expense(id).await,
        TxnKind::Income => session.client.delete_income(id).await,
    }
    .with_context(|| format!("delete {} #{id}", kind.label().to_lowercase()))?;
    println!("{} #{id} removida", kind.label());
    Ok(())
}
