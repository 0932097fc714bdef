use chrono::NaiveDate;
use poupai_core::{
    IconId, LedgerState, RawTransaction, TxnFilter, TxnKind, apply_filter, classify,
    group_by_day, normalize_all,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// A page of `/api/Transacao/ultimas` as the backend returns it
fn backend_page() -> Vec<RawTransaction> {
    let json = r#"[
        {"id": 1, "descricao": "Salário", "valor": 4500.0, "data": "2026-10-06T08:00:00", "tipo": "Receita"},
        {"id": 2, "descricao": "Padaria", "valor": 12.5, "data": "2026-10-16T10:00:00", "tipo": "Alimentação"},
        {"id": 3, "descricao": "Cinema", "valor": 40.0, "data": "2026-10-15T21:00:00", "tipo": "Lazer"},
        {"id": 4, "valor": 250.0, "data": "2026-10-16T14:00:00", "tipo": "entrada"},
        {"id": 5, "descricao": "Uber", "valor": "23.90", "data": "2026-10-15T08:30:00", "tipo": "Transporte"},
        {"id": 6, "descricao": "Importado", "valor": 9.99, "data": "??", "tipo": "Pets"}
    ]"#;
    serde_json::from_str(json).unwrap()
}

fn ids<'a>(items: impl IntoIterator<Item = &'a poupai_core::NormalizedTransaction>) -> Vec<i64> {
    items.into_iter().map(|t| t.id()).collect()
}

#[test]
fn test_groups_are_newest_first() {
    let groups = group_by_day(normalize_all(&backend_page()), today());

    let labels: Vec<&str> = groups.iter().map(|g| g.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Hoje, 16 de outubro",
            "Ontem, 15 de outubro",
            "terça-feira, 06 de outubro",
            "Data inválida",
        ]
    );

    // 14:00 before 10:00 on the same day
    assert_eq!(ids(groups[0].items()), vec![4, 2]);
    assert_eq!(ids(groups[1].items()), vec![3, 5]);
}

#[test]
fn test_grouping_partitions_input() {
    let raw = backend_page();
    let groups = group_by_day(apply_filter(normalize_all(&raw), TxnFilter::All), today());

    let mut seen: Vec<i64> = groups.iter().flat_map(|g| ids(g.items())).collect();
    seen.sort();
    let mut expected: Vec<i64> = raw.iter().map(|r| r.id).collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn test_grouping_is_stable_across_runs() {
    let raw = backend_page();
    let a = group_by_day(normalize_all(&raw), today());
    let b = group_by_day(normalize_all(&raw), today());
    assert_eq!(a, b);
}

#[test]
fn test_income_filter_keeps_order() {
    let raw = backend_page();
    let income = apply_filter(normalize_all(&raw), TxnFilter::Income);

    assert_eq!(ids(&income), vec![1, 4]);
    for (t, r) in income.iter().zip(raw.iter().filter(|r| r.id == 1 || r.id == 4)) {
        assert_eq!(classify(r.kind_hint.as_deref()), TxnKind::Income);
        assert_eq!(t.icon(), IconId::Currency);
    }
}

#[test]
fn test_normalization_details() {
    let all = normalize_all(&backend_page());
    assert_eq!(all.len(), 6);

    let unlabeled_income = all.iter().find(|t| t.id() == 4).unwrap();
    assert_eq!(unlabeled_income.description(), "Receita");
    assert_eq!(unlabeled_income.title(), "Receita");

    let unknown = all.iter().find(|t| t.id() == 6).unwrap();
    assert_eq!(unknown.category(), "Pets");
    assert_eq!(unknown.icon(), IconId::Bag);

    let ride = all.iter().find(|t| t.id() == 5).unwrap();
    assert_eq!(ride.amount(), 23.9);
    assert_eq!(ride.icon(), IconId::Cart);
}

#[test]
fn test_three_days_ordered() {
    let json = r#"[
        {"id": 10, "valor": 1, "data": "2026-10-06", "tipo": "Lazer"},
        {"id": 11, "valor": 1, "data": "2026-10-16", "tipo": "Lazer"},
        {"id": 12, "valor": 1, "data": "2026-10-15", "tipo": "Lazer"}
    ]"#;
    let raw: Vec<RawTransaction> = serde_json::from_str(json).unwrap();
    let groups = group_by_day(normalize_all(&raw), today());

    let days: Vec<Option<NaiveDate>> = groups.iter().map(|g| g.day()).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2026, 10, 16),
            NaiveDate::from_ymd_opt(2026, 10, 15),
            NaiveDate::from_ymd_opt(2026, 10, 6),
        ]
    );
}

#[test]
fn test_ledger_state_end_to_end() {
    let mut state = LedgerState::with_filter(TxnFilter::Expense);
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();
    assert!(state.complete_fetch(fresh, backend_page()));
    assert!(!state.complete_fetch(stale, Vec::new()));

    let groups = state.groups(today());
    let total: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(total, 4);
    assert!(groups.iter().flat_map(|g| g.items()).all(|t| t.kind() == TxnKind::Expense));

    let counts = state.counts();
    assert_eq!((counts.all, counts.income, counts.expense), (6, 2, 4));
}
