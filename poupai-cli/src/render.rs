//! Plain-text rendering for the terminal.

use poupai_core::masks::{format_brl, iso_to_br};
use poupai_core::{CategoryShare, DayGroup, FilterCounts, Goal, MonthlySummary, NormalizedTransaction, TxnFilter};

const BAR_WIDTH: usize = 20;

pub fn transaction_line(t: &NormalizedTransaction) -> String {
    format!(
        "  #{:<5} [{}] {:<14} {:<24} {}{}",
        t.id(),
        t.icon().as_str(),
        t.title(),
        t.description(),
        t.kind().sign(),
        format_brl(t.amount().abs())
    )
}

pub fn group_block(group: &DayGroup) -> String {
    let mut out = format!("{}\n", group.label());
    for t in group.items() {
        out.push_str(&transaction_line(t));
        out.push('\n');
    }
    out
}

pub fn filter_tabs(active: TxnFilter, counts: FilterCounts) -> String {
    [
        (TxnFilter::All, counts.all),
        (TxnFilter::Income, counts.income),
        (TxnFilter::Expense, counts.expense),
    ]
    .iter()
    .map(|(f, n)| {
        if *f == active {
            format!("[{} ({n})]", f.label())
        } else {
            format!(" {} ({n}) ", f.label())
        }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH) / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

pub fn goal_block(goal: &Goal) -> String {
    let p = goal.progress();
    let status = if p.reached {
        "atingida".to_string()
    } else {
        format!("faltam {}", format_brl(p.remaining))
    };
    format!(
        "#{} {} (até {})\n  {} de {}\n  {} {}\n",
        goal.id,
        goal.description,
        iso_to_br(&goal.deadline),
        format_brl(goal.current),
        format_brl(goal.target),
        progress_bar(p.percent),
        status
    )
}

pub fn summary_block(period: &str, summary: &MonthlySummary) -> String {
    format!(
        "{period}\n  Saldo:    {}\n  Receitas: {}\n  Despesas: {}\n",
        format_brl(summary.balance),
        format_brl(summary.total_income),
        format_brl(summary.total_expenses)
    )
}

pub fn shares_block(shares: &[CategoryShare]) -> String {
    if shares.is_empty() {
        return "  Sem gastos no período\n".to_string();
    }
    let mut out = String::new();
    for s in shares {
        out.push_str(&format!(
            "  {:<14} {:>14}  {:>3}%\n",
            s.category,
            format_brl(s.total),
            s.percent
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use poupai_core::{RawTransaction, normalize};

    fn raw(id: i64, kind: &str, amount: f64) -> RawTransaction {
        RawTransaction {
            id,
            description: Some("Mercado".to_string()),
            amount,
            date: "2026-10-16T09:00:00".to_string(),
            kind_hint: Some(kind.to_string()),
            category: None,
        }
    }

    #[test]
    fn test_transaction_line_sign_and_amount() {
        let line = transaction_line(&normalize(&raw(7, "Alimentação", 1234.5)));
        assert!(line.contains("#7"));
        assert!(line.contains("shopping-cart"));
        assert!(line.contains("Alimentação"));
        assert!(line.ends_with("-R$ 1.234,50"));

        let line = transaction_line(&normalize(&raw(8, "Receita", 50.0)));
        assert!(line.ends_with("+R$ 50,00"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", "-".repeat(20)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(20)));
        assert!(progress_bar(50).starts_with("[##########----------]"));
    }

    #[test]
    fn test_filter_tabs_marks_active() {
        let counts = FilterCounts {
            all: 6,
            income: 2,
            expense: 4,
        };
        let tabs = filter_tabs(TxnFilter::Income, counts);
        assert!(tabs.contains(&format!("[{} (2)]", TxnFilter::Income.label())));
        assert!(tabs.contains(&format!(" {} (6) ", TxnFilter::All.label())));
    }

    #[test]
    fn test_goal_block() {
        let goal = Goal {
            id: 5,
            description: "Viagem".to_string(),
            target: 2000.0,
            current: 500.0,
            deadline: "2027-01-31".to_string(),
            reached: false,
            user_id: 1,
        };
        let text = goal_block(&goal);
        assert!(text.contains("#5 Viagem (até 31/01/2027)"));
        assert!(text.contains("R$ 500,00 de R$ 2.000,00"));
        assert!(text.contains(" 25%"));
        assert!(text.contains("faltam R$ 1.500,00"));
    }

    #[test]
    fn test_empty_shares() {
        assert_eq!(shares_block(&[]), "  Sem gastos no período\n");
    }
}
