//! Monthly dashboard: summary totals and spending share per category.

use serde::{Deserialize, Serialize};

use crate::transaction::amount_from_number_or_string;

const MONTHS: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// `/api/Dashboard/resumo` payload
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    #[serde(rename = "saldo", deserialize_with = "amount_from_number_or_string")]
    pub balance: f64,
    #[serde(rename = "totalreceitas", deserialize_with = "amount_from_number_or_string")]
    pub total_income: f64,
    #[serde(rename = "totaldespesas", deserialize_with = "amount_from_number_or_string")]
    pub total_expenses: f64,
}

/// `/api/Dashboard/gastosPorCategoria` item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(deserialize_with = "amount_from_number_or_string")]
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// 0.0..=1.0 of the month's spending; 0 when nothing was spent
    pub fraction: f64,
    /// Rounded percentage for the pie chart legend
    pub percent: u32,
}

/// Share of each category in the month's spending, in input order.
pub fn category_shares(items: &[CategoryTotal]) -> Vec<CategoryShare> {
    let sum: f64 = items.iter().map(|c| c.total).sum();
    items
        .iter()
        .map(|c| {
            let fraction = if sum > 0.0 { c.total / sum } else { 0.0 };
            CategoryShare {
                category: c.category.clone(),
                total: c.total,
                fraction,
                percent: (fraction * 100.0).round().max(0.0) as u32,
            }
        })
        .collect()
}

/// Month name, 1-based
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// "Outubro 2026"
pub fn period_label(year: i32, month: u32) -> String {
    match month_name(month) {
        Some(m) => format!("{m} {year}"),
        None => year.to_string(),
    }
}
