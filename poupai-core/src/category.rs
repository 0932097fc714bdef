//! Expense category catalog and icon resolution.

use serde::{Deserialize, Serialize};

use crate::transaction::TxnKind;

/// Glyph shown next to a ledger entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IconId {
    #[serde(rename = "dollar-sign")]
    Currency,
    #[serde(rename = "shopping-cart")]
    Cart,
    #[serde(rename = "coffee")]
    Coffee,
    #[serde(rename = "shopping-bag")]
    Bag,
}

impl IconId {
    /// Feather glyph name
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Currency => "dollar-sign",
            IconId::Cart => "shopping-cart",
            IconId::Coffee => "coffee",
            IconId::Bag => "shopping-bag",
        }
    }
}

/// An expense category known to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    pub name: &'static str,
    /// `categoriaId` on the backend
    pub id: u32,
    pub icon: IconId,
}

/// The backend's expense categories, in picker order.
pub const CATALOG: &[CategoryDef] = &[
    CategoryDef { name: "Alimentação", id: 1, icon: IconId::Cart },
    CategoryDef { name: "Transporte", id: 2, icon: IconId::Cart },
    CategoryDef { name: "Saúde", id: 3, icon: IconId::Cart },
    CategoryDef { name: "Lazer", id: 4, icon: IconId::Coffee },
    CategoryDef { name: "Viagem", id: 5, icon: IconId::Cart },
];

/// Category used when a picked name is not in the catalog
pub const DEFAULT_CATEGORY_ID: u32 = 1;

/// Exact, case-sensitive catalog lookup.
pub fn find_category(name: &str) -> Option<&'static CategoryDef> {
    CATALOG.iter().find(|c| c.name == name)
}

pub fn category_id(name: &str) -> u32 {
    find_category(name).map(|c| c.id).unwrap_or(DEFAULT_CATEGORY_ID)
}

/// Icon for an expense category; unknown names get the bag.
pub fn icon_for(category: &str) -> IconId {
    find_category(category).map(|c| c.icon).unwrap_or(IconId::Bag)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    pub category: String,
    pub icon: IconId,
}

/// Resolve the display category and icon of a record.
///
/// Priority: explicit `categoria` > trimmed `tipo` (expenses only) > empty.
/// Income always shows the currency icon.
pub fn resolve_category(
    explicit: Option<&str>,
    kind_hint: Option<&str>,
    kind: TxnKind,
) -> ResolvedCategory {
    let category = match explicit {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => match kind {
            TxnKind::Expense => kind_hint.unwrap_or("").trim().to_string(),
            TxnKind::Income => String::new(),
        },
    };

    let icon = match kind {
        TxnKind::Income => IconId::Currency,
        TxnKind::Expense => icon_for(&category),
    };

    ResolvedCategory { category, icon }
}
