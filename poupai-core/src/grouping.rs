//! Day grouping for the ledger view.
//!
//! Buckets are keyed by calendar day, not by the rendered label, so two
//! different days can never merge under one heading.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::day_label::{INVALID_DATE_LABEL, label_for_day};
use crate::transaction::NormalizedTransaction;

/// Transactions rendered under one date heading
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayGroup {
    day: Option<NaiveDate>,
    label: String,
    items: Vec<NormalizedTransaction>,
}

impl DayGroup {
    /// Calendar day of the bucket; `None` for unparseable dates
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Items, most recent first
    pub fn items(&self) -> &[NormalizedTransaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn newest(&self) -> Option<NaiveDateTime> {
        self.items.first().and_then(|t| t.timestamp())
    }
}

/// Group transactions by day, newest day first, newest item first.
///
/// Days come from the wall-clock date; items within a day are ordered by
/// their actual instant when the date carries an offset. Sorting is stable:
/// items sharing a timestamp keep their input order.
/// Records with unparseable dates end up in a single trailing group.
pub fn group_by_day(
    transactions: impl IntoIterator<Item = NormalizedTransaction>,
    today: NaiveDate,
) -> Vec<DayGroup> {
    let mut buckets: BTreeMap<Option<NaiveDate>, Vec<NormalizedTransaction>> = BTreeMap::new();
    for txn in transactions {
        buckets.entry(txn.day()).or_default().push(txn);
    }

    let mut groups: Vec<DayGroup> = buckets
        .into_iter()
        .map(|(day, mut items)| {
            items.sort_by(|a, b| b.instant().cmp(&a.instant()));
            let label = match day {
                Some(d) => label_for_day(d, today),
                None => INVALID_DATE_LABEL.to_string(),
            };
            DayGroup { day, label, items }
        })
        .collect();

    // None < Some(_), so the invalid bucket sorts last
    groups.sort_by(|a, b| b.newest().cmp(&a.newest()));
    groups
}
