//! Ledger view state: the last fetched list plus the active filter.
//!
//! Every derived view is recomputed from the raw list on demand. Fetches are
//! ticketed so a slow, superseded response cannot overwrite a newer one.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::filter::{TxnFilter, apply_filter};
use crate::grouping::{DayGroup, group_by_day};
use crate::transaction::{NormalizedTransaction, RawTransaction, TxnKind, normalize_all};

/// Handle for one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket(u64);

/// Badge counts for the filter tabs
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub income: usize,
    pub expense: usize,
}

#[derive(Debug, Default)]
pub struct LedgerState {
    raw: Vec<RawTransaction>,
    filter: TxnFilter,
    issued: u64,
    applied: Option<u64>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: TxnFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Register a new fetch. Only the most recently issued ticket can land.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Replace the raw list with a fetch result.
    ///
    /// Returns `false` (and keeps the current list) when a newer fetch has
    /// been issued since `ticket`.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, list: Vec<RawTransaction>) -> bool {
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                newest = self.issued,
                "discarding stale ledger response"
            );
            return false;
        }
        debug!(count = list.len(), "ledger refreshed");
        self.raw = list;
        self.applied = Some(ticket.0);
        true
    }

    /// True once any fetch has landed
    pub fn is_loaded(&self) -> bool {
        self.applied.is_some()
    }

    pub fn filter(&self) -> TxnFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TxnFilter) {
        self.filter = filter;
    }

    pub fn raw(&self) -> &[RawTransaction] {
        &self.raw
    }

    /// Flat normalized view, unfiltered
    pub fn normalized(&self) -> Vec<NormalizedTransaction> {
        normalize_all(&self.raw)
    }

    /// Normalized view with the active filter applied
    pub fn visible(&self) -> Vec<NormalizedTransaction> {
        apply_filter(self.normalized(), self.filter)
    }

    /// Day groups of the visible transactions
    pub fn groups(&self, today: NaiveDate) -> Vec<DayGroup> {
        group_by_day(self.visible(), today)
    }

    pub fn counts(&self) -> FilterCounts {
        let all = self.normalized();
        let income = all.iter().filter(|t| t.kind() == TxnKind::Income).count();
        FilterCounts {
            all: all.len(),
            income,
            expense: all.len() - income,
        }
    }
}
