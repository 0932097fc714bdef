//! poupai-core: ledger normalization, day grouping, and the pure helpers
//! behind the Poupai screens (masks, goal progress, dashboard shares)

pub mod category;
pub mod dashboard;
pub mod day_label;
pub mod draft;
pub mod filter;
pub mod goals;
pub mod grouping;
pub mod ledger;
pub mod masks;
pub mod time;
pub mod transaction;

pub use category::{CATALOG, CategoryDef, IconId, ResolvedCategory, category_id, icon_for, resolve_category};
pub use dashboard::{CategoryShare, CategoryTotal, MonthlySummary, category_shares, month_name, period_label};
pub use day_label::{INVALID_DATE_LABEL, format_day_label, label_for_day};
pub use draft::{DraftError, TransactionDraft, ValidDraft};
pub use filter::{TxnFilter, apply_filter};
pub use goals::{Goal, GoalAdjustment, GoalError, GoalProgress, NewGoal};
pub use grouping::{DayGroup, group_by_day};
pub use ledger::{FetchTicket, FilterCounts, LedgerState};
pub use time::{local_today, parse_instant, parse_timestamp, parse_timezone};
pub use transaction::{NormalizedTransaction, RawTransaction, TxnKind, classify, normalize, normalize_all};
