//! poupai-api: async client for the Poupai backend (transactions, expenses,
//! incomes, goals, dashboard)

pub mod client;
pub mod dashboard;
pub mod error;
pub mod expenses;
pub mod goals;
pub mod incomes;
pub mod transactions;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use expenses::{Expense, ExpenseCreate, ExpenseUpdate};
pub use incomes::{Income, IncomeCreate, IncomeUpdate};
pub use transactions::CreatedTransaction;
