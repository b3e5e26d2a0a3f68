//! Reporting and aggregation
//!
//! All views here are derived fresh from the expense collection on every
//! call; nothing is persisted except the monthly report artifact, which is
//! written on demand.

pub mod monthly;
pub mod summary;

pub use monthly::{monthly_report, MonthlyReport};
pub use summary::{
    budget_vs_actual, category_summary, monthly_summary, total_and_average, BudgetVsActual,
};
