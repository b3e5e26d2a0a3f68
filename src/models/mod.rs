//! Core data models for spendlog
//!
//! This module contains the data structures of the expense-tracking domain:
//! monetary amounts, expense transactions, and budget alerts.

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::{AlertLevel, BudgetAlert, EXCEEDED_THRESHOLD, WARNING_THRESHOLD};
pub use expense::{Expense, DATE_FORMAT};
pub use money::Money;
