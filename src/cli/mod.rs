//! CLI command handlers
//!
//! Bridges clap argument parsing with the core. This is the "presentation
//! layer" collaborator in its thinnest form: one non-interactive subcommand
//! per core operation, errors printed by the binary rather than panicking.

pub mod backup;
pub mod budget;
pub mod expense;
pub mod report;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
