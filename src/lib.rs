//! spendlog - File-backed personal expense tracker
//!
//! This library provides the core of a personal finance tracker: a CSV-backed
//! expense store, budget limits with threshold alerts, aggregation reports,
//! and timestamped backups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and directory layout
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, budget alerts)
//! - `storage`: Expense CSV store and budget JSON ledger
//! - `reports`: Pure aggregation functions and the monthly report artifact
//! - `backup`: Snapshot/restore of the expense file
//! - `cli`: Thin non-interactive command handlers for the binary
//!
//! # Limitations
//!
//! Single-process, single-threaded by design. Every store operation reopens
//! the backing file and performs a blocking full read or rewrite; the expense
//! CSV rewrite is not atomic, and two processes operating on the same files
//! can race. These are documented trade-offs of the flat-file format.
//!
//! # Example
//!
//! ```rust,no_run
//! use spendlog::config::SpendlogPaths;
//! use spendlog::storage::Storage;
//!
//! # fn main() -> Result<(), spendlog::SpendlogError> {
//! let paths = SpendlogPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let expenses = storage.expenses.load_all()?;
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};
