//! Backup management for the expense file

pub mod manager;

pub use manager::BackupManager;
