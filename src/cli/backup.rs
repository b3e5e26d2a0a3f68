//! Backup CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::error::{SpendlogError, SpendlogResult};
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Snapshot the expense file
    Create,

    /// List all snapshots, oldest first
    List,

    /// Overwrite the expense file with a snapshot
    Restore {
        /// Snapshot filename or path (use 'latest' for the most recent)
        backup: String,
    },
}

/// Handle a backup command
pub fn handle_backup_command(storage: &Storage, cmd: BackupCommands) -> SpendlogResult<()> {
    let manager = BackupManager::new(storage.paths());

    match cmd {
        BackupCommands::Create => {
            storage.expenses.ensure_ready()?;
            let snapshot = manager.snapshot()?;
            println!("Snapshot created: {}", snapshot.display());
        }

        BackupCommands::List => {
            let snapshots = manager.list_snapshots()?;
            if snapshots.is_empty() {
                println!("No snapshots found.");
                println!("Create one with: spendlog backup create");
            }
            for snapshot in &snapshots {
                println!("{}", snapshot.display());
            }
        }

        BackupCommands::Restore { backup } => {
            let path = resolve_snapshot(&manager, &backup)?;
            manager.restore(&path)?;
            println!("Restored from {}", path.display());
        }
    }

    Ok(())
}

/// Resolve a user-supplied snapshot reference to a concrete path
///
/// Accepts 'latest', a bare filename inside the backup directory, or a path.
fn resolve_snapshot(manager: &BackupManager, backup: &str) -> SpendlogResult<PathBuf> {
    if backup == "latest" {
        return manager
            .latest_snapshot()?
            .ok_or_else(|| SpendlogError::backup_not_found("latest (no snapshots exist)"));
    }

    let as_path = PathBuf::from(backup);
    if as_path.exists() {
        return Ok(as_path);
    }

    Ok(manager.backup_dir().join(backup))
}
