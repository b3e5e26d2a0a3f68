//! Backup manager
//!
//! Snapshots the expense file into the backup directory under a
//! timestamped name. The fixed-width timestamp makes the lexicographic
//! filename order also the chronological order. Two snapshots within the
//! same second collide and the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::SpendlogPaths;
use crate::error::{SpendlogError, SpendlogResult};

/// Filename prefix shared by every snapshot
const SNAPSHOT_PREFIX: &str = "expenses_backup_";

/// Manages snapshots of the expense file
pub struct BackupManager {
    /// The live expense file
    data_file: PathBuf,
    /// Where snapshots live
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a manager for the configured expense file and backup directory
    pub fn new(paths: &SpendlogPaths) -> Self {
        Self {
            data_file: paths.expenses_file(),
            backup_dir: paths.backup_dir(),
        }
    }

    /// Get the backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Copy the live expense file to a timestamped snapshot
    ///
    /// Returns the path of the created snapshot
    /// (`expenses_backup_<YYYYMMDD_HHMMSS>.csv`).
    pub fn snapshot(&self) -> SpendlogResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| SpendlogError::Io(format!("Failed to create backup directory: {}", e)))?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let snapshot_path = self
            .backup_dir
            .join(format!("{}{}.csv", SNAPSHOT_PREFIX, timestamp));

        fs::copy(&self.data_file, &snapshot_path)
            .map_err(|e| SpendlogError::Io(format!("Failed to write snapshot: {}", e)))?;

        Ok(snapshot_path)
    }

    /// List all snapshots, oldest first
    ///
    /// Lexicographic filename sort, which is also chronological given the
    /// fixed-width timestamp.
    pub fn list_snapshots(&self) -> SpendlogResult<Vec<PathBuf>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut snapshots = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| SpendlogError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| SpendlogError::Io(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();

            let is_snapshot = path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| {
                    name.starts_with(SNAPSHOT_PREFIX) && name.ends_with(".csv")
                });
            if is_snapshot {
                snapshots.push(path);
            }
        }

        snapshots.sort();
        Ok(snapshots)
    }

    /// Get the most recent snapshot, if any exist
    pub fn latest_snapshot(&self) -> SpendlogResult<Option<PathBuf>> {
        Ok(self.list_snapshots()?.pop())
    }

    /// Overwrite the live expense file with a snapshot's bytes
    ///
    /// Irreversible; no implicit pre-restore backup is taken.
    ///
    /// # Errors
    ///
    /// `NotFound` if the snapshot path does not exist. The live file is
    /// left untouched in that case.
    pub fn restore(&self, snapshot: &Path) -> SpendlogResult<()> {
        if !snapshot.exists() {
            return Err(SpendlogError::backup_not_found(
                snapshot.display().to_string(),
            ));
        }

        if let Some(parent) = self.data_file.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(snapshot, &self.data_file)
            .map_err(|e| SpendlogError::Io(format!("Failed to restore snapshot: {}", e)))?;

        Ok(())
    }
}
