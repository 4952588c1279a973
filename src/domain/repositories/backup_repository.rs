use crate::domain::entities::Backup;
use crate::domain::error::ApplyError;
use async_trait::async_trait;

/// Point-in-time dumps of the whole configuration namespace. The store only
/// grows; pruning is left to manual housekeeping.
#[async_trait]
pub trait BackupRepository: Send + Sync {
    /// Dumps the namespace to a new timestamped file and repoints the
    /// "latest" marker at it.
    async fn create_backup(&self) -> Result<Backup, ApplyError>;

    /// Resolves the "latest" marker, falling back to the most recently
    /// modified backup file. `None` when the store is empty or absent.
    async fn latest_backup(&self) -> Option<Backup>;

    /// Loads a backup file back into the namespace. Returns false when the
    /// file is gone or the load command fails; the exit code of the load is
    /// the only verification.
    async fn restore_backup(&self, backup: &Backup) -> bool;
}
