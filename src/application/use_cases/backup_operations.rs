use crate::domain::{entities::Backup, error::ApplyError, repositories::BackupRepository};
use std::sync::Arc;

pub struct CreateBackup {
    repository: Arc<dyn BackupRepository>,
}

impl CreateBackup {
    pub fn new(repository: Arc<dyn BackupRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Backup, ApplyError> {
        self.repository.create_backup().await
    }
}

/// Restores whichever backup the store considers latest. Used by the
/// test-mode revert flow and the menu restore action.
pub struct RestoreLatestBackup {
    repository: Arc<dyn BackupRepository>,
}

impl RestoreLatestBackup {
    pub fn new(repository: Arc<dyn BackupRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<(), ApplyError> {
        let backup = self
            .repository
            .latest_backup()
            .await
            .ok_or(ApplyError::BackupUnavailable)?;

        tracing::info!("Restoring backup {}", backup.file_path.display());
        if self.repository.restore_backup(&backup).await {
            Ok(())
        } else {
            Err(ApplyError::ConfigTool {
                output: format!("failed to load backup {}", backup.file_path.display()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubBackups {
        latest: Option<Backup>,
        restore_ok: bool,
        restored: Mutex<Vec<Backup>>,
    }

    #[async_trait]
    impl BackupRepository for StubBackups {
        async fn create_backup(&self) -> Result<Backup, ApplyError> {
            unreachable!("restore tests never create backups")
        }

        async fn latest_backup(&self) -> Option<Backup> {
            self.latest.clone()
        }

        async fn restore_backup(&self, backup: &Backup) -> bool {
            self.restored.lock().unwrap().push(backup.clone());
            self.restore_ok
        }
    }

    #[tokio::test]
    async fn restore_without_backup_reports_unavailable() {
        let repo = Arc::new(StubBackups {
            latest: None,
            restore_ok: true,
            restored: Mutex::new(Vec::new()),
        });
        let use_case = RestoreLatestBackup::new(repo.clone());

        let err = use_case.execute().await.expect_err("must fail");
        assert!(matches!(err, ApplyError::BackupUnavailable));
        assert!(repo.restored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn restore_uses_exactly_the_latest_backup() {
        let latest = Backup::new("20250101_120000", "/tmp/backup_20250101_120000.dconf");
        let repo = Arc::new(StubBackups {
            latest: Some(latest.clone()),
            restore_ok: true,
            restored: Mutex::new(Vec::new()),
        });
        let use_case = RestoreLatestBackup::new(repo.clone());

        use_case.execute().await.expect("restore succeeds");
        assert_eq!(*repo.restored.lock().unwrap(), vec![latest]);
    }

    #[tokio::test]
    async fn failed_load_surfaces_as_config_tool_error() {
        let repo = Arc::new(StubBackups {
            latest: Some(Backup::new("20250101_120000", "/tmp/gone.dconf")),
            restore_ok: false,
            restored: Mutex::new(Vec::new()),
        });
        let use_case = RestoreLatestBackup::new(repo);

        let err = use_case.execute().await.expect_err("must fail");
        assert!(matches!(err, ApplyError::ConfigTool { .. }));
    }
}
