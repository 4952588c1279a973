use crate::domain::{entities::Backup, error::ApplyError, repositories::BackupRepository};
use crate::infrastructure::dconf::command::DconfCommand;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const LATEST_MARKER: &str = "latest_backup.dconf";
const RESTORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces the settings blob a backup stores. Separate from the store so
/// tests can feed a fixed dump.
#[async_trait]
pub trait DumpSource: Send + Sync {
    async fn dump(&self) -> Result<String, ApplyError>;
}

struct DconfDump;

#[async_trait]
impl DumpSource for DconfDump {
    async fn dump(&self) -> Result<String, ApplyError> {
        DconfCommand::dump("/").await
    }
}

/// Backups are full `dconf dump /` blobs under `~/.config/restyle/backups/`,
/// one immutable timestamped file per call, with a `latest_backup.dconf`
/// symlink pointing at the newest one.
pub struct DconfBackupRepository {
    backup_dir: PathBuf,
    dump_source: Box<dyn DumpSource>,
}

impl DconfBackupRepository {
    pub fn new() -> Self {
        let backup_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("restyle").join("backups")
        } else {
            PathBuf::from("backups")
        };
        Self::with_dir(backup_dir)
    }

    pub fn with_dir(backup_dir: impl Into<PathBuf>) -> Self {
        Self::with_dump_source(backup_dir, Box::new(DconfDump))
    }

    pub fn with_dump_source(
        backup_dir: impl Into<PathBuf>,
        dump_source: Box<dyn DumpSource>,
    ) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            dump_source,
        }
    }

    fn repoint_latest(&self, target: &PathBuf) -> std::io::Result<()> {
        let marker = self.backup_dir.join(LATEST_MARKER);
        if marker.symlink_metadata().is_ok() {
            fs::remove_file(&marker)?;
        }
        std::os::unix::fs::symlink(target, &marker)
    }

    /// Newest `backup_*.dconf` by modification time, for stores where the
    /// symlink is gone or was never created.
    fn scan_for_latest(&self) -> Option<PathBuf> {
        let entries = fs::read_dir(&self.backup_dir).ok()?;
        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("backup_") && n.ends_with(".dconf"))
            })
            .max_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            })
    }

    fn backup_from_path(path: PathBuf) -> Backup {
        let stamp = path
            .file_stem()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix("backup_"))
            .map(str::to_string)
            .or_else(|| mtime_stamp(&path))
            .unwrap_or_default();
        Backup::new(stamp, path)
    }
}

/// Stamp for stores where the marker is a plain file rather than a symlink
/// to a timestamped one.
fn mtime_stamp(path: &Path) -> Option<String> {
    let modified = path.metadata().and_then(|m| m.modified()).ok()?;
    let local: chrono::DateTime<chrono::Local> = modified.into();
    Some(local.format("%Y%m%d_%H%M%S").to_string())
}

impl Default for DconfBackupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackupRepository for DconfBackupRepository {
    async fn create_backup(&self) -> Result<Backup, ApplyError> {
        fs::create_dir_all(&self.backup_dir)?;

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let backup_file = self.backup_dir.join(format!("backup_{stamp}.dconf"));

        let dump = self.dump_source.dump().await?;
        fs::write(&backup_file, dump)?;
        self.repoint_latest(&backup_file)?;

        tracing::info!("Created backup {}", backup_file.display());
        Ok(Backup::new(stamp, backup_file))
    }

    async fn latest_backup(&self) -> Option<Backup> {
        let marker = self.backup_dir.join(LATEST_MARKER);
        if let Ok(target) = fs::canonicalize(&marker) {
            if target.exists() {
                return Some(Self::backup_from_path(target));
            }
        }

        self.scan_for_latest().map(Self::backup_from_path)
    }

    async fn restore_backup(&self, backup: &Backup) -> bool {
        if !backup.file_path.exists() {
            tracing::error!("Backup file missing: {}", backup.file_path.display());
            return false;
        }

        match DconfCommand::load("/", &backup.file_path, RESTORE_TIMEOUT).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Restore failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_backup(dir: &std::path::Path, stamp: &str, content: &str) -> PathBuf {
        let path = dir.join(format!("backup_{stamp}.dconf"));
        fs::write(&path, content).expect("write backup");
        path
    }

    struct FixedDump(&'static str);

    #[async_trait]
    impl DumpSource for FixedDump {
        async fn dump(&self) -> Result<String, ApplyError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingDump;

    #[async_trait]
    impl DumpSource for FailingDump {
        async fn dump(&self) -> Result<String, ApplyError> {
            Err(ApplyError::ConfigTool {
                output: "error: cannot autolaunch D-Bus".into(),
            })
        }
    }

    #[tokio::test]
    async fn create_backup_round_trips_through_latest() {
        let dir = tempdir().expect("tempdir");
        let repo = DconfBackupRepository::with_dump_source(
            dir.path(),
            Box::new(FixedDump("[org/gnome/desktop/interface]\ngtk-theme='Adwaita'\n")),
        );

        let created = repo.create_backup().await.expect("create");
        let latest = repo.latest_backup().await.expect("latest");

        assert_eq!(latest.created_at, created.created_at);
        assert_eq!(
            fs::read_to_string(&latest.file_path).expect("read"),
            "[org/gnome/desktop/interface]\ngtk-theme='Adwaita'\n"
        );
    }

    #[tokio::test]
    async fn failed_dump_leaves_store_empty() {
        let dir = tempdir().expect("tempdir");
        let repo =
            DconfBackupRepository::with_dump_source(dir.path(), Box::new(FailingDump));

        assert!(repo.create_backup().await.is_err());
        assert!(repo.latest_backup().await.is_none());
    }

    #[tokio::test]
    async fn plain_file_marker_derives_stamp_from_mtime() {
        let dir = tempdir().expect("tempdir");
        let marker = dir.path().join(LATEST_MARKER);
        fs::write(&marker, "[org/gnome/shell]\n").expect("write");

        let repo = DconfBackupRepository::with_dir(dir.path());
        let latest = repo.latest_backup().await.expect("latest");

        assert_eq!(latest.created_at, mtime_stamp(&marker).expect("stamp"));
        assert!(!latest.created_at.is_empty());
    }

    #[tokio::test]
    async fn empty_store_has_no_latest() {
        let dir = tempdir().expect("tempdir");
        let repo = DconfBackupRepository::with_dir(dir.path());
        assert!(repo.latest_backup().await.is_none());
    }

    #[tokio::test]
    async fn absent_store_has_no_latest() {
        let repo = DconfBackupRepository::with_dir("/nonexistent/restyle-backups");
        assert!(repo.latest_backup().await.is_none());
    }

    #[tokio::test]
    async fn symlink_resolves_to_backup_contents() {
        let dir = tempdir().expect("tempdir");
        let target = write_backup(dir.path(), "20250101_120000", "[org/gnome/shell]\n");
        std::os::unix::fs::symlink(&target, dir.path().join(LATEST_MARKER)).expect("symlink");

        let repo = DconfBackupRepository::with_dir(dir.path());
        let latest = repo.latest_backup().await.expect("latest");
        assert_eq!(latest.created_at, "20250101_120000");
        assert_eq!(
            fs::read_to_string(&latest.file_path).expect("read"),
            "[org/gnome/shell]\n"
        );
    }

    #[tokio::test]
    async fn missing_symlink_falls_back_to_newest_file() {
        let dir = tempdir().expect("tempdir");
        let old = write_backup(dir.path(), "20250101_120000", "old");
        let new = write_backup(dir.path(), "20250201_120000", "new");

        let past = std::time::SystemTime::now() - Duration::from_secs(3600);
        let file = fs::File::options().append(true).open(&old).expect("open");
        file.set_modified(past).expect("set mtime");

        let repo = DconfBackupRepository::with_dir(dir.path());
        let latest = repo.latest_backup().await.expect("latest");
        assert_eq!(latest.file_path, new);
    }

    #[tokio::test]
    async fn dangling_symlink_falls_back_to_scan() {
        let dir = tempdir().expect("tempdir");
        std::os::unix::fs::symlink(
            dir.path().join("backup_gone.dconf"),
            dir.path().join(LATEST_MARKER),
        )
        .expect("symlink");
        let survivor = write_backup(dir.path(), "20250301_080000", "still here");

        let repo = DconfBackupRepository::with_dir(dir.path());
        let latest = repo.latest_backup().await.expect("latest");
        assert_eq!(latest.file_path, survivor);
    }

    #[tokio::test]
    async fn restore_of_missing_file_is_false_not_error() {
        let dir = tempdir().expect("tempdir");
        let repo = DconfBackupRepository::with_dir(dir.path());
        let backup = Backup::new("20250101_120000", dir.path().join("backup_gone.dconf"));
        assert!(!repo.restore_backup(&backup).await);
    }
}
