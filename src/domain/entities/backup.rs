use std::path::PathBuf;

/// A point-in-time dump of the whole dconf namespace. Backups are append-only:
/// created and read, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub created_at: String,
    pub file_path: PathBuf,
}

impl Backup {
    pub fn new(created_at: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            created_at: created_at.into(),
            file_path: file_path.into(),
        }
    }
}
