use crate::domain::entities::ThemeKind;
use crate::domain::error::ApplyError;
use async_trait::async_trait;
use std::path::Path;

/// Mutates the desktop configuration namespace. One apply operation runs
/// validate -> write -> verify; no step is retried, every failure is surfaced
/// to the caller for user-visible reporting.
#[async_trait]
pub trait DesktopRepository: Send + Sync {
    /// Loads a layout's configuration dump into the shell namespace.
    async fn apply_layout(&self, config_path: &Path) -> Result<(), ApplyError>;

    /// Writes the theme key for `kind` and verifies the value by reading it
    /// back. Shell themes require the User Themes extension to be installed
    /// and enabled.
    async fn apply_theme(&self, name: &str, kind: ThemeKind) -> Result<(), ApplyError>;
}
