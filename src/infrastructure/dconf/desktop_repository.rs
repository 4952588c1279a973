use crate::domain::{
    entities::{ThemeKind, USER_THEME_UUID},
    error::ApplyError,
    repositories::{DesktopRepository, ExtensionRepository},
};
use crate::infrastructure::dconf::command::{strip_quotes, DconfCommand};
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const SHELL_ROOT: &str = "/org/gnome/shell/";
const GTK_THEME_KEY: &str = "/org/gnome/desktop/interface/gtk-theme";
const ICON_THEME_KEY: &str = "/org/gnome/desktop/interface/icon-theme";
const SHELL_THEME_KEY: &str = "/org/gnome/shell/extensions/user-theme/name";
const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

pub struct DconfDesktopRepository {
    extensions: Arc<dyn ExtensionRepository>,
}

impl DconfDesktopRepository {
    pub fn new(extensions: Arc<dyn ExtensionRepository>) -> Self {
        Self { extensions }
    }

    fn theme_key(kind: ThemeKind) -> &'static str {
        match kind {
            ThemeKind::Gtk => GTK_THEME_KEY,
            ThemeKind::Icon => ICON_THEME_KEY,
            ThemeKind::Shell => SHELL_THEME_KEY,
        }
    }

    /// A write can exit zero and still not apply (malformed quoting is the
    /// usual culprit), so every theme write is read back and compared.
    async fn write_and_verify(key: &str, name: &str) -> Result<(), ApplyError> {
        DconfCommand::write(key, &format!("'{name}'")).await?;

        let observed = strip_quotes(&DconfCommand::read(key).await?).to_string();
        if observed != name {
            tracing::error!(
                "Theme key {} not applied: expected '{}', observed '{}'",
                key,
                name,
                observed
            );
            return Err(ApplyError::VerifiedMismatch {
                expected: name.to_string(),
                observed,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl DesktopRepository for DconfDesktopRepository {
    async fn apply_layout(&self, config_path: &Path) -> Result<(), ApplyError> {
        let config_data = fs::read_to_string(config_path)?;

        // dconf reads stdin to EOF; feed it a private copy of the dump.
        let temp_path =
            std::env::temp_dir().join(format!("restyle_layout_{}.dconf", std::process::id()));
        fs::write(&temp_path, config_data)?;

        let result = DconfCommand::load(SHELL_ROOT, &temp_path, LOAD_TIMEOUT).await;
        let _ = fs::remove_file(&temp_path);
        result
    }

    async fn apply_theme(&self, name: &str, kind: ThemeKind) -> Result<(), ApplyError> {
        if kind == ThemeKind::Shell {
            let installed = self.extensions.is_installed(USER_THEME_UUID).await;
            let enabled = installed && self.extensions.is_enabled(USER_THEME_UUID).await;
            if !installed || !enabled {
                tracing::warn!(
                    "User Themes extension unavailable (installed: {}, enabled: {})",
                    installed,
                    enabled
                );
                return Err(ApplyError::PrerequisiteMissing {
                    uuid: USER_THEME_UUID.to_string(),
                });
            }
        }

        Self::write_and_verify(Self::theme_key(kind), name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::ExtensionRepository;

    /// Extensions backend where nothing is installed; the shell-theme gate
    /// must refuse before any key is written.
    struct NoExtensions;

    #[async_trait]
    impl ExtensionRepository for NoExtensions {
        async fn globally_enabled(&self) -> bool {
            true
        }

        async fn set_globally_enabled(&self, _enabled: bool) -> bool {
            true
        }

        async fn is_installed(&self, _uuid: &str) -> bool {
            false
        }

        async fn is_enabled(&self, _uuid: &str) -> bool {
            false
        }

        async fn toggle(&self, _uuid: &str, _enable: bool) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn shell_theme_without_user_theme_extension_is_refused() {
        let repo = DconfDesktopRepository::new(Arc::new(NoExtensions));

        let err = repo
            .apply_theme("Nordic", ThemeKind::Shell)
            .await
            .expect_err("must be gated");

        assert!(
            matches!(err, ApplyError::PrerequisiteMissing { ref uuid } if uuid == USER_THEME_UUID)
        );
    }
}
