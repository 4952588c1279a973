use crate::domain::{entities::ExtensionState, repositories::ExtensionRepository};
use std::sync::Arc;

/// The gate in front of every layout apply: the shell's master
/// disable-extensions switch.
pub struct CheckExtensions {
    repository: Arc<dyn ExtensionRepository>,
}

impl CheckExtensions {
    pub fn new(repository: Arc<dyn ExtensionRepository>) -> Self {
        Self { repository }
    }

    pub async fn globally_enabled(&self) -> bool {
        self.repository.globally_enabled().await
    }

    pub async fn enable_globally(&self) -> bool {
        self.repository.set_globally_enabled(true).await
    }
}

pub struct QueryExtensionState {
    repository: Arc<dyn ExtensionRepository>,
}

impl QueryExtensionState {
    pub fn new(repository: Arc<dyn ExtensionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, uuid: &str) -> ExtensionState {
        ExtensionState {
            uuid: uuid.to_string(),
            installed: self.repository.is_installed(uuid).await,
            enabled: self.repository.is_enabled(uuid).await,
        }
    }
}

pub struct ToggleExtension {
    repository: Arc<dyn ExtensionRepository>,
}

impl ToggleExtension {
    pub fn new(repository: Arc<dyn ExtensionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, uuid: &str, enable: bool) -> bool {
        self.repository.toggle(uuid, enable).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Stubbed extensions-list backend: toggling mutates an in-memory set,
    /// the same thing the real repository does against gsettings.
    #[derive(Default)]
    struct StubExtensions {
        enabled: Mutex<HashSet<String>>,
        installed: HashSet<String>,
    }

    #[async_trait]
    impl ExtensionRepository for StubExtensions {
        async fn globally_enabled(&self) -> bool {
            true
        }

        async fn set_globally_enabled(&self, _enabled: bool) -> bool {
            true
        }

        async fn is_installed(&self, uuid: &str) -> bool {
            self.installed.contains(uuid)
        }

        async fn is_enabled(&self, uuid: &str) -> bool {
            self.enabled.lock().unwrap().contains(uuid)
        }

        async fn toggle(&self, uuid: &str, enable: bool) -> bool {
            let mut enabled = self.enabled.lock().unwrap();
            if enable {
                enabled.insert(uuid.to_string());
            } else {
                enabled.remove(uuid);
            }
            true
        }
    }

    #[tokio::test]
    async fn toggle_round_trip() {
        let repo = Arc::new(StubExtensions::default());
        let toggle = ToggleExtension::new(repo.clone());
        let query = QueryExtensionState::new(repo);
        let uuid = "desktop-cube@schneegans.github.com";

        assert!(toggle.execute(uuid, true).await);
        assert!(query.execute(uuid).await.enabled);

        assert!(toggle.execute(uuid, false).await);
        assert!(!query.execute(uuid).await.enabled);
    }

    #[tokio::test]
    async fn state_is_derived_per_query() {
        let mut installed = HashSet::new();
        installed.insert("ding@rastersoft.com".to_string());
        let repo = Arc::new(StubExtensions {
            enabled: Mutex::new(HashSet::new()),
            installed,
        });
        let query = QueryExtensionState::new(repo);

        let state = query.execute("ding@rastersoft.com").await;
        assert!(state.installed);
        assert!(!state.enabled);
    }
}
