use crate::domain::{
    entities::Layout,
    error::ApplyError,
    repositories::DesktopRepository,
    services::resource_locator,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Resolves a layout's configuration dump and loads it into the shell
/// namespace. The post-load sleep gives the desktop time to settle before the
/// result is reported.
pub struct ApplyLayout {
    repository: Arc<dyn DesktopRepository>,
    search_dirs: Option<Vec<PathBuf>>,
}

impl ApplyLayout {
    pub fn new(repository: Arc<dyn DesktopRepository>) -> Self {
        Self {
            repository,
            search_dirs: None,
        }
    }

    #[cfg(test)]
    pub fn with_search_dirs(repository: Arc<dyn DesktopRepository>, dirs: Vec<PathBuf>) -> Self {
        Self {
            repository,
            search_dirs: Some(dirs),
        }
    }

    fn resolve(&self, layout: &Layout) -> Option<PathBuf> {
        match &self.search_dirs {
            Some(dirs) => resource_locator::find_in(layout.config_file, dirs),
            None => resource_locator::find_resource(layout.config_file, &["restyle/layouts", "layouts"]),
        }
    }

    pub async fn execute(&self, layout: &Layout) -> Result<(), ApplyError> {
        let config_path = self.resolve(layout).ok_or_else(|| ApplyError::ResourceNotFound {
            file: layout.config_file.to_string(),
        })?;

        tracing::info!("Applying layout {} from {}", layout.name, config_path.display());
        self.repository.apply_layout(&config_path).await?;

        // Give the desktop time to apply the changes before reporting success.
        tokio::time::sleep(Duration::from_millis(500)).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ThemeKind;
    use async_trait::async_trait;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingDesktop {
        loads: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl DesktopRepository for RecordingDesktop {
        async fn apply_layout(&self, config_path: &Path) -> Result<(), ApplyError> {
            self.loads.lock().unwrap().push(config_path.to_path_buf());
            Ok(())
        }

        async fn apply_theme(&self, _name: &str, _kind: ThemeKind) -> Result<(), ApplyError> {
            unreachable!("layout tests never apply themes")
        }
    }

    fn classic() -> &'static Layout {
        Layout::by_name("Classic").expect("known layout")
    }

    #[tokio::test]
    async fn reachable_layout_dispatches_exactly_one_load_of_its_bytes() {
        let dir = tempdir().expect("tempdir");
        let dump = "[org/gnome/shell]\nfavorite-apps=['firefox.desktop']\n";
        fs::write(dir.path().join("classic.txt"), dump).expect("write");

        let desktop = Arc::new(RecordingDesktop::default());
        let use_case =
            ApplyLayout::with_search_dirs(desktop.clone(), vec![dir.path().to_path_buf()]);

        use_case.execute(classic()).await.expect("apply succeeds");

        let loads = desktop.loads.lock().unwrap();
        assert_eq!(loads.len(), 1);
        assert_eq!(fs::read_to_string(&loads[0]).expect("read"), dump);
    }

    #[tokio::test]
    async fn missing_config_aborts_before_any_load() {
        let dir = tempdir().expect("tempdir");
        let desktop = Arc::new(RecordingDesktop::default());
        let use_case =
            ApplyLayout::with_search_dirs(desktop.clone(), vec![dir.path().to_path_buf()]);

        let err = use_case.execute(classic()).await.expect_err("must fail");
        assert!(matches!(err, ApplyError::ResourceNotFound { ref file } if file == "classic.txt"));
        assert!(desktop.loads.lock().unwrap().is_empty());
    }
}
