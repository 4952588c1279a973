use crate::domain::{entities::ThemeKind, error::ApplyError, repositories::DesktopRepository};
use std::sync::Arc;

pub struct ApplyTheme {
    repository: Arc<dyn DesktopRepository>,
}

impl ApplyTheme {
    pub fn new(repository: Arc<dyn DesktopRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, name: &str, kind: ThemeKind) -> Result<(), ApplyError> {
        tracing::info!("Applying {} theme {}", kind, name);
        self.repository.apply_theme(name, kind).await
    }
}
