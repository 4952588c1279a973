use crate::application::use_cases::*;
use crate::domain::repositories::{BackupRepository, DesktopRepository, ExtensionRepository};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub apply_layout: Arc<ApplyLayout>,
    pub apply_theme: Arc<ApplyTheme>,
    pub create_backup: Arc<CreateBackup>,
    pub restore_latest_backup: Arc<RestoreLatestBackup>,
    pub check_extensions: Arc<CheckExtensions>,
    pub query_extension_state: Arc<QueryExtensionState>,
    pub toggle_extension: Arc<ToggleExtension>,
}

impl UseCaseContainer {
    pub fn new(
        desktop_repository: Arc<dyn DesktopRepository>,
        backup_repository: Arc<dyn BackupRepository>,
        extension_repository: Arc<dyn ExtensionRepository>,
    ) -> Self {
        Self {
            apply_layout: Arc::new(ApplyLayout::new(Arc::clone(&desktop_repository))),
            apply_theme: Arc::new(ApplyTheme::new(Arc::clone(&desktop_repository))),
            create_backup: Arc::new(CreateBackup::new(Arc::clone(&backup_repository))),
            restore_latest_backup: Arc::new(RestoreLatestBackup::new(Arc::clone(
                &backup_repository,
            ))),
            check_extensions: Arc::new(CheckExtensions::new(Arc::clone(&extension_repository))),
            query_extension_state: Arc::new(QueryExtensionState::new(Arc::clone(
                &extension_repository,
            ))),
            toggle_extension: Arc::new(ToggleExtension::new(Arc::clone(&extension_repository))),
        }
    }
}
