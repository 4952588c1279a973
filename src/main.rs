mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::UseCaseContainer;
use domain::repositories::{BackupRepository, DesktopRepository, ExtensionRepository};
use infrastructure::dconf::{
    DconfBackupRepository, DconfDesktopRepository, GnomeExtensionRepository,
};
use infrastructure::{SettingsRepository, ThemeScanner};
use presentation::i18n::Translator;
use presentation::style::configure_style;
use presentation::ui::RestyleApp;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let extension_repository: Arc<dyn ExtensionRepository> =
        Arc::new(GnomeExtensionRepository::new());
    let desktop_repository: Arc<dyn DesktopRepository> = Arc::new(DconfDesktopRepository::new(
        Arc::clone(&extension_repository),
    ));
    let backup_repository: Arc<dyn BackupRepository> = Arc::new(DconfBackupRepository::new());

    let use_cases = Arc::new(UseCaseContainer::new(
        desktop_repository,
        backup_repository,
        extension_repository,
    ));

    let i18n = Translator::from_env();
    let settings_repository = SettingsRepository::new();
    let theme_scanner = ThemeScanner::new();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Restyle",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            configure_style(&cc.egui_ctx);
            Ok(Box::new(RestyleApp::new(
                use_cases,
                settings_repository,
                theme_scanner,
                i18n,
            )))
        }),
    )
}
