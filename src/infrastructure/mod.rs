pub mod dconf;
pub mod settings_repository;
pub mod theme_scanner;

pub use settings_repository::SettingsRepository;
pub use theme_scanner::ThemeScanner;
