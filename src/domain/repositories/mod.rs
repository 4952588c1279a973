pub mod backup_repository;
pub mod desktop_repository;
pub mod extension_repository;

pub use backup_repository::BackupRepository;
pub use desktop_repository::DesktopRepository;
pub use extension_repository::ExtensionRepository;
