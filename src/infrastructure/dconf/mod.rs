pub mod backup_repository;
pub mod command;
pub mod desktop_repository;
pub mod extension_repository;

pub use backup_repository::DconfBackupRepository;
pub use desktop_repository::DconfDesktopRepository;
pub use extension_repository::GnomeExtensionRepository;
