pub mod backup;
pub mod extension;
pub mod layout;
pub mod settings;
pub mod theme;

pub use backup::Backup;
pub use extension::{Extension, ExtensionState, EXTENSIONS, USER_THEME_UUID};
pub use layout::{Layout, LAYOUTS};
pub use settings::AppSettings;
pub use theme::{Theme, ThemeKind};
