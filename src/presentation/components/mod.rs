pub mod backup_prompt;
pub mod confirm_modal;
pub mod enable_extensions_modal;
pub mod intro_modal;
pub mod tab_manager;
pub mod test_result_modal;
pub mod toast;
pub mod user_theme_modal;

pub use backup_prompt::{BackupPrompt, BackupPromptAction};
pub use confirm_modal::{ConfirmAction, ConfirmModal};
pub use enable_extensions_modal::{EnableExtensionsAction, EnableExtensionsModal};
pub use intro_modal::{IntroDismissed, IntroModal};
pub use tab_manager::{Tab, TabManager};
pub use test_result_modal::{TestResultAction, TestResultModal};
pub use toast::ToastManager;
pub use user_theme_modal::{UserThemeAction, UserThemeModal, USER_THEME_INSTALL_URL};
