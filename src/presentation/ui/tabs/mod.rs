pub mod effects;
pub mod layouts;
pub mod themes;

pub use effects::{EffectAction, EffectsTab};
pub use layouts::{LayoutAction, LayoutsTab};
pub use themes::{ThemeAction, ThemesTab};
