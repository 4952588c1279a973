pub mod components;
pub mod i18n;
pub mod services;
pub mod style;
pub mod ui;
