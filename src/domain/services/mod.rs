pub mod resource_locator;
pub mod theme_color;
