pub mod backup_operations;
pub mod extension_operations;
pub mod layout_operations;
pub mod theme_operations;

pub use backup_operations::*;
pub use extension_operations::*;
pub use layout_operations::*;
pub use theme_operations::*;
