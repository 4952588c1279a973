use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppSettings {
    pub intro_shown: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { intro_shown: false }
    }
}
