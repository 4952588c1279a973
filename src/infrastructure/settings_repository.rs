use crate::domain::entities::AppSettings;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct SettingsRepository {
    settings_path: PathBuf,
}

impl SettingsRepository {
    pub fn new() -> Self {
        let config_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("restyle")
        } else {
            PathBuf::from(".")
        };

        Self {
            settings_path: config_dir.join("settings.json"),
        }
    }

    pub fn with_path(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    pub fn load(&self) -> AppSettings {
        if !self.settings_path.exists() {
            return AppSettings::default();
        }

        fs::read_to_string(&self.settings_path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.settings_path, content).context("Failed to write settings file")?;

        Ok(())
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let repo = SettingsRepository::with_path(dir.path().join("settings.json"));
        assert!(!repo.load().intro_shown);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let repo = SettingsRepository::with_path(dir.path().join("nested/settings.json"));

        repo.save(&AppSettings { intro_shown: true }).expect("save");
        assert!(repo.load().intro_shown);
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").expect("write");

        let repo = SettingsRepository::with_path(path);
        assert!(!repo.load().intro_shown);
    }
}
