use crate::domain::error::ApplyError;
use crate::domain::repositories::ExtensionRepository;
use crate::infrastructure::dconf::command::{DconfCommand, GsettingsCommand};
use async_trait::async_trait;
use std::path::PathBuf;

const DISABLE_KEY: &str = "/org/gnome/shell/disable-extensions";
const SHELL_SCHEMA: &str = "org.gnome.shell";
const ENABLED_KEY: &str = "enabled-extensions";

/// Parses gsettings' literal list syntax: `@as ['a', 'b']` or `['a', 'b']`.
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("@as")
        .map(str::trim_start)
        .unwrap_or(trimmed);
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or("");

    inner
        .split(',')
        .map(|item| item.trim().trim_matches('\'').trim_matches('"').to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Renders the list back in the syntax gsettings expects. The `@as` prefix
/// keeps the type unambiguous when the list is empty.
pub fn format_extension_list(uuids: &[String]) -> String {
    let quoted: Vec<String> = uuids
        .iter()
        .filter(|uuid| !uuid.is_empty())
        .map(|uuid| format!("'{uuid}'"))
        .collect();
    format!("@as [{}]", quoted.join(", "))
}

/// Membership toggle with dedup; the uuid appears at most once afterwards.
pub fn toggled(mut uuids: Vec<String>, uuid: &str, enable: bool) -> Vec<String> {
    uuids.retain(|u| u != uuid);
    if enable {
        uuids.push(uuid.to_string());
    }
    uuids
}

pub struct GnomeExtensionRepository {
    extension_dirs: Vec<PathBuf>,
}

impl GnomeExtensionRepository {
    pub fn new() -> Self {
        let mut extension_dirs = Vec::new();
        if let Ok(home) = std::env::var("HOME") {
            extension_dirs.push(PathBuf::from(home).join(".local/share/gnome-shell/extensions"));
        }
        extension_dirs.push(PathBuf::from("/usr/share/gnome-shell/extensions"));
        Self { extension_dirs }
    }

    pub fn with_dirs(extension_dirs: Vec<PathBuf>) -> Self {
        Self { extension_dirs }
    }
}

impl Default for GnomeExtensionRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Fails open: any value other than an explicit `true` counts as enabled,
/// and so does a failed read.
fn interpret_global_switch(read: Result<String, ApplyError>) -> bool {
    match read {
        Ok(value) => !value.trim().eq_ignore_ascii_case("true"),
        Err(e) => {
            tracing::warn!("Could not read {}: {} (assuming enabled)", DISABLE_KEY, e);
            true
        }
    }
}

/// Fails closed: a list that cannot be read means "not enabled".
fn interpret_enabled_list(
    get: Result<String, ApplyError>,
    uuid: &str,
) -> bool {
    match get {
        Ok(raw) => parse_extension_list(&raw).iter().any(|item| item == uuid),
        Err(e) => {
            tracing::warn!("Could not read enabled-extensions: {}", e);
            false
        }
    }
}

#[async_trait]
impl ExtensionRepository for GnomeExtensionRepository {
    async fn globally_enabled(&self) -> bool {
        interpret_global_switch(DconfCommand::read(DISABLE_KEY).await)
    }

    async fn set_globally_enabled(&self, enabled: bool) -> bool {
        let value = if enabled { "false" } else { "true" };
        match DconfCommand::write(DISABLE_KEY, value).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Could not write {}: {}", DISABLE_KEY, e);
                false
            }
        }
    }

    async fn is_installed(&self, uuid: &str) -> bool {
        self.extension_dirs.iter().any(|dir| dir.join(uuid).exists())
    }

    async fn is_enabled(&self, uuid: &str) -> bool {
        interpret_enabled_list(GsettingsCommand::get(SHELL_SCHEMA, ENABLED_KEY).await, uuid)
    }

    async fn toggle(&self, uuid: &str, enable: bool) -> bool {
        let raw = match GsettingsCommand::get(SHELL_SCHEMA, ENABLED_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Could not read enabled-extensions: {}", e);
                return false;
            }
        };

        let updated = toggled(parse_extension_list(&raw), uuid, enable);
        let literal = format_extension_list(&updated);

        match GsettingsCommand::set(SHELL_SCHEMA, ENABLED_KEY, &literal).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Could not write enabled-extensions: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_typed_and_plain_lists() {
        let typed = "@as ['a@x.org', 'b@y.org']";
        let plain = "['a@x.org', 'b@y.org']";
        let expected = vec!["a@x.org".to_string(), "b@y.org".to_string()];
        assert_eq!(parse_extension_list(typed), expected);
        assert_eq!(parse_extension_list(plain), expected);
    }

    #[test]
    fn parses_empty_list() {
        assert!(parse_extension_list("@as []").is_empty());
        assert!(parse_extension_list("[]").is_empty());
    }

    #[test]
    fn format_round_trips_through_parse() {
        let uuids = vec!["ding@rastersoft.com".to_string()];
        let literal = format_extension_list(&uuids);
        assert_eq!(literal, "@as ['ding@rastersoft.com']");
        assert_eq!(parse_extension_list(&literal), uuids);
    }

    #[test]
    fn toggle_deduplicates() {
        let list = vec!["a@x.org".to_string(), "a@x.org".to_string()];
        let enabled = toggled(list, "a@x.org", true);
        assert_eq!(enabled, vec!["a@x.org".to_string()]);

        let disabled = toggled(enabled, "a@x.org", false);
        assert!(disabled.is_empty());
    }

    fn tool_failure() -> Result<String, ApplyError> {
        Err(ApplyError::ConfigTool {
            output: "error: cannot autolaunch D-Bus".to_string(),
        })
    }

    #[test]
    fn global_switch_fails_open() {
        assert!(interpret_global_switch(tool_failure()));
        assert!(interpret_global_switch(Ok("false".to_string())));
        assert!(interpret_global_switch(Ok("garbage".to_string())));
        assert!(!interpret_global_switch(Ok("true".to_string())));
    }

    #[test]
    fn enabled_check_fails_closed() {
        assert!(!interpret_enabled_list(tool_failure(), "a@x.org"));
        assert!(interpret_enabled_list(
            Ok("@as ['a@x.org']".to_string()),
            "a@x.org"
        ));
        assert!(!interpret_enabled_list(Ok("@as []".to_string()), "a@x.org"));
    }

    #[tokio::test]
    async fn installed_check_looks_in_every_dir() {
        let user = tempdir().expect("tempdir");
        let system = tempdir().expect("tempdir");
        std::fs::create_dir(system.path().join("ding@rastersoft.com")).expect("mkdir");

        let repo = GnomeExtensionRepository::with_dirs(vec![
            user.path().to_path_buf(),
            system.path().to_path_buf(),
        ]);

        assert!(repo.is_installed("ding@rastersoft.com").await);
        assert!(!repo.is_installed("absent@nowhere.org").await);
    }
}
