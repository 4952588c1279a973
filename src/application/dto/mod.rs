use crate::domain::entities::ThemeKind;
use crate::domain::error::ApplyError;

/// A user-facing message produced by the core: a translation key plus named
/// placeholder values. The core never formats text itself; the presentation
/// layer resolves the key through its translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub key: &'static str,
    pub args: Vec<(&'static str, String)>,
}

impl StatusMessage {
    pub fn plain(key: &'static str) -> Self {
        Self { key, args: Vec::new() }
    }

    pub fn with(key: &'static str, args: Vec<(&'static str, String)>) -> Self {
        Self { key, args }
    }
}

pub fn layout_applying(layout: &str) -> StatusMessage {
    StatusMessage::with("applying", vec![("layout", layout.to_string())])
}

pub fn layout_success(layout: &str) -> StatusMessage {
    StatusMessage::with("success", vec![("layout", layout.to_string())])
}

pub fn layout_error(error: &ApplyError) -> StatusMessage {
    match error {
        ApplyError::ResourceNotFound { file } => {
            StatusMessage::with("error_config", vec![("file", file.clone())])
        }
        ApplyError::ConfigTool { output } => {
            StatusMessage::with("error_applying", vec![("error", output.clone())])
        }
        other => StatusMessage::with("error", vec![("error", other.to_string())]),
    }
}

fn theme_key(kind: ThemeKind, stage: &str) -> &'static str {
    match (kind, stage) {
        (ThemeKind::Gtk, "applying") => "applying_gtk",
        (ThemeKind::Gtk, "success") => "success_gtk",
        (ThemeKind::Gtk, _) => "error_gtk",
        (ThemeKind::Icon, "applying") => "applying_icons",
        (ThemeKind::Icon, "success") => "success_icons",
        (ThemeKind::Icon, _) => "error_icons",
        (ThemeKind::Shell, "applying") => "applying_shell",
        (ThemeKind::Shell, "success") => "success_shell",
        (ThemeKind::Shell, _) => "error_shell",
    }
}

pub fn theme_applying(kind: ThemeKind, theme: &str) -> StatusMessage {
    StatusMessage::with(theme_key(kind, "applying"), vec![("theme", theme.to_string())])
}

pub fn theme_success(kind: ThemeKind, theme: &str) -> StatusMessage {
    StatusMessage::with(theme_key(kind, "success"), vec![("theme", theme.to_string())])
}

pub fn theme_error(kind: ThemeKind, error: &ApplyError) -> StatusMessage {
    match error {
        ApplyError::PrerequisiteMissing { .. } => StatusMessage::plain("user_theme_required"),
        other => StatusMessage::with(theme_key(kind, "error"), vec![("error", other.to_string())]),
    }
}

pub fn backup_result(result: &Result<(), ApplyError>) -> StatusMessage {
    match result {
        Ok(()) => StatusMessage::plain("backup_created"),
        Err(e) => StatusMessage::with("backup_error", vec![("error", e.to_string())]),
    }
}

pub fn restore_result(result: &Result<(), ApplyError>) -> StatusMessage {
    match result {
        Ok(()) => StatusMessage::plain("backup_restore_success"),
        Err(e) => StatusMessage::with("backup_restore_error", vec![("error", e.to_string())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_maps_to_error_config_with_file_placeholder() {
        let message = layout_error(&ApplyError::ResourceNotFound {
            file: "classic.txt".to_string(),
        });
        assert_eq!(message.key, "error_config");
        assert_eq!(message.args, vec![("file", "classic.txt".to_string())]);
    }

    #[test]
    fn tool_failure_carries_raw_output() {
        let message = layout_error(&ApplyError::ConfigTool {
            output: "error: cannot autolaunch".to_string(),
        });
        assert_eq!(message.key, "error_applying");
        assert_eq!(message.args[0].1, "error: cannot autolaunch");
    }

    #[test]
    fn gtk_success_carries_theme_placeholder() {
        let message = theme_success(ThemeKind::Gtk, "Adwaita-dark");
        assert_eq!(message.key, "success_gtk");
        assert_eq!(message.args, vec![("theme", "Adwaita-dark".to_string())]);
    }

    #[test]
    fn missing_prerequisite_maps_to_user_theme_required() {
        let message = theme_error(
            ThemeKind::Shell,
            &ApplyError::PrerequisiteMissing {
                uuid: "user-theme@gnome-shell-extensions.gcampax.github.com".to_string(),
            },
        );
        assert_eq!(message.key, "user_theme_required");
    }

    #[test]
    fn mismatch_maps_to_kind_specific_error_key() {
        let message = theme_error(
            ThemeKind::Icon,
            &ApplyError::VerifiedMismatch {
                expected: "Papirus".to_string(),
                observed: "Adwaita".to_string(),
            },
        );
        assert_eq!(message.key, "error_icons");
    }
}
