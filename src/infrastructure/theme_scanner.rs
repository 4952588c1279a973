use crate::domain::entities::{Theme, ThemeKind};
use std::path::PathBuf;

/// Discovers installed themes by marker files under the search roots. Theme
/// kind decides both the roots and the marker.
pub struct ThemeScanner {
    theme_roots: Vec<PathBuf>,
    icon_roots: Vec<PathBuf>,
}

impl ThemeScanner {
    pub fn new() -> Self {
        let mut theme_roots = Vec::new();
        let mut icon_roots = Vec::new();

        if let Ok(home) = std::env::var("HOME") {
            theme_roots.push(PathBuf::from(&home).join(".themes"));
            icon_roots.push(PathBuf::from(&home).join(".icons"));
        }
        theme_roots.push(PathBuf::from("/usr/local/share/themes"));
        theme_roots.push(PathBuf::from("/usr/share/themes"));
        icon_roots.push(PathBuf::from("/usr/local/share/icons"));
        icon_roots.push(PathBuf::from("/usr/share/icons"));

        Self {
            theme_roots,
            icon_roots,
        }
    }

    pub fn with_roots(theme_roots: Vec<PathBuf>, icon_roots: Vec<PathBuf>) -> Self {
        Self {
            theme_roots,
            icon_roots,
        }
    }

    fn is_theme_dir(dir: &PathBuf, kind: ThemeKind) -> bool {
        match kind {
            ThemeKind::Gtk => dir.join("gtk-3.0").exists() || dir.join("gtk-2.0").exists(),
            ThemeKind::Icon => dir.join("index.theme").exists(),
            ThemeKind::Shell => {
                let shell = dir.join("gnome-shell");
                shell.join("gnome-shell.css").exists()
                    || shell.join("gnome-shell.gresource").exists()
            }
        }
    }

    pub fn scan(&self, kind: ThemeKind) -> Vec<Theme> {
        let roots = match kind {
            ThemeKind::Gtk | ThemeKind::Shell => &self.theme_roots,
            ThemeKind::Icon => &self.icon_roots,
        };

        let mut themes: Vec<Theme> = Vec::new();
        for root in roots {
            let Ok(entries) = std::fs::read_dir(root) else {
                continue;
            };
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path.is_dir() || !Self::is_theme_dir(&path, kind) {
                    continue;
                }
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                // First root containing a name wins; later duplicates are dropped.
                if themes.iter().any(|t| t.name == name) {
                    continue;
                }
                themes.push(Theme::new(name, path.clone(), kind));
            }
        }

        themes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        themes
    }
}

impl Default for ThemeScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn scanner_over(themes: &tempfile::TempDir, icons: &tempfile::TempDir) -> ThemeScanner {
        ThemeScanner::with_roots(
            vec![themes.path().to_path_buf()],
            vec![icons.path().to_path_buf()],
        )
    }

    #[test]
    fn gtk_marker_is_a_gtk_version_dir() {
        let themes = tempdir().expect("tempdir");
        let icons = tempdir().expect("tempdir");
        fs::create_dir_all(themes.path().join("Adwaita-dark/gtk-3.0")).expect("mkdir");
        fs::create_dir_all(themes.path().join("NotATheme/docs")).expect("mkdir");

        let found = scanner_over(&themes, &icons).scan(ThemeKind::Gtk);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Adwaita-dark");
        assert_eq!(found[0].kind, ThemeKind::Gtk);
    }

    #[test]
    fn icon_marker_is_index_theme() {
        let themes = tempdir().expect("tempdir");
        let icons = tempdir().expect("tempdir");
        fs::create_dir_all(icons.path().join("Papirus")).expect("mkdir");
        fs::write(icons.path().join("Papirus/index.theme"), "[Icon Theme]").expect("write");

        let found = scanner_over(&themes, &icons).scan(ThemeKind::Icon);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Papirus");
    }

    #[test]
    fn shell_marker_is_css_or_gresource() {
        let themes = tempdir().expect("tempdir");
        let icons = tempdir().expect("tempdir");
        fs::create_dir_all(themes.path().join("Nordic/gnome-shell")).expect("mkdir");
        fs::write(themes.path().join("Nordic/gnome-shell/gnome-shell.css"), "").expect("write");
        fs::create_dir_all(themes.path().join("Empty/gnome-shell")).expect("mkdir");

        let found = scanner_over(&themes, &icons).scan(ThemeKind::Shell);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Nordic");
    }

    #[test]
    fn results_deduplicate_and_sort_case_insensitively() {
        let themes = tempdir().expect("tempdir");
        let icons = tempdir().expect("tempdir");
        for name in ["zuki", "Adwaita", "materia"] {
            fs::create_dir_all(themes.path().join(name).join("gtk-3.0")).expect("mkdir");
        }

        let found = scanner_over(&themes, &icons).scan(ThemeKind::Gtk);
        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Adwaita", "materia", "zuki"]);
    }

    #[test]
    fn missing_root_yields_empty() {
        let scanner = ThemeScanner::with_roots(
            vec![PathBuf::from("/nonexistent/themes")],
            vec![PathBuf::from("/nonexistent/icons")],
        );
        assert!(scanner.scan(ThemeKind::Gtk).is_empty());
    }
}
