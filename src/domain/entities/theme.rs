use std::fmt;
use std::path::PathBuf;

/// The three theme surfaces a GNOME desktop exposes. Matched exhaustively
/// everywhere a theme is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    Gtk,
    Icon,
    Shell,
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Gtk => write!(f, "GTK"),
            ThemeKind::Icon => write!(f, "Icon"),
            ThemeKind::Shell => write!(f, "Shell"),
        }
    }
}

/// A theme discovered on disk. Existence is determined by marker files under
/// the search roots; there is no identity beyond the directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub path: PathBuf,
    pub kind: ThemeKind,
}

impl Theme {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: ThemeKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }
}
