/// A predefined desktop-shell layout. Layouts are defined statically and
/// never mutated at runtime; identity is the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub config_file: &'static str,
    pub icon_file: &'static str,
    pub fallback_icon: &'static str,
}

pub const LAYOUTS: &[Layout] = &[
    Layout {
        name: "Classic",
        config_file: "classic.txt",
        icon_file: "classic.svg",
        fallback_icon: "view-continuous-symbolic",
    },
    Layout {
        name: "Vanilla",
        config_file: "vanilla.txt",
        icon_file: "vanilla.svg",
        fallback_icon: "view-grid-symbolic",
    },
    Layout {
        name: "G-Unity",
        config_file: "g-unity.txt",
        icon_file: "g-unity.svg",
        fallback_icon: "view-app-grid-symbolic",
    },
    Layout {
        name: "New",
        config_file: "new.txt",
        icon_file: "new.svg",
        fallback_icon: "view-paged-symbolic",
    },
    Layout {
        name: "Next-Gnome",
        config_file: "next-gnome.txt",
        icon_file: "next-gnome.svg",
        fallback_icon: "view-paged-symbolic",
    },
    Layout {
        name: "Modern",
        config_file: "modern.txt",
        icon_file: "modern.svg",
        fallback_icon: "view-grid-symbolic",
    },
];

impl Layout {
    pub fn by_name(name: &str) -> Option<&'static Layout> {
        LAYOUTS.iter().find(|l| l.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let layout = Layout::by_name("Classic").expect("known layout");
        assert_eq!(layout.config_file, "classic.txt");
        assert!(Layout::by_name("Nope").is_none());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = LAYOUTS.iter().map(|l| l.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LAYOUTS.len());
    }
}
