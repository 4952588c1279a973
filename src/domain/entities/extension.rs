/// Shell extension used by the Effects tab. The catalog is static; whether an
/// entry is installed or enabled is queried fresh every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: &'static str,
    pub description: &'static str,
    pub uuid: &'static str,
    pub url: &'static str,
    pub has_settings: bool,
}

/// uuid of the extension that is required before a shell theme can be set.
pub const USER_THEME_UUID: &str = "user-theme@gnome-shell-extensions.gcampax.github.com";

pub const EXTENSIONS: &[Extension] = &[
    Extension {
        name: "Desktop Cube",
        description: "Rotate your desktop on a 3D cube",
        uuid: "desktop-cube@schneegans.github.com",
        url: "https://extensions.gnome.org/extension/4648/desktop-cube/",
        has_settings: false,
    },
    Extension {
        name: "Magic Lamp",
        description: "Animated window minimizing effect",
        uuid: "compiz-alike-magic-lamp-effect@hermes83.github.com",
        url: "https://extensions.gnome.org/extension/3740/compiz-alike-magic-lamp-effect/",
        has_settings: false,
    },
    Extension {
        name: "Windows Effects",
        description: "Additional window animations",
        uuid: "compiz-windows-effect@hermes83.github.com",
        url: "https://extensions.gnome.org/extension/3210/compiz-windows-effect/",
        has_settings: false,
    },
    Extension {
        name: "Desktop Icons",
        description: "Add icons to your desktop",
        uuid: "ding@rastersoft.com",
        url: "https://extensions.gnome.org/extension/2087/desktop-icons-ng-ding/",
        has_settings: true,
    },
];

/// Derived state for one extension, recomputed on every query. Never cached
/// beyond a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionState {
    pub uuid: String,
    pub installed: bool,
    pub enabled: bool,
}
