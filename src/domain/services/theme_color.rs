use std::hash::{DefaultHasher, Hash, Hasher};

const COLOR_MAP: &[(&str, (u8, u8, u8))] = &[
    ("blue", (0x35, 0x84, 0xe4)),
    ("green", (0x26, 0xa2, 0x69)),
    ("yellow", (0xcd, 0x93, 0x09)),
    ("orange", (0xe6, 0x61, 0x00)),
    ("red", (0xc0, 0x1c, 0x28)),
    ("purple", (0x91, 0x41, 0xac)),
    ("pink", (0xd1, 0x6d, 0x9e)),
    ("teal", (0x21, 0x90, 0xa4)),
    ("grey", (0x5e, 0x5c, 0x64)),
    ("gray", (0x5e, 0x5c, 0x64)),
    ("black", (0x24, 0x1f, 0x31)),
    ("white", (0xff, 0xff, 0xff)),
    ("brown", (0x86, 0x5e, 0x3c)),
    ("cyan", (0x00, 0xb4, 0xc8)),
    ("magenta", (0xc0, 0x61, 0xcb)),
    ("lime", (0x2e, 0xc2, 0x7e)),
    ("indigo", (0x1c, 0x71, 0xd8)),
];

const DARK: (u8, u8, u8) = (0x24, 0x1f, 0x31);
const LIGHT: (u8, u8, u8) = (0xff, 0xff, 0xff);

/// Picks a swatch color for a theme card from its name: first color word
/// wins, then dark/light, then a stable hash of the name.
pub fn accent_color(theme_name: &str) -> (u8, u8, u8) {
    let lower = theme_name.to_lowercase();

    for (word, color) in COLOR_MAP {
        if lower.contains(word) {
            return *color;
        }
    }

    if lower.contains("dark") {
        return DARK;
    }
    if lower.contains("light") {
        return LIGHT;
    }

    let mut hasher = DefaultHasher::new();
    theme_name.hash(&mut hasher);
    let value = hasher.finish();
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}
