use crate::domain::entities::Layout;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

/// Preview image for a layout, shipped beside the dump files.
pub fn layout_icon(layout: &Layout) -> Option<PathBuf> {
    find_resource(layout.icon_file, &["restyle/icons", "icons"])
}

/// Locates a bundled resource (layout dump, preview icon) by name. Candidates
/// are tried exe-relative first, then the usual share directories.
pub fn find_resource(file_name: &str, subdirs: &[&str]) -> Option<PathBuf> {
    if file_name.is_empty() {
        return None;
    }
    find_in(file_name, &candidate_dirs(subdirs))
}

fn candidate_dirs(subdirs: &[&str]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    for sub in subdirs {
        if let Some(exe_dir) = &exe_dir {
            dirs.push(exe_dir.join(sub));
        }
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(home).join(".local/share").join(sub));
        }
        dirs.push(PathBuf::from("/usr/share").join(sub));
        dirs.push(PathBuf::from("/usr/local/share").join(sub));
    }

    dirs
}

/// Tries image extensions on the stem before the literal name, so a layout
/// named `classic.svg` is found even when only `classic.png` shipped.
pub fn find_in(file_name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    for ext in IMAGE_EXTENSIONS {
        for dir in dirs {
            let candidate = dir.join(file_name).with_extension(ext);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    for dir in dirs {
        let candidate = dir.join(file_name);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_exact_file() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("classic.txt"), "[org/gnome/shell]").expect("write");

        let found = find_in("classic.txt", &[dir.path().to_path_buf()]);
        assert_eq!(found, Some(dir.path().join("classic.txt")));
    }

    #[test]
    fn prefers_image_extension_over_literal_name() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("classic.png"), b"png").expect("write");

        let found = find_in("classic.svg", &[dir.path().to_path_buf()]);
        assert_eq!(found, Some(dir.path().join("classic.png")));
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = tempdir().expect("tempdir");
        assert!(find_in("absent.txt", &[dir.path().to_path_buf()]).is_none());
    }

    #[test]
    fn empty_name_yields_none() {
        assert!(find_resource("", &["layouts"]).is_none());
    }

    #[test]
    fn every_layout_icon_resolves_when_shipped() {
        use crate::domain::entities::LAYOUTS;

        let dir = tempdir().expect("tempdir");
        for layout in LAYOUTS {
            let stem = Path::new(layout.icon_file)
                .file_stem()
                .and_then(|s| s.to_str())
                .expect("stem");
            fs::write(dir.path().join(format!("{stem}.png")), b"png").expect("write");
        }

        for layout in LAYOUTS {
            let found = find_in(layout.icon_file, &[dir.path().to_path_buf()]);
            assert!(found.is_some(), "{}", layout.name);
        }
    }
}
