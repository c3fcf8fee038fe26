//! Resolving a theme name to its directory.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::ThemeError;
use crate::roots::SearchRoots;

/// File name of a theme descriptor.
pub const DESCRIPTOR_FILE: &str = "marquee.theme";

/// Versioned subdirectory of a theme holding the descriptor.
pub const THEME_SUBPATH: &str = "marquee-1.0";

/// Finds theme directories under a set of [`SearchRoots`].
///
/// A theme `name` is found at `<theme dir>/<name>/marquee-1.0/marquee.theme`;
/// the first theme dir holding that file as a regular file (or a symlink to
/// one) wins.
#[derive(Debug, Clone, Default)]
pub struct ThemeLocator {
    roots: SearchRoots,
}

impl ThemeLocator {
    pub fn new(roots: SearchRoots) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &SearchRoots {
        &self.roots
    }

    /// Descriptor paths probed for `name`, in precedence order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        self.roots
            .theme_dirs()
            .into_iter()
            .map(|dir| dir.join(name).join(THEME_SUBPATH).join(DESCRIPTOR_FILE))
            .collect()
    }

    /// Returns the directory holding the descriptor for `name`, or `None`
    /// when no search root has it.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        for candidate in self.candidates(name) {
            if candidate.is_file() {
                debug!(candidate = %candidate.display(), "found theme descriptor");
                return candidate.parent().map(Path::to_path_buf);
            }
            debug!(candidate = %candidate.display(), "no theme descriptor");
        }
        None
    }
}

/// Rejects names that are not a single normal path component.
pub(crate) fn validate_name(name: &str) -> Result<(), ThemeError> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err(ThemeError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn install(base: &Path, name: &str) -> PathBuf {
        let dir = base.join(name).join(THEME_SUBPATH);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DESCRIPTOR_FILE), "[Marquee Theme]\n").unwrap();
        dir
    }

    #[test]
    fn candidates_follow_root_order() {
        let locator = ThemeLocator::new(SearchRoots::new(
            "/data",
            Some(PathBuf::from("/home/me")),
            "/usr/share",
        ));
        assert_eq!(
            locator.candidates("midnight"),
            vec![
                PathBuf::from("/data/themes/midnight/marquee-1.0/marquee.theme"),
                PathBuf::from("/home/me/.themes/midnight/marquee-1.0/marquee.theme"),
                PathBuf::from("/usr/share/themes/midnight/marquee-1.0/marquee.theme"),
            ]
        );
    }

    #[test]
    fn home_dir_beats_system_dir() {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("home");
        let system = tmp.path().join("system");
        install(&system.join("themes"), "midnight");
        let expected = install(&home.join(".themes"), "midnight");

        let locator = ThemeLocator::new(SearchRoots::new(
            tmp.path().join("data"),
            Some(home),
            system,
        ));
        assert_eq!(locator.resolve("midnight"), Some(expected));
    }

    #[test]
    fn directory_named_like_descriptor_is_not_a_hit() {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        let fake = data
            .join("themes/midnight")
            .join(THEME_SUBPATH)
            .join(DESCRIPTOR_FILE);
        fs::create_dir_all(&fake).unwrap();

        let locator = ThemeLocator::new(SearchRoots::new(&data, None, tmp.path().join("system")));
        assert_eq!(locator.resolve("midnight"), None);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_descriptor_is_a_hit() {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        let dir = data.join("themes/linked").join(THEME_SUBPATH);
        fs::create_dir_all(&dir).unwrap();
        let real = tmp.path().join("real.theme");
        fs::write(&real, "[Marquee Theme]\n").unwrap();
        std::os::unix::fs::symlink(&real, dir.join(DESCRIPTOR_FILE)).unwrap();

        let locator = ThemeLocator::new(SearchRoots::new(&data, None, tmp.path().join("system")));
        assert_eq!(locator.resolve("linked"), Some(dir));
    }

    #[test]
    fn invalid_names() {
        for name in ["", ".", "..", "a/b", "/abs", "../up"] {
            assert!(
                matches!(validate_name(name), Err(ThemeError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
        assert!(validate_name("midnight").is_ok());
        assert!(validate_name("Nord Dark").is_ok());
    }
}
