//! Base directories searched for themes.

use std::path::{Path, PathBuf};

/// System data directory, fixed at build time through `MARQUEE_DATADIR`.
pub const SYSTEM_DATA_DIR: &str = match option_env!("MARQUEE_DATADIR") {
    Some(dir) => dir,
    None => "/usr/share",
};

/// The three base directories a theme may live under.
///
/// Themes are looked up, in order, in:
///
/// 1. `<user data dir>/themes` (`$XDG_DATA_HOME` or `~/.local/share`)
/// 2. `<home dir>/.themes`
/// 3. `<system data dir>/themes`
///
/// A missing user data or home directory is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    user_data_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
    system_data_dir: PathBuf,
}

impl SearchRoots {
    /// Builds roots from explicit directories.
    pub fn new(
        user_data_dir: impl Into<PathBuf>,
        home_dir: Option<PathBuf>,
        system_data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            user_data_dir: Some(user_data_dir.into()),
            home_dir,
            system_data_dir: system_data_dir.into(),
        }
    }

    /// Resolves the user directories for the current user.
    pub fn from_env() -> Self {
        Self {
            user_data_dir: dirs::data_dir(),
            home_dir: dirs::home_dir(),
            system_data_dir: PathBuf::from(SYSTEM_DATA_DIR),
        }
    }

    pub fn with_user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    pub fn without_user_data_dir(mut self) -> Self {
        self.user_data_dir = None;
        self
    }

    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = None;
        self
    }

    pub fn with_system_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.system_data_dir = dir.into();
        self
    }

    pub fn user_data_dir(&self) -> Option<&Path> {
        self.user_data_dir.as_deref()
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    pub fn system_data_dir(&self) -> &Path {
        &self.system_data_dir
    }

    /// Directories holding one subdirectory per theme, highest precedence first.
    pub fn theme_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::with_capacity(3);
        if let Some(user) = &self.user_data_dir {
            dirs.push(user.join("themes"));
        }
        if let Some(home) = &self.home_dir {
            dirs.push(home.join(".themes"));
        }
        dirs.push(self.system_data_dir.join("themes"));
        dirs
    }
}

impl Default for SearchRoots {
    fn default() -> Self {
        Self::from_env()
    }
}
