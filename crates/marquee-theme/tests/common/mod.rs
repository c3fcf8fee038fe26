//! Shared fixtures: on-disk theme trees and recording sinks.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use marquee_theme::{LayoutSink, SearchRoots, StyleSink, ThemeLocator, DESCRIPTOR_FILE, THEME_SUBPATH};
use tempfile::TempDir;

/// A temporary filesystem with user, home and system roots.
pub struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().unwrap(),
        }
    }

    pub fn user_data_dir(&self) -> PathBuf {
        self.tmp.path().join("data")
    }

    pub fn home_dir(&self) -> PathBuf {
        self.tmp.path().join("home")
    }

    pub fn system_data_dir(&self) -> PathBuf {
        self.tmp.path().join("system")
    }

    pub fn roots(&self) -> SearchRoots {
        SearchRoots::new(
            self.user_data_dir(),
            Some(self.home_dir()),
            self.system_data_dir(),
        )
    }

    pub fn locator(&self) -> ThemeLocator {
        ThemeLocator::new(self.roots())
    }

    /// Writes a theme under `themes_dir` and returns its descriptor directory.
    pub fn install(
        &self,
        themes_dir: &Path,
        name: &str,
        descriptor: &str,
        files: &[(&str, &str)],
    ) -> PathBuf {
        let dir = themes_dir.join(name).join(THEME_SUBPATH);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DESCRIPTOR_FILE), descriptor).unwrap();
        for (file, content) in files {
            let path = dir.join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    pub fn install_user(&self, name: &str, descriptor: &str, files: &[(&str, &str)]) -> PathBuf {
        self.install(&self.user_data_dir().join("themes"), name, descriptor, files)
    }

    pub fn install_system(&self, name: &str, descriptor: &str, files: &[(&str, &str)]) -> PathBuf {
        self.install(&self.system_data_dir().join("themes"), name, descriptor, files)
    }
}

/// Builds a descriptor. `None` leaves the corresponding key out.
pub fn descriptor(
    name: Option<&str>,
    comment: Option<&str>,
    style: Option<&str>,
    layout: Option<&str>,
) -> String {
    let mut text = String::from("[Marquee Theme]\n");
    for (key, value) in [
        ("Name", name),
        ("Comment", comment),
        ("Style", style),
        ("LayoutPrimary", layout),
    ] {
        if let Some(value) = value {
            text.push_str(&format!("{}={}\n", key, value));
        }
    }
    text
}

/// One call received by a recording sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Style(String, u32),
    Layout(String),
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

/// Returns and clears the calls recorded on this thread.
pub fn take_calls() -> Vec<Call> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn check(path: &Path) -> io::Result<()> {
    if file_name(path).starts_with("bad") {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "unparsable resource"));
    }
    Ok(())
}

/// Style sink that records appends and fails on files named `bad*`.
#[derive(Debug, Default)]
pub struct RecordingStyle {
    pub files: Vec<(PathBuf, u32)>,
}

impl StyleSink for RecordingStyle {
    type Error = io::Error;

    fn create() -> Self {
        Self::default()
    }

    fn append(&mut self, file: &Path, priority: u32) -> io::Result<()> {
        CALLS.with(|calls| calls.borrow_mut().push(Call::Style(file_name(file), priority)));
        check(file)?;
        self.files.push((file.to_path_buf(), priority));
        Ok(())
    }
}

/// Layout sink that records appends and fails on files named `bad*`.
#[derive(Debug, Default)]
pub struct RecordingLayout {
    pub files: Vec<PathBuf>,
}

impl LayoutSink for RecordingLayout {
    type Error = io::Error;

    fn create() -> Self {
        Self::default()
    }

    fn append(&mut self, file: &Path) -> io::Result<()> {
        CALLS.with(|calls| calls.borrow_mut().push(Call::Layout(file_name(file))));
        check(file)?;
        self.files.push(file.to_path_buf());
        Ok(())
    }
}
