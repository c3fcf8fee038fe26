//! Reading a theme descriptor and feeding its resources to the sinks.

use std::path::{Path, PathBuf};

use marquee_keyfile::{language_names, KeyFile, KeyFileError};
use tracing::{debug, warn};

use crate::env::{EnvReader, RealEnv};
use crate::error::{ResourceKind, ThemeError};
use crate::locator::DESCRIPTOR_FILE;
use crate::sink::{LayoutSink, StyleSink};

/// Group of the descriptor holding all theme keys.
pub const DESCRIPTOR_GROUP: &str = "Marquee Theme";

/// Everything a successful load produces.
#[derive(Debug)]
pub struct LoadedResources<S, L> {
    pub display_name: String,
    pub comment: String,
    pub styling: S,
    pub layout: L,
}

/// Loads the descriptor and resources of a resolved theme directory.
///
/// Translated `Name` and `Comment` values are picked using the loader's
/// language list, which by default comes from the process locale.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    languages: Vec<String>,
}

impl ThemeLoader {
    /// Creates a loader using the languages of the current process.
    pub fn new() -> Self {
        Self::from_env(&RealEnv)
    }

    /// Creates a loader using the languages named by `env`'s
    /// `LANGUAGE`, `LC_ALL`, `LC_MESSAGES` and `LANG` variables.
    pub fn from_env(env: &impl EnvReader) -> Self {
        Self {
            languages: language_names(|name| env.var(name)),
        }
    }

    /// Creates a loader with an explicit language preference list,
    /// most preferred first.
    pub fn with_languages<I, T>(languages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Reads `<directory>/marquee.theme` and loads its resources.
    ///
    /// Steps run strictly in order and the first failure ends the load:
    ///
    /// 1. read the descriptor
    /// 2. `Name`, then `Comment`
    /// 3. `Style`: each file appended to a fresh style sink with priorities
    ///    counting up from 0
    /// 4. `LayoutPrimary`: each file appended to a fresh layout sink
    ///
    /// Sinks built before a failure are dropped with it.
    pub fn load_resources<S, L>(&self, directory: &Path) -> Result<LoadedResources<S, L>, ThemeError>
    where
        S: StyleSink,
        L: LayoutSink,
    {
        let descriptor_path = directory.join(DESCRIPTOR_FILE);
        let descriptor = KeyFile::load_from_file(&descriptor_path).map_err(|source| {
            ThemeError::DescriptorUnreadable {
                path: descriptor_path.clone(),
                source,
            }
        })?;

        let display_name = required(
            "Name",
            descriptor.locale_string(DESCRIPTOR_GROUP, "Name", &self.languages),
        )?;
        let comment = required(
            "Comment",
            descriptor.locale_string(DESCRIPTOR_GROUP, "Comment", &self.languages),
        )?;

        let style_files = required("Style", descriptor.string_list(DESCRIPTOR_GROUP, "Style"))?;
        let mut styling = S::create();
        for (priority, entry) in (0u32..).zip(&style_files) {
            let file = resource_path(directory, entry);
            debug!(file = %file.display(), priority, "appending style resource");
            styling
                .append(&file, priority)
                .map_err(|source| resource_error(ResourceKind::Style, file, source))?;
        }

        let layout_files = required(
            "LayoutPrimary",
            descriptor.string_list(DESCRIPTOR_GROUP, "LayoutPrimary"),
        )?;
        let mut layout = L::create();
        for entry in &layout_files {
            let file = resource_path(directory, entry);
            debug!(file = %file.display(), "appending layout resource");
            layout
                .append(&file)
                .map_err(|source| resource_error(ResourceKind::Layout, file, source))?;
        }

        Ok(LoadedResources {
            display_name,
            comment,
            styling,
            layout,
        })
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn required<T>(field: &'static str, value: Result<T, KeyFileError>) -> Result<T, ThemeError> {
    value.map_err(|err| {
        if err.is_not_found() {
            debug!(field, "descriptor field absent");
        } else {
            warn!(field, error = %err, "descriptor field unreadable");
        }
        ThemeError::MissingField(field)
    })
}

/// Entries are relative to the theme directory, even with a leading `/`.
fn resource_path(directory: &Path, entry: &str) -> PathBuf {
    directory.join(entry.trim_start_matches('/'))
}

fn resource_error<E>(kind: ResourceKind, file: PathBuf, source: E) -> ThemeError
where
    E: std::error::Error + Send + Sync + 'static,
{
    warn!(%kind, file = %file.display(), error = %source, "theme resource failed to load");
    ThemeError::ResourceLoadError {
        kind,
        file,
        source: Box::new(source),
    }
}
