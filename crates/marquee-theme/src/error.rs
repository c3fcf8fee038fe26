//! Theme error types.

use std::fmt;
use std::path::PathBuf;

use marquee_keyfile::KeyFileError;

/// Which kind of resource file failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Style,
    Layout,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Style => f.write_str("style"),
            ResourceKind::Layout => f.write_str("layout"),
        }
    }
}

/// Errors returned by [`Theme::load`](crate::Theme::load).
///
/// Every variant leaves the theme exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme instance already holds a loaded theme.
    #[error("Cannot load theme '{requested}' because theme '{current}' is already loaded")]
    AlreadyLoaded { requested: String, current: String },

    /// The name is empty, a path component like `..`, or contains a separator.
    #[error("Invalid theme name '{0}'")]
    InvalidName(String),

    /// No search directory holds a descriptor for the theme.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        name: String,
        /// Descriptor locations that were probed, in order.
        searched: Vec<PathBuf>,
    },

    /// The descriptor exists but cannot be read or parsed.
    #[error("Could not read theme descriptor {}: {source}", path.display())]
    DescriptorUnreadable {
        path: PathBuf,
        #[source]
        source: KeyFileError,
    },

    /// A required descriptor field is absent.
    #[error("Theme descriptor is missing required field '{0}'")]
    MissingField(&'static str),

    /// A style or layout file referenced by the descriptor failed to load.
    #[error("Failed to load {kind} resource {}: {source}", file.display())]
    ResourceLoadError {
        kind: ResourceKind,
        file: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
