//! The theme object and its one-shot load lifecycle.

use std::path::{Path, PathBuf};

use marquee_css::Stylesheet;
use marquee_layout::Layout;
use tracing::{debug, info, warn};

use crate::error::ThemeError;
use crate::loader::ThemeLoader;
use crate::locator::{validate_name, ThemeLocator};
use crate::sink::{LayoutSink, StyleSink};

/// Identity and resources of a successfully loaded theme.
#[derive(Debug)]
struct LoadedTheme<S, L> {
    name: String,
    path: PathBuf,
    display_name: String,
    comment: String,
    styling: S,
    layout: L,
}

/// A theme that can be loaded exactly once.
///
/// A new `Theme` is empty: every accessor returns `None`. [`load`](Self::load)
/// either fills in the identity and both resource sinks together, or fails
/// and leaves the theme empty, so it can be retried with another name.
///
/// # Example
///
/// ```no_run
/// use marquee_theme::{Theme, ThemeError};
///
/// let mut theme = Theme::new();
/// match theme.load("midnight") {
///     Ok(()) => println!("loaded {}", theme.display_name().unwrap_or_default()),
///     Err(ThemeError::ThemeNotFound { searched, .. }) => {
///         eprintln!("looked in {:?}", searched);
///     }
///     Err(err) => eprintln!("{}", err),
/// }
/// ```
#[derive(Debug)]
pub struct Theme<S = Stylesheet, L = Layout> {
    locator: ThemeLocator,
    loader: ThemeLoader,
    loaded: Option<LoadedTheme<S, L>>,
}

impl Theme {
    /// Creates an empty theme using the current user's search directories
    /// and locale.
    pub fn new() -> Self {
        Self::with_locator(ThemeLocator::default())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, L> Theme<S, L>
where
    S: StyleSink,
    L: LayoutSink,
{
    /// Creates an empty theme that searches with `locator`.
    pub fn with_locator(locator: ThemeLocator) -> Self {
        Self {
            locator,
            loader: ThemeLoader::new(),
            loaded: None,
        }
    }

    /// Replaces the loader, e.g. to pin the language list.
    pub fn with_loader(mut self, loader: ThemeLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Locates the theme called `name` and loads all of its resources.
    ///
    /// Fails with [`ThemeError::AlreadyLoaded`] if a theme was loaded before.
    /// On any error the theme is left unchanged.
    pub fn load(&mut self, name: &str) -> Result<(), ThemeError> {
        if let Some(current) = &self.loaded {
            return Err(ThemeError::AlreadyLoaded {
                requested: name.to_string(),
                current: current.name.clone(),
            });
        }
        validate_name(name)?;

        let Some(path) = self.locator.resolve(name) else {
            debug!(theme = name, "theme not found in any search directory");
            return Err(ThemeError::ThemeNotFound {
                name: name.to_string(),
                searched: self.locator.candidates(name),
            });
        };

        let resources = self
            .loader
            .load_resources::<S, L>(&path)
            .inspect_err(|err| warn!(theme = name, error = %err, "failed to load theme"))?;

        info!(theme = name, path = %path.display(), "theme loaded");
        self.loaded = Some(LoadedTheme {
            name: name.to_string(),
            path,
            display_name: resources.display_name,
            comment: resources.comment,
            styling: resources.styling,
            layout: resources.layout,
        });
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// The name passed to the successful [`load`](Self::load).
    pub fn name(&self) -> Option<&str> {
        self.loaded.as_ref().map(|t| t.name.as_str())
    }

    /// Directory holding the theme's descriptor.
    pub fn path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|t| t.path.as_path())
    }

    /// Translated human-readable name.
    pub fn display_name(&self) -> Option<&str> {
        self.loaded.as_ref().map(|t| t.display_name.as_str())
    }

    /// Translated description.
    pub fn comment(&self) -> Option<&str> {
        self.loaded.as_ref().map(|t| t.comment.as_str())
    }

    pub fn styling(&self) -> Option<&S> {
        self.loaded.as_ref().map(|t| &t.styling)
    }

    pub fn layout(&self) -> Option<&L> {
        self.loaded.as_ref().map(|t| &t.layout)
    }

    pub fn locator(&self) -> &ThemeLocator {
        &self.locator
    }
}
