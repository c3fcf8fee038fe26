//! # marquee-theme
//!
//! Resolves a theme name to a directory, reads the theme descriptor and
//! loads the style and layout files it lists.
//!
//! A theme is installed as
//!
//! ```text
//! <base>/themes/<name>/marquee-1.0/marquee.theme
//! ```
//!
//! where `<base>/themes` is, in order of precedence, the user data
//! directory's `themes`, `~/.themes`, or the system data directory's
//! `themes` (see [`SearchRoots`]). The descriptor is a key file:
//!
//! ```text
//! [Marquee Theme]
//! Name=Midnight
//! Name[de]=Mitternacht
//! Comment=Dark theme with blue accents
//! Style=base.css;widgets.css
//! LayoutPrimary=primary.xml
//! ```
//!
//! Style files are appended with increasing priority, so later files win in
//! the cascade. Loading is all or nothing: on error the [`Theme`] stays
//! empty and may be loaded again.
//!
//! ## Logging
//!
//! Progress is reported through `tracing` (`debug` for probed paths and
//! appended files, `info` on success, `warn` on failure). No subscriber is
//! installed; that is left to the application.

mod env;
mod error;
mod loader;
mod locator;
mod roots;
mod sink;
mod theme;

pub use env::{EnvReader, MockEnv, RealEnv};
pub use error::{ResourceKind, ThemeError};
pub use loader::{LoadedResources, ThemeLoader, DESCRIPTOR_GROUP};
pub use locator::{ThemeLocator, DESCRIPTOR_FILE, THEME_SUBPATH};
pub use roots::{SearchRoots, SYSTEM_DATA_DIR};
pub use sink::{LayoutSink, StyleSink};
pub use theme::Theme;

pub use marquee_css::Stylesheet;
pub use marquee_layout::Layout;
