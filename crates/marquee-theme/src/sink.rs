//! The contracts the loader feeds resource files through.
//!
//! [`Stylesheet`] and [`Layout`] are the stock implementations. Any other
//! accumulator can be plugged into [`Theme`](crate::Theme) by implementing
//! these traits.

use std::error::Error;
use std::path::Path;

use marquee_css::{StyleError, Stylesheet};
use marquee_layout::{Layout, LayoutError};

/// Accumulates style files, each tagged with a priority.
///
/// The loader hands out priorities 0, 1, 2, ... in descriptor order, so a
/// higher priority must override a lower one.
pub trait StyleSink: Sized {
    type Error: Error + Send + Sync + 'static;

    fn create() -> Self;

    fn append(&mut self, file: &Path, priority: u32) -> Result<(), Self::Error>;
}

/// Accumulates layout files in the order given.
pub trait LayoutSink: Sized {
    type Error: Error + Send + Sync + 'static;

    fn create() -> Self;

    fn append(&mut self, file: &Path) -> Result<(), Self::Error>;
}

impl StyleSink for Stylesheet {
    type Error = StyleError;

    fn create() -> Self {
        Stylesheet::new()
    }

    fn append(&mut self, file: &Path, priority: u32) -> Result<(), StyleError> {
        self.add_file(file, priority)
    }
}

impl LayoutSink for Layout {
    type Error = LayoutError;

    fn create() -> Self {
        Layout::new()
    }

    fn append(&mut self, file: &Path) -> Result<(), LayoutError> {
        self.add_file(file)
    }
}
