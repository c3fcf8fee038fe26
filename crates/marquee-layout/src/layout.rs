//! The layout accumulator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::LayoutError;
use crate::object::ObjectDefinition;
use crate::parser::parse_objects;

/// Collects object definitions from layout documents.
///
/// Object ids are unique across everything added. A document that fails to
/// parse, or that reuses an id, leaves the layout untouched.
///
/// # Example
///
/// ```rust
/// use marquee_layout::Layout;
///
/// let mut layout = Layout::new();
/// layout
///     .add_data(
///         "main.xml",
///         r#"<interface>
///              <object class="Stage" id="stage">
///                <child><object class="Label" id="clock"/></child>
///              </object>
///            </interface>"#,
///     )
///     .unwrap();
///
/// assert_eq!(layout.objects().len(), 1);
/// assert_eq!(layout.find("clock").unwrap().class, "Label");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Layout {
    objects: Vec<ObjectDefinition>,
    sources: Vec<PathBuf>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and adds the layout document at `path`.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_source(path.to_path_buf(), &xml)
    }

    /// Adds a layout document held in memory. `source_name` stands in for a
    /// path in errors and in [`sources`](Self::sources).
    pub fn add_data(&mut self, source_name: impl Into<PathBuf>, xml: &str) -> Result<(), LayoutError> {
        self.add_source(source_name.into(), xml)
    }

    fn add_source(&mut self, path: PathBuf, xml: &str) -> Result<(), LayoutError> {
        let parsed = parse_objects(xml).map_err(|failure| LayoutError::Parse {
            path: path.clone(),
            line: failure.line,
            message: failure.message,
        })?;

        let mut ids: HashSet<&str> = HashSet::new();
        for object in &self.objects {
            object.walk(&mut |o| {
                if let Some(id) = o.id.as_deref() {
                    ids.insert(id);
                }
            });
        }

        let mut duplicate = None;
        for object in &parsed {
            object.walk(&mut |o| {
                if let Some(id) = o.id.as_deref() {
                    if !ids.insert(id) && duplicate.is_none() {
                        duplicate = Some(id.to_string());
                    }
                }
            });
        }
        if let Some(id) = duplicate {
            return Err(LayoutError::DuplicateId { path, id });
        }

        self.objects.extend(parsed);
        self.sources.push(path);
        Ok(())
    }

    /// Top-level objects in file order, then document order.
    pub fn objects(&self) -> &[ObjectDefinition] {
        &self.objects
    }

    /// Looks up a top-level or nested object by id.
    pub fn find(&self, id: &str) -> Option<&ObjectDefinition> {
        self.objects.iter().find_map(|object| object.find(id))
    }

    /// Documents added so far, in order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
