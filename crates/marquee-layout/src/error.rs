//! Layout error types.

use std::io;
use std::path::PathBuf;

/// Error returned when a layout file cannot be added.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("Failed to read layout {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is malformed XML or does not describe objects.
    #[error("Invalid layout {} at line {line}: {message}", path.display())]
    Parse {
        /// File path, or the source name given to `add_data`.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        message: String,
    },

    /// An object id is already defined, in this file or an earlier one.
    #[error("Duplicate object id '{id}' in layout {}", path.display())]
    DuplicateId { path: PathBuf, id: String },
}

impl LayoutError {
    /// The file (or source name) the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LayoutError::Io { path, .. }
            | LayoutError::Parse { path, .. }
            | LayoutError::DuplicateId { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_display() {
        let err = LayoutError::DuplicateId {
            path: PathBuf::from("/themes/x/main.xml"),
            id: "stage".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate object id 'stage' in layout /themes/x/main.xml"
        );
        assert_eq!(err.path(), std::path::Path::new("/themes/x/main.xml"));
    }
}
