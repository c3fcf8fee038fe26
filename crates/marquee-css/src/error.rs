//! Stylesheet error types.

use std::io;
use std::path::PathBuf;

/// Error returned when a stylesheet cannot be added.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The stylesheet file could not be read.
    #[error("Failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stylesheet is not valid CSS for a theme.
    #[error("Failed to parse stylesheet {} at {line}:{column}: {message}", path.display())]
    Parse {
        /// File path, or the source name given to `add_data`.
        path: PathBuf,
        /// 1-based line number.
        line: u32,
        /// 1-based column number.
        column: u32,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_has_location() {
        let err = StyleError::Parse {
            path: PathBuf::from("/themes/x/base.css"),
            line: 4,
            column: 12,
            message: "expected '{'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("base.css"));
        assert!(msg.contains("4:12"));
        assert!(msg.contains("expected '{'"));
    }
}
