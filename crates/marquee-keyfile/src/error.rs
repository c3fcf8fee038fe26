//! Error types for key file parsing and lookups.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading a key file or looking up values.
#[derive(Debug, thiserror::Error)]
pub enum KeyFileError {
    /// The file could not be read.
    #[error("Failed to read key file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not a well-formed key file.
    #[error("Invalid key file syntax on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The requested group does not exist.
    #[error("Key file has no group '{0}'")]
    GroupNotFound(String),

    /// The requested key does not exist in the group.
    #[error("Key file has no key '{key}' in group '{group}'")]
    KeyNotFound { group: String, key: String },

    /// The stored value contains an invalid escape sequence.
    #[error("Key '{key}' in group '{group}' has an invalid value: {reason}")]
    InvalidValue {
        group: String,
        key: String,
        reason: String,
    },
}

impl KeyFileError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns `true` when the error only signals an absent group or key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GroupNotFound(_) | Self::KeyNotFound { .. })
    }
}

/// Result type for key file operations.
pub type Result<T> = std::result::Result<T, KeyFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(KeyFileError::GroupNotFound("Theme".into()).is_not_found());
        assert!(KeyFileError::KeyNotFound {
            group: "Theme".into(),
            key: "Name".into()
        }
        .is_not_found());
        assert!(!KeyFileError::parse(3, "bad line").is_not_found());
    }

    #[test]
    fn parse_error_mentions_line() {
        let msg = KeyFileError::parse(7, "missing '='").to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("missing '='"));
    }
}
