// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PrefsError {
    InvalidKey(String),
    NotInitialized,
    NotFound(String),
    Read { key: String, source: io::Error },
    Io { key: String, source: io::Error },
    Parse { key: String, value: String },
}

impl PrefsError {
    /// Absence of a key is the normal "no prior value" case for callers,
    /// so they usually want to branch on it rather than bubble it up.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PrefsError::NotFound(_))
    }
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::InvalidKey(key) => write!(f, "Invalid key '{}'", key),
            PrefsError::NotInitialized => write!(f, "Prefs directory is not initialized"),
            PrefsError::NotFound(key) => write!(f, "Key '{}' not found", key),
            PrefsError::Read { key, source } => write!(f, "Failed to read '{}': {}", key, source),
            PrefsError::Io { key, source } => write!(f, "I/O error on '{}': {}", key, source),
            PrefsError::Parse { key, value } => {
                write!(f, "Value of '{}' cannot be decoded: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::Read { source, .. } | PrefsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_is_benign() {
        assert!(PrefsError::NotFound("k".to_string()).is_not_found());
        assert!(!PrefsError::InvalidKey("k/".to_string()).is_not_found());
        assert!(!PrefsError::NotInitialized.is_not_found());
    }

    #[test]
    fn test_display() {
        let err = PrefsError::NotFound("previous-version".to_string());
        assert_eq!(err.to_string(), "Key 'previous-version' not found");

        let err = PrefsError::Parse {
            key: "update-check-count".to_string(),
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("update-check-count"));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_io_source() {
        let err = PrefsError::Io {
            key: "k".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = err.source().expect("io error should have a source");
        assert!(source.to_string().contains("denied"));
        assert!(PrefsError::NotInitialized.source().is_none());
    }
}
