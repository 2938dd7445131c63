//! Network loading errors.
//!
//! These never escape the loader: each one is logged and the affected
//! table falls back to its defaults.

use std::path::PathBuf;

/// Errors that can occur while reading one feed table.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The table file does not exist
    #[error("feed file not found: {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be parsed as CSV at all (e.g. unreadable header)
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A background reload stopped before producing a network
    #[error("network reload did not complete: {source}")]
    Interrupted {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl NetworkError {
    /// Whether this is the supported "file absent" degraded mode.
    pub fn is_missing(&self) -> bool {
        matches!(self, NetworkError::Missing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::Missing {
            path: PathBuf::from("feed/routes.txt"),
        };
        assert_eq!(err.to_string(), "feed file not found: feed/routes.txt");
        assert!(err.is_missing());

        let err = NetworkError::Io {
            path: PathBuf::from("feed/stops.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read feed/stops.txt: denied");
        assert!(!err.is_missing());
    }
}
