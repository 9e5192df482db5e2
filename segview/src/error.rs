//! Error types for the benchmark harness

use segview_core::{ErrorCategory, ViewError};
use thiserror::Error;

/// Errors surfaced by the harness and the command line front end
#[derive(Debug, Error)]
pub enum BenchError {
    /// Wrong command-line usage
    #[error("{0}")]
    Usage(String),
    /// A command-line value that failed strict parsing
    #[error("invalid value '{value}' for {name}: {source}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        source: ViewError,
    },
    /// Buffer or view failure
    #[error(transparent)]
    View(#[from] ViewError),
    /// Report serialization failure
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Output stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Wrap a parse failure with the argument it came from
    pub fn invalid_argument(name: &'static str, value: &str, source: ViewError) -> Self {
        BenchError::InvalidArgument {
            name,
            value: value.to_owned(),
            source,
        }
    }

    /// Category of the underlying view error, if there is one
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            BenchError::InvalidArgument { source, .. } => Some(source.category()),
            BenchError::View(err) => Some(err.category()),
            BenchError::Usage(_) | BenchError::Serialize(_) | BenchError::Io(_) => None,
        }
    }
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let err = BenchError::invalid_argument("nb-loops", "x", ViewError::InvalidArgument("nan"));
        assert_eq!(err.category(), Some(ErrorCategory::Input));
        assert_eq!(
            BenchError::from(ViewError::SizeOverflow).category(),
            Some(ErrorCategory::Layout)
        );
        assert_eq!(BenchError::Usage("usage".into()).category(), None);
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = BenchError::invalid_argument("--rows", "4x", ViewError::InvalidArgument("digits"));
        assert_eq!(
            err.to_string(),
            "invalid value '4x' for --rows: invalid argument: digits"
        );
    }
}
