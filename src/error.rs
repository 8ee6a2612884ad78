//! Error types for recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for recomendar operations.
///
/// The recommendation engines degrade gracefully wherever possible (unknown
/// ids, empty profiles, and zero vectors all yield empty or zero results), so
/// the error surface is small: querying an engine that was never fitted,
/// ingesting malformed records, and model persistence failures.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::not_fitted("ContentRecommender");
/// assert!(err.to_string().contains("call fit() first"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// A query was invoked before any successful `fit`.
    ///
    /// Signaled distinctly so callers can tell "engine not ready" apart from
    /// "no results for this query".
    NotFitted {
        /// What was queried (engine or component name)
        what: String,
    },

    /// A record at the ingestion boundary could not be parsed.
    Parse {
        /// 1-based line number in the source text
        line: usize,
        /// What went wrong
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Model serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::NotFitted { what } => {
                write!(f, "{what} has not been fitted; call fit() first")
            }
            RecomendarError::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create a not-fitted error naming the component that was queried.
    #[must_use]
    pub fn not_fitted(what: &str) -> Self {
        Self::NotFitted {
            what: what.to_string(),
        }
    }

    /// Create a parse error with 1-based line context.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for RecomendarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<RecomendarError> for &str {
    fn eq(&self, other: &RecomendarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
