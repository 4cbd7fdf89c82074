//! Error types for pattern construction.

use thiserror::Error;

use texmatch_core::{NotMatchable, ParseError};

/// Errors raised while building a pattern tree.
///
/// A malformed pattern is a caller bug, so these errors are surfaced rather
/// than degraded to a failed match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern text could not be parsed.
    #[error("failed to parse pattern: {0}")]
    Parse(#[from] ParseError),

    /// The wildcard regex is not a valid regular expression.
    #[error("invalid wildcard pattern `{pattern}`: {message}")]
    InvalidWildcard {
        /// The rejected regex source.
        pattern: String,
        /// Description of the regex error.
        message: String,
    },

    /// The pattern tree violates a structural rule.
    #[error("pattern is not matchable: {0}")]
    NotMatchable(#[from] NotMatchable),
}

impl PatternError {
    /// Creates an invalid wildcard error.
    #[must_use]
    pub fn invalid_wildcard(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidWildcard {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Returns the structural reason if the pattern was rejected as not
    /// matchable.
    #[must_use]
    pub const fn not_matchable(&self) -> Option<&NotMatchable> {
        match self {
            Self::NotMatchable(reason) => Some(reason),
            Self::Parse(_) | Self::InvalidWildcard { .. } => None,
        }
    }
}
