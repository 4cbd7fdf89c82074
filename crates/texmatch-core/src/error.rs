//! Error types shared by pattern construction and matching.

use thiserror::Error;

/// A pattern or candidate that cannot be matched.
///
/// Construction-time variants ([`WildcardWithChildren`](Self::WildcardWithChildren),
/// [`ConsecutiveWildcards`](Self::ConsecutiveWildcards)) reject a malformed
/// pattern. The remaining variants arise while matching and degrade to a
/// plain match failure at every public entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NotMatchable {
    /// A node recognised as a wildcard has children in the source tree.
    #[error("a wildcard node cannot have children (wildcard `{id}`)")]
    WildcardWithChildren {
        /// The offending wildcard id.
        id: String,
    },

    /// Two adjacent siblings are both wildcards.
    #[error("two consecutive wildcards `{first}` and `{second}` have no unique matches")]
    ConsecutiveWildcards {
        /// The left wildcard id.
        first: String,
        /// The right wildcard id.
        second: String,
    },

    /// A closing bracket was absorbed while no bracket was open.
    #[error("closing bracket `{found}` has no opening bracket")]
    UnopenedBracket {
        /// The closing token.
        found: String,
    },

    /// A closing bracket does not close the most recent opening bracket.
    #[error("bracket `{found}` does not close `{open}`")]
    BracketMismatch {
        /// The closing token.
        found: String,
        /// The pending opening token.
        open: String,
    },

    /// A repeated wildcard captured a different sequence than before.
    #[error("wildcard `{id}` captured a sequence inconsistent with its earlier capture")]
    InconsistentCapture {
        /// The repeated wildcard id.
        id: String,
    },
}

impl NotMatchable {
    /// Creates a wildcard-with-children error.
    #[must_use]
    pub fn wildcard_with_children(id: impl Into<String>) -> Self {
        Self::WildcardWithChildren { id: id.into() }
    }

    /// Creates a consecutive-wildcards error.
    #[must_use]
    pub fn consecutive_wildcards(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::ConsecutiveWildcards {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates an unopened-bracket error.
    #[must_use]
    pub fn unopened_bracket(found: impl Into<String>) -> Self {
        Self::UnopenedBracket {
            found: found.into(),
        }
    }

    /// Creates a bracket-mismatch error.
    #[must_use]
    pub fn bracket_mismatch(found: impl Into<String>, open: impl Into<String>) -> Self {
        Self::BracketMismatch {
            found: found.into(),
            open: open.into(),
        }
    }

    /// Creates an inconsistent-capture error.
    #[must_use]
    pub fn inconsistent_capture(id: impl Into<String>) -> Self {
        Self::InconsistentCapture { id: id.into() }
    }

    /// Returns whether the error rejects a pattern at construction time.
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::WildcardWithChildren { .. } | Self::ConsecutiveWildcards { .. }
        )
    }
}

/// Failure to turn text into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A `{` was never closed.
    #[error("unclosed group opened at byte {offset}")]
    UnbalancedGroup {
        /// Byte offset of the opening brace.
        offset: usize,
    },

    /// A `}` appeared without a matching `{`.
    #[error("unexpected group close at byte {offset}")]
    UnexpectedGroupClose {
        /// Byte offset of the closing brace.
        offset: usize,
    },

    /// The input ended directly after a backslash.
    #[error("dangling backslash at byte {offset}")]
    DanglingBackslash {
        /// Byte offset of the backslash.
        offset: usize,
    },
}
