//! Matcher configuration.

use serde::{Deserialize, Serialize};

/// Options selecting exact or lenient matching and bracket enforcement.
///
/// The configuration is an immutable value passed to every match call.
///
/// # Defaults
///
/// The default configuration is an exact match:
///
/// - `allow_leading_tokens`: `false`
/// - `allow_following_tokens`: `false`
/// - `ignore_bracket_logic`: `false`
///
/// # Example
///
/// ```
/// use texmatch_core::MatcherConfig;
///
/// let config = MatcherConfig::exact().with_following_tokens(true);
/// assert!(!config.allow_leading_tokens());
/// assert!(config.allow_following_tokens());
/// assert!(!config.is_exact());
/// assert!(MatcherConfig::default().is_exact());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Whether unmatched tokens may precede the match in the candidate
    /// sequence.
    allow_leading_tokens: bool,
    /// Whether unmatched tokens may follow the match in the candidate
    /// sequence.
    allow_following_tokens: bool,
    /// Whether wildcards may stop absorbing while holding an open bracket.
    ignore_bracket_logic: bool,
}

impl MatcherConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(
        allow_leading_tokens: bool,
        allow_following_tokens: bool,
        ignore_bracket_logic: bool,
    ) -> Self {
        Self {
            allow_leading_tokens,
            allow_following_tokens,
            ignore_bracket_logic,
        }
    }

    /// The whole candidate must match; brackets are enforced.
    #[must_use]
    pub const fn exact() -> Self {
        Self::new(false, false, false)
    }

    /// The pattern may match any contiguous run of the candidate; brackets
    /// are enforced.
    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(true, true, false)
    }

    /// Returns a copy with `allow_leading_tokens` replaced.
    #[must_use]
    pub const fn with_leading_tokens(self, allow: bool) -> Self {
        Self {
            allow_leading_tokens: allow,
            ..self
        }
    }

    /// Returns a copy with `allow_following_tokens` replaced.
    #[must_use]
    pub const fn with_following_tokens(self, allow: bool) -> Self {
        Self {
            allow_following_tokens: allow,
            ..self
        }
    }

    /// Returns a copy with `ignore_bracket_logic` replaced.
    #[must_use]
    pub const fn with_ignored_bracket_logic(self, ignore: bool) -> Self {
        Self {
            ignore_bracket_logic: ignore,
            ..self
        }
    }

    /// Returns whether leading unmatched tokens are permitted.
    #[must_use]
    pub const fn allow_leading_tokens(&self) -> bool {
        self.allow_leading_tokens
    }

    /// Returns whether following unmatched tokens are permitted.
    #[must_use]
    pub const fn allow_following_tokens(&self) -> bool {
        self.allow_following_tokens
    }

    /// Returns whether bracket balance is ignored during absorption.
    #[must_use]
    pub const fn ignore_bracket_logic(&self) -> bool {
        self.ignore_bracket_logic
    }

    /// Returns whether this configuration demands an exact match, i.e.
    /// neither leading nor following tokens are permitted.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        !self.allow_leading_tokens && !self.allow_following_tokens
    }
}
