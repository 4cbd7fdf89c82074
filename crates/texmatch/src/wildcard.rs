//! Wildcard recognition.

use std::fmt;

use regex::Regex;

use crate::error::PatternError;

/// Decides which pattern tokens are wildcards.
///
/// The regex must match the whole token text. An empty or blank regex
/// disables wildcards entirely.
///
/// # Example
///
/// ```
/// use texmatch::WildcardPattern;
///
/// let wildcards = WildcardPattern::new(r"var\d+")?;
/// assert!(wildcards.is_wildcard("var1"));
/// assert!(!wildcards.is_wildcard("var"));
/// assert!(!wildcards.is_wildcard("xvar1"));
/// assert!(!WildcardPattern::disabled().is_wildcard("var1"));
/// # Ok::<(), texmatch::PatternError>(())
/// ```
#[derive(Clone, Default)]
pub struct WildcardPattern {
    source: String,
    regex: Option<Regex>,
}

impl WildcardPattern {
    /// Compiles a wildcard regex.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidWildcard`] if the regex does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.trim().is_empty() {
            return Ok(Self::disabled());
        }

        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored)
            .map_err(|err| PatternError::invalid_wildcard(pattern, err.to_string()))?;
        Ok(Self {
            source: pattern.to_owned(),
            regex: Some(regex),
        })
    }

    /// Returns a pattern that recognises no wildcards.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            source: String::new(),
            regex: None,
        }
    }

    /// Returns whether wildcards are recognised at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.regex.is_some()
    }

    /// Returns the regex source as given by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether `text` names a wildcard.
    #[must_use]
    pub fn is_wildcard(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }
}

impl fmt::Debug for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WildcardPattern").field(&self.source).finish()
    }
}
