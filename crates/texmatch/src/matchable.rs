//! Text-level matching entry points.

use std::collections::BTreeMap;

use texmatch_core::{ExpressionTree, MatcherConfig};
use tracing::warn;

use crate::error::PatternError;
use crate::matcher::{CapturedGroups, MatchOutcome, Matcher};
use crate::parser::{ExpressionParser, TokenParser};
use crate::pattern::PatternTree;
use crate::wildcard::WildcardPattern;

/// A compiled pattern bundled with the parser used for candidate text and
/// the captures of its most recent match.
///
/// Every match call clears the captures and repopulates them on success, so
/// read them before issuing the next call. The captures are owned and
/// outlive the candidate that produced them. Callers matching from several
/// threads should share the [`PatternTree`] and call
/// [`PatternTree::evaluate`] instead.
///
/// # Example
///
/// ```
/// use texmatch::MatchablePattern;
///
/// let mut pattern = MatchablePattern::new(r"\frac{var1}{var2}", r"var\d+")?;
/// assert!(pattern.matches(r"\frac{a + b}{2}"));
/// assert_eq!(pattern.captures().text("var1").as_deref(), Some("a + b"));
/// assert_eq!(pattern.captures().text("var2").as_deref(), Some("2"));
/// assert!(!pattern.matches(r"\frac{a}"));
/// assert!(pattern.captures().is_empty());
/// # Ok::<(), texmatch::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatchablePattern<P = TokenParser> {
    parser: P,
    tree: PatternTree,
    captures: CapturedGroups,
}

impl MatchablePattern<TokenParser> {
    /// Compiles `pattern` with the [`TokenParser`].
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern does not parse, the
    /// wildcard regex is invalid, or the pattern tree is not matchable.
    pub fn new(pattern: &str, wildcards: &str) -> Result<Self, PatternError> {
        Self::compile(TokenParser, pattern, wildcards)
    }
}

impl<P: ExpressionParser> MatchablePattern<P> {
    /// Parses, normalises and compiles `pattern` with `parser`.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern does not parse, the
    /// wildcard regex is invalid, or the pattern tree is not matchable.
    pub fn compile(parser: P, pattern: &str, wildcards: &str) -> Result<Self, PatternError> {
        let source = parser.normalize(parser.parse(pattern)?);
        let recognizer = WildcardPattern::new(wildcards)?;
        Self::from_tree(parser, &source, &recognizer)
    }

    /// Compiles an already parsed pattern tree.
    ///
    /// The tree is used as given; normalise it first if the parser expects
    /// that.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::NotMatchable`] if the pattern tree is not
    /// matchable.
    pub fn from_tree(
        parser: P,
        source: &ExpressionTree,
        wildcards: &WildcardPattern,
    ) -> Result<Self, PatternError> {
        let tree = PatternTree::compile(source, wildcards)?;
        Ok(Self {
            parser,
            tree,
            captures: CapturedGroups::default(),
        })
    }

    /// Returns the compiled pattern tree.
    #[must_use]
    pub const fn pattern(&self) -> &PatternTree {
        &self.tree
    }

    /// Returns the parser used for candidate text.
    #[must_use]
    pub const fn parser(&self) -> &P {
        &self.parser
    }

    /// Returns whether `text` matches the pattern exactly.
    pub fn matches(&mut self, text: &str) -> bool {
        self.matches_with(text, MatcherConfig::exact())
    }

    /// Returns whether `text` matches the pattern under `config`.
    ///
    /// Text that fails to parse does not match.
    pub fn matches_with(&mut self, text: &str, config: MatcherConfig) -> bool {
        self.captures.clear();
        let Ok(candidate) = self
            .parser
            .parse(text)
            .inspect_err(|error| warn!(%error, text, "candidate expression could not be parsed"))
        else {
            return false;
        };
        self.matches_tree(candidate, config)
    }

    /// Normalises `candidate` and returns whether it matches under `config`.
    pub fn matches_tree(&mut self, candidate: ExpressionTree, config: MatcherConfig) -> bool {
        self.captures.clear();
        let normalized = self.parser.normalize(candidate);
        match self.tree.evaluate(&normalized, config) {
            MatchOutcome::Matched(captures) => {
                self.captures = captures.to_owned_groups();
                true
            }
            MatchOutcome::Unmatched | MatchOutcome::Malformed(_) => false,
        }
    }

    /// Returns the captures of the most recent successful match; empty
    /// after a failed one.
    #[must_use]
    pub const fn captures(&self) -> &CapturedGroups {
        &self.captures
    }

    /// Returns the rendered captures of the most recent successful match.
    #[must_use]
    pub fn capture_strings(&self) -> BTreeMap<String, String> {
        self.captures.to_strings()
    }

    /// Parses and normalises candidate text the way the match calls do.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if `text` is not well formed.
    pub fn parse_candidate(&self, text: &str) -> Result<ExpressionTree, PatternError> {
        Ok(self.parser.normalize(self.parser.parse(text)?))
    }

    /// Creates a find-within [`Matcher`] over `candidate`.
    #[must_use]
    pub fn matcher<'p, 't>(
        &'p self,
        candidate: &'t ExpressionTree,
        config: MatcherConfig,
    ) -> Matcher<'p, 't> {
        self.tree.matcher(candidate, config)
    }
}
