//! Evaluation of pattern trees against candidate trees.
//!
//! [`PatternTree::evaluate`] matches a whole candidate, [`PatternTree::match_node`]
//! matches one candidate node followed by an explicit queue of siblings, and
//! [`Matcher`] searches for the first matching run within a candidate's
//! top-level sequence.

mod brackets;
mod capture;
mod children;
mod context;
mod matching;

use std::collections::VecDeque;
use std::ops::Range;

use texmatch_core::{ExpressionTree, MatcherConfig, Node, NotMatchable};
use tracing::trace;

pub use capture::{CapturedGroups, Captures};
pub use children::ChildrenMatcher;

use crate::pattern::PatternTree;
use context::MatchContext;

/// Result of evaluating a pattern against a candidate.
///
/// `Malformed` distinguishes a failure caused by a structural problem in the
/// candidate, such as an unbalanced bracket inside a wildcard run, from a
/// plain mismatch.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum MatchOutcome<'t> {
    /// The pattern matched; holds the captured groups.
    Matched(Captures<'t>),
    /// The pattern did not match.
    Unmatched,
    /// The pattern did not match because the candidate was not matchable.
    Malformed(NotMatchable),
}

impl<'t> MatchOutcome<'t> {
    /// Returns whether the pattern matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Returns the captures of a successful match.
    #[must_use]
    pub const fn captures(&self) -> Option<&Captures<'t>> {
        match self {
            Self::Matched(captures) => Some(captures),
            Self::Unmatched | Self::Malformed(_) => None,
        }
    }

    /// Consumes the outcome, returning the captures of a successful match.
    #[must_use]
    pub fn into_captures(self) -> Option<Captures<'t>> {
        match self {
            Self::Matched(captures) => Some(captures),
            Self::Unmatched | Self::Malformed(_) => None,
        }
    }

    /// Returns the reason a match was reported as malformed.
    #[must_use]
    pub const fn malformed(&self) -> Option<&NotMatchable> {
        match self {
            Self::Malformed(reason) => Some(reason),
            Self::Matched(_) | Self::Unmatched => None,
        }
    }

    fn from_parts(matched: bool, captures: Captures<'t>, malformed: Option<NotMatchable>) -> Self {
        match (matched, malformed) {
            (true, _) => Self::Matched(captures),
            (false, Some(reason)) => Self::Malformed(reason),
            (false, None) => Self::Unmatched,
        }
    }
}

impl PatternTree {
    /// Evaluates the pattern against a whole candidate tree.
    ///
    /// The pattern's top-level sequence is matched against the candidate's
    /// top-level sequence. `config` decides whether unmatched tokens may
    /// precede or follow the matched run. An empty pattern matches only an
    /// empty candidate.
    ///
    /// # Example
    ///
    /// ```
    /// use texmatch::{Expr, ExpressionTree, MatcherConfig, PatternTree, WildcardPattern};
    ///
    /// let source = ExpressionTree::from(Expr::tokens("var1 x"));
    /// let pattern = PatternTree::compile(&source, &WildcardPattern::new(r"var\d+")?)?;
    /// let candidate = ExpressionTree::from(Expr::tokens("a b x"));
    ///
    /// let outcome = pattern.evaluate(&candidate, MatcherConfig::exact());
    /// assert!(outcome.is_match());
    /// let captured = outcome.captures().and_then(|captures| captures.text("var1"));
    /// assert_eq!(captured.as_deref(), Some("a b"));
    /// # Ok::<(), texmatch::PatternError>(())
    /// ```
    pub fn evaluate<'t>(
        &self,
        candidate: &'t ExpressionTree,
        config: MatcherConfig,
    ) -> MatchOutcome<'t> {
        if self.top_level().is_empty() {
            return if candidate.top_level().is_empty() {
                MatchOutcome::Matched(Captures::default())
            } else {
                MatchOutcome::Unmatched
            };
        }

        let mut matcher = Matcher::new(self, candidate, config);
        if matcher.find() {
            MatchOutcome::Matched(matcher.into_captures())
        } else {
            matcher
                .malformed
                .map_or(MatchOutcome::Unmatched, MatchOutcome::Malformed)
        }
    }

    /// Returns whether the pattern matches the whole candidate tree.
    #[must_use]
    pub fn is_match(&self, candidate: &ExpressionTree, config: MatcherConfig) -> bool {
        self.evaluate(candidate, config).is_match()
    }

    /// Matches the pattern root against `candidate`, whose following
    /// siblings are queued in `following`.
    ///
    /// A wildcard root consumes what it absorbs from the queue; the rest is
    /// left in place. On failure the queue may be partly consumed.
    pub fn match_node<'t>(
        &self,
        candidate: Node<'t>,
        following: &mut VecDeque<Node<'t>>,
        config: MatcherConfig,
    ) -> MatchOutcome<'t> {
        let mut ctx = MatchContext::new(self, config);
        let matched = ctx.match_at(self.root(), candidate, following);
        let (captures, malformed) = ctx.into_parts();
        MatchOutcome::from_parts(matched, captures, malformed)
    }

    /// Creates a [`Matcher`] searching `candidate` for this pattern.
    #[must_use]
    pub fn matcher<'p, 't>(
        &'p self,
        candidate: &'t ExpressionTree,
        config: MatcherConfig,
    ) -> Matcher<'p, 't> {
        Matcher::new(self, candidate, config)
    }
}

/// The last successful trial of a [`Matcher`].
#[derive(Debug)]
struct Found<'t> {
    range: Range<usize>,
    captures: Captures<'t>,
}

/// Searches a candidate's top-level sequence for runs matching a pattern.
///
/// Each trial matches the pattern's top-level sequence starting at one
/// candidate position. When leading tokens are not allowed only the first
/// position is tried. Successive [`find`](Self::find) calls resume after the
/// previous match.
///
/// # Example
///
/// ```
/// use texmatch::{Expr, ExpressionTree, MatcherConfig, PatternTree, WildcardPattern};
///
/// let source = ExpressionTree::from(Expr::tokens("x"));
/// let pattern = PatternTree::compile(&source, &WildcardPattern::disabled())?;
/// let candidate = ExpressionTree::from(Expr::tokens("a , b , x , c"));
///
/// let mut matcher = pattern.matcher(&candidate, MatcherConfig::lenient());
/// assert!(matcher.find());
/// assert_eq!(matcher.range(), Some(4..5));
/// assert!(!matcher.last_match_reached_end());
/// # Ok::<(), texmatch::PatternError>(())
/// ```
#[derive(Debug)]
pub struct Matcher<'p, 't> {
    pattern: &'p PatternTree,
    config: MatcherConfig,
    sequence: Vec<Node<'t>>,
    next_start: usize,
    found: Option<Found<'t>>,
    malformed: Option<NotMatchable>,
}

impl<'p, 't> Matcher<'p, 't> {
    /// Creates a matcher over the top-level sequence of `candidate`.
    #[must_use]
    pub fn new(pattern: &'p PatternTree, candidate: &'t ExpressionTree, config: MatcherConfig) -> Self {
        Self {
            pattern,
            config,
            sequence: candidate.top_level(),
            next_start: 0,
            found: None,
            malformed: None,
        }
    }

    /// Looks for the next matching run.
    ///
    /// Returns `true` and records the run when one is found. An empty
    /// pattern never matches.
    pub fn find(&mut self) -> bool {
        self.found = None;
        self.malformed = None;
        let top_level = self.pattern.top_level();
        if top_level.is_empty() {
            return false;
        }

        while self.next_start < self.sequence.len() {
            let start = self.next_start;
            if start > 0 && !self.config.allow_leading_tokens() {
                break;
            }
            self.next_start += 1;

            trace!(start, "trying pattern at top-level position");
            let mut queue: VecDeque<Node<'t>> = self.sequence.iter().skip(start).copied().collect();
            let mut ctx = MatchContext::new(self.pattern, self.config);
            let matched = top_level.match_sequence(&mut queue, &mut ctx);
            let (captures, malformed) = ctx.into_parts();

            let end = self.sequence.len() - queue.len();
            if matched && (self.config.allow_following_tokens() || queue.is_empty()) {
                self.next_start = end.max(start + 1);
                self.malformed = None;
                self.found = Some(Found {
                    range: start..end,
                    captures,
                });
                return true;
            }
            if self.malformed.is_none() {
                self.malformed = malformed;
            }
        }

        self.next_start = self.sequence.len();
        false
    }

    /// Returns whether the last match extended to the end of the sequence.
    #[must_use]
    pub fn last_match_reached_end(&self) -> bool {
        self.found
            .as_ref()
            .is_some_and(|found| found.range.end == self.sequence.len())
    }

    /// Returns the top-level index range of the last match.
    #[must_use]
    pub fn range(&self) -> Option<Range<usize>> {
        self.found.as_ref().map(|found| found.range.clone())
    }

    /// Returns the top-level nodes covered by the last match.
    #[must_use]
    pub fn matched_nodes(&self) -> &[Node<'t>] {
        self.found
            .as_ref()
            .and_then(|found| self.sequence.get(found.range.clone()))
            .unwrap_or_default()
    }

    /// Returns the captures of the last match.
    #[must_use]
    pub fn captures(&self) -> Option<&Captures<'t>> {
        self.found.as_ref().map(|found| &found.captures)
    }

    /// Returns the first structural problem met by the failed trials of
    /// the last [`find`](Self::find); `None` once a trial succeeds.
    #[must_use]
    pub const fn malformed(&self) -> Option<&NotMatchable> {
        self.malformed.as_ref()
    }

    /// Rewinds the matcher to the start of the sequence.
    pub fn reset(&mut self) {
        self.next_start = 0;
        self.found = None;
        self.malformed = None;
    }

    /// Consumes the matcher, returning the captures of the last match, or
    /// empty captures if there was none.
    #[must_use]
    pub fn into_captures(self) -> Captures<'t> {
        self.found.map(|found| found.captures).unwrap_or_default()
    }
}
