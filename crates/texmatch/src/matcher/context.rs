//! Matching context shared across recursive operations.

use texmatch_core::{MatcherConfig, NotMatchable};

use crate::matcher::capture::Captures;
use crate::pattern::PatternTree;

/// State of one match attempt.
///
/// The context is created per attempt and passed by reference through the
/// recursion, so the pattern tree itself stays immutable.
pub(crate) struct MatchContext<'p, 't> {
    pub(super) pattern: &'p PatternTree,
    pub(super) config: MatcherConfig,
    pub(super) captures: Captures<'t>,
    /// First structural problem met during the attempt, kept so a failed
    /// attempt can be reported as malformed rather than unmatched.
    pub(super) malformed: Option<NotMatchable>,
}

impl<'p, 't> MatchContext<'p, 't> {
    pub(super) fn new(pattern: &'p PatternTree, config: MatcherConfig) -> Self {
        Self {
            pattern,
            config,
            captures: Captures::default(),
            malformed: None,
        }
    }

    pub(super) fn note_malformed(&mut self, reason: NotMatchable) {
        if self.malformed.is_none() {
            self.malformed = Some(reason);
        }
    }

    pub(super) fn into_parts(self) -> (Captures<'t>, Option<NotMatchable>) {
        (self.captures, self.malformed)
    }
}
