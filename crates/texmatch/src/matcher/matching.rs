//! The node matching engine.
//!
//! Every pattern node is matched against one candidate node plus the queue
//! of that candidate's following siblings. Literals compare term text and
//! recurse into children; wildcards absorb the candidate and, greedily,
//! following siblings until the next pattern sibling re-synchronises.

use std::collections::VecDeque;

use texmatch_core::{Node, NotMatchable};
use tracing::debug;

use crate::matcher::brackets::BracketStack;
use crate::matcher::context::MatchContext;
use crate::pattern::{PatternId, PatternKind};

/// Tokens a wildcard never absorbs outside of brackets.
fn is_forbidden_in_wildcard(node: Node<'_>) -> bool {
    matches!(node.text(), "," | ";" | ".")
}

impl<'p, 't> MatchContext<'p, 't> {
    /// Matches `pattern` against `candidate`, with `following` holding the
    /// candidate's remaining siblings.
    ///
    /// Wildcards consume from `following`. A failed attempt restores the
    /// captures recorded before it, and a structural problem degrades to a
    /// failed match. A successful attempt drops the problems met by its
    /// abandoned branches.
    pub(super) fn match_at(
        &mut self,
        pattern: PatternId,
        candidate: Node<'t>,
        following: &mut VecDeque<Node<'t>>,
    ) -> bool {
        let snapshot = self.captures.clone();
        let malformed = self.malformed.clone();
        let matched = self
            .match_node(pattern, candidate, following)
            .unwrap_or_else(|reason| {
                debug!(%reason, expression = %candidate, "expression not matchable");
                self.note_malformed(reason);
                false
            });

        if matched {
            self.malformed = malformed;
        } else {
            self.captures = snapshot;
        }
        matched
    }

    /// Tries the next pattern sibling on behalf of an absorbing wildcard.
    ///
    /// A failed lookahead only means the wildcard keeps absorbing, so it
    /// never marks the attempt as malformed.
    fn lookahead(
        &mut self,
        sibling: PatternId,
        next: Node<'t>,
        following: &mut VecDeque<Node<'t>>,
    ) -> bool {
        let malformed = self.malformed.clone();
        let matched = self.match_at(sibling, next, following);
        self.malformed = malformed;
        matched
    }

    fn match_node(
        &mut self,
        pattern: PatternId,
        candidate: Node<'t>,
        following: &mut VecDeque<Node<'t>>,
    ) -> Result<bool, NotMatchable> {
        let tree = self.pattern;
        let Some(node) = tree.get(pattern) else {
            return Ok(false);
        };

        match node.kind() {
            PatternKind::Literal { .. } => Ok(self.match_literal(pattern, node.text(), candidate)),
            PatternKind::Wildcard { id } => self.match_wildcard(pattern, id, candidate, following),
        }
    }

    fn match_literal(&mut self, pattern: PatternId, text: &str, candidate: Node<'t>) -> bool {
        if text != candidate.text() {
            return false;
        }

        let children = self.pattern.children(pattern);
        if children.is_empty() {
            return candidate.is_leaf();
        }

        let mut queue: VecDeque<Node<'t>> = candidate.children().collect();
        children.match_children(&mut queue, self)
    }

    fn match_wildcard(
        &mut self,
        pattern: PatternId,
        id: &str,
        candidate: Node<'t>,
        following: &mut VecDeque<Node<'t>>,
    ) -> Result<bool, NotMatchable> {
        let Some(next_sibling) = self.pattern.next_sibling(pattern) else {
            let mut absorbed = Vec::with_capacity(following.len() + 1);
            absorbed.push(candidate);
            absorbed.extend(following.drain(..));
            self.captures.record(id, absorbed)?;
            return Ok(true);
        };

        if is_forbidden_in_wildcard(candidate) {
            return Ok(false);
        }
        let Some(mut next) = following.pop_front() else {
            return Ok(false);
        };

        let mut absorbed = vec![candidate];
        let mut brackets = BracketStack::new(!self.config.ignore_bracket_logic());
        brackets.update(candidate)?;

        // An open bracket keeps absorbing regardless of the lookahead.
        while brackets.is_open() || !self.lookahead(next_sibling, next, following) {
            if following.is_empty() {
                return Ok(false);
            }
            if !brackets.is_nested() && is_forbidden_in_wildcard(next) {
                return Ok(false);
            }

            absorbed.push(next);
            brackets.update(next)?;

            let Some(after) = following.pop_front() else {
                return Ok(false);
            };
            next = after;
        }

        following.push_front(next);
        self.captures.record(id, absorbed)?;
        Ok(true)
    }
}
