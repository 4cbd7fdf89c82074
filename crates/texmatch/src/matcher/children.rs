//! Matching of ordered child sequences.

use std::collections::VecDeque;

use texmatch_core::Node;

use crate::matcher::context::MatchContext;
use crate::pattern::{PatternId, PatternTree};

/// The ordered child patterns of one pattern node.
///
/// Pattern children are consumed left to right; each one is matched
/// against the front of a queue of candidate nodes, with the rest of the
/// queue as its following siblings.
#[derive(Debug, Clone, Copy)]
pub struct ChildrenMatcher<'p> {
    tree: &'p PatternTree,
    children: &'p [PatternId],
}

impl<'p> ChildrenMatcher<'p> {
    pub(crate) const fn new(tree: &'p PatternTree, children: &'p [PatternId]) -> Self {
        Self { tree, children }
    }

    /// Returns the child ids in order.
    #[must_use]
    pub const fn ids(&self) -> &'p [PatternId] {
        self.children
    }

    /// Returns the number of children.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns whether there are no children.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether the first child is a wildcard; `false` when there are
    /// no children.
    #[must_use]
    pub fn is_first_child_wildcard(&self) -> bool {
        self.children
            .first()
            .is_some_and(|id| self.tree.is_wildcard(*id))
    }

    /// Matches every child pattern against the front of `queue`, leaving
    /// unconsumed candidates in the queue.
    pub(crate) fn match_sequence<'t>(
        &self,
        queue: &mut VecDeque<Node<'t>>,
        ctx: &mut MatchContext<'p, 't>,
    ) -> bool {
        for child in self.children.iter().copied() {
            let Some(first) = queue.pop_front() else {
                return false;
            };
            if !ctx.match_at(child, first, queue) {
                return false;
            }
        }
        true
    }

    /// Matches the children against a node's candidate children.
    ///
    /// Leftover candidates are tolerated only when the configuration allows
    /// following tokens.
    pub(crate) fn match_children<'t>(
        &self,
        queue: &mut VecDeque<Node<'t>>,
        ctx: &mut MatchContext<'p, 't>,
    ) -> bool {
        self.match_sequence(queue, ctx) && (ctx.config.allow_following_tokens() || queue.is_empty())
    }
}
