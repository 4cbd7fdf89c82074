//! Capture groups recorded by wildcards.
//!
//! During a match, captures borrow candidate nodes ([`Captures`]). Callers
//! that need the groups after the candidate tree is gone take an owned
//! snapshot ([`CapturedGroups`]).

use std::collections::BTreeMap;

use texmatch_core::{Expr, Node, NotMatchable};

/// Capture groups of one successful match, borrowed from the candidate tree.
///
/// Each wildcard id maps to the ordered candidate nodes it absorbed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'t> {
    groups: BTreeMap<String, Vec<Node<'t>>>,
}

impl<'t> Captures<'t> {
    /// Returns the nodes captured by a wildcard.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[Node<'t>]> {
        self.groups.get(id).map(Vec::as_slice)
    }

    /// Returns the rendered text of a capture group.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.get(id).map(render)
    }

    /// Iterates over the capture groups in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Node<'t>])> {
        self.groups
            .iter()
            .map(|(id, nodes)| (id.as_str(), nodes.as_slice()))
    }

    /// Returns the number of capture groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns whether no group was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Renders every capture group.
    #[must_use]
    pub fn to_strings(&self) -> BTreeMap<String, String> {
        self.groups
            .iter()
            .map(|(id, nodes)| (id.clone(), render(nodes)))
            .collect()
    }

    /// Clones the captured subtrees so they outlive the candidate tree.
    #[must_use]
    pub fn to_owned_groups(&self) -> CapturedGroups {
        CapturedGroups {
            groups: self
                .groups
                .iter()
                .map(|(id, nodes)| (id.clone(), nodes.iter().map(Node::to_expr).collect()))
                .collect(),
        }
    }

    /// Records the nodes absorbed by a wildcard.
    ///
    /// A wildcard id that already holds a group must capture a sequence of
    /// the same shape again.
    pub(crate) fn record(&mut self, id: &str, nodes: Vec<Node<'t>>) -> Result<(), NotMatchable> {
        if let Some(existing) = self.groups.get(id) {
            let consistent = existing.len() == nodes.len()
                && existing
                    .iter()
                    .zip(&nodes)
                    .all(|(left, right)| left.same_shape(right));
            if !consistent {
                return Err(NotMatchable::inconsistent_capture(id));
            }
        }
        self.groups.insert(id.to_owned(), nodes);
        Ok(())
    }
}

fn render(nodes: &[Node<'_>]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Owned capture groups that outlive the candidate tree.
///
/// This is the capture store of a [`MatchablePattern`](crate::MatchablePattern):
/// it is cleared at the start of every match call and repopulated only when
/// the call succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedGroups {
    groups: BTreeMap<String, Vec<Expr>>,
}

impl CapturedGroups {
    /// Returns the expressions captured by a wildcard.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[Expr]> {
        self.groups.get(id).map(Vec::as_slice)
    }

    /// Returns the rendered text of a capture group.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.get(id).map(Expr::join)
    }

    /// Iterates over the capture groups in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Expr])> {
        self.groups
            .iter()
            .map(|(id, exprs)| (id.as_str(), exprs.as_slice()))
    }

    /// Returns the number of capture groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns whether no group is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Renders every capture group.
    #[must_use]
    pub fn to_strings(&self) -> BTreeMap<String, String> {
        self.groups
            .iter()
            .map(|(id, exprs)| (id.clone(), Expr::join(exprs)))
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.groups.clear();
    }
}
