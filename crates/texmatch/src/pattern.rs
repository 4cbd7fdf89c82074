//! Pattern trees with wildcards.
//!
//! A [`PatternTree`] mirrors the shape of an expression tree. Every node is
//! either a literal, which must match a candidate node with equal term text
//! and matching children, or a wildcard, which absorbs one candidate node or
//! a contiguous run of sibling nodes and records them under its id.
//!
//! Nodes live in an arena addressed by [`PatternId`]. Children are owned by
//! their parent as an ordered id list, and the next sibling of a node is the
//! following entry in that list.
//!
//! # Construction rules
//!
//! - A node is a wildcard iff its text matches the wildcard regex and it has
//!   no children in the source tree; a matching node with children is
//!   rejected.
//! - Two adjacent siblings may not both be wildcards, since the split
//!   between them would be ambiguous.

use std::collections::BTreeMap;

use texmatch_core::{ExpressionTree, Node, NotMatchable, Tag};

use crate::matcher::ChildrenMatcher;
use crate::wildcard::WildcardPattern;

/// Index of a node within a [`PatternTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternId(usize);

impl PatternId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Whether a pattern node is a literal or a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// Matches a candidate node with equal text and matching children.
    Literal {
        /// The ordered child patterns.
        children: Vec<PatternId>,
    },
    /// Matches any node or sibling run and captures it.
    Wildcard {
        /// The capture id, i.e. the wildcard's token text.
        id: String,
    },
}

/// One node of a [`PatternTree`].
#[derive(Debug, Clone)]
pub struct PatternNode {
    text: String,
    tag: Tag,
    features: BTreeMap<String, String>,
    kind: PatternKind,
    parent: Option<PatternId>,
    position: usize,
}

impl PatternNode {
    /// Returns the term text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the grammatical tag copied from the source tree.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns a named feature copied from the source tree.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name).map(String::as_str)
    }

    /// Returns all named features.
    #[must_use]
    pub const fn features(&self) -> &BTreeMap<String, String> {
        &self.features
    }

    /// Returns the literal/wildcard variant.
    #[must_use]
    pub const fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Returns whether the node is a wildcard.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self.kind, PatternKind::Wildcard { .. })
    }

    /// Returns the capture id of a wildcard node.
    #[must_use]
    pub fn wildcard_id(&self) -> Option<&str> {
        match &self.kind {
            PatternKind::Wildcard { id } => Some(id),
            PatternKind::Literal { .. } => None,
        }
    }

    /// Returns the ordered child ids; always empty for wildcards.
    #[must_use]
    pub fn children(&self) -> &[PatternId] {
        match &self.kind {
            PatternKind::Literal { children } => children,
            PatternKind::Wildcard { .. } => &[],
        }
    }

    /// Returns the parent id, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<PatternId> {
        self.parent
    }
}

/// An immutable pattern tree that may contain wildcards.
///
/// Matching never mutates the tree, so one tree can be shared between
/// threads; every evaluation keeps its captures in its own context.
///
/// # Example
///
/// ```
/// use texmatch::{Expr, ExpressionTree, PatternTree, WildcardPattern};
///
/// let source = ExpressionTree::from(Expr::tokens("var1 + x"));
/// let pattern = PatternTree::compile(&source, &WildcardPattern::new(r"var\d+")?)?;
/// assert_eq!(pattern.wildcard_ids(), vec!["var1"]);
/// # Ok::<(), texmatch::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternTree {
    nodes: Vec<PatternNode>,
    root: PatternId,
}

impl PatternTree {
    /// Builds a pattern tree from a parsed source tree.
    ///
    /// # Errors
    ///
    /// Returns [`NotMatchable::WildcardWithChildren`] if a wildcard token
    /// has children, or [`NotMatchable::ConsecutiveWildcards`] if two
    /// adjacent siblings are wildcards.
    pub fn compile(
        source: &ExpressionTree,
        wildcards: &WildcardPattern,
    ) -> Result<Self, NotMatchable> {
        let mut tree = Self {
            nodes: Vec::with_capacity(source.node_count()),
            root: PatternId(0),
        };
        tree.root = tree.build(source.root(), wildcards, None, 0)?;
        Ok(tree)
    }

    fn build(
        &mut self,
        source: Node<'_>,
        wildcards: &WildcardPattern,
        parent: Option<PatternId>,
        position: usize,
    ) -> Result<PatternId, NotMatchable> {
        let id = PatternId(self.nodes.len());
        let text = source.text();
        let is_wildcard = wildcards.is_wildcard(text);
        if is_wildcard && !source.is_leaf() {
            return Err(NotMatchable::wildcard_with_children(text));
        }

        let kind = if is_wildcard {
            PatternKind::Wildcard {
                id: text.to_owned(),
            }
        } else {
            PatternKind::Literal {
                children: Vec::new(),
            }
        };
        self.nodes.push(PatternNode {
            text: text.to_owned(),
            tag: source.tag(),
            features: source.features().clone(),
            kind,
            parent,
            position,
        });
        if is_wildcard {
            return Ok(id);
        }

        let mut children = Vec::with_capacity(source.child_count());
        let mut previous_wildcard: Option<String> = None;
        for (index, child) in source.children().enumerate() {
            let child_id = self.build(child, wildcards, Some(id), index)?;
            let current_wildcard = self
                .get(child_id)
                .and_then(PatternNode::wildcard_id)
                .map(str::to_owned);
            if let (Some(first), Some(second)) = (&previous_wildcard, &current_wildcard) {
                return Err(NotMatchable::consecutive_wildcards(first, second));
            }
            previous_wildcard = current_wildcard;
            children.push(child_id);
        }

        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.kind = PatternKind::Literal { children };
        }
        Ok(id)
    }

    /// Returns the root id.
    #[must_use]
    pub const fn root(&self) -> PatternId {
        self.root
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn get(&self, id: PatternId) -> Option<&PatternNode> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes ever added to the arena, including nodes
    /// detached by [`remove_first_child`](Self::remove_first_child).
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the node is a wildcard.
    #[must_use]
    pub fn is_wildcard(&self, id: PatternId) -> bool {
        self.get(id).is_some_and(PatternNode::is_wildcard)
    }

    /// Returns the following sibling of a node, if any.
    #[must_use]
    pub fn next_sibling(&self, id: PatternId) -> Option<PatternId> {
        let node = self.get(id)?;
        let parent = self.get(node.parent?)?;
        parent.children().get(node.position + 1).copied()
    }

    /// Returns the children of a node as a [`ChildrenMatcher`].
    #[must_use]
    pub fn children(&self, id: PatternId) -> ChildrenMatcher<'_> {
        let children = self.get(id).map_or(&[] as &[PatternId], PatternNode::children);
        ChildrenMatcher::new(self, children)
    }

    /// Returns the top-level pattern sequence: the root's children when the
    /// root is an anonymous sequence, otherwise the root alone.
    #[must_use]
    pub fn top_level(&self) -> ChildrenMatcher<'_> {
        let anonymous = self
            .get(self.root)
            .is_some_and(|node| node.tag == Tag::Sequence && node.text.is_empty());
        if anonymous {
            self.children(self.root)
        } else {
            ChildrenMatcher::new(self, std::slice::from_ref(&self.root))
        }
    }

    /// Returns the distinct wildcard ids in pre-order of first occurrence.
    #[must_use]
    pub fn wildcard_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            if let Some(wildcard) = node.wildcard_id() {
                if !ids.contains(&wildcard) {
                    ids.push(wildcard);
                }
            }
            pending.extend(node.children().iter().rev());
        }
        ids
    }

    /// Detaches and returns the first child of `parent`.
    ///
    /// The remaining children shift one position to the left, so sibling
    /// links stay consistent. Returns `None` if `parent` has no children.
    pub fn remove_first_child(&mut self, parent: PatternId) -> Option<PatternId> {
        let node = self.nodes.get_mut(parent.index())?;
        let PatternKind::Literal { children } = &mut node.kind else {
            return None;
        };
        if children.is_empty() {
            return None;
        }
        let removed = children.remove(0);
        let remaining = children.clone();

        for (position, id) in remaining.into_iter().enumerate() {
            if let Some(child) = self.nodes.get_mut(id.index()) {
                child.position = position;
            }
        }
        if let Some(child) = self.nodes.get_mut(removed.index()) {
            child.parent = None;
            child.position = 0;
        }
        Some(removed)
    }
}
