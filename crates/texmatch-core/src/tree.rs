//! Arena-backed candidate expression trees.
//!
//! Nodes live in a flat arena addressed by [`NodeId`]. Children are ordered
//! id lists owned by their parent; the parent link and the position within
//! the parent's list are stored alongside, so "next sibling" is simply the
//! following entry in the parent's list.

use std::collections::BTreeMap;
use std::fmt;

use crate::expr::Expr;
use crate::tag::Tag;

/// Index of a node within an [`ExpressionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    text: String,
    tag: Tag,
    features: BTreeMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    position: usize,
}

static DETACHED: NodeData = NodeData {
    text: String::new(),
    tag: Tag::Sequence,
    features: BTreeMap::new(),
    children: Vec::new(),
    parent: None,
    position: 0,
};

/// A read-only parsed expression tree.
///
/// The root is always present; the tree is never mutated after
/// construction.
///
/// # Example
///
/// ```
/// use texmatch_core::{Expr, ExpressionTree};
///
/// let tree = ExpressionTree::from(Expr::node("f", vec![Expr::leaf("a"), Expr::leaf("b")]));
/// let root = tree.root();
/// assert_eq!(root.text(), "f");
/// let first = root.child(0).expect("child");
/// assert_eq!(first.next_sibling().map(|n| n.text()), Some("b"));
/// assert_eq!(first.parent(), Some(root));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionTree {
    nodes: Vec<NodeData>,
}

impl ExpressionTree {
    /// Builds a tree from an owned expression; the expression becomes the
    /// root.
    #[must_use]
    pub fn new(root: Expr) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.push(root, None, 0);
        tree
    }

    fn push(&mut self, expr: Expr, parent: Option<NodeId>, position: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (text, tag, features, children) = expr.into_parts();
        self.nodes.push(NodeData {
            text,
            tag,
            features,
            children: Vec::new(),
            parent,
            position,
        });

        let child_ids: Vec<NodeId> = children
            .into_iter()
            .enumerate()
            .map(|(index, child)| self.push(child, Some(id), index))
            .collect();
        if let Some(data) = self.nodes.get_mut(id.index()) {
            data.children = child_ids;
        }
        id
    }

    fn data(&self, id: NodeId) -> &NodeData {
        self.nodes.get(id.index()).unwrap_or(&DETACHED)
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Returns the node with the given id, if it belongs to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the top-level sequence of the tree.
    ///
    /// When the root is an anonymous sequence its children form the
    /// sequence; otherwise the root alone does.
    #[must_use]
    pub fn top_level(&self) -> Vec<Node<'_>> {
        let root = self.root();
        if root.is_anonymous_sequence() {
            root.children().collect()
        } else {
            vec![root]
        }
    }

    /// Iterates over all nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        (0..self.nodes.len()).map(|index| Node {
            tree: self,
            id: NodeId(index),
        })
    }

    /// Converts the tree back into an owned expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        self.root().to_expr()
    }
}

impl From<Expr> for ExpressionTree {
    fn from(root: Expr) -> Self {
        Self::new(root)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

/// A borrowed view of one node in an [`ExpressionTree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t ExpressionTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    fn data(&self) -> &'t NodeData {
        self.tree.data(self.id)
    }

    /// Returns the node id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree the node belongs to.
    #[must_use]
    pub const fn tree(&self) -> &'t ExpressionTree {
        self.tree
    }

    /// Returns the term text.
    #[must_use]
    pub fn text(&self) -> &'t str {
        &self.data().text
    }

    /// Returns the grammatical tag.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.data().tag
    }

    /// Returns a named feature.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&'t str> {
        self.data().features.get(name).map(String::as_str)
    }

    /// Returns all named features.
    #[must_use]
    pub fn features(&self) -> &'t BTreeMap<String, String> {
        &self.data().features
    }

    /// Iterates over the children in order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Node<'t>> + DoubleEndedIterator + use<'t> {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |id| Node { tree, id: *id })
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Node<'t>> {
        self.data().children.get(index).map(|id| Node {
            tree: self.tree,
            id: *id,
        })
    }

    /// Returns the number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    /// Returns whether the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.data().children.is_empty()
    }

    /// Returns whether the node is an anonymous sequence wrapper.
    #[must_use]
    pub fn is_anonymous_sequence(&self) -> bool {
        let data = self.data();
        data.tag == Tag::Sequence && data.text.is_empty()
    }

    /// Returns the parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Node<'t>> {
        self.data().parent.map(|id| Node {
            tree: self.tree,
            id,
        })
    }

    /// Returns the following sibling, if any.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Node<'t>> {
        let position = self.data().position;
        self.parent()?.child(position + 1)
    }

    /// Clones the subtree rooted at this node into an owned expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        let data = self.data();
        Expr::from_parts(
            data.text.clone(),
            data.tag,
            data.features.clone(),
            self.children().map(|child| child.to_expr()).collect(),
        )
    }

    /// Returns whether both subtrees have equal term text throughout.
    #[must_use]
    pub fn same_shape(&self, other: &Node<'_>) -> bool {
        self.text() == other.text()
            && self.child_count() == other.child_count()
            && self
                .children()
                .zip(other.children())
                .all(|(left, right)| left.same_shape(&right))
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("text", &self.text())
            .field("tag", &self.tag())
            .field("children", &self.child_count())
            .finish()
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_expr(), f)
    }
}
