//! Owned expression values.
//!
//! An [`Expr`] is the owned, recursive counterpart of a [`Node`](crate::Node).
//! It is used to build candidate and pattern trees without a parser and to
//! hold captured subtrees once the candidate tree has been dropped.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// An owned expression: term text, tag, named features and ordered children.
///
/// # Rendering
///
/// `Display` produces a plain TeX-like rendering: leaves render as their
/// text, anonymous sequences as their space-separated children, groups as
/// `{…}`, and any other node as `text{children}`.
///
/// # Example
///
/// ```
/// use texmatch_core::Expr;
///
/// let call = Expr::node("f", vec![Expr::leaf("a"), Expr::leaf(","), Expr::leaf("b")]);
/// assert_eq!(call.to_string(), "f{a , b}");
/// assert_eq!(Expr::group(vec![Expr::leaf("x")]).to_string(), "{x}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expr {
    text: String,
    tag: Tag,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    features: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
}

impl Expr {
    /// Creates an expression from all of its parts.
    #[must_use]
    pub fn new(text: impl Into<String>, tag: Tag, children: Vec<Self>) -> Self {
        Self {
            text: text.into(),
            tag,
            features: BTreeMap::new(),
            children,
        }
    }

    /// Creates a childless token whose tag is inferred from its text.
    #[must_use]
    pub fn leaf(text: impl Into<String>) -> Self {
        let owned: String = text.into();
        let tag = Tag::infer(&owned);
        Self::new(owned, tag, Vec::new())
    }

    /// Creates a node applied to child arguments, tagged [`Tag::Function`].
    #[must_use]
    pub fn node(text: impl Into<String>, children: Vec<Self>) -> Self {
        Self::new(text, Tag::Function, children)
    }

    /// Creates an anonymous sequence.
    #[must_use]
    pub fn sequence(children: Vec<Self>) -> Self {
        Self::new(String::new(), Tag::Sequence, children)
    }

    /// Creates a brace group.
    #[must_use]
    pub fn group(children: Vec<Self>) -> Self {
        Self::new(String::new(), Tag::Group, children)
    }

    /// Creates an anonymous sequence of leaves from whitespace-separated
    /// tokens.
    #[must_use]
    pub fn tokens(source: &str) -> Self {
        Self::sequence(source.split_whitespace().map(Self::leaf).collect())
    }

    /// Returns a copy with the tag replaced.
    #[must_use]
    pub fn with_tag(self, tag: Tag) -> Self {
        Self { tag, ..self }
    }

    /// Returns a copy with a named feature added.
    #[must_use]
    pub fn with_feature(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.features.insert(name.into(), value.into());
        self
    }

    /// Returns the term text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the grammatical tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns a named feature.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name).map(String::as_str)
    }

    /// Returns all named features.
    #[must_use]
    pub const fn features(&self) -> &BTreeMap<String, String> {
        &self.features
    }

    /// Returns the children in order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Consumes the expression and returns its children.
    #[must_use]
    pub fn into_children(self) -> Vec<Self> {
        self.children
    }

    /// Returns the expression with every child replaced by `f(child)`.
    #[must_use]
    pub fn map_children(self, f: impl FnMut(Self) -> Self) -> Self {
        Self {
            children: self.children.into_iter().map(f).collect(),
            ..self
        }
    }

    /// Returns whether the expression has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether both expressions have equal term text throughout,
    /// ignoring tags and features.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.text == other.text
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(left, right)| left.same_shape(right))
    }

    /// Renders a sequence of expressions separated by single spaces.
    #[must_use]
    pub fn join(items: &[Self]) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn into_parts(self) -> (String, Tag, BTreeMap<String, String>, Vec<Self>) {
        (self.text, self.tag, self.features, self.children)
    }

    pub(crate) const fn from_parts(
        text: String,
        tag: Tag,
        features: BTreeMap<String, String>,
        children: Vec<Self>,
    ) -> Self {
        Self {
            text,
            tag,
            features,
            children,
        }
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Expr]) -> fmt::Result {
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        fmt::Display::fmt(child, f)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anonymous = self.text.is_empty();
        match self.tag {
            Tag::Sequence if anonymous => write_children(f, &self.children),
            Tag::Group if anonymous => {
                f.write_str("{")?;
                write_children(f, &self.children)?;
                f.write_str("}")
            }
            _ if self.children.is_empty() => f.write_str(&self.text),
            _ => {
                f.write_str(&self.text)?;
                f.write_str("{")?;
                write_children(f, &self.children)?;
                f.write_str("}")
            }
        }
    }
}
