//! Core data model for the `texmatch` tree pattern matcher.
//!
//! This crate holds the types that exist independently of matching: parsed
//! expression trees, owned expression values, grammatical tags, the bracket
//! classifier, matcher configuration and the error types shared by the
//! pattern compiler and the matching engine. It is re-exported by the
//! `texmatch` facade crate.
//!
//! # Core types
//!
//! - [`ExpressionTree`] and [`Node`]: arena-backed, read-only candidate trees
//! - [`Expr`]: owned expression values used to build trees and hold captures
//! - [`Tag`]: grammatical tag attached to every node
//! - [`Bracket`]: classification of bracket tokens
//! - [`MatcherConfig`]: per-call matching options
//! - [`NotMatchable`] and [`ParseError`]: structured failures
//!
//! # Example
//!
//! ```
//! use texmatch_core::{Expr, ExpressionTree};
//!
//! let tree = ExpressionTree::from(Expr::sequence(vec![
//!     Expr::leaf("a"),
//!     Expr::leaf("+"),
//!     Expr::leaf("b"),
//! ]));
//! assert_eq!(tree.top_level().len(), 3);
//! assert_eq!(tree.root().to_string(), "a + b");
//! ```

mod bracket;
mod config;
mod error;
mod expr;
mod tag;
mod tree;

pub use bracket::{Bracket, BracketKind, BracketRole};
pub use config::MatcherConfig;
pub use error::{NotMatchable, ParseError};
pub use expr::Expr;
pub use tag::Tag;
pub use tree::{ExpressionTree, Node, NodeId};

#[cfg(test)]
mod tests;
