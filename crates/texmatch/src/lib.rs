//! Texmatch: tree pattern matching with wildcards for parsed LaTeX.
//!
//! A pattern is an expression tree in which some tokens are wildcards,
//! recognised by a caller-supplied regex such as `var\d+`. Matching a
//! pattern against a candidate tree compares term text node by node; a
//! wildcard absorbs one candidate node or a run of siblings, yielding to
//! the next pattern sibling as soon as it matches, and never stopping
//! inside an open bracket.
//!
//! This facade crate re-exports the data model from [`texmatch_core`] and
//! adds pattern compilation, the matching engine and text-level entry
//! points.
//!
//! # Core types
//!
//! - [`WildcardPattern`]: decides which tokens are wildcards
//! - [`PatternTree`]: an immutable, compiled pattern
//! - [`MatchOutcome`] and [`Captures`]: the result of one evaluation
//! - [`Matcher`]: finds matching runs inside a longer sequence
//! - [`MatchablePattern`]: text in, boolean and owned captures out
//! - [`ExpressionParser`] and [`TokenParser`]: the parsing seam
//!
//! # Example
//!
//! ```
//! use texmatch::MatchablePattern;
//!
//! let mut pattern = MatchablePattern::new("var1 = var2", r"var\d+")?;
//! assert!(pattern.matches("( a + b ) = c , d"));
//! assert_eq!(pattern.captures().text("var1").as_deref(), Some("( a + b )"));
//! assert_eq!(pattern.captures().text("var2").as_deref(), Some("c , d"));
//!
//! assert!(!pattern.matches("x + y"));
//! assert!(!pattern.matches("a , b = c"));
//! # Ok::<(), texmatch::PatternError>(())
//! ```

mod error;
mod matchable;
mod matcher;
mod parser;
mod pattern;
mod wildcard;

pub use texmatch_core::{
    Bracket, BracketKind, BracketRole, Expr, ExpressionTree, MatcherConfig, Node, NodeId,
    NotMatchable, ParseError, Tag,
};

pub use error::PatternError;
pub use matchable::MatchablePattern;
pub use matcher::{CapturedGroups, Captures, ChildrenMatcher, MatchOutcome, Matcher};
pub use parser::{ExpressionParser, TokenParser};
pub use pattern::{PatternId, PatternKind, PatternNode, PatternTree};
pub use wildcard::WildcardPattern;

#[cfg(test)]
mod tests;
