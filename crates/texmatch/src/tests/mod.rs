//! Unit tests for the `texmatch` crate.

mod parser_tests;

mod behaviour;

use crate::{Expr, ExpressionTree, PatternTree, WildcardPattern};

/// Compiles whitespace-separated pattern tokens with `var\d+` wildcards.
pub(super) fn pattern(tokens: &str) -> PatternTree {
    pattern_from(Expr::tokens(tokens))
}

/// Compiles a pattern expression with `var\d+` wildcards.
pub(super) fn pattern_from(expr: Expr) -> PatternTree {
    let wildcards = WildcardPattern::new(r"var\d+").expect("wildcard regex should compile");
    PatternTree::compile(&ExpressionTree::from(expr), &wildcards).expect("pattern should compile")
}

/// Builds a candidate tree from whitespace-separated tokens.
pub(super) fn candidate(tokens: &str) -> ExpressionTree {
    ExpressionTree::from(Expr::tokens(tokens))
}
