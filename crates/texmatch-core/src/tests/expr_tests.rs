//! Tests for [`Expr`].

use crate::{Expr, Tag};

#[test]
fn leaf_infers_tag() {
    assert_eq!(Expr::leaf("x").tag(), Tag::Letter);
    assert_eq!(Expr::leaf("(").tag(), Tag::OpenBracket);
}

#[test]
fn tokens_builds_flat_sequence() {
    let expr = Expr::tokens("( a , b ) x");
    assert_eq!(expr.tag(), Tag::Sequence);
    assert_eq!(expr.children().len(), 6);
    assert_eq!(expr.to_string(), "( a , b ) x");
}

#[test]
fn renders_nested_structure() {
    let expr = Expr::sequence(vec![
        Expr::leaf("\\frac"),
        Expr::group(vec![Expr::leaf("a")]),
        Expr::group(vec![Expr::leaf("b"), Expr::leaf("+"), Expr::leaf("c")]),
        Expr::node("f", vec![Expr::leaf("x")]),
    ]);
    assert_eq!(expr.to_string(), "\\frac {a} {b + c} f{x}");
}

#[test]
fn empty_group_renders_braces() {
    assert_eq!(Expr::group(Vec::new()).to_string(), "{}");
}

#[test]
fn same_shape_ignores_tags_and_features() {
    let left = Expr::node("f", vec![Expr::leaf("a")]).with_feature("meaning", "function");
    let right = Expr::node("f", vec![Expr::leaf("a").with_tag(Tag::Command)]);
    assert!(left.same_shape(&right));
    assert_ne!(left, right);
}

#[test]
fn same_shape_detects_different_children() {
    let left = Expr::node("f", vec![Expr::leaf("a")]);
    let right = Expr::node("f", vec![Expr::leaf("a"), Expr::leaf("b")]);
    assert!(!left.same_shape(&right));
}

#[test]
fn join_separates_with_spaces() {
    let items = vec![Expr::leaf("a"), Expr::leaf(","), Expr::leaf("b")];
    assert_eq!(Expr::join(&items), "a , b");
    assert_eq!(Expr::join(&[]), "");
}

#[test]
fn features_are_kept() {
    let expr = Expr::leaf("\\Gamma").with_feature("meaning", "gamma function");
    assert_eq!(expr.feature("meaning"), Some("gamma function"));
    assert_eq!(expr.features().len(), 1);
}

#[test]
fn expression_serialises_without_empty_collections() {
    let json = serde_json::to_string(&Expr::leaf("x")).expect("serialise");
    assert_eq!(json, r#"{"text":"x","tag":"letter"}"#);
}

#[test]
fn map_children_keeps_own_attributes() {
    let expr = Expr::node("f", vec![Expr::leaf("a"), Expr::leaf("b")]).with_feature("k", "v");
    let mapped = expr.map_children(|child| Expr::leaf(format!("{}'", child.text())));
    assert_eq!(mapped.to_string(), "f{a' b'}");
    assert_eq!(mapped.feature("k"), Some("v"));
    assert_eq!(mapped.tag(), Tag::Function);
}
