//! End-to-end tests for texmatch using insta for snapshot testing.
//!
//! These tests drive the public API from pattern text to rendered captures,
//! covering both successful matches and the error surface.

use insta::assert_snapshot;
use rstest::{fixture, rstest};

use texmatch::{ExpressionParser, MatchablePattern, MatcherConfig, PatternTree, TokenParser};

fn compile(pattern: &str) -> MatchablePattern {
    MatchablePattern::new(pattern, r"var\d+").unwrap_or_else(|err| panic!("pattern: {err}"))
}

fn render_captures(pattern: &MatchablePattern) -> String {
    pattern
        .capture_strings()
        .iter()
        .map(|(id, text)| format!("{id} = {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Happy Path: Capturing
// =============================================================================

/// Fixture providing the pattern of a definite integral.
#[fixture]
fn integral() -> MatchablePattern {
    compile(r"\int_{var1}^{var2} var3 \diff{var4}")
}

#[rstest]
fn snapshot_integral_captures(mut integral: MatchablePattern) {
    assert!(integral.matches(r"\int_{0}^{\infty} e^{-t} ( t + 1 ) \diff{t}"));
    assert_snapshot!(render_captures(&integral), @r"
    var1 = 0
    var2 = \infty
    var3 = e ^ {- t} ( t + 1 )
    var4 = t
    ");
}

#[rstest]
fn integrand_with_a_top_level_comma_is_rejected(mut integral: MatchablePattern) {
    assert!(!integral.matches(r"\int_{0}^{1} f , g \diff{x}"));
    assert!(integral.captures().is_empty());
}

#[rstest]
fn integrand_with_a_bracketed_comma_is_captured(mut integral: MatchablePattern) {
    assert!(integral.matches(r"\int_{0}^{1} f ( x , y ) \diff{x}"));
    assert_snapshot!(integral.captures().text("var3").unwrap_or_default(), @"f ( x , y )");
}

#[test]
fn snapshot_function_arguments() {
    let mut pattern = compile(r"\sin@{var1} + \cos@{var1}");
    assert!(pattern.matches(r"\sin@{x + 1} + \cos@{x + 1}"));
    assert_snapshot!(render_captures(&pattern), @"var1 = x + 1");
    assert!(!pattern.matches(r"\sin@{x} + \cos@{y}"));
}

// =============================================================================
// Happy Path: Searching
// =============================================================================

#[test]
fn snapshot_all_matches_in_a_sequence() {
    let pattern = compile("var1 = 0");
    let candidate = pattern
        .parse_candidate("x = 0 , y + z = 0 ; w = 1")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let mut matcher = pattern.matcher(&candidate, MatcherConfig::lenient());

    let mut found = Vec::new();
    while matcher.find() {
        let captured = matcher
            .captures()
            .and_then(|captures| captures.text("var1"))
            .unwrap_or_default();
        found.push(format!("{:?}: {captured}", matcher.range()));
    }
    assert_snapshot!(found.join("\n"), @r"
    Some(0..3): x
    Some(4..9): y + z
    ");
}

// =============================================================================
// Unhappy Path: Errors
// =============================================================================

#[rstest]
#[case::consecutive("var1 var2", r"var\d+")]
#[case::unbalanced("{ a", r"var\d+")]
#[case::dangling("a \\", r"var\d+")]
#[case::regex("a", "var(")]
fn construction_errors_are_reported(#[case] pattern: &str, #[case] wildcards: &str) {
    assert!(MatchablePattern::new(pattern, wildcards).is_err());
}

#[test]
fn snapshot_construction_error_messages() {
    let messages: Vec<_> = [
        ("var1 var2", r"var\d+"),
        ("{ a", r"var\d+"),
        ("a }", r"var\d+"),
        ("a \\", r"var\d+"),
    ]
    .iter()
    .map(|(pattern, wildcards)| match MatchablePattern::new(pattern, wildcards) {
        Ok(_) => format!("{pattern}: compiled"),
        Err(err) => format!("{pattern}: {err}"),
    })
    .collect();

    assert_snapshot!(messages.join("\n"), @r"
    var1 var2: pattern is not matchable: two consecutive wildcards `var1` and `var2` have no unique matches
    { a: failed to parse pattern: unclosed group opened at byte 0
    a }: failed to parse pattern: unexpected group close at byte 2
    a \: failed to parse pattern: dangling backslash at byte 2
    ");
}

#[test]
fn snapshot_malformed_candidate() {
    let pattern = compile("var1 = y");
    let candidate = TokenParser
        .parse("( a ] = y")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let outcome = pattern.pattern().evaluate(&candidate, MatcherConfig::exact());
    let reason = outcome
        .malformed()
        .map(ToString::to_string)
        .unwrap_or_default();
    assert_snapshot!(reason, @"bracket `]` does not close `(`");
}

#[test]
fn shared_pattern_tree_matches_from_threads() {
    let pattern = compile("var1 + 1");
    let tree: &PatternTree = pattern.pattern();
    std::thread::scope(|scope| {
        for text in ["a + 1", "( b , c ) + 1", "d - 1"] {
            scope.spawn(move || {
                let candidate = TokenParser
                    .parse(text)
                    .unwrap_or_else(|err| panic!("parse: {err}"));
                let matched = tree.is_match(&candidate, MatcherConfig::exact());
                assert_eq!(matched, text != "d - 1");
            });
        }
    });
}
