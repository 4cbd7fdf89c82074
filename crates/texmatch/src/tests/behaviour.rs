//! Behaviour-driven tests for pattern compilation and matching.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{MatchablePattern, MatcherConfig, PatternError};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    compiled: Option<Result<MatchablePattern, PatternError>>,
    matched: Option<bool>,
    reached_end: Option<bool>,
}

impl TestWorld {
    fn pattern_mut(&mut self) -> &mut MatchablePattern {
        match self.compiled.as_mut() {
            Some(Ok(pattern)) => pattern,
            Some(Err(err)) => panic!("pattern should compile: {err}"),
            None => panic!("pattern should be set"),
        }
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the pattern {pattern} with wildcards {wildcards}")]
fn given_pattern(world: &mut TestWorld, pattern: QuotedString, wildcards: QuotedString) {
    world.compiled = Some(MatchablePattern::new(pattern.as_str(), wildcards.as_str()));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the pattern is matched exactly against {text}")]
fn when_matched(world: &mut TestWorld, text: QuotedString) {
    let matched = world.pattern_mut().matches(text.as_str());
    world.matched = Some(matched);
}

#[when("the pattern is searched for in {text}")]
fn when_searched(world: &mut TestWorld, text: QuotedString) {
    let pattern = world.pattern_mut();
    let candidate = pattern
        .parse_candidate(text.as_str())
        .expect("candidate should parse");
    let mut matcher = pattern.matcher(&candidate, MatcherConfig::lenient());
    let found = matcher.find();
    let reached_end = matcher.last_match_reached_end();
    world.matched = Some(found);
    world.reached_end = Some(reached_end);
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the match succeeds")]
fn then_match_succeeds(world: &mut TestWorld) {
    assert_eq!(world.matched, Some(true));
}

#[then("the match fails")]
fn then_match_fails(world: &mut TestWorld) {
    assert_eq!(world.matched, Some(false));
}

#[then("a match is found")]
fn then_match_found(world: &mut TestWorld) {
    assert_eq!(world.matched, Some(true));
}

#[then("{id} captures {expected}")]
fn then_captures(world: &mut TestWorld, id: QuotedString, expected: QuotedString) {
    let captured = world.pattern_mut().captures().text(id.as_str());
    assert_eq!(captured.as_deref(), Some(expected.as_str()));
}

#[then("no captures are recorded")]
fn then_no_captures(world: &mut TestWorld) {
    assert!(world.pattern_mut().captures().is_empty());
}

#[then("tokens remain after the match")]
fn then_tokens_remain(world: &mut TestWorld) {
    assert_eq!(world.reached_end, Some(false));
}

#[then("compilation fails with {message}")]
fn then_compilation_fails(world: &mut TestWorld, message: QuotedString) {
    let Some(Err(err)) = world.compiled.as_ref() else {
        panic!("pattern compilation should fail");
    };
    assert_eq!(err.to_string(), message.as_str());
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/texmatch.feature",
    name = "Wildcard stops at the next pattern sibling"
)]
fn wildcard_resynchronises(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/texmatch.feature",
    name = "Stray punctuation ends the match"
)]
fn stray_punctuation(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/texmatch.feature",
    name = "Open brackets keep a wildcard absorbing"
)]
fn bracket_balance(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/texmatch.feature",
    name = "Consecutive wildcards are rejected"
)]
fn consecutive_wildcards(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/texmatch.feature",
    name = "Finding a pattern inside a longer expression"
)]
fn find_within(world: TestWorld) {
    let _ = world;
}
