//! Tests for [`TokenParser`].

use rstest::rstest;

use crate::{ExpressionParser, ExpressionTree, ParseError, Tag, TokenParser};

fn top_level_texts(tree: &ExpressionTree) -> Vec<&str> {
    tree.top_level().into_iter().map(|node| node.text()).collect()
}

#[rstest]
#[case::operators("a + b", vec!["a", "+", "b"])]
#[case::no_spaces("a+b", vec!["a", "+", "b"])]
#[case::alphanumeric_run("2x + xy1", vec!["2x", "+", "xy1"])]
#[case::commands(r"\sin x \cdot \pi", vec![r"\sin", "x", r"\cdot", r"\pi"])]
#[case::symbol_command(r"a \, b", vec!["a", r"\,", "b"])]
#[case::escaped_braces(r"\{ a \}", vec![r"\{", "a", r"\}"])]
#[case::sized_brackets(r"\left( x \right)", vec![r"\left(", "x", r"\right)"])]
#[case::sized_commands(r"\left\langle x \right\rangle", vec![r"\left\langle", "x", r"\right\rangle"])]
#[case::spaced_delimiter(r"\left [ x \right ]", vec![r"\left[", "x", r"\right]"])]
#[case::empty("", vec![])]
fn splits_tokens(#[case] source: &str, #[case] expected: Vec<&str>) {
    let tree = TokenParser.parse(source).expect("source should parse");
    assert_eq!(top_level_texts(&tree), expected);
}

#[rstest]
#[case::letter("x", Tag::Letter)]
#[case::digits("12", Tag::Digit)]
#[case::operator("+", Tag::Operator)]
#[case::divider(",", Tag::Divider)]
#[case::command(r"\alpha", Tag::Command)]
#[case::open(r"\left(", Tag::OpenBracket)]
#[case::close(")", Tag::CloseBracket)]
fn infers_tags(#[case] source: &str, #[case] expected: Tag) {
    let tree = TokenParser.parse(source).expect("source should parse");
    let tags: Vec<_> = tree.top_level().into_iter().map(|node| node.tag()).collect();
    assert_eq!(tags, vec![expected]);
}

#[test]
fn braces_build_groups() {
    let tree = TokenParser.parse(r"\frac{a + 1}{b}").expect("source should parse");
    let top = tree.top_level();
    assert_eq!(top.len(), 3);

    let numerator = top.get(1).expect("numerator");
    assert_eq!(numerator.tag(), Tag::Group);
    let texts: Vec<_> = numerator.children().map(|node| node.text()).collect();
    assert_eq!(texts, vec!["a", "+", "1"]);
    assert_eq!(tree.to_string(), r"\frac {a + 1} {b}");
}

#[test]
fn empty_group_is_kept() {
    let tree = TokenParser.parse("a {} b").expect("source should parse");
    assert_eq!(tree.to_string(), "a {} b");
}

#[rstest]
#[case::stray_close("a }", ParseError::UnexpectedGroupClose { offset: 2 })]
#[case::unclosed("{a {b}", ParseError::UnbalancedGroup { offset: 0 })]
#[case::dangling(r"a \", ParseError::DanglingBackslash { offset: 2 })]
fn rejects_malformed_input(#[case] source: &str, #[case] expected: ParseError) {
    assert_eq!(TokenParser.parse(source).expect_err("source should fail"), expected);
}

#[rstest]
#[case::nested("{{a}}", "{a}")]
#[case::deeply_nested("{{{a}}}", "{a}")]
#[case::inside_command(r"\sqrt{{x + 1}}", r"\sqrt {x + 1}")]
#[case::two_children("{{a} b}", "{{a} b}")]
#[case::plain("{a}", "{a}")]
fn normalisation_collapses_nested_groups(#[case] source: &str, #[case] expected: &str) {
    let tree = TokenParser.parse(source).expect("source should parse");
    let normalized = TokenParser.normalize(tree);
    assert_eq!(normalized.to_string(), expected);
}

#[rstest]
#[case("{{a}} + {{{b} c}}")]
#[case(r"\frac{{x}}{y}")]
fn normalisation_is_idempotent(#[case] source: &str) {
    let once = TokenParser.normalize(TokenParser.parse(source).expect("source should parse"));
    let twice = TokenParser.normalize(ExpressionTree::from(once.to_expr()));
    assert_eq!(once.to_expr(), twice.to_expr());
}

#[test]
fn borrowed_parsers_forward() {
    fn parse_with(parser: impl ExpressionParser) -> ExpressionTree {
        parser.parse("a b").expect("source should parse")
    }
    assert_eq!(parse_with(&TokenParser).top_level().len(), 2);
}
