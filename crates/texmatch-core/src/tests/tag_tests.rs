//! Tests for [`Tag`] inference.

use rstest::rstest;

use crate::Tag;

#[rstest]
#[case("x", Tag::Letter)]
#[case("var1", Tag::Letter)]
#[case("2x", Tag::Letter)]
#[case("12", Tag::Digit)]
#[case("\\alpha", Tag::Command)]
#[case("\\langle", Tag::OpenBracket)]
#[case(")", Tag::CloseBracket)]
#[case("|", Tag::OpenBracket)]
#[case(";", Tag::Divider)]
#[case("+", Tag::Operator)]
#[case("", Tag::Sequence)]
fn infers_tag_from_text(#[case] text: &str, #[case] expected: Tag) {
    assert_eq!(Tag::infer(text), expected);
}

#[test]
fn tag_serialises_in_snake_case() {
    let json = serde_json::to_string(&Tag::OpenBracket).expect("serialise");
    assert_eq!(json, "\"open_bracket\"");
}
