//! Grammatical tags attached to expression nodes.

use serde::{Deserialize, Serialize};

use crate::bracket::Bracket;

/// The grammatical role of an expression node.
///
/// Tags are carried through pattern construction and exposed on captures,
/// but matching itself compares term text only.
///
/// # Example
///
/// ```
/// use texmatch_core::Tag;
///
/// assert_eq!(Tag::infer("x"), Tag::Letter);
/// assert_eq!(Tag::infer("42"), Tag::Digit);
/// assert_eq!(Tag::infer("\\sin"), Tag::Command);
/// assert_eq!(Tag::infer("("), Tag::OpenBracket);
/// assert_eq!(Tag::infer(","), Tag::Divider);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Tag {
    /// An anonymous ordered sequence of nodes.
    #[default]
    Sequence,
    /// A brace-delimited group (`{…}`).
    Group,
    /// A run of letters, possibly followed by digits.
    Letter,
    /// A run of digits.
    Digit,
    /// A LaTeX command such as `\sin` or `\alpha`.
    Command,
    /// An operator or any other symbol.
    Operator,
    /// A standalone punctuation divider (`,` `;` `.`).
    Divider,
    /// An opening bracket.
    OpenBracket,
    /// A closing bracket.
    CloseBracket,
    /// A node applied to child arguments.
    Function,
}

impl Tag {
    /// Infers the tag of a leaf token from its text.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if let Some(bracket) = Bracket::classify(text) {
            return if bracket.is_close() {
                Self::CloseBracket
            } else {
                Self::OpenBracket
            };
        }

        if matches!(text, "," | ";" | ".") {
            return Self::Divider;
        }

        let mut chars = text.chars();
        match chars.next() {
            None => Self::Sequence,
            Some('\\') => Self::Command,
            Some(c) if c.is_ascii_digit() => {
                if chars.all(|d| d.is_ascii_digit()) {
                    Self::Digit
                } else {
                    Self::Letter
                }
            }
            Some(c) if c.is_alphabetic() => Self::Letter,
            Some(_) => Self::Operator,
        }
    }
}
