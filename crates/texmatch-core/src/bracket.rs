//! Bracket classification for wildcard absorption.
//!
//! A wildcard may not stop absorbing sibling nodes while it holds an opened
//! bracket. This module maps token text to a [`Bracket`] and decides whether
//! a closing token is the counterpart of an opening one. Classification is a
//! pure table lookup; unknown tokens are simply not brackets.

use std::fmt;

/// The family a bracket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BracketKind {
    /// `(` and `)`.
    Parenthesis,
    /// `[` and `]`.
    Square,
    /// Grouping braces `{` and `}`.
    Brace,
    /// Literal set braces `\{` and `\}`.
    EscapedBrace,
    /// `\langle` and `\rangle`.
    Angle,
    /// `\lceil` and `\rceil`.
    Ceil,
    /// `\lfloor` and `\rfloor`.
    Floor,
    /// The absolute value bar `|`.
    Bar,
    /// The norm bar `\|`.
    DoubleBar,
}

/// Whether a bracket opens, closes, or may do either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketRole {
    /// An opening bracket such as `(`.
    Open,
    /// A closing bracket such as `)`.
    Close,
    /// A symmetric bar that closes a pending bar of its own kind and opens
    /// one otherwise.
    Either,
}

/// A classified bracket token.
///
/// # Example
///
/// ```
/// use texmatch_core::Bracket;
///
/// let open = Bracket::classify("\\left(").expect("bracket");
/// let close = Bracket::classify("\\right)").expect("bracket");
/// assert!(open.is_open());
/// assert!(Bracket::counterpart(open, close));
/// assert!(Bracket::classify("x").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket {
    kind: BracketKind,
    role: BracketRole,
    sized: bool,
}

impl Bracket {
    const fn new(kind: BracketKind, role: BracketRole, sized: bool) -> Self {
        Self { kind, role, sized }
    }

    /// Classifies token text, returning `None` for anything that is not a
    /// bracket.
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        use BracketKind::{Angle, Bar, Brace, Ceil, DoubleBar, EscapedBrace, Floor, Parenthesis, Square};
        use BracketRole::{Close, Either, Open};

        let bracket = match text {
            "(" => Self::new(Parenthesis, Open, false),
            ")" => Self::new(Parenthesis, Close, false),
            "[" => Self::new(Square, Open, false),
            "]" => Self::new(Square, Close, false),
            "{" => Self::new(Brace, Open, false),
            "}" => Self::new(Brace, Close, false),
            "\\{" => Self::new(EscapedBrace, Open, false),
            "\\}" => Self::new(EscapedBrace, Close, false),
            "\\langle" => Self::new(Angle, Open, false),
            "\\rangle" => Self::new(Angle, Close, false),
            "\\lceil" => Self::new(Ceil, Open, false),
            "\\rceil" => Self::new(Ceil, Close, false),
            "\\lfloor" => Self::new(Floor, Open, false),
            "\\rfloor" => Self::new(Floor, Close, false),
            "|" => Self::new(Bar, Either, false),
            "\\|" => Self::new(DoubleBar, Either, false),
            "\\left(" => Self::new(Parenthesis, Open, true),
            "\\right)" => Self::new(Parenthesis, Close, true),
            "\\left[" => Self::new(Square, Open, true),
            "\\right]" => Self::new(Square, Close, true),
            "\\left\\{" => Self::new(EscapedBrace, Open, true),
            "\\right\\}" => Self::new(EscapedBrace, Close, true),
            "\\left\\langle" => Self::new(Angle, Open, true),
            "\\right\\rangle" => Self::new(Angle, Close, true),
            "\\left|" => Self::new(Bar, Open, true),
            "\\right|" => Self::new(Bar, Close, true),
            "\\left\\|" => Self::new(DoubleBar, Open, true),
            "\\right\\|" => Self::new(DoubleBar, Close, true),
            _ => return None,
        };
        Some(bracket)
    }

    /// Returns the bracket family.
    #[must_use]
    pub const fn kind(self) -> BracketKind {
        self.kind
    }

    /// Returns whether the bracket opens, closes, or may do either.
    #[must_use]
    pub const fn role(self) -> BracketRole {
        self.role
    }

    /// Returns whether this is a `\left`/`\right` sized bracket.
    #[must_use]
    pub const fn is_sized(self) -> bool {
        self.sized
    }

    /// Returns whether the bracket can only open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self.role, BracketRole::Open)
    }

    /// Returns whether the bracket can only close.
    #[must_use]
    pub const fn is_close(self) -> bool {
        matches!(self.role, BracketRole::Close)
    }

    /// Returns whether the bracket is a symmetric bar.
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(self.role, BracketRole::Either)
    }

    /// Returns whether `close` closes `open`.
    ///
    /// Both brackets must share a family and sizing; symmetric bars close
    /// a bar of their own kind.
    #[must_use]
    pub fn counterpart(open: Self, close: Self) -> bool {
        let roles_fit = match (open.role, close.role) {
            (BracketRole::Open, BracketRole::Close) | (BracketRole::Either, BracketRole::Either) => {
                true
            }
            _ => false,
        };
        roles_fit && open.kind == close.kind && open.sized == close.sized
    }

    /// Method form of [`Bracket::counterpart`] with `self` as the opening
    /// bracket.
    #[must_use]
    pub fn is_counterpart(self, close: Self) -> bool {
        Self::counterpart(self, close)
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            BracketRole::Open => "opening",
            BracketRole::Close => "closing",
            BracketRole::Either => "symmetric",
        };
        let sizing = if self.sized { "sized " } else { "" };
        write!(f, "{sizing}{role} {:?}", self.kind)
    }
}
