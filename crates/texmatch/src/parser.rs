//! The seam between the matcher and whatever produces expression trees.
//!
//! Matching assumes that pattern and candidate trees were produced by the
//! same parser and normalised by the same idempotent pass. Hosts plug their
//! own front end in through [`ExpressionParser`]; [`TokenParser`] covers
//! plain token-level LaTeX.

use std::iter::Peekable;
use std::str::CharIndices;

use texmatch_core::{Expr, ExpressionTree, ParseError, Tag};

/// Produces expression trees from source text.
pub trait ExpressionParser {
    /// Parses `source` into an expression tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `source` is not well formed.
    fn parse(&self, source: &str) -> Result<ExpressionTree, ParseError>;

    /// Normalises a parsed tree before matching.
    ///
    /// Implementations must be idempotent. The default leaves the tree
    /// unchanged.
    #[must_use]
    fn normalize(&self, tree: ExpressionTree) -> ExpressionTree {
        tree
    }
}

impl<P: ExpressionParser + ?Sized> ExpressionParser for &P {
    fn parse(&self, source: &str) -> Result<ExpressionTree, ParseError> {
        (**self).parse(source)
    }

    fn normalize(&self, tree: ExpressionTree) -> ExpressionTree {
        (**self).normalize(tree)
    }
}

/// A tokenizer for plain LaTeX math.
///
/// - Whitespace separates tokens and is otherwise ignored.
/// - Runs of letters and digits form one token.
/// - `\name` and `\` followed by one symbol form one command token;
///   `\left` and `\right` absorb the delimiter that follows them.
/// - `{...}` forms a group node.
/// - Every other character is a token of its own.
///
/// The root is an anonymous sequence of the top-level tokens. Normalisation
/// replaces a group whose only child is another group by that inner group.
///
/// # Example
///
/// ```
/// use texmatch::{ExpressionParser, TokenParser};
///
/// let tree = TokenParser.parse(r"\frac{a}{b} + \left( x \right)")?;
/// assert_eq!(tree.top_level().len(), 7);
/// assert_eq!(tree.to_string(), r"\frac {a} {b} + \left( x \right)");
/// # Ok::<(), texmatch::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenParser;

impl ExpressionParser for TokenParser {
    fn parse(&self, source: &str) -> Result<ExpressionTree, ParseError> {
        let mut root = Vec::new();
        let mut open: Vec<(usize, Vec<Expr>)> = Vec::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                c if c.is_whitespace() => {}
                '{' => open.push((offset, Vec::new())),
                '}' => {
                    let Some((_, children)) = open.pop() else {
                        return Err(ParseError::UnexpectedGroupClose { offset });
                    };
                    current(&mut root, &mut open).push(Expr::group(children));
                }
                '\\' => {
                    let command = read_command(&mut chars, offset)?;
                    current(&mut root, &mut open).push(Expr::leaf(command));
                }
                c if c.is_alphanumeric() => {
                    let mut token = String::from(c);
                    while let Some(&(_, next)) = chars.peek()
                        && next.is_alphanumeric()
                    {
                        token.push(next);
                        chars.next();
                    }
                    current(&mut root, &mut open).push(Expr::leaf(token));
                }
                c => current(&mut root, &mut open).push(Expr::leaf(c.to_string())),
            }
        }

        if let Some((offset, _)) = open.last() {
            return Err(ParseError::UnbalancedGroup { offset: *offset });
        }
        Ok(ExpressionTree::from(Expr::sequence(root)))
    }

    fn normalize(&self, tree: ExpressionTree) -> ExpressionTree {
        ExpressionTree::from(collapse_groups(tree.to_expr()))
    }
}

fn current<'a>(root: &'a mut Vec<Expr>, open: &'a mut [(usize, Vec<Expr>)]) -> &'a mut Vec<Expr> {
    open.last_mut().map_or(root, |(_, children)| children)
}

/// Reads the command following a backslash at `offset`.
fn read_command(chars: &mut Peekable<CharIndices<'_>>, offset: usize) -> Result<String, ParseError> {
    let Some((_, first)) = chars.next() else {
        return Err(ParseError::DanglingBackslash { offset });
    };
    let mut command = String::from('\\');
    command.push(first);
    if !first.is_ascii_alphabetic() {
        return Ok(command);
    }

    while let Some(&(_, next)) = chars.peek()
        && next.is_ascii_alphabetic()
    {
        command.push(next);
        chars.next();
    }
    if command == r"\left" || command == r"\right" {
        read_delimiter(chars, &mut command)?;
    }
    Ok(command)
}

/// Appends the delimiter of a `\left`/`\right` command, if one follows.
fn read_delimiter(
    chars: &mut Peekable<CharIndices<'_>>,
    command: &mut String,
) -> Result<(), ParseError> {
    while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}

    match chars.peek().copied() {
        Some((offset, '\\')) => {
            chars.next();
            command.push_str(&read_command(chars, offset)?);
        }
        Some((_, c)) if !c.is_alphanumeric() && c != '{' && c != '}' => {
            command.push(c);
            chars.next();
        }
        _ => {}
    }
    Ok(())
}

fn is_anonymous_group(expr: &Expr) -> bool {
    expr.tag() == Tag::Group && expr.text().is_empty()
}

fn collapse_groups(expr: Expr) -> Expr {
    let collapsed = expr.map_children(collapse_groups);
    let nested = is_anonymous_group(&collapsed)
        && matches!(collapsed.children(), [inner] if is_anonymous_group(inner));
    if !nested {
        return collapsed;
    }

    match <[Expr; 1]>::try_from(collapsed.into_children()) {
        Ok([inner]) => inner,
        Err(children) => Expr::group(children),
    }
}
