//! Bracket balance tracking while a wildcard absorbs siblings.

use texmatch_core::{Bracket, BracketRole, Node, NotMatchable};

/// Brackets swallowed by a wildcard that is still absorbing.
///
/// Built and discarded within one absorption attempt. When enforcement is
/// off the stack never holds anything.
///
/// Plain bars (`|`, `\|`) are soft: a pending bar lets the wildcard absorb
/// punctuation but never overrides the lookahead, and a closing bracket
/// discards the bars pending above its counterpart.
pub(super) struct BracketStack<'t> {
    enforce: bool,
    open: Vec<(Bracket, &'t str)>,
}

impl<'t> BracketStack<'t> {
    pub(super) const fn new(enforce: bool) -> Self {
        Self {
            enforce,
            open: Vec::new(),
        }
    }

    /// Returns whether an opening bracket is still waiting for its
    /// counterpart.
    pub(super) fn is_open(&self) -> bool {
        self.open.iter().any(|(bracket, _)| !bracket.is_symmetric())
    }

    /// Returns whether anything, including a soft bar, is pending.
    pub(super) const fn is_nested(&self) -> bool {
        !self.open.is_empty()
    }

    /// Pushes opening brackets and pops on their counterparts.
    pub(super) fn update(&mut self, node: Node<'t>) -> Result<(), NotMatchable> {
        if !self.enforce {
            return Ok(());
        }
        let text = node.text();
        let Some(bracket) = Bracket::classify(text) else {
            return Ok(());
        };

        match bracket.role() {
            BracketRole::Open => {
                self.open.push((bracket, text));
                Ok(())
            }
            BracketRole::Either => {
                match self.open.last() {
                    Some((pending, _)) if pending.is_counterpart(bracket) => {
                        self.open.pop();
                    }
                    _ => self.open.push((bracket, text)),
                }
                Ok(())
            }
            BracketRole::Close => self.close(bracket, text),
        }
    }

    fn close(&mut self, bracket: Bracket, text: &str) -> Result<(), NotMatchable> {
        while self.open.last().is_some_and(|(pending, _)| pending.is_symmetric()) {
            self.open.pop();
        }

        match self.open.last().copied() {
            None => Err(NotMatchable::unopened_bracket(text)),
            Some((pending, _)) if pending.is_counterpart(bracket) => {
                self.open.pop();
                Ok(())
            }
            Some((_, pending_text)) => Err(NotMatchable::bracket_mismatch(text, pending_text)),
        }
    }
}
