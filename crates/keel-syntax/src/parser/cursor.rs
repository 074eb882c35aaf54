//! Read-only cursor over significant tokens.
//!
//! `TokenCursor` is `Copy`: a speculative scan takes a copy, walks it as far as
//! it likes and reports where it ended. The parser's own position is untouched
//! until the caller commits to a decision.
//!
//! Recursive scans (nested type arguments, tuple types) spend a depth budget
//! carried by the cursor and give up when it runs out.

use super::cst::SyntaxKind;
use super::lexer::{Token, token_text};
use crate::options::DEFAULT_RECURSION_LIMIT;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenCursor<'t> {
    source: &'t str,
    tokens: &'t [Token],
    /// Index of the current significant token (or `tokens.len()` at the end).
    pos: usize,
    /// Nesting levels a recursive scan may still enter.
    depth_left: u32,
}

/// Saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorMark(usize);

impl<'t> TokenCursor<'t> {
    pub fn new(source: &'t str, tokens: &'t [Token], pos: usize) -> Self {
        let mut cursor = Self {
            source,
            tokens,
            pos,
            depth_left: DEFAULT_RECURSION_LIMIT,
        };
        cursor.skip_trivia();
        cursor
    }

    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_left = limit;
        self
    }

    /// Enter one nesting level; `None` once the budget is spent.
    ///
    /// A successful `descend` must be paired with [`TokenCursor::ascend`].
    pub fn descend(&mut self) -> Option<()> {
        self.depth_left = self.depth_left.checked_sub(1)?;
        Some(())
    }

    pub fn ascend(&mut self) {
        self.depth_left += 1;
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    /// Raw index of the `k`-th significant token ahead.
    fn index_of(&self, k: usize) -> Option<usize> {
        let mut pos = self.pos;
        let mut seen = 0;
        while pos < self.tokens.len() {
            if !self.tokens[pos].kind.is_trivia() {
                if seen == k {
                    return Some(pos);
                }
                seen += 1;
            }
            pos += 1;
        }
        None
    }

    pub fn peek(&self, k: usize) -> SyntaxKind {
        self.index_of(k)
            .map_or(SyntaxKind::Eof, |i| self.tokens[i].kind)
    }

    /// Text of the `k`-th significant token; empty at the end of input.
    pub fn peek_text(&self, k: usize) -> &'t str {
        self.index_of(k)
            .map_or("", |i| token_text(self.source, &self.tokens[i]))
    }

    pub fn current(&self) -> SyntaxKind {
        self.peek(0)
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Identifier token whose text is exactly `word` (escaped `@word` does not match).
    pub fn at_word(&self, word: &str) -> bool {
        self.peek_is_word(0, word)
    }

    pub fn peek_is_word(&self, k: usize, word: &str) -> bool {
        self.peek(k) == SyntaxKind::Ident && self.peek_text(k) == word
    }

    /// Whether the `k`-th and `k+1`-th significant tokens touch with no trivia between.
    pub fn adjacent(&self, k: usize) -> bool {
        match (self.index_of(k), self.index_of(k + 1)) {
            (Some(a), Some(b)) => b == a + 1,
            _ => false,
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
            self.skip_trivia();
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance past `kind` if it is current.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn mark(&self) -> CursorMark {
        CursorMark(self.pos)
    }

    pub fn reset(&mut self, mark: CursorMark) {
        self.pos = mark.0;
    }

    /// Number of significant tokens between `mark` and the current position.
    #[cfg(test)]
    pub fn distance_from(&self, mark: CursorMark) -> usize {
        self.tokens[mark.0..self.pos.min(self.tokens.len())]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .count()
    }
}
