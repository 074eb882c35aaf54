//! Reference lexer for Keel.
//!
//! Tokens carry a kind and a span; text is sliced from the source on demand.
//! Any token vector that covers every byte of the source exactly once can be
//! fed to [`parse_tokens`](super::parse_tokens) instead.
//!
//! Runs of unrecognized characters become one `Garbage` token.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn offset(at: usize) -> TextSize {
    TextSize::from(at as u32)
}

/// Tokenizes `source`, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut garbage_from: Option<usize> = None;

    for (result, span) in SyntaxKind::lexer(source).spanned() {
        let Ok(kind) = result else {
            garbage_from.get_or_insert(span.start);
            continue;
        };
        if let Some(from) = garbage_from.take() {
            let range = TextRange::new(offset(from), offset(span.start));
            tokens.push(Token::new(SyntaxKind::Garbage, range));
        }
        tokens.push(Token::new(kind, TextRange::new(offset(span.start), offset(span.end))));
    }
    if let Some(from) = garbage_from {
        let range = TextRange::new(offset(from), offset(source.len()));
        tokens.push(Token::new(SyntaxKind::Garbage, range));
    }

    tokens
}

#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[token.span]
}
