//! Span and status helpers over the concrete tree.

use rowan::TextRange;

use super::cst::{SyntaxNode, SyntaxToken};

/// Whether `token` was synthesized by recovery.
///
/// The lexer never produces empty tokens, so zero width means missing.
pub fn is_missing(token: &SyntaxToken) -> bool {
    token.text().is_empty()
}

/// Every synthesized token under `node`, in tree order.
pub fn missing_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(is_missing)
}

/// Span of `node` without leading and trailing trivia.
///
/// A node with no significant tokens gets an empty range at its start.
pub fn narrow_range(node: &SyntaxNode) -> TextRange {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !token.kind().is_trivia());
    let Some(first) = tokens.next() else {
        return TextRange::empty(node.text_range().start());
    };
    let end = tokens
        .last()
        .map_or(first.text_range().end(), |last| last.text_range().end());
    TextRange::new(first.text_range().start(), end)
}
