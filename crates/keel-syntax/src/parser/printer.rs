//! Indented text dump of a syntax tree.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::cst::{SyntaxNode, SyntaxToken};
use super::tree::is_missing;

/// Renders one node per line, children indented by two spaces.
///
/// Tokens print as `Kind "text"`; synthesized tokens print as `Kind (missing)`.
pub struct TreePrinter<'a> {
    root: &'a SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl<'a> TreePrinter<'a> {
    pub fn new(root: &'a SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.text_range()))?;
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        self.format_token(&t, indent + 1, w)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_token(&self, token: &SyntaxToken, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(token.text_range());
        if is_missing(token) {
            writeln!(w, "{}{:?}{} (missing)", prefix, token.kind(), span)
        } else {
            writeln!(w, "{}{:?}{} {:?}", prefix, token.kind(), span, token.text())
        }
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
