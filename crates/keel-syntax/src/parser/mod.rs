//! Parser infrastructure for Keel.
//!
//! # Architecture
//!
//! The parser produces a loss-less concrete syntax tree (CST) via Rowan's green
//! tree builder:
//!
//! - Zero-copy parsing: tokens carry spans, text is sliced only when building tree nodes
//! - Trivia buffering: whitespace and comments are collected, then attached ahead of the next token
//! - Checkpoint-based wrapping: left-recursive forms (binary operators, postfix chains,
//!   type suffixes) wrap already-built children retroactively
//! - Contextual keywords are classified per grammatical position (`contextual.rs`);
//!   anything three tokens cannot decide goes through a pure scan over a copied
//!   cursor (`speculate.rs`)
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. A missing terminal becomes a zero-width token plus an "expected" diagnostic,
//!    and control returns to the parent
//! 2. A token nothing can use is wrapped in an `Error` node and consumed
//! 3. Recovery sets define synchronization points per production
//! 4. A member that cannot be classified becomes an `IncompleteMember`
//! 5. On the recursion limit, the remaining input goes into a single `Error` node
//!
//! At most one missing/unexpected diagnostic is reported per source offset.

pub mod ast;
pub mod cst;
pub mod lexer;

mod contextual;
mod core;
mod cursor;
mod grammar;
mod invariants;
mod printer;
mod recovery;
mod speculate;
mod state;
mod tree;

#[cfg(test)]
mod tests;

pub use cst::{KeelLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};
pub use lexer::{Token, lex};
pub use printer::TreePrinter;
pub use tree::{is_missing, missing_tokens, narrow_range};

use rowan::{GreenNode, TextRange};
use tracing::debug;

use self::core::Parser;
use self::state::ParseState;
use crate::diagnostics::{DiagnosticMessage, Diagnostics};
use crate::options::ParseOptions;

/// Parse result: the green tree plus everything reported while building it.
///
/// The tree is always complete; diagnostics are returned separately and
/// `Error`/`IncompleteMember` nodes mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    diagnostics: Diagnostics,
    doc_crefs: Vec<DocCref>,
}

impl Parse {
    fn from_parser(parser: Parser<'_, '_>) -> Self {
        let (green, diagnostics, doc_crefs) = parser.finish();
        Self {
            green,
            diagnostics,
            doc_crefs,
        }
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Crefs found in `///` comments, in source order. Empty unless documentation mode is on.
    pub fn doc_crefs(&self) -> &[DocCref] {
        &self.doc_crefs
    }

    /// Diagnostics whose span lies inside `node`.
    pub fn diagnostics_in<'a>(
        &'a self,
        node: &SyntaxNode,
    ) -> impl Iterator<Item = &'a DiagnosticMessage> + 'a {
        self.diagnostics.within(node.text_range())
    }

    /// Indented dump of the tree without trivia.
    pub fn dump(&self) -> String {
        TreePrinter::new(&self.syntax()).dump()
    }
}

/// A `cref="..."` attribute value parsed with the cref grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocCref {
    range: TextRange,
    green: GreenNode,
}

impl DocCref {
    pub(crate) fn new(range: TextRange, green: GreenNode) -> Self {
        Self { range, green }
    }

    /// Span of the attribute value in the parsed source.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// `CrefFragment` root. Offsets inside it are relative to [`DocCref::range`].
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }
}

/// Parse a compilation unit.
pub fn parse(source: &str, options: &ParseOptions) -> Parse {
    parse_tokens(source, lex(source), options)
}

/// Parse a compilation unit from an externally lexed token vector.
///
/// Every byte of `source` must be covered by exactly one token, in order.
pub fn parse_tokens(source: &str, tokens: Vec<Token>, options: &ParseOptions) -> Parse {
    debug!(
        version = %options.language_version,
        doc_mode = %options.documentation_mode,
        tokens = tokens.len(),
        "parse compilation unit"
    );
    let mut parser = Parser::new(source, tokens, options);
    parser.parse_compilation_unit();
    Parse::from_parser(parser)
}

/// Parse a single expression; leftovers are reported and kept in the tree.
pub fn parse_expression(source: &str, options: &ParseOptions) -> Parse {
    debug!(version = %options.language_version, "parse expression");
    let mut parser = Parser::new(source, lex(source), options);
    parser.parse_expression_fragment();
    Parse::from_parser(parser)
}

/// Parse a single statement; leftovers are reported and kept in the tree.
pub fn parse_statement(source: &str, options: &ParseOptions) -> Parse {
    debug!(version = %options.language_version, "parse statement");
    let mut parser = Parser::new(source, lex(source), options);
    parser.parse_statement_fragment();
    Parse::from_parser(parser)
}

/// Parse a documentation cref such as `List{T}.Add(T)`.
pub fn parse_cref(source: &str, options: &ParseOptions) -> Parse {
    debug!(version = %options.language_version, "parse cref");
    let mut parser =
        Parser::new(source, lex(source), options).with_initial_state(ParseState::IN_CREF);
    parser.parse_cref_fragment();
    Parse::from_parser(parser)
}
