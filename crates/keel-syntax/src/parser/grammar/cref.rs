//! Documentation crefs: the value of `cref="..."` inside `///` comments.
//!
//! Each value is parsed by a sub-parser over the same source, so spans and
//! diagnostics land at their real offsets. In `Diagnose` mode a value that
//! does not parse cleanly produces one warning; the sub-parser's own errors
//! are dropped either way.

use std::ops::Range;

use rowan::{TextRange, TextSize};

use crate::diagnostics::DiagnosticKind;
use crate::options::{DocumentationMode, ParseOptions};
use crate::parser::DocCref;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::PREDEFINED_TYPES;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::lexer::{Token, lex, token_text};
use crate::parser::speculate::TypeMode;
use crate::parser::state::ParseState;

use super::Trailing;
use super::types::TYPE_FIRST;

const CREF_PARAM_FIRST: TokenSet = TYPE_FIRST.union(TokenSet::new(&[
    SyntaxKind::KwRef,
    SyntaxKind::KwOut,
    SyntaxKind::KwIn,
]));

/// Byte ranges of every `cref` attribute value in `text`, quotes excluded.
///
/// Accepts either quote character and whitespace around `=`. An unterminated
/// value is ignored.
pub(crate) fn find_cref_values(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut values = Vec::new();
    let mut from = 0;
    while let Some(offset) = text[from..].find("cref") {
        let start = from + offset;
        from = start + "cref".len();
        let word_start = start == 0 || !is_name_byte(bytes[start - 1]);
        let word_end = bytes.get(from).is_none_or(|&b| !is_name_byte(b));
        if !word_start || !word_end {
            continue;
        }
        let mut i = skip_spaces(bytes, from);
        if bytes.get(i) != Some(&b'=') {
            continue;
        }
        i = skip_spaces(bytes, i + 1);
        let Some(&quote) = bytes.get(i).filter(|&&b| b == b'"' || b == b'\'') else {
            continue;
        };
        let value_start = i + 1;
        let Some(len) = text[value_start..].find(quote as char) else {
            break;
        };
        values.push(value_start..value_start + len);
        from = value_start + len + 1;
    }
    values
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b':'
}

fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

impl Parser<'_, '_> {
    /// Parse every cref value in one doc comment token.
    pub(in crate::parser) fn scan_doc_comment(&mut self, token: Token) {
        let text = token_text(self.source, &token);
        let base = token.span.start();
        for range in find_cref_values(text) {
            let value = &text[range.clone()];
            let start = base + TextSize::from(range.start as u32);
            let span = TextRange::at(start, TextSize::of(value));
            self.parse_doc_cref(value, span);
        }
    }

    fn parse_doc_cref(&mut self, value: &str, span: TextRange) {
        let tokens: Vec<Token> = lex(value)
            .into_iter()
            .map(|t| Token::new(t.kind, t.span + span.start()))
            .collect();
        let options = ParseOptions {
            documentation_mode: DocumentationMode::None,
            ..*self.options
        };
        let mut sub = Parser::new(self.source, tokens, &options)
            .with_end(span.end())
            .with_initial_state(ParseState::IN_CREF);
        sub.parse_cref_fragment();
        let (green, diagnostics, _) = sub.finish();

        let malformed = diagnostics.has_errors();
        tracing::trace!(?span, malformed, "doc cref");
        if malformed && self.options.documentation_mode == DocumentationMode::Diagnose {
            self.diagnostics
                .report(DiagnosticKind::MalformedCref, span)
                .arg(value)
                .emit();
        }
        self.doc_crefs.push(DocCref::new(span, green));
    }

    pub(crate) fn parse_cref_fragment(&mut self) {
        self.start_node(SyntaxKind::CrefFragment);
        self.parse_cref();
        self.parse_fragment_leftovers();
        self.eat_trivia();
        self.finish_node();
    }

    /// `T`, `T.M(int)`, `this[int]`, `operator +(T, T)` or `N.T{U}.M`
    fn parse_cref(&mut self) {
        match self.current() {
            SyntaxKind::KwThis | SyntaxKind::KwOperator => self.parse_member_cref(),
            _ if self.at_set(PREDEFINED_TYPES) => {
                self.start_node(SyntaxKind::TypeCref);
                self.start_node(SyntaxKind::PredefinedType);
                self.bump();
                self.finish_node();
                self.finish_node();
            }
            SyntaxKind::Ident => {
                let checkpoint = self.checkpoint();
                self.parse_member_cref();
                while self.at(SyntaxKind::Dot) {
                    self.start_node_at(checkpoint, SyntaxKind::QualifiedCref);
                    self.bump();
                    self.parse_member_cref();
                    self.finish_node();
                }
            }
            _ => self.missing_name(DiagnosticKind::ExpectedIdentifier),
        }
    }

    fn parse_member_cref(&mut self) {
        match self.current() {
            SyntaxKind::KwThis => {
                self.start_node(SyntaxKind::IndexerMemberCref);
                self.bump();
                if self.at(SyntaxKind::BracketOpen) {
                    self.parse_cref_params(
                        SyntaxKind::CrefBracketedParamList,
                        SyntaxKind::BracketOpen,
                        SyntaxKind::BracketClose,
                    );
                }
                self.finish_node();
            }
            SyntaxKind::KwOperator => {
                self.start_node(SyntaxKind::OperatorMemberCref);
                self.bump();
                if self.at_shift_right() {
                    self.bump_joined(SyntaxKind::GreaterGreater, 2);
                } else if self.current().is_overloadable_operator() {
                    self.bump();
                } else {
                    self.missing(SyntaxKind::Plus);
                }
                self.parse_cref_param_list_opt();
                self.finish_node();
            }
            SyntaxKind::Ident => {
                self.start_node(SyntaxKind::NameMemberCref);
                self.parse_type_name_segment();
                self.parse_cref_param_list_opt();
                self.finish_node();
            }
            _ => self.missing_name(DiagnosticKind::ExpectedIdentifier),
        }
    }

    /// One name segment; `{...}` is its type argument list inside a cref.
    fn parse_type_name_segment(&mut self) {
        if self.nth(1) == SyntaxKind::BraceOpen {
            self.start_node(SyntaxKind::GenericName);
            self.bump();
            self.parse_type_arg_list();
        } else {
            self.start_node(SyntaxKind::IdentName);
            self.bump();
        }
        self.finish_node();
    }

    fn parse_cref_param_list_opt(&mut self) {
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_cref_params(
                SyntaxKind::CrefParamList,
                SyntaxKind::ParenOpen,
                SyntaxKind::ParenClose,
            );
        }
    }

    fn parse_cref_params(&mut self, node: SyntaxKind, open: SyntaxKind, close: SyntaxKind) {
        self.start_node(node);
        self.expect(open);
        self.parse_separated_list(
            close,
            CREF_PARAM_FIRST,
            TokenSet::EMPTY,
            Trailing::Repaired,
            |p| {
                p.start_node(SyntaxKind::CrefParam);
                if matches!(
                    p.current(),
                    SyntaxKind::KwRef | SyntaxKind::KwOut | SyntaxKind::KwIn
                ) {
                    p.bump();
                }
                p.parse_type(TypeMode::Declaration);
                p.finish_node();
            },
        );
        self.expect(close);
        self.finish_node();
    }
}
