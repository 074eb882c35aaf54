//! Patterns for `is`, `case` labels and switch arms.
//!
//! `and`, `or` and `not` are combinators only inside a pattern and only when
//! a pattern follows them; a type name that cannot be a value is a
//! `TypePattern`, any other name is left to the constant-pattern path.

use rowan::{Checkpoint, TextRange};

use super::Trailing;
use super::expressions::SHIFT_BP;
use crate::diagnostics::DiagnosticKind;
use crate::options::Feature;
use crate::parser::contextual::Position;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::PATTERN_FIRST;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::cursor::TokenCursor;
use crate::parser::speculate::{self, TypeMode};
use crate::parser::state::ParseState;

/// Words that continue a pattern instead of designating a variable.
fn is_pattern_word(c: &TokenCursor<'_>, k: usize) -> bool {
    c.peek_is_word(k, "and") || c.peek_is_word(k, "or") || c.peek_is_word(k, "when")
}

/// `(` ... `)` as a positional clause rather than a parenthesized pattern:
/// empty, containing a top-level comma, or followed by a property clause or designation.
fn paren_is_positional(mut c: TokenCursor<'_>) -> bool {
    c.advance();
    if c.at(SyntaxKind::ParenClose) {
        return true;
    }
    let mut depth = 0usize;
    while !c.at_end() {
        match c.current() {
            SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => depth += 1,
            SyntaxKind::BracketClose | SyntaxKind::BraceClose => depth = depth.saturating_sub(1),
            SyntaxKind::ParenClose if depth == 0 => {
                c.advance();
                return c.at(SyntaxKind::BraceOpen)
                    || (c.at(SyntaxKind::Ident) && !is_pattern_word(&c, 0));
            }
            SyntaxKind::ParenClose => depth -= 1,
            SyntaxKind::Comma if depth == 0 => return true,
            _ => {}
        }
        c.advance();
    }
    false
}

impl Parser<'_, '_> {
    pub(crate) fn parse_pattern(&mut self) {
        self.with_state(ParseState::IN_PATTERN, ParseState::empty(), |p| {
            p.parse_or_pattern()
        });
    }

    fn parse_or_pattern(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_and_pattern();
        while self.classify(Position::PatternContinuation) == Some(SyntaxKind::KwOr) {
            self.parse_combinator_rest(checkpoint, SyntaxKind::OrPattern, SyntaxKind::KwOr);
        }
    }

    fn parse_and_pattern(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_not_pattern();
        while self.classify(Position::PatternContinuation) == Some(SyntaxKind::KwAnd) {
            self.parse_combinator_rest(checkpoint, SyntaxKind::AndPattern, SyntaxKind::KwAnd);
        }
    }

    fn parse_combinator_rest(&mut self, checkpoint: Checkpoint, node: SyntaxKind, keyword: SyntaxKind) {
        let range = self.current_span();
        self.check_feature(Feature::PatternCombinators, range);
        self.start_node_at(checkpoint, node);
        self.bump_as(keyword);
        if node == SyntaxKind::OrPattern {
            self.parse_and_pattern();
        } else {
            self.parse_not_pattern();
        }
        self.finish_node();
    }

    fn parse_not_pattern(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        if self.classify(Position::PatternStart) == Some(SyntaxKind::KwNot) {
            let range = self.current_span();
            self.check_feature(Feature::PatternCombinators, range);
            self.start_node(SyntaxKind::NotPattern);
            self.bump_as(SyntaxKind::KwNot);
            self.parse_not_pattern();
            self.finish_node();
        } else {
            self.parse_primary_pattern();
        }
        self.exit_recursion();
    }

    fn parse_primary_pattern(&mut self) {
        match self.current() {
            SyntaxKind::Less
            | SyntaxKind::LessEquals
            | SyntaxKind::Greater
            | SyntaxKind::GreaterEquals => {
                let range = self.current_span();
                self.check_feature(Feature::RelationalPatterns, range);
                self.start_node(SyntaxKind::RelationalPattern);
                self.bump();
                self.parse_binary(SHIFT_BP);
                self.finish_node();
            }
            SyntaxKind::ParenOpen if paren_is_positional(self.cursor()) => {
                let checkpoint = self.checkpoint();
                self.parse_recursive_pattern_rest(checkpoint);
            }
            SyntaxKind::ParenOpen => {
                self.start_node(SyntaxKind::ParenPattern);
                self.bump();
                self.parse_or_pattern();
                self.expect(SyntaxKind::ParenClose);
                self.finish_node();
            }
            SyntaxKind::BraceOpen => {
                let checkpoint = self.checkpoint();
                self.parse_recursive_pattern_rest(checkpoint);
            }
            SyntaxKind::BracketOpen => self.parse_list_pattern(),
            SyntaxKind::DotDot => {
                self.start_node(SyntaxKind::SlicePattern);
                self.bump();
                if self.at_set(PATTERN_FIRST)
                    && !matches!(self.current(), SyntaxKind::BracketClose | SyntaxKind::Comma)
                {
                    self.parse_not_pattern();
                }
                self.finish_node();
            }
            SyntaxKind::Ident if self.classify(Position::PatternStart) == Some(SyntaxKind::KwVar) => {
                self.start_node(SyntaxKind::VarPattern);
                self.bump_as(SyntaxKind::KwVar);
                self.parse_designation();
                self.finish_node();
            }
            SyntaxKind::Ident if self.at_discard_pattern() => {
                self.start_node(SyntaxKind::DiscardPattern);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Ident => self.parse_type_led_pattern(),
            kind if kind.is_predefined_type() => self.parse_type_led_pattern(),
            _ if self.at_set(PATTERN_FIRST) => self.parse_constant_pattern(),
            _ => self.missing_name(DiagnosticKind::ExpectedPattern),
        }
    }

    /// `_` that is not the start of a name or an invocation.
    fn at_discard_pattern(&mut self) -> bool {
        if self.current_text() != "_" {
            return false;
        }
        let c = self.cursor();
        is_pattern_word(&c, 1)
            || !matches!(
                c.peek(1),
                SyntaxKind::Dot
                    | SyntaxKind::ParenOpen
                    | SyntaxKind::Less
                    | SyntaxKind::Ident
                    | SyntaxKind::BraceOpen
                    | SyntaxKind::DoubleColon
                    | SyntaxKind::BracketOpen
            )
    }

    /// A pattern that starts like a type: declaration, recursive, type or constant.
    fn parse_type_led_pattern(&mut self) {
        let mut c = self.cursor();
        let Some(shape) = speculate::scan_type(&mut c, TypeMode::Expression) else {
            self.parse_constant_pattern();
            return;
        };
        let designated = c.at(SyntaxKind::Ident) && !is_pattern_word(&c, 0);
        let recursive = matches!(c.current(), SyntaxKind::ParenOpen | SyntaxKind::BraceOpen);

        if designated {
            self.start_node(SyntaxKind::DeclarationPattern);
            self.parse_type(TypeMode::Expression);
            self.parse_designation();
            self.finish_node();
        } else if recursive {
            let checkpoint = self.checkpoint();
            self.parse_type(TypeMode::Expression);
            self.parse_recursive_pattern_rest(checkpoint);
        } else if shape.is_type_only() {
            self.start_node(SyntaxKind::TypePattern);
            self.parse_type(TypeMode::Expression);
            self.finish_node();
        } else {
            self.parse_constant_pattern();
        }
    }

    fn parse_constant_pattern(&mut self) {
        self.start_node(SyntaxKind::ConstantPattern);
        self.parse_binary(SHIFT_BP);
        self.finish_node();
    }

    /// Positional and property clauses plus an optional designation, wrapped from `checkpoint`.
    fn parse_recursive_pattern_rest(&mut self, checkpoint: Checkpoint) {
        let range = self.current_span();
        self.check_feature(Feature::RecursivePatterns, range);
        self.start_node_at(checkpoint, SyntaxKind::RecursivePattern);
        if self.at(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::PositionalPatternClause);
            self.bump();
            self.parse_separated_list(
                SyntaxKind::ParenClose,
                PATTERN_FIRST,
                TokenSet::EMPTY,
                Trailing::Repaired,
                |p| p.parse_subpattern(),
            );
            self.expect(SyntaxKind::ParenClose);
            self.finish_node();
        }
        if self.at(SyntaxKind::BraceOpen) {
            self.start_node(SyntaxKind::PropertyPatternClause);
            self.bump();
            self.parse_separated_list(
                SyntaxKind::BraceClose,
                PATTERN_FIRST,
                TokenSet::EMPTY,
                Trailing::Allowed,
                |p| p.parse_subpattern(),
            );
            self.expect(SyntaxKind::BraceClose);
            self.finish_node();
        }
        let designated = {
            let c = self.cursor();
            c.at(SyntaxKind::Ident) && !is_pattern_word(&c, 0)
        };
        if designated {
            self.parse_designation();
        }
        self.finish_node();
    }

    /// `pattern`, `Name: pattern` or the extended `A.B: pattern`.
    fn parse_subpattern(&mut self) {
        self.start_node(SyntaxKind::Subpattern);
        if self.at(SyntaxKind::Ident) {
            match self.nth(1) {
                SyntaxKind::Colon => self.parse_name_colon(),
                SyntaxKind::Dot if self.at_extended_property_name() => {
                    let start = self.current_span().start();
                    self.start_node(SyntaxKind::NameColon);
                    self.parse_type_name();
                    let end = self.last_non_trivia_end().unwrap_or(start);
                    self.check_feature(
                        Feature::ExtendedPropertyPatterns,
                        TextRange::new(start, end),
                    );
                    self.expect(SyntaxKind::Colon);
                    self.finish_node();
                }
                _ => {}
            }
        }
        self.parse_or_pattern();
        self.finish_node();
    }

    /// `A.B.C:`
    fn at_extended_property_name(&mut self) -> bool {
        let mut c = self.cursor();
        c.advance();
        while c.at(SyntaxKind::Dot) && c.peek(1) == SyntaxKind::Ident {
            c.advance_by(2);
        }
        c.at(SyntaxKind::Colon)
    }

    /// `[1, .., var last]`
    fn parse_list_pattern(&mut self) {
        let range = self.current_span();
        self.check_feature(Feature::ListPatterns, range);
        self.start_node(SyntaxKind::ListPattern);
        self.bump();
        self.parse_separated_list(
            SyntaxKind::BracketClose,
            PATTERN_FIRST,
            TokenSet::EMPTY,
            Trailing::Allowed,
            |p| p.parse_or_pattern(),
        );
        self.expect(SyntaxKind::BracketClose);
        let designated = {
            let c = self.cursor();
            c.at(SyntaxKind::Ident) && !is_pattern_word(&c, 0)
        };
        if designated {
            self.parse_designation();
        }
        self.finish_node();
    }

    /// `x`, `_` or `(a, (b, _))`
    pub(super) fn parse_designation(&mut self) {
        match self.current() {
            SyntaxKind::ParenOpen => {
                if !self.enter_recursion() {
                    return;
                }
                self.start_node(SyntaxKind::ParenVarDesignation);
                self.bump();
                self.parse_separated_list(
                    SyntaxKind::ParenClose,
                    TokenSet::new(&[SyntaxKind::Ident, SyntaxKind::ParenOpen]),
                    TokenSet::EMPTY,
                    Trailing::Repaired,
                    |p| p.parse_designation(),
                );
                self.expect(SyntaxKind::ParenClose);
                self.finish_node();
                self.exit_recursion();
            }
            SyntaxKind::Ident if self.current_text() == "_" => {
                self.start_node(SyntaxKind::DiscardDesignation);
                self.bump();
                self.finish_node();
            }
            _ => {
                self.start_node(SyntaxKind::SingleVarDesignation);
                self.expect_ident();
                self.finish_node();
            }
        }
    }
}
