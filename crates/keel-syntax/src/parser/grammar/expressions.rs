//! Expressions: assignment, lambdas, the conditional operator and the binary
//! operators.
//!
//! Binary operators use precedence climbing over [`Infix`]. `>>` and `>>=`
//! never reach the parser as single tokens; two adjacent `>` (or `>` `>=`)
//! are joined here, so `List<List<int>>` needs no lexer feedback.

use rowan::Checkpoint;

use super::Trailing;
use super::members::ParamContext;
use crate::options::Feature;
use crate::parser::contextual::Position;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{EXPR_FIRST, PATTERN_FIRST};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::speculate::{self, TypeMode};

/// `??`, the loosest binary operator.
const COALESCE_BP: u8 = 4;
/// Operand level of relational and constant patterns.
pub(super) const SHIFT_BP: u8 = 12;
/// Operand of `..` and of the prefix operators: unary expressions only.
const UNARY_BP: u8 = 17;

/// What an infix token does to the expression on its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Infix {
    /// `BinaryExpr` over `tokens` joined source tokens.
    Binary { kind: SyntaxKind, tokens: usize },
    Is,
    As,
    Switch,
    With,
    Range,
}

impl Parser<'_, '_> {
    /// Any expression, including assignments and lambdas.
    pub(crate) fn parse_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.parse_expr_inner();
        self.exit_recursion();
    }

    fn parse_expr_inner(&mut self) {
        match self.current() {
            SyntaxKind::Ident if self.nth(1) == SyntaxKind::FatArrow => {
                let checkpoint = self.checkpoint();
                self.parse_simple_lambda(checkpoint, false);
                return;
            }
            SyntaxKind::Ident => match self.classify(Position::Expression) {
                Some(SyntaxKind::KwAsync) => {
                    self.parse_async_lambda();
                    return;
                }
                Some(SyntaxKind::KwFrom) => {
                    self.parse_query_expr();
                    return;
                }
                _ => {}
            },
            SyntaxKind::ParenOpen if speculate::is_paren_lambda(self.cursor()) => {
                let checkpoint = self.checkpoint();
                self.parse_paren_lambda(checkpoint, false);
                return;
            }
            _ => {}
        }

        let checkpoint = self.checkpoint();
        self.parse_conditional();
        let Some((kind, tokens)) = self.current_assignment() else {
            return;
        };
        self.start_node_at(checkpoint, SyntaxKind::AssignmentExpr);
        if kind == SyntaxKind::QuestionQuestionEquals {
            let range = self.current_span();
            self.check_feature(Feature::NullCoalescingAssignment, range);
        }
        self.bump_joined(kind, tokens);
        self.parse_expr();
        self.finish_node();
    }

    fn current_assignment(&mut self) -> Option<(SyntaxKind, usize)> {
        let kind = self.current();
        if kind == SyntaxKind::Greater
            && self.nth(1) == SyntaxKind::GreaterEquals
            && self.cursor().adjacent(0)
        {
            return Some((SyntaxKind::GreaterGreaterEquals, 2));
        }
        kind.is_assignment_operator().then_some((kind, 1))
    }

    /// Two touching `>` tokens.
    pub(super) fn at_shift_right(&mut self) -> bool {
        self.at(SyntaxKind::Greater)
            && self.nth(1) == SyntaxKind::Greater
            && self.cursor().adjacent(0)
    }

    /// `c ? a : b`
    fn parse_conditional(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_binary(COALESCE_BP);
        if !self.at(SyntaxKind::Question) {
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::ConditionalExpr);
        self.bump();
        self.parse_expr();
        self.expect(SyntaxKind::Colon);
        self.parse_expr();
        self.finish_node();
    }

    fn current_infix(&mut self) -> Option<(Infix, u8)> {
        let kind = self.current();
        let binary = Infix::Binary { kind, tokens: 1 };
        let found = match kind {
            SyntaxKind::QuestionQuestion => (binary, COALESCE_BP),
            SyntaxKind::PipePipe => (binary, 5),
            SyntaxKind::AmpAmp => (binary, 6),
            SyntaxKind::Pipe => (binary, 7),
            SyntaxKind::Caret => (binary, 8),
            SyntaxKind::Amp => (binary, 9),
            SyntaxKind::EqualsEquals | SyntaxKind::BangEquals => (binary, 10),
            SyntaxKind::Greater if self.at_shift_right() => (
                Infix::Binary {
                    kind: SyntaxKind::GreaterGreater,
                    tokens: 2,
                },
                SHIFT_BP,
            ),
            SyntaxKind::Greater
                if self.nth(1) == SyntaxKind::GreaterEquals && self.cursor().adjacent(0) =>
            {
                return None;
            }
            SyntaxKind::Less
            | SyntaxKind::LessEquals
            | SyntaxKind::Greater
            | SyntaxKind::GreaterEquals => (binary, 11),
            SyntaxKind::KwIs => (Infix::Is, 11),
            SyntaxKind::KwAs => (Infix::As, 11),
            SyntaxKind::LessLess => (binary, SHIFT_BP),
            SyntaxKind::Plus | SyntaxKind::Minus => (binary, 13),
            SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent => (binary, 14),
            SyntaxKind::KwSwitch => (Infix::Switch, 15),
            SyntaxKind::Ident if self.classify(Position::PostfixWith).is_some() => {
                (Infix::With, 15)
            }
            SyntaxKind::DotDot => (Infix::Range, 16),
            _ => return None,
        };
        Some(found)
    }

    /// Operators binding at least as tightly as `min_bp`, over unary operands.
    pub(super) fn parse_binary(&mut self, min_bp: u8) {
        let checkpoint = self.checkpoint();
        self.parse_unary();
        while let Some((infix, bp)) = self.current_infix() {
            if bp < min_bp || self.nesting_exhausted() {
                break;
            }
            match infix {
                Infix::Binary { kind, tokens } => {
                    self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                    self.bump_joined(kind, tokens);
                    // `??` is right-associative.
                    let right = if kind == SyntaxKind::QuestionQuestion {
                        bp
                    } else {
                        bp + 1
                    };
                    self.parse_binary(right);
                    self.finish_node();
                }
                Infix::Is => self.parse_is_rest(checkpoint),
                Infix::As => {
                    self.start_node_at(checkpoint, SyntaxKind::AsExpr);
                    self.bump();
                    self.parse_type(TypeMode::Expression);
                    self.finish_node();
                }
                Infix::Switch => self.parse_switch_expr_rest(checkpoint),
                Infix::With => self.parse_with_rest(checkpoint),
                Infix::Range => {
                    self.start_node_at(checkpoint, SyntaxKind::RangeExpr);
                    self.parse_range_operator();
                    self.finish_node();
                }
            }
        }
    }

    /// `x is T` or `x is pattern`.
    fn parse_is_rest(&mut self, checkpoint: Checkpoint) {
        let mut operand = self.cursor();
        operand.advance();
        let is_type = speculate::is_operand_is_type(operand, self.state, self.options);
        if is_type {
            self.start_node_at(checkpoint, SyntaxKind::IsExpr);
            self.bump();
            self.parse_type(TypeMode::Expression);
        } else {
            self.start_node_at(checkpoint, SyntaxKind::IsPatternExpr);
            self.bump();
            self.parse_pattern();
        }
        self.finish_node();
    }

    /// `x switch { pattern when guard => value, ... }`
    fn parse_switch_expr_rest(&mut self, checkpoint: Checkpoint) {
        let range = self.current_span();
        self.check_feature(Feature::SwitchExpressions, range);
        self.start_node_at(checkpoint, SyntaxKind::SwitchExpr);
        self.bump();
        if self.expect(SyntaxKind::BraceOpen) {
            self.parse_separated_list(
                SyntaxKind::BraceClose,
                PATTERN_FIRST,
                TokenSet::EMPTY,
                Trailing::Allowed,
                |p| p.parse_switch_arm(),
            );
            self.expect(SyntaxKind::BraceClose);
        }
        self.finish_node();
    }

    fn parse_switch_arm(&mut self) {
        self.start_node(SyntaxKind::SwitchArm);
        self.parse_pattern();
        self.parse_when_clause_opt();
        self.expect(SyntaxKind::FatArrow);
        self.parse_expr();
        self.finish_node();
    }

    /// `x with { A = 1 }`
    fn parse_with_rest(&mut self, checkpoint: Checkpoint) {
        let range = self.current_span();
        self.check_feature(Feature::WithExpressions, range);
        self.start_node_at(checkpoint, SyntaxKind::WithExpr);
        self.bump_as(SyntaxKind::KwWith);
        self.parse_initializer();
        self.finish_node();
    }

    /// `..` and its optional right operand.
    fn parse_range_operator(&mut self) {
        let range = self.current_span();
        self.check_feature(Feature::Ranges, range);
        self.bump();
        if self.at_set(EXPR_FIRST) && !self.at(SyntaxKind::DotDot) {
            self.parse_binary(UNARY_BP);
        }
    }

    /// Prefix operators, casts, `await`, `throw` and prefix ranges.
    pub(super) fn parse_unary(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            SyntaxKind::Plus
            | SyntaxKind::Minus
            | SyntaxKind::Bang
            | SyntaxKind::Tilde
            | SyntaxKind::PlusPlus
            | SyntaxKind::MinusMinus => self.parse_prefix(),
            SyntaxKind::Caret => {
                let range = self.current_span();
                self.check_feature(Feature::Ranges, range);
                self.parse_prefix();
            }
            SyntaxKind::DotDot => {
                self.start_node(SyntaxKind::RangeExpr);
                self.parse_range_operator();
                self.finish_node();
            }
            SyntaxKind::ParenOpen if speculate::is_cast(self.cursor()) => self.parse_cast(),
            SyntaxKind::Ident if self.classify(Position::Expression) == Some(SyntaxKind::KwAwait) => {
                self.start_node(SyntaxKind::AwaitExpr);
                self.bump_as(SyntaxKind::KwAwait);
                self.parse_unary();
                self.finish_node();
            }
            SyntaxKind::KwThrow => {
                self.start_node(SyntaxKind::ThrowExpr);
                self.bump();
                self.parse_binary(COALESCE_BP);
                self.finish_node();
            }
            _ => self.parse_postfix_expr(),
        }
        self.exit_recursion();
    }

    fn parse_prefix(&mut self) {
        self.start_node(SyntaxKind::PrefixExpr);
        self.bump();
        self.parse_unary();
        self.finish_node();
    }

    /// `(T)x`
    fn parse_cast(&mut self) {
        self.start_node(SyntaxKind::CastExpr);
        self.bump();
        self.parse_type(TypeMode::Expression);
        self.expect(SyntaxKind::ParenClose);
        self.parse_unary();
        self.finish_node();
    }

    /// `x => body`
    fn parse_simple_lambda(&mut self, checkpoint: Checkpoint, is_async: bool) {
        self.start_node_at(checkpoint, SyntaxKind::SimpleLambdaExpr);
        self.start_node(SyntaxKind::Param);
        self.expect_ident();
        self.finish_node();
        self.expect(SyntaxKind::FatArrow);
        self.parse_lambda_body(is_async);
        self.finish_node();
    }

    /// `(a, int b) => body`
    fn parse_paren_lambda(&mut self, checkpoint: Checkpoint, is_async: bool) {
        self.start_node_at(checkpoint, SyntaxKind::ParenLambdaExpr);
        self.parse_param_list_in(ParamContext::Lambda);
        self.expect(SyntaxKind::FatArrow);
        self.parse_lambda_body(is_async);
        self.finish_node();
    }

    /// `async x => ...`, `async (x) => ...` or `async delegate { ... }`
    fn parse_async_lambda(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::ModifierList);
        self.bump_as(SyntaxKind::KwAsync);
        self.finish_node();
        match self.current() {
            SyntaxKind::KwDelegate => self.parse_anonymous_method(checkpoint, true),
            SyntaxKind::ParenOpen => self.parse_paren_lambda(checkpoint, true),
            _ => self.parse_simple_lambda(checkpoint, true),
        }
    }

    fn parse_lambda_body(&mut self, is_async: bool) {
        if self.at(SyntaxKind::BraceOpen) {
            self.with_body_state(is_async, |p| p.parse_block());
        } else {
            self.with_body_state(is_async, |p| p.parse_expr());
        }
    }

    /// `delegate (int x) { ... }`; the parameter list is optional.
    pub(super) fn parse_anonymous_method(&mut self, checkpoint: Checkpoint, is_async: bool) {
        self.start_node_at(checkpoint, SyntaxKind::AnonymousMethodExpr);
        self.bump();
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        }
        if self.at(SyntaxKind::BraceOpen) {
            self.with_body_state(is_async, |p| p.parse_block());
        } else {
            self.missing(SyntaxKind::BraceOpen);
        }
        self.finish_node();
    }
}
