//! Primary expressions, the postfix chain, argument lists and initializers.

use rowan::Checkpoint;

use super::Trailing;
use crate::diagnostics::DiagnosticKind;
use crate::options::Feature;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::EXPR_FIRST;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::cursor::TokenCursor;
use crate::parser::speculate::{self, TypeMode};

const ARG_FIRST: TokenSet = EXPR_FIRST.union(TokenSet::single(SyntaxKind::KwIn));

const INITIALIZER_FIRST: TokenSet =
    EXPR_FIRST.union(TokenSet::new(&[SyntaxKind::BraceOpen, SyntaxKind::BracketOpen]));

/// `T x` followed by a token that ends an argument or tuple element.
///
/// Generic types are only accepted where `allow_generic` says so: in
/// `f(a < b, c > d)` the relational reading wins.
fn declaration_expr_follows(mut c: TokenCursor<'_>, allow_generic: bool) -> bool {
    if c.at_word("var") && c.peek(1) == SyntaxKind::ParenOpen {
        c.advance();
        return speculate::skip_parens(&mut c)
            && matches!(c.current(), SyntaxKind::Equals | SyntaxKind::KwIn);
    }
    let Some(shape) = speculate::scan_type(&mut c, TypeMode::Expression) else {
        return false;
    };
    if shape.generic && !allow_generic {
        return false;
    }
    c.at(SyntaxKind::Ident)
        && matches!(
            c.peek(1),
            SyntaxKind::Comma | SyntaxKind::ParenClose | SyntaxKind::BracketClose
        )
}

impl Parser<'_, '_> {
    /// A primary expression and everything that binds to it as a postfix.
    pub(super) fn parse_postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        if self.parse_primary() {
            self.parse_postfix_chain(checkpoint);
        }
    }

    /// Returns `false` when nothing was there and a missing expression was inserted.
    fn parse_primary(&mut self) -> bool {
        match self.current() {
            kind if kind.is_literal() => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            kind if kind.is_predefined_type() => {
                self.start_node(SyntaxKind::PredefinedType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Ident => self.parse_name_expr(),
            SyntaxKind::ParenOpen => self.parse_paren_or_tuple(),
            SyntaxKind::KwThis => self.parse_keyword_expr(SyntaxKind::ThisExpr),
            SyntaxKind::KwBase => self.parse_keyword_expr(SyntaxKind::BaseExpr),
            SyntaxKind::KwTypeof => self.parse_type_operand_expr(SyntaxKind::TypeOfExpr),
            SyntaxKind::KwSizeof => self.parse_type_operand_expr(SyntaxKind::SizeOfExpr),
            SyntaxKind::KwDefault => {
                self.start_node(SyntaxKind::DefaultExpr);
                self.bump();
                if self.eat(SyntaxKind::ParenOpen) {
                    self.parse_type(TypeMode::Declaration);
                    self.expect(SyntaxKind::ParenClose);
                }
                self.finish_node();
            }
            SyntaxKind::KwChecked | SyntaxKind::KwUnchecked => {
                self.start_node(SyntaxKind::CheckedExpr);
                self.bump();
                self.expect(SyntaxKind::ParenOpen);
                self.parse_expr();
                self.expect(SyntaxKind::ParenClose);
                self.finish_node();
            }
            SyntaxKind::KwNew => self.parse_new_expr(),
            SyntaxKind::KwDelegate => {
                let checkpoint = self.checkpoint();
                self.parse_anonymous_method(checkpoint, false);
            }
            _ => {
                self.missing_name(DiagnosticKind::ExpectedExpression);
                return false;
            }
        }
        true
    }

    fn parse_keyword_expr(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        self.finish_node();
    }

    /// `typeof(T)` and `sizeof(T)`
    fn parse_type_operand_expr(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        self.expect(SyntaxKind::ParenOpen);
        self.parse_type(TypeMode::Declaration);
        self.expect(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// `x`, `F<T>`, `alias::X`, or the deconstruction `var (a, b)`.
    fn parse_name_expr(&mut self) {
        if self.at_word("var")
            && self.nth(1) == SyntaxKind::ParenOpen
            && declaration_expr_follows(self.cursor(), false)
        {
            self.parse_declaration_expr();
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_simple_name_expr();
        if self.at(SyntaxKind::DoubleColon) && self.nth(1) == SyntaxKind::Ident {
            self.start_node_at(checkpoint, SyntaxKind::AliasQualifiedName);
            self.bump();
            self.parse_simple_name_expr();
            self.finish_node();
        }
    }

    /// `Ident`, or `Ident<T>` when the type arguments scan and a follow token confirms them.
    fn parse_simple_name_expr(&mut self) {
        let generic = self.nth(1) == SyntaxKind::Less && {
            let mut c = self.cursor();
            c.advance();
            speculate::is_generic_in_expression(c)
        };
        if generic {
            self.start_node(SyntaxKind::GenericName);
            self.bump();
            self.parse_type_arg_list();
        } else {
            self.start_node(SyntaxKind::IdentName);
            self.expect_ident();
        }
        self.finish_node();
    }

    /// `(x)` or `(a, b: 1)`
    fn parse_paren_or_tuple(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump();
        let first = self.checkpoint();
        let named = self.parse_tuple_element();
        if !named && !self.at(SyntaxKind::Comma) {
            self.start_node_at(checkpoint, SyntaxKind::ParenExpr);
            self.expect(SyntaxKind::ParenClose);
            self.finish_node();
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::TupleExpr);
        self.start_node_at(first, SyntaxKind::Arg);
        self.finish_node();
        while self.eat(SyntaxKind::Comma) {
            self.start_node(SyntaxKind::Arg);
            self.parse_tuple_element();
            self.finish_node();
        }
        self.expect(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// One tuple element; returns whether it was named or declared, which makes the parens a tuple.
    fn parse_tuple_element(&mut self) -> bool {
        let mut named = false;
        if self.at(SyntaxKind::Ident) && self.nth(1) == SyntaxKind::Colon {
            self.parse_name_colon();
            named = true;
        }
        if declaration_expr_follows(self.cursor(), false) {
            self.parse_declaration_expr();
            return true;
        }
        self.parse_expr();
        named
    }

    /// `int x`, `var x` or `var (a, b)` in an argument or tuple.
    fn parse_declaration_expr(&mut self) {
        self.start_node(SyntaxKind::DeclarationExpr);
        self.parse_type(TypeMode::Expression);
        self.parse_designation();
        self.finish_node();
    }

    /// `name:`
    pub(super) fn parse_name_colon(&mut self) {
        self.start_node(SyntaxKind::NameColon);
        self.bump();
        self.expect(SyntaxKind::Colon);
        self.finish_node();
    }

    /// Member access, invocation, element access, `?.`, `++`, `--` and `!`.
    fn parse_postfix_chain(&mut self, checkpoint: Checkpoint) {
        loop {
            match self.current() {
                SyntaxKind::Dot => {
                    self.start_node_at(checkpoint, SyntaxKind::MemberAccessExpr);
                    self.bump();
                    self.parse_member_name();
                    self.finish_node();
                }
                SyntaxKind::ParenOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::InvocationExpr);
                    self.parse_arg_list();
                    self.finish_node();
                }
                SyntaxKind::BracketOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::ElementAccessExpr);
                    self.parse_bracketed_arg_list();
                    self.finish_node();
                }
                SyntaxKind::PlusPlus | SyntaxKind::MinusMinus | SyntaxKind::Bang => {
                    self.start_node_at(checkpoint, SyntaxKind::PostfixExpr);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::QuestionDot => {
                    self.start_node_at(checkpoint, SyntaxKind::ConditionalAccessExpr);
                    self.bump();
                    let binding = self.checkpoint();
                    self.start_node(SyntaxKind::MemberBindingExpr);
                    self.parse_member_name();
                    self.finish_node();
                    self.parse_postfix_chain(binding);
                    self.finish_node();
                    return;
                }
                SyntaxKind::Question
                    if self.nth(1) == SyntaxKind::BracketOpen && self.cursor().adjacent(0) =>
                {
                    self.start_node_at(checkpoint, SyntaxKind::ConditionalAccessExpr);
                    self.bump();
                    let binding = self.checkpoint();
                    self.start_node(SyntaxKind::ElementBindingExpr);
                    self.parse_bracketed_arg_list();
                    self.finish_node();
                    self.parse_postfix_chain(binding);
                    self.finish_node();
                    return;
                }
                _ => return,
            }
        }
    }

    fn parse_member_name(&mut self) {
        if self.at(SyntaxKind::Ident) {
            self.parse_simple_name_expr();
        } else {
            self.missing_name(DiagnosticKind::ExpectedIdentifier);
        }
    }

    /// `(a, name: b, out var c)`
    pub(super) fn parse_arg_list(&mut self) {
        self.parse_args_in(
            SyntaxKind::ArgList,
            SyntaxKind::ParenOpen,
            SyntaxKind::ParenClose,
        );
    }

    /// `[i, j]`
    pub(super) fn parse_bracketed_arg_list(&mut self) {
        self.parse_args_in(
            SyntaxKind::BracketedArgList,
            SyntaxKind::BracketOpen,
            SyntaxKind::BracketClose,
        );
    }

    fn parse_args_in(&mut self, node: SyntaxKind, open: SyntaxKind, close: SyntaxKind) {
        self.start_node(node);
        if self.expect(open) {
            self.parse_separated_list(
                close,
                ARG_FIRST,
                TokenSet::EMPTY,
                Trailing::Repaired,
                |p| p.parse_arg(),
            );
            self.expect(close);
        }
        self.finish_node();
    }

    fn parse_arg(&mut self) {
        self.start_node(SyntaxKind::Arg);
        if self.at(SyntaxKind::Ident) && self.nth(1) == SyntaxKind::Colon {
            self.parse_name_colon();
        }
        let is_out = self.at(SyntaxKind::KwOut);
        if is_out || self.at(SyntaxKind::KwRef) || self.at(SyntaxKind::KwIn) {
            self.bump();
        }
        if is_out && declaration_expr_follows(self.cursor(), true) {
            self.parse_declaration_expr();
        } else {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// Every `new` form: object, target-typed, anonymous, array and implicit array.
    fn parse_new_expr(&mut self) {
        match self.nth(1) {
            SyntaxKind::ParenOpen => {
                let range = self.current_span();
                self.check_feature(Feature::TargetTypedNew, range);
                self.start_node(SyntaxKind::ImplicitObjectCreationExpr);
                self.bump();
                self.parse_arg_list();
                if self.at(SyntaxKind::BraceOpen) {
                    self.parse_initializer();
                }
                self.finish_node();
            }
            SyntaxKind::BraceOpen => {
                self.start_node(SyntaxKind::AnonymousObjectCreationExpr);
                self.bump();
                self.parse_initializer();
                self.finish_node();
            }
            SyntaxKind::BracketOpen => {
                self.start_node(SyntaxKind::ImplicitArrayCreationExpr);
                self.bump();
                self.bump();
                while self.eat(SyntaxKind::Comma) {}
                self.expect(SyntaxKind::BracketClose);
                self.parse_initializer();
                self.finish_node();
            }
            _ => self.parse_creation_with_type(),
        }
    }

    /// `new T(args) { init }`, `new T[n][]` or `new T[] { ... }`
    fn parse_creation_with_type(&mut self) {
        let mut c = self.cursor();
        c.advance();
        let shape = speculate::scan_type(&mut c, TypeMode::Declaration);
        let sized = shape.is_some() && c.at(SyntaxKind::BracketOpen);
        let is_array = sized || shape.is_some_and(|s| s.array);

        let node = if is_array {
            SyntaxKind::ArrayCreationExpr
        } else {
            SyntaxKind::ObjectCreationExpr
        };
        self.start_node(node);
        self.bump();
        let type_checkpoint = self.checkpoint();
        self.parse_type(TypeMode::Declaration);

        if is_array {
            if sized {
                self.start_node_at(type_checkpoint, SyntaxKind::ArrayType);
                self.parse_sized_rank();
                while speculate::is_rank_specifier(&self.cursor()) {
                    self.parse_rank_specifier();
                }
                self.finish_node();
            }
            if self.at(SyntaxKind::BraceOpen) {
                self.parse_initializer();
            }
        } else {
            let has_args = self.at(SyntaxKind::ParenOpen);
            if has_args {
                self.parse_arg_list();
            }
            if self.at(SyntaxKind::BraceOpen) {
                self.parse_initializer();
            } else if !has_args {
                self.missing(SyntaxKind::ParenOpen);
            }
        }
        self.finish_node();
    }

    /// `[n, m]` with sizes.
    fn parse_sized_rank(&mut self) {
        self.start_node(SyntaxKind::ArrayRankSpecifier);
        self.bump();
        self.parse_separated_list(
            SyntaxKind::BracketClose,
            EXPR_FIRST,
            TokenSet::EMPTY,
            Trailing::Repaired,
            |p| p.parse_expr(),
        );
        self.expect(SyntaxKind::BracketClose);
        self.finish_node();
    }

    /// `{ a, B = b, [i] = c, { d, e } }`; a trailing comma is allowed.
    pub(super) fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::InitializerExpr);
        if self.expect(SyntaxKind::BraceOpen) {
            self.parse_separated_list(
                SyntaxKind::BraceClose,
                INITIALIZER_FIRST,
                TokenSet::EMPTY,
                Trailing::Allowed,
                |p| p.parse_initializer_element(),
            );
            self.expect(SyntaxKind::BraceClose);
        }
        self.finish_node();
    }

    fn parse_initializer_element(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_initializer(),
            SyntaxKind::BracketOpen => {
                self.start_node(SyntaxKind::AssignmentExpr);
                self.parse_bracketed_arg_list();
                self.expect(SyntaxKind::Equals);
                self.parse_initializer_value();
                self.finish_node();
            }
            SyntaxKind::Ident
                if self.nth(1) == SyntaxKind::Equals && self.nth(2) == SyntaxKind::BraceOpen =>
            {
                self.start_node(SyntaxKind::AssignmentExpr);
                self.start_node(SyntaxKind::IdentName);
                self.bump();
                self.finish_node();
                self.bump();
                self.parse_initializer();
                self.finish_node();
            }
            _ => self.parse_expr(),
        }
    }

    fn parse_initializer_value(&mut self) {
        if self.at(SyntaxKind::BraceOpen) {
            self.parse_initializer();
        } else {
            self.parse_expr();
        }
    }
}
