//! Members of type bodies: fields, methods, constructors, properties,
//! indexers, events, operators and nested types.
//!
//! A member is parsed from a checkpoint taken before its attributes; the node
//! kind is chosen once the tokens after the modifiers decide it.

use rowan::{Checkpoint, TextRange};

use super::Trailing;
use super::declarations::Modifiers;
use super::types::TYPE_FIRST;
use crate::diagnostics::DiagnosticKind;
use crate::options::Feature;
use crate::parser::contextual::Position;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{MEMBER_FIRST, MEMBER_RECOVERY, MODIFIERS};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::speculate::TypeMode;

const PARAM_MODIFIERS: TokenSet = TokenSet::new(&[
    SyntaxKind::KwRef,
    SyntaxKind::KwOut,
    SyntaxKind::KwIn,
    SyntaxKind::KwParams,
    SyntaxKind::KwThis,
    SyntaxKind::KwReadonly,
]);

const PARAM_FIRST: TokenSet = TYPE_FIRST
    .union(PARAM_MODIFIERS)
    .union(TokenSet::single(SyntaxKind::BracketOpen));

/// Which declaration a parameter list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParamContext {
    /// Every parameter has a type.
    Declaration,
    /// Lambda parameters may be just a name.
    Lambda,
}

impl Parser<'_, '_> {
    /// Members up to the closing `}` of a type body, which is left for the caller.
    pub(super) fn parse_member_list(&mut self) {
        loop {
            if self.at_eof() || self.at(SyntaxKind::BraceClose) || self.nesting_exhausted() {
                break;
            }
            if !self.at_set(MEMBER_FIRST) {
                self.error_recover(DiagnosticKind::InvalidMemberToken, MEMBER_RECOVERY);
                continue;
            }
            let start = self.significant_pos();
            self.parse_member();
            if self.significant_pos() == start {
                self.error_and_bump(DiagnosticKind::InvalidMemberToken);
            }
        }
    }

    /// One member or nested type declaration.
    pub(super) fn parse_member(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        let start = self.significant_pos();
        self.parse_attribute_lists();
        let modifiers = self.parse_modifiers();
        let has_prefix = self.significant_pos() != start;
        self.parse_member_after_modifiers(checkpoint, modifiers, has_prefix);
        self.exit_recursion();
    }

    fn parse_member_after_modifiers(
        &mut self,
        checkpoint: Checkpoint,
        modifiers: Modifiers,
        has_prefix: bool,
    ) {
        match self.current() {
            SyntaxKind::KwClass | SyntaxKind::KwStruct | SyntaxKind::KwInterface => {
                self.parse_class_like_decl(checkpoint)
            }
            SyntaxKind::KwEnum => self.parse_enum_decl(checkpoint),
            SyntaxKind::KwDelegate => self.parse_delegate_decl(checkpoint),
            SyntaxKind::KwEvent => self.parse_event_decl(checkpoint),
            SyntaxKind::KwImplicit | SyntaxKind::KwExplicit => {
                self.parse_conversion_operator_decl(checkpoint, modifiers)
            }
            SyntaxKind::Tilde => self.parse_dtor_decl(checkpoint),
            SyntaxKind::Ident if self.classify(Position::TypeDeclaration).is_some() => {
                self.parse_record_decl(checkpoint)
            }
            SyntaxKind::Ident if self.nth(1) == SyntaxKind::ParenOpen => {
                self.parse_ctor_decl(checkpoint, modifiers)
            }
            _ if self.at_type_start() => self.parse_typed_member(checkpoint, modifiers),
            _ if has_prefix => self.finish_incomplete_member(checkpoint),
            _ => {}
        }
    }

    /// Wrap whatever was consumed since `checkpoint` into an `IncompleteMember`.
    ///
    /// The offending token is reported and left in place for the member loop.
    fn finish_incomplete_member(&mut self, checkpoint: Checkpoint) {
        let range = self.current_span();
        let text = self.describe_current();
        self.error_at_with(DiagnosticKind::InvalidMemberToken, range, text);
        self.start_node_at(checkpoint, SyntaxKind::IncompleteMember);
        self.finish_node();
    }

    /// Members that start with a type: fields, methods, properties, indexers and operators.
    fn parse_typed_member(&mut self, checkpoint: Checkpoint, modifiers: Modifiers) {
        let type_checkpoint = self.checkpoint();
        self.parse_type(TypeMode::Declaration);
        match self.current() {
            SyntaxKind::KwThis => self.parse_indexer_decl(checkpoint),
            SyntaxKind::KwOperator => self.parse_operator_decl(checkpoint, modifiers),
            SyntaxKind::Ident => match self.nth(1) {
                SyntaxKind::ParenOpen | SyntaxKind::Less => {
                    self.parse_method_decl(checkpoint, modifiers)
                }
                SyntaxKind::BraceOpen | SyntaxKind::FatArrow => self.parse_property_decl(checkpoint),
                _ => self.parse_field_decl(checkpoint, type_checkpoint),
            },
            _ => self.finish_incomplete_member(checkpoint),
        }
    }

    /// `T a = 1, b;` with the type already parsed after `type_checkpoint`.
    fn parse_field_decl(&mut self, checkpoint: Checkpoint, type_checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::FieldDecl);
        self.parse_var_declarators(type_checkpoint);
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// Declarators after an already parsed type, wrapped together with it in a `VarDecl`.
    pub(super) fn parse_var_declarators(&mut self, type_checkpoint: Checkpoint) {
        self.start_node_at(type_checkpoint, SyntaxKind::VarDecl);
        loop {
            self.start_node(SyntaxKind::VarDeclarator);
            self.expect_ident();
            if self.at(SyntaxKind::Equals) {
                self.parse_equals_value();
            }
            self.finish_node();
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// `= value`, where the value may be an array initializer.
    pub(super) fn parse_equals_value(&mut self) {
        self.start_node(SyntaxKind::EqualsValueClause);
        self.bump();
        if self.at(SyntaxKind::BraceOpen) {
            self.parse_initializer();
        } else {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `R M<T>(P p) where T : C { }`
    fn parse_method_decl(&mut self, checkpoint: Checkpoint, modifiers: Modifiers) {
        self.start_node_at(checkpoint, SyntaxKind::MethodDecl);
        self.bump();
        self.parse_type_params_opt();
        self.parse_param_list();
        self.parse_constraint_clauses();
        self.parse_function_body(modifiers.is_async);
        self.finish_node();
    }

    /// `C(P p) : base(x) { }`
    fn parse_ctor_decl(&mut self, checkpoint: Checkpoint, modifiers: Modifiers) {
        self.start_node_at(checkpoint, SyntaxKind::CtorDecl);
        self.bump();
        self.parse_param_list();
        if self.at(SyntaxKind::Colon) {
            self.start_node(SyntaxKind::CtorInitializer);
            self.bump();
            if !self.eat(SyntaxKind::KwBase) && !self.eat(SyntaxKind::KwThis) {
                self.missing(SyntaxKind::KwBase);
            }
            self.parse_arg_list();
            self.finish_node();
        }
        self.parse_function_body(modifiers.is_async);
        self.finish_node();
    }

    /// `~C() { }`
    fn parse_dtor_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::DtorDecl);
        self.bump();
        self.expect_ident();
        self.expect(SyntaxKind::ParenOpen);
        self.expect(SyntaxKind::ParenClose);
        self.parse_function_body(false);
        self.finish_node();
    }

    /// `T P { get; set; } = x;` or `T P => x;`
    fn parse_property_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::PropertyDecl);
        self.bump();
        if self.at(SyntaxKind::FatArrow) {
            self.parse_arrow_body(false);
            self.expect(SyntaxKind::Semicolon);
        } else {
            self.parse_accessor_list();
            if self.at(SyntaxKind::Equals) {
                self.parse_equals_value();
                self.expect(SyntaxKind::Semicolon);
            }
        }
        self.finish_node();
    }

    /// `T this[int i] { get; }`
    fn parse_indexer_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::IndexerDecl);
        self.bump();
        self.parse_bracketed_param_list();
        if self.at(SyntaxKind::FatArrow) {
            self.parse_arrow_body(false);
            self.expect(SyntaxKind::Semicolon);
        } else {
            self.parse_accessor_list();
        }
        self.finish_node();
    }

    /// `event T E;` or `event T E { add { } remove { } }`
    fn parse_event_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::EventFieldDecl);
        self.bump();
        let type_checkpoint = self.checkpoint();
        self.parse_type(TypeMode::Declaration);
        if self.at(SyntaxKind::Ident) && self.nth(1) == SyntaxKind::BraceOpen {
            self.bump();
            self.parse_accessor_list();
        } else {
            self.parse_var_declarators(type_checkpoint);
            self.expect(SyntaxKind::Semicolon);
        }
        self.finish_node();
    }

    /// `T operator +(T a, T b)`, including `checked` and `>>` operators.
    fn parse_operator_decl(&mut self, checkpoint: Checkpoint, modifiers: Modifiers) {
        self.start_node_at(checkpoint, SyntaxKind::OperatorDecl);
        self.bump();
        self.parse_operator_checked_modifier();
        self.parse_overloadable_operator();
        self.parse_param_list();
        self.parse_function_body(modifiers.is_async);
        self.finish_node();
    }

    /// `implicit operator T(U u)` / `explicit operator checked T(U u)`
    fn parse_conversion_operator_decl(&mut self, checkpoint: Checkpoint, modifiers: Modifiers) {
        self.start_node_at(checkpoint, SyntaxKind::ConversionOperatorDecl);
        self.bump();
        self.expect(SyntaxKind::KwOperator);
        self.parse_operator_checked_modifier();
        self.parse_type(TypeMode::Declaration);
        self.parse_param_list();
        self.parse_function_body(modifiers.is_async);
        self.finish_node();
    }

    /// `checked` is gated; `unchecked` is accepted with a warning.
    fn parse_operator_checked_modifier(&mut self) {
        match self.current() {
            SyntaxKind::KwChecked => {
                let range = self.current_span();
                self.check_feature(Feature::CheckedOperators, range);
                self.bump();
            }
            SyntaxKind::KwUnchecked => {
                let range = self.current_span();
                self.warn(DiagnosticKind::MisplacedUncheckedOperator, range);
                self.bump();
            }
            _ => {}
        }
    }

    fn parse_overloadable_operator(&mut self) {
        if self.at_shift_right() {
            self.bump_joined(SyntaxKind::GreaterGreater, 2);
            return;
        }
        let kind = self.current();
        if kind.is_overloadable_operator() {
            self.bump();
            return;
        }
        if kind == SyntaxKind::ParenOpen {
            let position = self.missing_position();
            self.error_at_with(
                DiagnosticKind::ExpectedToken,
                TextRange::empty(position),
                "overloadable operator",
            );
            return;
        }
        self.error_and_bump(DiagnosticKind::UnexpectedToken);
    }

    /// `{ get; private set; init => x; }`
    fn parse_accessor_list(&mut self) {
        self.start_node(SyntaxKind::AccessorList);
        if !self.expect(SyntaxKind::BraceOpen) {
            self.finish_node();
            return;
        }
        loop {
            if self.at_eof() || self.at(SyntaxKind::BraceClose) || self.nesting_exhausted() {
                break;
            }
            if self.at_set(MODIFIERS) || self.at(SyntaxKind::BracketOpen) || self.at(SyntaxKind::Ident)
            {
                let start = self.significant_pos();
                self.parse_accessor();
                if self.significant_pos() != start {
                    continue;
                }
            }
            self.error_and_bump(DiagnosticKind::UnexpectedToken);
        }
        self.expect(SyntaxKind::BraceClose);
        self.finish_node();
    }

    fn parse_accessor(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_attribute_lists();
        while self.at_set(MODIFIERS) {
            self.bump();
        }
        let keyword = match self.classify(Position::Accessor) {
            Some(kind) => Some(kind),
            None if self.at_word("add") || self.at_word("remove") => Some(SyntaxKind::Ident),
            None => None,
        };
        let Some(keyword) = keyword else {
            let range = self.current_span();
            let text = self.describe_current();
            self.error_at_with(DiagnosticKind::UnexpectedToken, range, text);
            return;
        };
        self.start_node_at(checkpoint, SyntaxKind::Accessor);
        if keyword == SyntaxKind::KwInit {
            let range = self.current_span();
            self.check_feature(Feature::InitAccessors, range);
        }
        self.bump_as(keyword);
        self.parse_function_body(false);
        self.finish_node();
    }

    /// Block, `=> expr;` or `;`.
    pub(super) fn parse_function_body(&mut self, is_async: bool) {
        match self.current() {
            SyntaxKind::BraceOpen => self.with_body_state(is_async, |p| p.parse_block()),
            SyntaxKind::FatArrow => {
                self.parse_arrow_body(is_async);
                self.expect(SyntaxKind::Semicolon);
            }
            _ => {
                self.expect(SyntaxKind::Semicolon);
            }
        }
    }

    /// `=> expr`
    fn parse_arrow_body(&mut self, is_async: bool) {
        self.start_node(SyntaxKind::ArrowExprClause);
        self.bump();
        self.with_body_state(is_async, |p| p.parse_expr());
        self.finish_node();
    }

    /// `(P a, ref Q b = default)`
    pub(super) fn parse_param_list(&mut self) {
        self.parse_param_list_in(ParamContext::Declaration);
    }

    pub(super) fn parse_param_list_in(&mut self, context: ParamContext) {
        self.start_node(SyntaxKind::ParamList);
        if self.expect(SyntaxKind::ParenOpen) {
            self.parse_separated_list(
                SyntaxKind::ParenClose,
                PARAM_FIRST,
                TokenSet::EMPTY,
                Trailing::Repaired,
                |p| p.parse_param(context),
            );
            self.expect(SyntaxKind::ParenClose);
        }
        self.finish_node();
    }

    fn parse_bracketed_param_list(&mut self) {
        self.start_node(SyntaxKind::BracketedParamList);
        self.expect(SyntaxKind::BracketOpen);
        self.parse_separated_list(
            SyntaxKind::BracketClose,
            PARAM_FIRST,
            TokenSet::EMPTY,
            Trailing::Repaired,
            |p| p.parse_param(ParamContext::Declaration),
        );
        self.expect(SyntaxKind::BracketClose);
        self.finish_node();
    }

    fn parse_param(&mut self, context: ParamContext) {
        self.start_node(SyntaxKind::Param);
        self.parse_attribute_lists();
        while self.at_set(PARAM_MODIFIERS) {
            self.bump();
        }
        let untyped = context == ParamContext::Lambda
            && self.at(SyntaxKind::Ident)
            && matches!(self.nth(1), SyntaxKind::Comma | SyntaxKind::ParenClose);
        if !untyped {
            self.parse_type(TypeMode::Declaration);
        }
        self.expect_ident();
        if self.at(SyntaxKind::Equals) {
            self.parse_equals_value();
        }
        self.finish_node();
    }
}
