//! Type declarations and the pieces they share with members: attributes,
//! modifiers, type parameters, base lists and constraint clauses.

use rowan::{Checkpoint, TextRange};

use super::Trailing;
use super::types::TYPE_FIRST;
use crate::diagnostics::DiagnosticKind;
use crate::options::Feature;
use crate::parser::contextual::Position;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{EXPR_FIRST, MODIFIERS};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::speculate::TypeMode;

const TYPE_PARAM_FIRST: TokenSet = TokenSet::new(&[
    SyntaxKind::Ident,
    SyntaxKind::BracketOpen,
    SyntaxKind::KwIn,
    SyntaxKind::KwOut,
]);

const ENUM_MEMBER_FIRST: TokenSet = TokenSet::new(&[SyntaxKind::Ident, SyntaxKind::BracketOpen]);

/// What a modifier list contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Modifiers {
    pub count: usize,
    pub is_async: bool,
}

impl Parser<'_, '_> {
    /// Zero or more `[...]` attribute lists.
    pub(super) fn parse_attribute_lists(&mut self) {
        while self.at(SyntaxKind::BracketOpen) {
            self.parse_attribute_list();
        }
    }

    /// `[target: A, B(x, Name = y)]`
    fn parse_attribute_list(&mut self) {
        self.start_node(SyntaxKind::AttributeList);
        self.bump();
        let target = self.current();
        if (target == SyntaxKind::Ident || target.is_reserved_keyword())
            && self.nth(1) == SyntaxKind::Colon
        {
            self.bump();
            self.bump();
        }
        self.parse_separated_list(
            SyntaxKind::BracketClose,
            TokenSet::single(SyntaxKind::Ident),
            TokenSet::EMPTY,
            Trailing::Allowed,
            |p| p.parse_attribute(),
        );
        self.expect(SyntaxKind::BracketClose);
        self.finish_node();
    }

    fn parse_attribute(&mut self) {
        self.start_node(SyntaxKind::Attribute);
        if self.at(SyntaxKind::Ident) {
            self.parse_type_name();
        } else {
            self.missing_name(DiagnosticKind::ExpectedIdentifier);
        }
        if self.at(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::AttributeArgList);
            self.bump();
            self.parse_separated_list(
                SyntaxKind::ParenClose,
                EXPR_FIRST,
                TokenSet::EMPTY,
                Trailing::Repaired,
                |p| p.parse_attribute_arg(),
            );
            self.expect(SyntaxKind::ParenClose);
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_attribute_arg(&mut self) {
        self.start_node(SyntaxKind::AttributeArg);
        if self.at(SyntaxKind::Ident) {
            match self.nth(1) {
                SyntaxKind::Equals => {
                    self.start_node(SyntaxKind::NameEquals);
                    self.bump();
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::Colon => self.parse_name_colon(),
                _ => {}
            }
        }
        self.parse_expr();
        self.finish_node();
    }

    /// Member modifiers, including contextual `async` and `partial`.
    ///
    /// The list is wrapped in a `ModifierList` only when it is not empty.
    pub(super) fn parse_modifiers(&mut self) -> Modifiers {
        let checkpoint = self.checkpoint();
        let mut modifiers = Modifiers::default();
        let mut partial: Option<TextRange> = None;
        let mut warned = false;
        loop {
            let kind = if self.at_set(MODIFIERS) {
                self.current()
            } else if let Some(kind) = self.classify(Position::Modifier) {
                kind
            } else {
                break;
            };
            if let Some(range) = partial
                && !warned
            {
                self.warn(DiagnosticKind::PartialModifierNotLast, range);
                warned = true;
            }
            if kind == SyntaxKind::KwPartial {
                partial = Some(self.current_span());
            }
            modifiers.is_async |= kind == SyntaxKind::KwAsync;
            modifiers.count += 1;
            self.bump_as(kind);
        }
        if modifiers.count > 0 {
            self.start_node_at(checkpoint, SyntaxKind::ModifierList);
            self.finish_node();
        }
        modifiers
    }

    /// `class`, `struct` or `interface` declaration, wrapped from `checkpoint`.
    pub(super) fn parse_class_like_decl(&mut self, checkpoint: Checkpoint) {
        let node = match self.current() {
            SyntaxKind::KwStruct => SyntaxKind::StructDecl,
            SyntaxKind::KwInterface => SyntaxKind::InterfaceDecl,
            _ => SyntaxKind::ClassDecl,
        };
        self.start_node_at(checkpoint, node);
        self.bump();
        let name = self.parse_declared_name();
        self.parse_type_params_opt();

        let has_params = node != SyntaxKind::InterfaceDecl && self.at(SyntaxKind::ParenOpen);
        if has_params {
            let range = self.current_span();
            self.check_feature(Feature::PrimaryConstructors, range);
            self.parse_param_list();
        }
        self.parse_base_list_opt(has_params, &name);
        self.parse_constraint_clauses();
        self.parse_type_body();
        self.finish_node();
    }

    /// `record`, `record class` or `record struct` declaration.
    ///
    /// `record R(int X);` declares a primary constructor and no body.
    pub(super) fn parse_record_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::RecordDecl);
        let keyword = self.current_span();
        self.bump_as(SyntaxKind::KwRecord);
        if self.at(SyntaxKind::KwStruct) {
            let range = keyword.cover(self.current_span());
            self.check_feature(Feature::RecordStructs, range);
            self.bump();
        } else {
            self.eat(SyntaxKind::KwClass);
        }
        let name = self.parse_declared_name();
        self.parse_type_params_opt();
        let has_params = self.at(SyntaxKind::ParenOpen);
        if has_params {
            self.parse_param_list();
        }
        self.parse_base_list_opt(has_params, &name);
        self.parse_constraint_clauses();
        self.parse_type_body();
        self.finish_node();
    }

    /// `enum E : int { A, B = 2, }`
    pub(super) fn parse_enum_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::EnumDecl);
        self.bump();
        let name = self.parse_declared_name();
        self.parse_base_list_opt(false, &name);
        if self.expect(SyntaxKind::BraceOpen) {
            self.parse_separated_list(
                SyntaxKind::BraceClose,
                ENUM_MEMBER_FIRST,
                TokenSet::EMPTY,
                Trailing::Allowed,
                |p| p.parse_enum_member(),
            );
            self.expect(SyntaxKind::BraceClose);
        }
        self.eat(SyntaxKind::Semicolon);
        self.finish_node();
    }

    fn parse_enum_member(&mut self) {
        self.start_node(SyntaxKind::EnumMemberDecl);
        self.parse_attribute_lists();
        self.expect_ident();
        if self.at(SyntaxKind::Equals) {
            self.parse_equals_value();
        }
        self.finish_node();
    }

    /// `delegate R D<T>(T t) where T : C;`
    pub(super) fn parse_delegate_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::DelegateDecl);
        self.bump();
        self.parse_type(TypeMode::Declaration);
        self.expect_ident();
        self.parse_type_params_opt();
        self.parse_param_list();
        self.parse_constraint_clauses();
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// Name of the declared type; its text is kept for later diagnostics.
    fn parse_declared_name(&mut self) -> String {
        let name = if self.at(SyntaxKind::Ident) {
            self.current_text().to_owned()
        } else {
            String::new()
        };
        self.expect_ident();
        name
    }

    /// `{ members }` with an optional trailing `;`, or a lone `;`.
    fn parse_type_body(&mut self) {
        if self.eat(SyntaxKind::Semicolon) {
            return;
        }
        if self.expect(SyntaxKind::BraceOpen) {
            self.parse_member_list();
            self.expect(SyntaxKind::BraceClose);
        }
        self.eat(SyntaxKind::Semicolon);
    }

    pub(super) fn parse_type_params_opt(&mut self) {
        if !self.at(SyntaxKind::Less) {
            return;
        }
        self.start_node(SyntaxKind::TypeParamList);
        self.bump();
        self.parse_separated_list(
            SyntaxKind::Greater,
            TYPE_PARAM_FIRST,
            TokenSet::EMPTY,
            Trailing::Repaired,
            |p| {
                p.start_node(SyntaxKind::TypeParam);
                p.parse_attribute_lists();
                if !p.eat(SyntaxKind::KwIn) {
                    p.eat(SyntaxKind::KwOut);
                }
                p.expect_ident();
                p.finish_node();
            },
        );
        self.expect(SyntaxKind::Greater);
        self.finish_node();
    }

    /// `: A, B(x), I<T>`
    ///
    /// An entry followed by an argument list is a `PrimaryCtorBaseType`. When
    /// the declaring type has no parameter list the arguments are still parsed
    /// and reported as unexpected.
    fn parse_base_list_opt(&mut self, has_params: bool, type_name: &str) {
        if !self.at(SyntaxKind::Colon) {
            return;
        }
        self.start_node(SyntaxKind::BaseList);
        self.bump();
        loop {
            self.parse_base_type(has_params, type_name);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    fn parse_base_type(&mut self, has_params: bool, type_name: &str) {
        let checkpoint = self.checkpoint();
        self.parse_type(TypeMode::Declaration);
        if !self.at(SyntaxKind::ParenOpen) {
            self.start_node_at(checkpoint, SyntaxKind::SimpleBaseType);
            self.finish_node();
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::PrimaryCtorBaseType);
        let start = self.current_span().start();
        self.parse_arg_list();
        if !has_params {
            let end = self.last_non_trivia_end().unwrap_or(start);
            self.error_at_with(
                DiagnosticKind::UnexpectedArgumentList,
                TextRange::new(start, end),
                type_name,
            );
        }
        self.finish_node();
    }

    /// `where T : class, I, new()` clauses.
    pub(super) fn parse_constraint_clauses(&mut self) {
        while self.classify(Position::ConstraintClause).is_some() {
            self.start_node(SyntaxKind::ConstraintClause);
            self.bump_as(SyntaxKind::KwWhere);
            self.expect_ident();
            self.expect(SyntaxKind::Colon);
            loop {
                self.parse_constraint();
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
            self.finish_node();
        }
    }

    fn parse_constraint(&mut self) {
        match self.current() {
            SyntaxKind::KwClass | SyntaxKind::KwStruct => {
                self.start_node(SyntaxKind::ClassOrStructConstraint);
                self.bump();
                self.eat(SyntaxKind::Question);
                self.finish_node();
            }
            SyntaxKind::KwNew => {
                self.start_node(SyntaxKind::CtorConstraint);
                self.bump();
                self.expect(SyntaxKind::ParenOpen);
                self.expect(SyntaxKind::ParenClose);
                self.finish_node();
            }
            _ if self.at_set(TYPE_FIRST) => {
                self.start_node(SyntaxKind::TypeConstraint);
                self.parse_type(TypeMode::Declaration);
                self.finish_node();
            }
            _ => self.missing_name(DiagnosticKind::ExpectedType),
        }
    }
}
