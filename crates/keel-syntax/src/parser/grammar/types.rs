//! Types: predefined, named, generic, qualified, tuple, array and nullable.
//!
//! Suffixes are collected first as a flat [`TypeSuffix`] stack, then applied
//! left to right around a checkpoint taken before the base type. Consecutive
//! rank specifiers share one `ArrayType`; each `?` wraps everything to its left.

use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::PREDEFINED_TYPES;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::speculate::{self, TypeMode};
use crate::parser::state::ParseState;

/// Tokens that can start a type.
pub(super) const TYPE_FIRST: TokenSet =
    PREDEFINED_TYPES.union(TokenSet::new(&[SyntaxKind::Ident, SyntaxKind::ParenOpen]));

/// One suffix after a base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeSuffix {
    /// `[]`, `[,]`, ...
    Rank,
    /// `?`
    Nullable,
}

/// A wrapper node produced by a run of suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuffixGroup {
    Array { ranks: usize },
    Nullable,
}

/// Fold a suffix stack into the wrappers it produces, innermost first.
pub(crate) fn group_suffixes(suffixes: &[TypeSuffix]) -> Vec<SuffixGroup> {
    let mut groups: Vec<SuffixGroup> = Vec::with_capacity(suffixes.len());
    for suffix in suffixes {
        match (suffix, groups.last_mut()) {
            (TypeSuffix::Rank, Some(SuffixGroup::Array { ranks })) => *ranks += 1,
            (TypeSuffix::Rank, _) => groups.push(SuffixGroup::Array { ranks: 1 }),
            (TypeSuffix::Nullable, _) => groups.push(SuffixGroup::Nullable),
        }
    }
    groups
}

impl Parser<'_, '_> {
    pub(crate) fn at_type_start(&mut self) -> bool {
        self.at_set(TYPE_FIRST)
    }

    /// Parse a type, or insert a missing one with `ExpectedType`.
    pub(crate) fn parse_type(&mut self, mode: TypeMode) {
        if !self.at_type_start() {
            self.missing_name(DiagnosticKind::ExpectedType);
            return;
        }
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_type_base();
        self.parse_type_suffixes(checkpoint, mode);
        self.exit_recursion();
    }

    fn parse_type_base(&mut self) {
        match self.current() {
            SyntaxKind::ParenOpen => self.parse_tuple_type(),
            SyntaxKind::Ident => self.parse_type_name(),
            _ => {
                self.start_node(SyntaxKind::PredefinedType);
                self.bump();
                self.finish_node();
            }
        }
    }

    /// Collect suffixes with a pure scan, then wrap the base type in order.
    pub(crate) fn parse_type_suffixes(&mut self, checkpoint: Checkpoint, mode: TypeMode) {
        let suffixes = self.scan_type_suffixes(mode);
        for group in group_suffixes(&suffixes) {
            match group {
                SuffixGroup::Array { ranks } => {
                    self.start_node_at(checkpoint, SyntaxKind::ArrayType);
                    for _ in 0..ranks {
                        self.parse_rank_specifier();
                    }
                    self.finish_node();
                }
                SuffixGroup::Nullable => {
                    self.start_node_at(checkpoint, SyntaxKind::NullableType);
                    self.bump();
                    self.finish_node();
                }
            }
        }
    }

    fn scan_type_suffixes(&mut self, mode: TypeMode) -> Vec<TypeSuffix> {
        let mut c = self.cursor();
        let mut suffixes = Vec::new();
        loop {
            match c.current() {
                SyntaxKind::BracketOpen if speculate::is_rank_specifier(&c) => {
                    c.advance();
                    while c.eat(SyntaxKind::Comma) {}
                    c.advance();
                    suffixes.push(TypeSuffix::Rank);
                }
                SyntaxKind::Question
                    if mode == TypeMode::Declaration || speculate::question_is_nullable(&c) =>
                {
                    c.advance();
                    suffixes.push(TypeSuffix::Nullable);
                }
                _ => break,
            }
        }
        if !suffixes.is_empty() {
            tracing::trace!(?suffixes, "type suffixes");
        }
        suffixes
    }

    /// `[` `,`* `]`
    pub(crate) fn parse_rank_specifier(&mut self) {
        self.start_node(SyntaxKind::ArrayRankSpecifier);
        self.expect(SyntaxKind::BracketOpen);
        while self.eat(SyntaxKind::Comma) {}
        self.expect(SyntaxKind::BracketClose);
        self.finish_node();
    }

    /// `A`, `A<T>`, `alias::A`, `A.B<T>.C`
    pub(crate) fn parse_type_name(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_simple_type_name();
        if self.at(SyntaxKind::DoubleColon) && self.nth(1) == SyntaxKind::Ident {
            self.start_node_at(checkpoint, SyntaxKind::AliasQualifiedName);
            self.bump();
            self.parse_simple_type_name();
            self.finish_node();
        }
        while self.at(SyntaxKind::Dot) && self.nth(1) == SyntaxKind::Ident {
            self.start_node_at(checkpoint, SyntaxKind::QualifiedName);
            self.bump();
            self.parse_simple_type_name();
            self.finish_node();
        }
    }

    /// `Ident` or `Ident<...>`; in a cref the argument list uses braces.
    fn parse_simple_type_name(&mut self) {
        let generic = match self.nth(1) {
            SyntaxKind::Less => {
                let mut c = self.cursor();
                c.advance();
                speculate::scan_type_args(&mut c)
            }
            SyntaxKind::BraceOpen => self.in_state(ParseState::IN_CREF),
            _ => false,
        };
        if !generic {
            self.start_node(SyntaxKind::IdentName);
            self.expect_ident();
            self.finish_node();
            return;
        }
        self.start_node(SyntaxKind::GenericName);
        self.bump();
        self.parse_type_arg_list();
        self.finish_node();
    }

    /// `<T, U>`, unbound `<,>`, or `{T}` inside a cref.
    pub(crate) fn parse_type_arg_list(&mut self) {
        let (open, close) = if self.at(SyntaxKind::BraceOpen) {
            (SyntaxKind::BraceOpen, SyntaxKind::BraceClose)
        } else {
            (SyntaxKind::Less, SyntaxKind::Greater)
        };
        self.start_node(SyntaxKind::TypeArgList);
        self.expect(open);
        if matches!(self.current(), SyntaxKind::Comma) || self.at(close) {
            while self.eat(SyntaxKind::Comma) {}
        } else {
            self.parse_separated_list(
                close,
                TYPE_FIRST,
                TokenSet::EMPTY,
                super::Trailing::Repaired,
                |p| p.parse_type(TypeMode::Declaration),
            );
        }
        self.expect(close);
        self.finish_node();
    }

    /// `(T a, U b)`
    fn parse_tuple_type(&mut self) {
        self.start_node(SyntaxKind::TupleType);
        self.bump();
        self.parse_separated_list(
            SyntaxKind::ParenClose,
            TYPE_FIRST,
            TokenSet::EMPTY,
            super::Trailing::Repaired,
            |p| {
                p.start_node(SyntaxKind::TupleElement);
                p.parse_type(TypeMode::Declaration);
                p.eat(SyntaxKind::Ident);
                p.finish_node();
            },
        );
        self.expect(SyntaxKind::ParenClose);
        self.finish_node();
    }
}
