//! Query expressions: `from x in xs where p orderby k select v`.
//!
//! Clause keywords are contextual and only recognized while the body is
//! being parsed, so `select` is an ordinary name everywhere else.

use crate::parser::contextual::Position;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::speculate::TypeMode;
use crate::parser::state::ParseState;

impl Parser<'_, '_> {
    pub(super) fn parse_query_expr(&mut self) {
        self.start_node(SyntaxKind::QueryExpr);
        self.parse_from_clause();
        self.start_node(SyntaxKind::QueryBody);
        self.with_state(ParseState::IN_QUERY, ParseState::empty(), |p| {
            p.parse_query_body()
        });
        self.finish_node();
        self.finish_node();
    }

    /// `from T x in source`; the type is optional.
    fn parse_from_clause(&mut self) {
        self.start_node(SyntaxKind::FromClause);
        self.bump_as(SyntaxKind::KwFrom);
        if !(self.at(SyntaxKind::Ident) && self.nth(1) == SyntaxKind::KwIn) {
            self.parse_type(TypeMode::Declaration);
        }
        self.expect_ident();
        self.expect(SyntaxKind::KwIn);
        self.parse_expr();
        self.finish_node();
    }

    fn parse_query_body(&mut self) {
        loop {
            match self.classify(Position::QueryClause) {
                Some(SyntaxKind::KwFrom) => self.parse_from_clause(),
                Some(SyntaxKind::KwLet) => {
                    self.start_node(SyntaxKind::LetClause);
                    self.bump_as(SyntaxKind::KwLet);
                    self.expect_ident();
                    self.expect(SyntaxKind::Equals);
                    self.parse_expr();
                    self.finish_node();
                }
                Some(SyntaxKind::KwWhere) => {
                    self.start_node(SyntaxKind::WhereClause);
                    self.bump_as(SyntaxKind::KwWhere);
                    self.parse_expr();
                    self.finish_node();
                }
                Some(SyntaxKind::KwOrderBy) => self.parse_orderby_clause(),
                _ => break,
            }
        }

        match self.classify(Position::QueryClause) {
            Some(SyntaxKind::KwSelect) => {
                self.start_node(SyntaxKind::SelectClause);
                self.bump_as(SyntaxKind::KwSelect);
                self.parse_expr();
                self.finish_node();
            }
            Some(SyntaxKind::KwGroup) => {
                self.start_node(SyntaxKind::GroupClause);
                self.bump_as(SyntaxKind::KwGroup);
                self.parse_expr();
                if self.classify(Position::QueryClause) == Some(SyntaxKind::KwBy) {
                    self.bump_as(SyntaxKind::KwBy);
                } else {
                    self.missing(SyntaxKind::KwBy);
                }
                self.parse_expr();
                self.finish_node();
            }
            _ => self.missing(SyntaxKind::KwSelect),
        }
    }

    /// `orderby a, b descending`
    fn parse_orderby_clause(&mut self) {
        self.start_node(SyntaxKind::OrderByClause);
        self.bump_as(SyntaxKind::KwOrderBy);
        loop {
            self.start_node(SyntaxKind::Ordering);
            self.parse_expr();
            if let Some(direction @ (SyntaxKind::KwAscending | SyntaxKind::KwDescending)) =
                self.classify(Position::QueryClause)
            {
                self.bump_as(direction);
            }
            self.finish_node();
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }
}
