//! Statements.
//!
//! A statement that starts with a type is a local declaration or a local
//! function only when [`speculate::scan_local_declaration`] says so; anything
//! else is an expression statement.

use rowan::{Checkpoint, TextRange};

use super::declarations::Modifiers;
use crate::diagnostics::DiagnosticKind;
use crate::options::Feature;
use crate::parser::contextual::Position;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{STMT_FIRST, STMT_KEYWORDS};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::speculate::{self, LocalKind, TypeMode};

/// Tokens that can start a statement inside a block.
const STATEMENT_START: TokenSet = STMT_FIRST.union(TokenSet::new(&[
    SyntaxKind::KwStatic,
    SyntaxKind::KwExtern,
    SyntaxKind::BracketOpen,
]));

/// Where a condition's `)` gives up skipping and is reported missing.
const CONDITION_RECOVERY: TokenSet = STMT_KEYWORDS.union(TokenSet::new(&[
    SyntaxKind::BraceOpen,
    SyntaxKind::BraceClose,
    SyntaxKind::Semicolon,
]));

/// Clause keywords that stop recovery but cannot start a statement themselves.
const STRAY_CLAUSE_KEYWORDS: TokenSet = TokenSet::new(&[
    SyntaxKind::KwCase,
    SyntaxKind::KwElse,
    SyntaxKind::KwCatch,
    SyntaxKind::KwFinally,
]);

const STATEMENT_RECOVERY: TokenSet = STATEMENT_START
    .union(STRAY_CLAUSE_KEYWORDS)
    .union(TokenSet::single(SyntaxKind::BraceClose));

const SWITCH_SECTION_RECOVERY: TokenSet = TokenSet::new(&[
    SyntaxKind::KwCase,
    SyntaxKind::KwDefault,
    SyntaxKind::BraceClose,
]);

impl Parser<'_, '_> {
    pub(crate) fn parse_statement(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.parse_statement_inner();
        self.exit_recursion();
    }

    fn parse_statement_inner(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_block(),
            SyntaxKind::Semicolon => {
                self.start_node(SyntaxKind::EmptyStmt);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwIf => self.parse_if_statement(),
            SyntaxKind::KwWhile => self.parse_while_statement(),
            SyntaxKind::KwDo => self.parse_do_statement(),
            SyntaxKind::KwFor => self.parse_for_statement(),
            SyntaxKind::KwForeach => self.parse_foreach_statement(),
            SyntaxKind::KwSwitch => self.parse_switch_statement(),
            SyntaxKind::KwBreak => self.parse_keyword_statement(SyntaxKind::BreakStmt, false),
            SyntaxKind::KwContinue => self.parse_keyword_statement(SyntaxKind::ContinueStmt, false),
            SyntaxKind::KwReturn => self.parse_keyword_statement(SyntaxKind::ReturnStmt, true),
            SyntaxKind::KwThrow => self.parse_keyword_statement(SyntaxKind::ThrowStmt, true),
            SyntaxKind::KwTry => self.parse_try_statement(),
            SyntaxKind::KwUsing => self.parse_using_statement(),
            SyntaxKind::KwConst => self.parse_const_local(),
            SyntaxKind::KwStatic | SyntaxKind::KwExtern | SyntaxKind::BracketOpen => {
                self.parse_modified_local()
            }
            SyntaxKind::Ident if self.nth(1) == SyntaxKind::Colon => self.parse_labeled_statement(),
            SyntaxKind::Ident => match self.classify(Position::Statement) {
                Some(SyntaxKind::KwYield) => self.parse_yield_statement(),
                Some(SyntaxKind::KwAsync) => self.parse_modified_local(),
                _ => self.parse_declaration_or_expression_statement(),
            },
            _ if self.at_set(STMT_FIRST) => self.parse_declaration_or_expression_statement(),
            _ => {
                self.start_node(SyntaxKind::EmptyStmt);
                self.missing_as(SyntaxKind::Semicolon, DiagnosticKind::ExpectedStatement);
                self.finish_node();
            }
        }
    }

    /// `{ statements }`
    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.expect(SyntaxKind::BraceOpen);
        self.parse_statement_list(false);
        self.expect(SyntaxKind::BraceClose);
        self.finish_node();
    }

    /// Statements up to `}`; in a switch section also up to the next label.
    fn parse_statement_list(&mut self, in_switch_section: bool) {
        loop {
            if self.at_eof() || self.at(SyntaxKind::BraceClose) || self.nesting_exhausted() {
                break;
            }
            if in_switch_section && self.at_switch_label() {
                break;
            }
            if !self.at_set(STATEMENT_START) {
                self.error_recover(DiagnosticKind::UnexpectedToken, STATEMENT_RECOVERY);
                let label = in_switch_section && self.at_switch_label();
                if self.at_set(STRAY_CLAUSE_KEYWORDS) && !label {
                    self.error_and_bump(DiagnosticKind::UnexpectedToken);
                }
                continue;
            }
            let start = self.significant_pos();
            self.parse_statement();
            if self.significant_pos() == start {
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
            }
        }
    }

    fn parse_declaration_or_expression_statement(&mut self) {
        let is_expression = self.at(SyntaxKind::Ident)
            && matches!(
                self.classify(Position::Expression),
                Some(SyntaxKind::KwAwait | SyntaxKind::KwFrom)
            );
        let local = if is_expression {
            None
        } else {
            speculate::scan_local_declaration(self.cursor())
        };
        let checkpoint = self.checkpoint();
        match local {
            Some(LocalKind::Declaration) => self.parse_local_declaration(checkpoint),
            Some(LocalKind::Function) => {
                self.parse_local_function(checkpoint, Modifiers::default())
            }
            None => self.parse_expression_statement(),
        }
    }

    fn parse_expression_statement(&mut self) {
        self.start_node(SyntaxKind::ExprStmt);
        self.parse_expr();
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `T a = 1, b;`, wrapped from `checkpoint` (which may cover modifiers).
    fn parse_local_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::LocalDeclStmt);
        self.parse_local_variables();
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `T a = 1, b` as a `VarDecl`.
    fn parse_local_variables(&mut self) {
        let type_checkpoint = self.checkpoint();
        self.parse_type(TypeMode::Expression);
        self.parse_var_declarators(type_checkpoint);
    }

    /// `R F<T>(P p) { }`, wrapped from `checkpoint`.
    fn parse_local_function(&mut self, checkpoint: Checkpoint, modifiers: Modifiers) {
        self.start_node_at(checkpoint, SyntaxKind::LocalFunctionStmt);
        self.parse_type(TypeMode::Declaration);
        self.expect_ident();
        self.parse_type_params_opt();
        self.parse_param_list();
        self.parse_constraint_clauses();
        self.parse_function_body(modifiers.is_async);
        self.finish_node();
    }

    /// `const int X = 1;`
    fn parse_const_local(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::ModifierList);
        self.bump();
        self.finish_node();
        self.parse_local_declaration(checkpoint);
    }

    /// Attributes and `static`/`extern`/`async` before a local function.
    fn parse_modified_local(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_attribute_lists();
        let list = self.checkpoint();
        let mut modifiers = Modifiers::default();
        let mut static_range: Option<TextRange> = None;
        loop {
            match self.current() {
                SyntaxKind::KwStatic => {
                    static_range.get_or_insert(self.current_span());
                    self.bump();
                }
                SyntaxKind::KwExtern => self.bump(),
                SyntaxKind::Ident => {
                    let Some(kind) = self.classify(Position::Modifier) else {
                        break;
                    };
                    modifiers.is_async |= kind == SyntaxKind::KwAsync;
                    self.bump_as(kind);
                }
                _ => break,
            }
            modifiers.count += 1;
        }
        if modifiers.count > 0 {
            self.start_node_at(list, SyntaxKind::ModifierList);
            self.finish_node();
        }
        match speculate::scan_local_declaration(self.cursor()) {
            Some(LocalKind::Declaration) => self.parse_local_declaration(checkpoint),
            _ => {
                if let Some(range) = static_range {
                    self.check_feature(Feature::StaticLocalFunctions, range);
                }
                self.parse_local_function(checkpoint, modifiers);
            }
        }
    }

    /// `label: statement`
    fn parse_labeled_statement(&mut self) {
        self.start_node(SyntaxKind::LabeledStmt);
        self.bump();
        self.bump();
        self.parse_statement();
        self.finish_node();
    }

    /// `break;`, `continue;`, `return x;`, `throw x;`
    fn parse_keyword_statement(&mut self, node: SyntaxKind, has_value: bool) {
        self.start_node(node);
        self.bump();
        if has_value && !self.at(SyntaxKind::Semicolon) && !self.at_eof() {
            self.parse_expr();
        }
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `yield return x;` or `yield break;`
    fn parse_yield_statement(&mut self) {
        self.start_node(SyntaxKind::YieldStmt);
        self.bump_as(SyntaxKind::KwYield);
        if self.eat(SyntaxKind::KwReturn) {
            self.parse_expr();
        } else {
            self.expect(SyntaxKind::KwBreak);
        }
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `( expr )` around a condition.
    fn parse_paren_condition(&mut self) {
        self.expect(SyntaxKind::ParenOpen);
        self.parse_expr();
        self.expect_recover(SyntaxKind::ParenClose, CONDITION_RECOVERY);
    }

    fn parse_if_statement(&mut self) {
        self.assert_current(SyntaxKind::KwIf);
        self.start_node(SyntaxKind::IfStmt);
        self.bump();
        self.parse_paren_condition();
        self.parse_statement();
        if self.at(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            self.parse_statement();
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_while_statement(&mut self) {
        self.assert_current(SyntaxKind::KwWhile);
        self.start_node(SyntaxKind::WhileStmt);
        self.bump();
        self.parse_paren_condition();
        self.parse_statement();
        self.finish_node();
    }

    /// `do stmt while (cond);`
    fn parse_do_statement(&mut self) {
        self.assert_current(SyntaxKind::KwDo);
        self.start_node(SyntaxKind::DoStmt);
        self.bump();
        self.parse_statement();
        self.expect(SyntaxKind::KwWhile);
        self.parse_paren_condition();
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `for (init; cond; iter) stmt`
    fn parse_for_statement(&mut self) {
        self.assert_current(SyntaxKind::KwFor);
        self.start_node(SyntaxKind::ForStmt);
        self.bump();
        self.expect(SyntaxKind::ParenOpen);
        if speculate::scan_local_declaration(self.cursor()) == Some(LocalKind::Declaration) {
            self.parse_local_variables();
        } else {
            self.parse_expression_list(SyntaxKind::Semicolon);
        }
        self.expect(SyntaxKind::Semicolon);
        if !self.at(SyntaxKind::Semicolon) {
            self.parse_expr();
        }
        self.expect(SyntaxKind::Semicolon);
        self.parse_expression_list(SyntaxKind::ParenClose);
        self.expect(SyntaxKind::ParenClose);
        self.parse_statement();
        self.finish_node();
    }

    /// `a, b, c` up to `close`; empty when `close` is current.
    fn parse_expression_list(&mut self, close: SyntaxKind) {
        if self.at(close) {
            return;
        }
        loop {
            self.parse_expr();
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
    }

    /// `foreach (T x in xs) stmt` or `foreach (var (a, b) in xs) stmt`
    fn parse_foreach_statement(&mut self) {
        self.assert_current(SyntaxKind::KwForeach);
        self.start_node(SyntaxKind::ForeachStmt);
        self.bump();
        self.expect(SyntaxKind::ParenOpen);
        let deconstruction = self.at(SyntaxKind::ParenOpen)
            || (self.at_word("var") && self.nth(1) == SyntaxKind::ParenOpen);
        if deconstruction {
            self.parse_expr();
        } else {
            self.parse_type(TypeMode::Declaration);
            self.expect_ident();
        }
        self.expect(SyntaxKind::KwIn);
        self.parse_expr();
        self.expect(SyntaxKind::ParenClose);
        self.parse_statement();
        self.finish_node();
    }

    /// `switch (x) { case 1: ... default: ... }`
    fn parse_switch_statement(&mut self) {
        self.assert_current(SyntaxKind::KwSwitch);
        self.start_node(SyntaxKind::SwitchStmt);
        self.bump();
        self.parse_paren_condition();
        if self.expect(SyntaxKind::BraceOpen) {
            loop {
                if self.at_eof() || self.at(SyntaxKind::BraceClose) || self.nesting_exhausted() {
                    break;
                }
                if self.at_switch_label() {
                    self.parse_switch_section();
                } else {
                    self.error_recover(DiagnosticKind::UnexpectedToken, SWITCH_SECTION_RECOVERY);
                    if self.at(SyntaxKind::KwDefault) && !self.at_switch_label() {
                        self.error_and_bump(DiagnosticKind::UnexpectedToken);
                    }
                }
            }
            self.expect(SyntaxKind::BraceClose);
        }
        self.finish_node();
    }

    fn at_switch_label(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwCase => true,
            SyntaxKind::KwDefault => self.nth(1) == SyntaxKind::Colon,
            _ => false,
        }
    }

    fn parse_switch_section(&mut self) {
        self.start_node(SyntaxKind::SwitchSection);
        while self.at_switch_label() {
            self.parse_switch_label();
        }
        self.parse_statement_list(true);
        self.finish_node();
    }

    /// `case 1:`, `case int x when x > 0:` or `default:`
    ///
    /// A `case` whose operand parses cleanly as an expression and is followed
    /// by `:` is a constant label; anything else is a pattern label.
    fn parse_switch_label(&mut self) {
        if self.at(SyntaxKind::KwDefault) {
            self.start_node(SyntaxKind::DefaultLabel);
            self.bump();
            self.bump();
            self.finish_node();
            return;
        }
        let checkpoint = self.checkpoint();
        self.bump();
        if self.case_label_is_expression() {
            self.start_node_at(checkpoint, SyntaxKind::CaseLabel);
            self.parse_expr();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::CasePatternLabel);
            self.parse_pattern();
            self.parse_when_clause_opt();
        }
        self.expect(SyntaxKind::Colon);
        self.finish_node();
    }

    /// Whether the label after `case` is a plain constant expression.
    ///
    /// The expression is tried once per label position and the answer kept,
    /// so labels inside lambdas inside other labels are not re-tried by every
    /// enclosing trial. Each token is then parsed at most once per enclosing
    /// label plus once for real, which the recursion limit bounds.
    fn case_label_is_expression(&mut self) -> bool {
        if let Some(&known) = self.case_labels.get(&self.pos) {
            return known;
        }
        let (clean, next) = self.parses_cleanly(|p| p.parse_expr());
        let known = clean && next == SyntaxKind::Colon;
        self.case_labels.insert(self.pos, known);
        known
    }

    /// `when expr` after a case pattern or switch arm pattern.
    pub(super) fn parse_when_clause_opt(&mut self) {
        if self.classify(Position::SwitchGuard).is_none() {
            return;
        }
        self.start_node(SyntaxKind::WhenClause);
        self.bump_as(SyntaxKind::KwWhen);
        self.parse_expr();
        self.finish_node();
    }

    /// `try { } catch (E e) when (f) { } finally { }`
    fn parse_try_statement(&mut self) {
        self.start_node(SyntaxKind::TryStmt);
        self.bump();
        self.parse_block();
        let mut handlers = 0;
        while self.at(SyntaxKind::KwCatch) {
            self.parse_catch_clause();
            handlers += 1;
        }
        if self.at(SyntaxKind::KwFinally) {
            self.start_node(SyntaxKind::FinallyClause);
            self.bump();
            self.parse_block();
            self.finish_node();
            handlers += 1;
        }
        if handlers == 0 {
            self.missing(SyntaxKind::KwFinally);
        }
        self.finish_node();
    }

    fn parse_catch_clause(&mut self) {
        self.start_node(SyntaxKind::CatchClause);
        self.bump();
        if self.at(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::CatchDecl);
            self.bump();
            self.parse_type(TypeMode::Declaration);
            self.eat(SyntaxKind::Ident);
            self.expect(SyntaxKind::ParenClose);
            self.finish_node();
        }
        if self.classify(Position::SwitchGuard).is_some() {
            self.start_node(SyntaxKind::CatchFilter);
            self.bump_as(SyntaxKind::KwWhen);
            self.parse_paren_condition();
            self.finish_node();
        }
        self.parse_block();
        self.finish_node();
    }

    /// `using (x) stmt`, `using (var x = y) stmt`, or the declaration `using var x = y;`
    fn parse_using_statement(&mut self) {
        if self.nth(1) != SyntaxKind::ParenOpen {
            let range = self.current_span();
            self.start_node(SyntaxKind::LocalDeclStmt);
            self.check_feature(Feature::UsingDeclarations, range);
            self.bump();
            self.parse_local_variables();
            self.expect(SyntaxKind::Semicolon);
            self.finish_node();
            return;
        }
        self.start_node(SyntaxKind::UsingStmt);
        self.bump();
        self.bump();
        if speculate::scan_local_declaration(self.cursor()) == Some(LocalKind::Declaration) {
            self.parse_local_variables();
        } else {
            self.parse_expr();
        }
        self.expect(SyntaxKind::ParenClose);
        self.parse_statement();
        self.finish_node();
    }
}
