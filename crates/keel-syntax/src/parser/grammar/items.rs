//! Roots: compilation unit, fragments, namespaces and `using` directives.

use crate::diagnostics::DiagnosticKind;
use crate::options::Feature;
use crate::parser::contextual::{Classification, Position, classify};
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{MODIFIERS, TYPE_DECL_KEYWORDS};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::speculate::{self, TypeMode};
use crate::parser::state::ParseState;

/// Modifiers that a local declaration or local function may also carry.
const LOCAL_MODIFIERS: TokenSet = TokenSet::new(&[
    SyntaxKind::KwStatic,
    SyntaxKind::KwConst,
    SyntaxKind::KwExtern,
    SyntaxKind::KwNew,
]);

/// Where a run of namespace members lives; decides what ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NamespaceBody {
    /// File level: global statements are allowed, a stray `}` is an error.
    CompilationUnit,
    /// `namespace N { ... }`: ends at `}`.
    Block,
    /// `namespace N;`: runs to the end of the file.
    FileScoped,
}

impl Parser<'_, '_> {
    pub(crate) fn parse_compilation_unit(&mut self) {
        self.start_node(SyntaxKind::CompilationUnit);
        self.parse_namespace_members(NamespaceBody::CompilationUnit);
        self.eat_trivia();
        self.finish_node();
    }

    pub(crate) fn parse_expression_fragment(&mut self) {
        self.start_node(SyntaxKind::ExprFragment);
        self.parse_expr();
        self.parse_fragment_leftovers();
        self.eat_trivia();
        self.finish_node();
    }

    pub(crate) fn parse_statement_fragment(&mut self) {
        self.start_node(SyntaxKind::StmtFragment);
        self.parse_statement();
        self.parse_fragment_leftovers();
        self.eat_trivia();
        self.finish_node();
    }

    /// Everything after a complete fragment goes into one `Error` node.
    pub(super) fn parse_fragment_leftovers(&mut self) {
        self.error_recover(DiagnosticKind::UnexpectedToken, TokenSet::EMPTY);
    }

    fn parse_namespace_members(&mut self, body: NamespaceBody) {
        loop {
            if self.at_eof() || self.nesting_exhausted() {
                break;
            }
            if body == NamespaceBody::Block && self.at(SyntaxKind::BraceClose) {
                break;
            }
            let start = self.significant_pos();
            match self.current() {
                SyntaxKind::KwUsing if self.at_using_directive() => self.parse_using_directive(),
                SyntaxKind::KwNamespace => self.parse_namespace_decl(),
                SyntaxKind::BraceClose => self.error_and_bump(DiagnosticKind::UnexpectedToken),
                _ if body == NamespaceBody::CompilationUnit && !self.at_declaration_start() => {
                    self.parse_global_statement()
                }
                _ => self.parse_member(),
            }
            if self.significant_pos() == start {
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
            }
        }
    }

    /// `using` that names a namespace or type, as opposed to a `using` statement or declaration.
    fn at_using_directive(&mut self) -> bool {
        let mut c = self.cursor();
        c.advance();
        match c.current() {
            SyntaxKind::ParenOpen => false,
            SyntaxKind::KwStatic => true,
            SyntaxKind::Ident if c.peek(1) == SyntaxKind::Equals => true,
            _ => {
                speculate::scan_type(&mut c, TypeMode::Declaration).is_none()
                    || !c.at(SyntaxKind::Ident)
            }
        }
    }

    /// Whether file-level input starts a declaration rather than a global statement.
    ///
    /// Attributes, access modifiers and type declaration keywords (after any
    /// run of modifiers a local could also carry) mean a declaration.
    fn at_declaration_start(&mut self) -> bool {
        let mut c = self.cursor();
        if c.at(SyntaxKind::BracketOpen) {
            return true;
        }
        loop {
            let kind = c.current();
            if MODIFIERS.contains(kind) {
                if !LOCAL_MODIFIERS.contains(kind) {
                    return true;
                }
                c.advance();
                continue;
            }
            if c.at_word("async") || c.at_word("partial") {
                c.advance();
                continue;
            }
            break;
        }
        if c.at(SyntaxKind::KwDelegate) {
            return !matches!(c.peek(1), SyntaxKind::ParenOpen | SyntaxKind::BraceOpen);
        }
        if TYPE_DECL_KEYWORDS.contains(c.current()) {
            return true;
        }
        c.at_word("record")
            && matches!(
                classify(Position::TypeDeclaration, &c, self.state, self.options),
                Classification::Keyword(_)
            )
    }

    /// A statement directly in the compilation unit.
    fn parse_global_statement(&mut self) {
        if !self.top_level_reported {
            self.top_level_reported = true;
            let range = self.current_span();
            self.check_feature(Feature::TopLevelStatements, range);
        }
        self.start_node(SyntaxKind::GlobalStatement);
        self.with_state(ParseState::IN_TOP_LEVEL, ParseState::empty(), |p| {
            p.parse_statement()
        });
        self.finish_node();
    }

    /// `using N;` | `using static T;` | `using A = T;`
    fn parse_using_directive(&mut self) {
        self.start_node(SyntaxKind::UsingDirective);
        self.bump();
        if !self.eat(SyntaxKind::KwStatic)
            && self.at(SyntaxKind::Ident)
            && self.nth(1) == SyntaxKind::Equals
        {
            self.start_node(SyntaxKind::NameEquals);
            self.bump();
            self.bump();
            self.finish_node();
        }
        self.parse_type(TypeMode::Declaration);
        self.expect(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `namespace N { ... }` or the file-scoped `namespace N;`
    fn parse_namespace_decl(&mut self) {
        let checkpoint = self.checkpoint();
        let keyword = self.current_span();
        self.bump();
        self.parse_namespace_name();

        if self.at(SyntaxKind::Semicolon) {
            self.start_node_at(checkpoint, SyntaxKind::FileScopedNamespaceDecl);
            let range = keyword.cover(self.current_span());
            self.check_feature(Feature::FileScopedNamespaces, range);
            self.bump();
            self.parse_namespace_members(NamespaceBody::FileScoped);
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::NamespaceDecl);
        self.expect(SyntaxKind::BraceOpen);
        if self.enter_recursion() {
            self.parse_namespace_members(NamespaceBody::Block);
            self.exit_recursion();
        }
        self.expect(SyntaxKind::BraceClose);
        self.finish_node();
    }

    fn parse_namespace_name(&mut self) {
        if self.at(SyntaxKind::Ident) {
            self.parse_type_name();
        } else {
            self.missing_name(DiagnosticKind::ExpectedIdentifier);
        }
    }
}
