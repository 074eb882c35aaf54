//! Parser state machine and low-level operations.

use std::cell::Cell;
use std::collections::HashMap;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::DocCref;
use super::cst::{SyntaxKind, TokenSet};
use super::cursor::TokenCursor;
use super::lexer::{Token, token_text};
use super::state::ParseState;
use crate::diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsMark};
use crate::options::{DocumentationMode, Feature, ParseOptions};

pub(super) const DEBUG_FUEL: u32 = 1024;

/// Trivia tokens are buffered and flushed when starting a new node.
///
/// While `speculating` is non-zero the builder is not touched: nodes and
/// tokens are skipped, trivia stays buffered, and only the position and the
/// diagnostic bag move. [`Parser::look_ahead`] restores both afterwards.
pub(crate) struct Parser<'src, 'opts> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    /// Offset reported for the end of input. Differs from `source.len()` for cref sub-parses.
    end: TextSize,
    pub(super) trivia_buffer: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) options: &'opts ParseOptions,
    pub(super) state: ParseState,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: Cell<u32>,
    speculating: u32,
    nesting_exhausted: bool,
    pub(super) top_level_reported: bool,
    pub(super) doc_crefs: Vec<DocCref>,
    /// Outcome of the expression trial for each `case` label, keyed by the token after `case`.
    pub(super) case_labels: HashMap<usize, bool>,
}

/// Parser position captured by [`Parser::mark`].
#[derive(Debug, Clone, Copy)]
pub(super) struct Mark {
    pos: usize,
    trivia_len: usize,
    diagnostics: DiagnosticsMark,
    last_diagnostic_pos: Option<TextSize>,
    state: ParseState,
    depth: u32,
    top_level_reported: bool,
}

impl<'src, 'opts> Parser<'src, 'opts> {
    pub fn new(source: &'src str, tokens: Vec<Token>, options: &'opts ParseOptions) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            end: TextSize::of(source),
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            options,
            state: ParseState::default(),
            depth: 0,
            last_diagnostic_pos: None,
            debug_fuel: Cell::new(DEBUG_FUEL),
            speculating: 0,
            nesting_exhausted: false,
            top_level_reported: false,
            doc_crefs: Vec::new(),
            case_labels: HashMap::new(),
        }
    }

    /// Sub-parser over a slice of tokens that end before the source does.
    pub(super) fn with_end(mut self, end: TextSize) -> Self {
        self.end = end;
        self
    }

    pub(super) fn with_initial_state(mut self, state: ParseState) -> Self {
        self.state = state;
        self
    }

    /// Root productions drain trailing trivia before closing the root node.
    pub(super) fn finish(self) -> (GreenNode, Diagnostics, Vec<DocCref>) {
        debug_assert!(self.trivia_buffer.is_empty(), "trailing trivia left outside the root");
        (self.builder.finish(), self.diagnostics, self.doc_crefs)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        let source = self.source;
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(source, t))
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.end), |t| t.span)
    }

    /// Read-only cursor at the current position, for speculative scans.
    pub(super) fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(self.source, &self.tokens, self.pos)
            .with_depth_limit(self.options.recursion_limit)
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn nth(&mut self, n: usize) -> SyntaxKind {
        self.ensure_progress();
        self.cursor().peek(n)
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn at_eof(&mut self) -> bool {
        self.current() == SyntaxKind::Eof
    }

    /// Identifier whose text is exactly `word`.
    pub(super) fn at_word(&mut self, word: &str) -> bool {
        self.at(SyntaxKind::Ident) && self.current_text() == word
    }

    pub(super) fn is_speculating(&self) -> bool {
        self.speculating > 0
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        if self.is_speculating() {
            return;
        }
        let mut buffer = std::mem::take(&mut self.trivia_buffer);
        for token in buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
            if token.kind == SyntaxKind::DocComment
                && self.options.documentation_mode != DocumentationMode::None
            {
                self.scan_doc_comment(token);
            }
        }
        self.trivia_buffer = buffer;
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        if !self.is_speculating() {
            self.builder.start_node(kind.into());
        }
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        if !self.is_speculating() {
            self.builder.start_node_at(checkpoint, kind.into());
        }
    }

    pub(super) fn finish_node(&mut self) {
        if !self.is_speculating() {
            self.builder.finish_node();
        }
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        let kind = self.current();
        self.bump_as(kind);
    }

    /// Consume the current token under a different kind (contextual keywords).
    pub(super) fn bump_as(&mut self, kind: SyntaxKind) {
        self.skip_trivia_to_buffer();
        assert!(self.pos < self.tokens.len(), "bump called at EOF");
        self.reset_debug_fuel();
        self.drain_trivia();

        let token = self.tokens[self.pos];
        if !self.is_speculating() {
            self.builder
                .token(kind.into(), token_text(self.source, &token));
        }
        self.pos += 1;
    }

    /// Consume `count` adjacent significant tokens as one token of `kind` (`>>`, `>>=`).
    pub(super) fn bump_joined(&mut self, kind: SyntaxKind, count: usize) {
        self.skip_trivia_to_buffer();
        assert!(
            self.pos + count <= self.tokens.len(),
            "bump_joined past EOF"
        );
        self.reset_debug_fuel();
        self.drain_trivia();

        let start = self.tokens[self.pos].span.start();
        let end = self.tokens[self.pos + count - 1].span.end();
        if !self.is_speculating() {
            let text = &self.source[std::ops::Range::<usize>::from(TextRange::new(start, end))];
            self.builder.token(kind.into(), text);
        }
        self.pos += count;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: synthesize a missing token with a diagnostic, don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.missing(kind);
        false
    }

    pub(super) fn expect_ident(&mut self) -> bool {
        self.expect(SyntaxKind::Ident)
    }

    /// Zero-width token of `kind` plus its "expected" diagnostic.
    pub(super) fn missing(&mut self, kind: SyntaxKind) {
        if kind == SyntaxKind::Ident {
            self.report_missing(DiagnosticKind::ExpectedIdentifier, None);
        } else {
            self.report_missing(DiagnosticKind::ExpectedToken, Some(kind.describe()));
        }
        self.missing_token(kind);
    }

    /// Zero-width token of `kind` reported as `diagnostic` (a missing statement is an empty `;`).
    pub(super) fn missing_as(&mut self, kind: SyntaxKind, diagnostic: DiagnosticKind) {
        self.report_missing(diagnostic, None);
        self.missing_token(kind);
    }

    /// Zero-width name node standing in for an absent type, expression or pattern.
    pub(super) fn missing_name(&mut self, diagnostic: DiagnosticKind) {
        self.report_missing(diagnostic, None);
        if self.is_speculating() || self.nesting_exhausted {
            return;
        }
        self.builder.start_node(SyntaxKind::IdentName.into());
        self.builder.token(SyntaxKind::Ident.into(), "");
        self.builder.finish_node();
    }

    fn missing_token(&mut self, kind: SyntaxKind) {
        if !self.is_speculating() && !self.nesting_exhausted {
            self.builder.token(kind.into(), "");
        }
    }

    fn report_missing(&mut self, kind: DiagnosticKind, arg: Option<String>) {
        if self.nesting_exhausted {
            return;
        }
        let range = TextRange::empty(self.missing_position());
        if !self.should_report(range.start()) {
            return;
        }
        let mut builder = self.diagnostics.report(kind, range);
        if let Some(arg) = arg {
            builder = builder.arg(arg);
        }
        builder.emit();
    }

    /// Where a missing token is anchored: right after the last significant token.
    pub(super) fn missing_position(&mut self) -> TextSize {
        match self.last_non_trivia_end() {
            Some(end) => end,
            None => self.current_span().start(),
        }
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if !self.is_speculating() && self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error_at_with(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        arg: impl Into<String>,
    ) {
        if self.nesting_exhausted || !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).arg(arg).emit();
    }

    /// Backticked text of the current token, or "end of input".
    pub(super) fn describe_current(&mut self) -> String {
        match self.current() {
            SyntaxKind::Eof => SyntaxKind::Eof.describe(),
            _ => format!("`{}`", self.current_text()),
        }
    }

    fn bump_as_error(&mut self) {
        if !self.at_eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Wrap the current token in an `Error` node and report it as `kind`.
    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        let text = self.describe_current();
        self.error_at_with(kind, range, text);
        self.bump_as_error();
    }

    /// Version gate. Never de-duplicated.
    pub(super) fn check_feature(&mut self, feature: Feature, range: TextRange) -> bool {
        if self.options.supports(feature) {
            return true;
        }
        self.diagnostics
            .report(DiagnosticKind::FeatureNotAvailable, range)
            .arg(feature.name())
            .arg(self.options.language_version.to_string())
            .arg(feature.required_version().to_string())
            .emit();
        false
    }

    /// Tolerated legacy placement. Never de-duplicated.
    pub(super) fn warn(&mut self, kind: DiagnosticKind, range: TextRange) {
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.nesting_exhausted {
            return false;
        }
        if self.depth >= self.options.recursion_limit {
            if !self.is_speculating() {
                self.bail_out_nesting();
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    /// Swallow the rest of the input into one `Error` node.
    fn bail_out_nesting(&mut self) {
        let start = self.current_span().start();
        let range = TextRange::new(start, self.end.max(start));
        tracing::debug!(depth = self.depth, ?range, "recursion limit reached");
        self.diagnostics
            .report(DiagnosticKind::NestingTooDeep, range)
            .emit();
        self.nesting_exhausted = true;
        if !self.at_eof() {
            self.start_node(SyntaxKind::Error);
            while !self.at_eof() {
                self.bump();
            }
            self.finish_node();
        }
    }

    pub(super) fn nesting_exhausted(&self) -> bool {
        self.nesting_exhausted
    }

    pub(super) fn mark(&mut self) -> Mark {
        Mark {
            pos: self.pos,
            trivia_len: self.trivia_buffer.len(),
            diagnostics: self.diagnostics.mark(),
            last_diagnostic_pos: self.last_diagnostic_pos,
            state: self.state,
            depth: self.depth,
            top_level_reported: self.top_level_reported,
        }
    }

    /// Restore everything captured by `mark`, including the diagnostic bag.
    ///
    /// Only sound when the builder was untouched since `mark`, which
    /// [`Parser::look_ahead`] guarantees.
    pub(super) fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.trivia_buffer.truncate(mark.trivia_len);
        self.diagnostics.rollback(mark.diagnostics);
        self.last_diagnostic_pos = mark.last_diagnostic_pos;
        self.state = mark.state;
        self.depth = mark.depth;
        self.top_level_reported = mark.top_level_reported;
    }

    /// Run `f` as a trial parse: no tree is built, and position and diagnostics are restored after.
    pub(super) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let mark = self.mark();
        self.speculating += 1;
        let result = f(self);
        self.speculating -= 1;
        self.reset(mark);
        result
    }

    /// Whether `f` would parse without reporting anything, leaving the parser untouched.
    pub(super) fn parses_cleanly(&mut self, f: impl FnOnce(&mut Self)) -> (bool, SyntaxKind) {
        self.look_ahead(|p| {
            let before = p.diagnostics.mark();
            f(p);
            (p.diagnostics.emitted_since(before) == 0, p.current())
        })
    }
}
