//! Recovery controller.
//!
//! An expected terminal that is absent either gets a zero-width placeholder
//! (when the current token belongs to an enclosing construct) or the current
//! token is skipped into an `Error` node and the expectation is retried.
//! Every skip consumes a token, so recovery always makes progress.

use tracing::trace;

use super::core::Parser;
use super::cst::{SyntaxKind, TokenSet};
use crate::diagnostics::DiagnosticKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecoveryState {
    Expect(SyntaxKind),
    SkipAndResync,
    SynthesizeMissing,
    EscalateToParent,
}

impl Parser<'_, '_> {
    /// Expect `kind`, skipping stray tokens until it or a token in `recovery` appears.
    ///
    /// Returns `true` if `kind` was consumed. On `false` a missing token has
    /// been inserted and the caller should return to its parent.
    pub(super) fn expect_recover(&mut self, kind: SyntaxKind, recovery: TokenSet) -> bool {
        let mut state = RecoveryState::Expect(kind);
        loop {
            let next = match state {
                RecoveryState::Expect(kind) => {
                    if self.eat(kind) {
                        return true;
                    }
                    if self.at_eof() || self.at_set(recovery) || self.nesting_exhausted() {
                        RecoveryState::SynthesizeMissing
                    } else {
                        RecoveryState::SkipAndResync
                    }
                }
                RecoveryState::SkipAndResync => {
                    self.error_and_bump(DiagnosticKind::UnexpectedToken);
                    RecoveryState::Expect(kind)
                }
                RecoveryState::SynthesizeMissing => {
                    self.missing(kind);
                    RecoveryState::EscalateToParent
                }
                RecoveryState::EscalateToParent => return false,
            };
            if next != state {
                trace!(from = ?state, to = ?next, expected = ?kind, "recovery");
            }
            state = next;
        }
    }

    /// Wrap everything up to the next token in `recovery` into one `Error` node.
    ///
    /// Reports `kind` once, at the first skipped token.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, recovery: TokenSet) {
        if self.at_eof() || self.at_set(recovery) {
            return;
        }
        let range = self.current_span();
        let text = self.describe_current();
        self.error_at_with(kind, range, text);

        self.start_node(SyntaxKind::Error);
        while !self.at_eof() && !self.at_set(recovery) {
            self.bump();
        }
        self.finish_node();
    }
}
