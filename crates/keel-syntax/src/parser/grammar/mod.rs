//! Grammar productions for Keel.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each submodule covers one area of the language; fragments (`items.rs`) are
//! the roots the public entry points start from.

mod cref;
mod declarations;
mod expressions;
mod items;
mod members;
mod patterns;
mod primary;
mod query;
mod statements;
mod types;


#[cfg(test)]
use types::{SuffixGroup, TypeSuffix, group_suffixes};

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::LIST_CLOSERS;
use crate::parser::cst::{SyntaxKind, TokenSet};

/// Whether a separated list may end with a dangling separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Trailing {
    /// `{ a, b, }`: the final separator is fine.
    Allowed,
    /// `f(a, )`: a missing element is synthesized after the separator.
    Repaired,
}

impl Parser<'_, '_> {
    /// `element (, element)*` up to `close`, which is left for the caller.
    ///
    /// `first` is the FIRST set of an element: a token from it where a `,` was
    /// expected gets a missing `,` and the list goes on. Anything else outside
    /// `recovery` is skipped into an `Error` node.
    pub(super) fn parse_separated_list(
        &mut self,
        close: SyntaxKind,
        first: TokenSet,
        recovery: TokenSet,
        trailing: Trailing,
        mut element: impl FnMut(&mut Self),
    ) {
        let stop = recovery.union(LIST_CLOSERS).union(TokenSet::single(close));
        if self.at(close) || self.at_eof() {
            return;
        }
        loop {
            element(self);
            loop {
                if self.eat(SyntaxKind::Comma) {
                    if trailing == Trailing::Allowed && self.at(close) {
                        return;
                    }
                    break;
                }
                if self.at(close) || self.at_eof() || self.nesting_exhausted() {
                    return;
                }
                if self.at_set(first) && !self.at_set(LIST_CLOSERS) {
                    self.missing(SyntaxKind::Comma);
                    break;
                }
                if self.at_set(stop) {
                    return;
                }
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
            }
        }
    }

    /// Current position among significant tokens; used as a progress guard by loops.
    pub(super) fn significant_pos(&mut self) -> usize {
        self.skip_trivia_to_buffer();
        self.pos
    }
}
