//! Contextual keyword classification.
//!
//! Contextual keywords arrive from the lexer as `Ident`. Whether one is a
//! keyword depends on the grammatical position the parser is in and on at most
//! three tokens of lookahead. Each position has an explicit candidate table;
//! a word outside its position's table is always an identifier.
//!
//! When three tokens are not enough, [`classify`] answers
//! [`Classification::NeedsScan`] and the parser confirms with a speculative
//! scan (see `speculate.rs`).

use super::core::Parser;
use super::cst::SyntaxKind::{self, *};
use super::cst::token_sets::{MODIFIERS, PATTERN_FIRST, PREDEFINED_TYPES, TYPE_DECL_KEYWORDS};
use super::cursor::TokenCursor;
use super::speculate;
use super::state::ParseState;
use crate::options::{Feature, ParseOptions};

/// Grammatical positions where contextual keywords are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Position {
    /// Member or local-function modifier list.
    Modifier,
    /// Where a type declaration keyword may appear.
    TypeDeclaration,
    /// Start of a statement.
    Statement,
    /// Start of a unary expression.
    Expression,
    /// Start of a primary pattern.
    PatternStart,
    /// After a pattern.
    PatternContinuation,
    /// Start of an accessor in an accessor list.
    Accessor,
    /// After a type or method header.
    ConstraintClause,
    /// Start of a clause inside a query body.
    QueryClause,
    /// After a complete expression.
    PostfixWith,
    /// After a case label or switch arm pattern.
    SwitchGuard,
}

impl Position {
    #[cfg(test)]
    pub const ALL: [Position; 11] = [
        Position::Modifier,
        Position::TypeDeclaration,
        Position::Statement,
        Position::Expression,
        Position::PatternStart,
        Position::PatternContinuation,
        Position::Accessor,
        Position::ConstraintClause,
        Position::QueryClause,
        Position::PostfixWith,
        Position::SwitchGuard,
    ];

    /// Contextual keywords this position can produce.
    pub fn candidates(self) -> &'static [SyntaxKind] {
        match self {
            Position::Modifier => &[KwAsync, KwPartial],
            Position::TypeDeclaration => &[KwRecord],
            Position::Statement => &[KwYield, KwAsync],
            Position::Expression => &[KwAwait, KwFrom, KwAsync],
            Position::PatternStart => &[KwVar, KwNot],
            Position::PatternContinuation => &[KwAnd, KwOr],
            Position::Accessor => &[KwGet, KwSet, KwInit],
            Position::ConstraintClause => &[KwWhere],
            Position::QueryClause => &[
                KwFrom,
                KwWhere,
                KwLet,
                KwOrderBy,
                KwSelect,
                KwGroup,
                KwBy,
                KwAscending,
                KwDescending,
            ],
            Position::PostfixWith => &[KwWith],
            Position::SwitchGuard => &[KwWhen],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    Keyword(SyntaxKind),
    Identifier,
    /// Keyword only if a speculative scan confirms it.
    NeedsScan(SyntaxKind),
}

/// Classify the identifier under `cursor` at `position`.
///
/// Pure: looks at no more than three significant tokens and never fails.
pub(crate) fn classify(
    position: Position,
    cursor: &TokenCursor<'_>,
    state: ParseState,
    options: &ParseOptions,
) -> Classification {
    if cursor.current() != Ident {
        return Classification::Identifier;
    }
    let text = cursor.peek_text(0);
    let Some(kind) = position
        .candidates()
        .iter()
        .copied()
        .find(|k| k.fixed_text() == Some(text))
    else {
        return Classification::Identifier;
    };

    let next = cursor.peek(1);
    let keyword_if = |cond: bool| {
        if cond {
            Classification::Keyword(kind)
        } else {
            Classification::Identifier
        }
    };

    match (position, kind) {
        (Position::Modifier, KwAsync) => classify_async_modifier(cursor),
        (Position::Modifier, KwPartial) => classify_partial_modifier(cursor),
        (Position::TypeDeclaration, KwRecord) => {
            if !options.supports(Feature::Records) {
                return Classification::Identifier;
            }
            keyword_if(
                matches!(next, KwClass | KwStruct)
                    || (next == Ident
                        && matches!(
                            cursor.peek(2),
                            ParenOpen | BraceOpen | Less | Colon | Semicolon
                        )),
            )
        }
        (Position::Statement, KwYield) => keyword_if(matches!(next, KwReturn | KwBreak)),
        (Position::Statement, KwAsync) => {
            if next == Ident || PREDEFINED_TYPES.contains(next) || next == ParenOpen {
                Classification::NeedsScan(kind)
            } else {
                keyword_if(next == KwStatic)
            }
        }
        (Position::Expression, KwAwait) => keyword_if(state.allows_await()),
        (Position::Expression, KwFrom) => {
            if next == Ident && cursor.peek(2) == KwIn {
                Classification::Keyword(kind)
            } else if next == Ident || PREDEFINED_TYPES.contains(next) {
                Classification::NeedsScan(kind)
            } else {
                Classification::Identifier
            }
        }
        (Position::Expression, KwAsync) => match next {
            Ident => keyword_if(cursor.peek(2) == FatArrow),
            KwDelegate => Classification::Keyword(kind),
            ParenOpen => Classification::NeedsScan(kind),
            _ => Classification::Identifier,
        },
        (Position::PatternStart, KwVar) => keyword_if(matches!(next, Ident | ParenOpen)),
        (Position::PatternStart, KwNot) | (Position::PatternContinuation, _) => {
            keyword_if(PATTERN_FIRST.contains(next))
        }
        (Position::Accessor, _) => Classification::Keyword(kind),
        (Position::ConstraintClause, KwWhere) => {
            keyword_if(next == Ident && cursor.peek(2) == Colon)
        }
        (Position::QueryClause, _) => keyword_if(state.contains(ParseState::IN_QUERY)),
        (Position::PostfixWith, KwWith) => keyword_if(next == BraceOpen),
        (Position::SwitchGuard, KwWhen) => {
            keyword_if(!matches!(next, Colon | FatArrow | Comma | Eof))
        }
        _ => Classification::Identifier,
    }
}

/// `async` before a member.
///
/// `async async async() {}` resolves to modifier, type and name: each
/// repetition is a modifier only if a type and a member name still follow it.
fn classify_async_modifier(cursor: &TokenCursor<'_>) -> Classification {
    let next = cursor.peek(1);
    if MODIFIERS.contains(next) || is_operator_token(next) {
        Classification::Identifier
    } else if TYPE_DECL_KEYWORDS.contains(next) {
        Classification::Keyword(KwAsync)
    } else if next == Ident || PREDEFINED_TYPES.contains(next) || next == ParenOpen {
        Classification::NeedsScan(KwAsync)
    } else {
        Classification::Identifier
    }
}

/// `partial` before a member or type.
///
/// A modifier keyword after `partial` still makes it a modifier; the parser
/// reports the placement as a legacy warning.
fn classify_partial_modifier(cursor: &TokenCursor<'_>) -> Classification {
    let next = cursor.peek(1);
    if TYPE_DECL_KEYWORDS.contains(next)
        || MODIFIERS.contains(next)
        || next == KwVoid
        || cursor.peek_is_word(1, "record")
    {
        Classification::Keyword(KwPartial)
    } else if next == Ident || PREDEFINED_TYPES.contains(next) {
        Classification::NeedsScan(KwPartial)
    } else {
        Classification::Identifier
    }
}

/// Punctuation that cannot start a type, so a preceding contextual modifier is a name.
fn is_operator_token(kind: SyntaxKind) -> bool {
    kind.is_token()
        && kind.fixed_text().is_some()
        && !kind.is_reserved_keyword()
        && !kind.is_contextual_keyword()
        && kind != ParenOpen
}

impl Parser<'_, '_> {
    /// Classify the current token at `position`, running the confirming scan when needed.
    pub(super) fn classify(&mut self, position: Position) -> Option<SyntaxKind> {
        self.skip_trivia_to_buffer();
        let cursor = self.cursor();
        let classification = classify(position, &cursor, self.state, self.options);
        let decision = match classification {
            Classification::Keyword(kind) => Some(kind),
            Classification::Identifier => None,
            Classification::NeedsScan(kind) => {
                speculate::confirm_contextual(position, kind, cursor).then_some(kind)
            }
        };
        if classification != Classification::Identifier {
            tracing::trace!(?position, ?classification, ?decision, "contextual keyword");
        }
        decision
    }
}
