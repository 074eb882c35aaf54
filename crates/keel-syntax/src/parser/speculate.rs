//! Speculative scans over a copied [`TokenCursor`].
//!
//! Every scan is a pure function: it advances its own cursor copy and reports
//! what it found. The parser applies nothing until it commits. Scans are
//! bounded by the construct they recognize (one type, one parameter list, one
//! conditional), so they are linear in the length of that construct. Nested
//! type scans also stop at the cursor's depth budget.

use super::contextual::{Classification, Position, classify};
use super::cst::SyntaxKind::{self, *};
use super::cst::token_sets::{
    CAST_FOLLOW, DESIGNATION_FOLLOW, NULLABLE_FOLLOW, TYPE_ARG_FOLLOW,
};
use super::cursor::TokenCursor;
use super::state::ParseState;
use crate::options::ParseOptions;

/// How a `?` after a type is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeMode {
    /// Member, parameter and type-argument positions: `?` is always nullable.
    Declaration,
    /// Positions shared with expressions: `?` is nullable only by [`question_is_nullable`].
    Expression,
}

/// What a successful type scan saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct TypeShape {
    pub predefined: bool,
    pub generic: bool,
    pub qualified: bool,
    pub tuple: bool,
    pub array: bool,
    pub nullable: bool,
}

impl TypeShape {
    /// Shapes that cannot be read as a value expression.
    pub fn is_type_only(&self) -> bool {
        self.predefined || self.generic || self.tuple || self.array || self.nullable
    }
}

/// Scan one type, leaving the cursor after it.
///
/// Type arguments and tuple elements recurse through here, one cursor depth
/// level each; a type nested deeper than the budget does not scan.
pub(crate) fn scan_type(c: &mut TokenCursor<'_>, mode: TypeMode) -> Option<TypeShape> {
    c.descend()?;
    let shape = scan_type_at_depth(c, mode);
    c.ascend();
    shape
}

fn scan_type_at_depth(c: &mut TokenCursor<'_>, mode: TypeMode) -> Option<TypeShape> {
    let mut shape = TypeShape::default();
    match c.current() {
        kind if kind.is_predefined_type() => {
            c.advance();
            shape.predefined = true;
        }
        Ident => scan_name(c, &mut shape),
        ParenOpen => {
            scan_tuple_type(c)?;
            shape.tuple = true;
        }
        _ => return None,
    }
    scan_type_suffixes(c, mode, &mut shape);
    Some(shape)
}

/// `A`, `A<T>`, `alias::A`, `A.B<T>.C`.
fn scan_name(c: &mut TokenCursor<'_>, shape: &mut TypeShape) {
    scan_simple_name(c, shape);
    if c.at(DoubleColon) && c.peek(1) == Ident {
        c.advance();
        shape.qualified = true;
        scan_simple_name(c, shape);
    }
    while c.at(Dot) && c.peek(1) == Ident {
        c.advance();
        shape.qualified = true;
        scan_simple_name(c, shape);
    }
}

fn scan_simple_name(c: &mut TokenCursor<'_>, shape: &mut TypeShape) {
    c.advance();
    if c.at(Less) {
        let before = c.mark();
        if scan_type_args(c) {
            shape.generic = true;
        } else {
            c.reset(before);
        }
    }
}

/// `<T, U>` or the unbound `<,>`. Leaves the cursor after `>` on success.
pub(crate) fn scan_type_args(c: &mut TokenCursor<'_>) -> bool {
    if !c.eat(Less) {
        return false;
    }
    if matches!(c.current(), Comma | Greater) {
        while c.eat(Comma) {}
        return c.eat(Greater);
    }
    loop {
        if scan_type(c, TypeMode::Declaration).is_none() {
            return false;
        }
        if c.eat(Comma) {
            continue;
        }
        return c.eat(Greater);
    }
}

/// `(T a, U b)` with at least two elements.
fn scan_tuple_type(c: &mut TokenCursor<'_>) -> Option<()> {
    c.eat(ParenOpen).then_some(())?;
    let mut elements = 0;
    loop {
        scan_type(c, TypeMode::Declaration)?;
        c.eat(Ident);
        elements += 1;
        if !c.eat(Comma) {
            break;
        }
    }
    (c.eat(ParenClose) && elements >= 2).then_some(())
}

fn scan_type_suffixes(c: &mut TokenCursor<'_>, mode: TypeMode, shape: &mut TypeShape) {
    loop {
        match c.current() {
            BracketOpen if is_rank_specifier(c) => {
                c.advance();
                while c.eat(Comma) {}
                c.advance();
                shape.array = true;
            }
            Question if mode == TypeMode::Declaration || question_is_nullable(c) => {
                c.advance();
                shape.nullable = true;
            }
            _ => break,
        }
    }
}

/// `[` `,`* `]` at the cursor.
pub(crate) fn is_rank_specifier(c: &TokenCursor<'_>) -> bool {
    if c.current() != BracketOpen {
        return false;
    }
    let mut k = 1;
    while c.peek(k) == Comma {
        k += 1;
    }
    c.peek(k) == BracketClose
}

/// Whether the `?` under the cursor, directly after a type, is a nullable suffix.
///
/// Yes when followed by another `?`, by a token that only continues a type or
/// pattern, by a pattern combinator or guard, or by a designation. A designation
/// loses to the conditional operator when a `:` later closes the `?`
/// (`x is T ? y && z : w`). Otherwise the `?` is left for the conditional operator.
pub(crate) fn question_is_nullable(c: &TokenCursor<'_>) -> bool {
    debug_assert_eq!(c.current(), Question);
    let next = c.peek(1);
    if next == Question || NULLABLE_FOLLOW.contains(next) {
        return true;
    }
    if next != Ident {
        return false;
    }
    let after = c.peek(2);
    if after == Colon {
        return false;
    }
    let text = c.peek_text(1);
    if matches!(text, "and" | "or" | "when") {
        return true;
    }
    if c.peek_is_word(2, "and") || c.peek_is_word(2, "or") || c.peek_is_word(2, "when") {
        return true;
    }
    DESIGNATION_FOLLOW.contains(after) && !conditional_colon_follows(*c)
}

/// Whether a `:` at the same nesting level closes the `?` under the cursor.
///
/// One forward pass to the end of the enclosing expression: inner `?`/`:`
/// pairs balance, brackets nest, and a top-level `;`, `,` or unmatched closer
/// ends the search. `?[` and `?.` are null-conditional access, not a `?` to close.
fn conditional_colon_follows(mut c: TokenCursor<'_>) -> bool {
    c.advance();
    let mut depth = 0usize;
    let mut open_questions = 0usize;
    while !c.at_end() {
        match c.current() {
            ParenOpen | BracketOpen | BraceOpen => depth += 1,
            ParenClose | BracketClose | BraceClose if depth == 0 => return false,
            ParenClose | BracketClose | BraceClose => depth -= 1,
            Semicolon | Comma if depth == 0 => return false,
            Question if depth == 0 && !(c.peek(1) == BracketOpen && c.adjacent(0)) => {
                open_questions += 1;
            }
            Colon if depth == 0 => match open_questions.checked_sub(1) {
                Some(rest) => open_questions = rest,
                None => return true,
            },
            _ => {}
        }
        c.advance();
    }
    false
}

/// `<` after a name in an expression: a type argument list only if the
/// arguments scan and a token from the follow set comes next.
pub(crate) fn is_generic_in_expression(mut c: TokenCursor<'_>) -> bool {
    scan_type_args(&mut c) && TYPE_ARG_FOLLOW.contains(c.current())
}

/// `(T)x` at a `(`.
pub(crate) fn is_cast(mut c: TokenCursor<'_>) -> bool {
    if !c.eat(ParenOpen) {
        return false;
    }
    let Some(shape) = scan_type(&mut c, TypeMode::Expression) else {
        return false;
    };
    if !c.eat(ParenClose) {
        return false;
    }
    if shape.predefined || shape.array || shape.nullable {
        return true;
    }
    CAST_FOLLOW.contains(c.current())
}

/// Skip a parenthesized group starting at the cursor.
///
/// Gives up at `;`, `{` or `}`: a parameter list or a deconstruction never
/// contains them, so an unclosed `(` costs at most the rest of its statement.
pub(crate) fn skip_parens(c: &mut TokenCursor<'_>) -> bool {
    if !c.eat(ParenOpen) {
        return false;
    }
    let mut depth = 1usize;
    while !c.at_end() {
        match c.current() {
            Semicolon | BraceOpen | BraceClose => return false,
            ParenOpen => depth += 1,
            ParenClose => {
                depth -= 1;
                if depth == 0 {
                    c.advance();
                    return true;
                }
            }
            _ => {}
        }
        c.advance();
    }
    false
}

/// `( ... ) =>` at a `(`.
pub(crate) fn is_paren_lambda(mut c: TokenCursor<'_>) -> bool {
    skip_parens(&mut c) && c.at(FatArrow)
}

/// What a statement that starts with a type turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocalKind {
    Declaration,
    Function,
}

/// `T x = ...`, `T x;`, `T x, y`, `T x in`, `T x)` or a type-only `T x`
/// are declarations; `T F(`/`T F<U>(` are local functions.
pub(crate) fn scan_local_declaration(mut c: TokenCursor<'_>) -> Option<LocalKind> {
    let shape = scan_type(&mut c, TypeMode::Expression)?;
    if !c.at(Ident) {
        return None;
    }
    match c.peek(1) {
        Equals | Semicolon | Comma | KwIn | ParenClose => Some(LocalKind::Declaration),
        ParenOpen => Some(LocalKind::Function),
        Less => {
            c.advance();
            (scan_type_args(&mut c) && c.at(ParenOpen)).then_some(LocalKind::Function)
        }
        _ if shape.is_type_only() => Some(LocalKind::Declaration),
        _ => None,
    }
}

/// A type followed by a member name (`Ident`, `this` or `operator`).
pub(crate) fn type_then_member_name(mut c: TokenCursor<'_>) -> bool {
    scan_type(&mut c, TypeMode::Declaration).is_some()
        && matches!(c.current(), Ident | KwThis | KwOperator)
}

/// `from T x in` after the `from`.
fn is_typed_from_clause(mut c: TokenCursor<'_>) -> bool {
    scan_type(&mut c, TypeMode::Declaration).is_some() && c.at(Ident) && c.peek(1) == KwIn
}

/// Second half of contextual classification for [`Classification::NeedsScan`].
pub(crate) fn confirm_contextual(
    position: Position,
    kind: SyntaxKind,
    mut cursor: TokenCursor<'_>,
) -> bool {
    cursor.advance();
    match (position, kind) {
        (Position::Modifier | Position::Statement, KwAsync | KwPartial) => {
            type_then_member_name(cursor)
        }
        (Position::Expression, KwAsync) => is_paren_lambda(cursor),
        (Position::Expression, KwFrom) => is_typed_from_clause(cursor),
        _ => false,
    }
}

/// Whether the operand after `is` is a plain type (`IsExpr`) rather than a pattern.
///
/// A nullable suffix, a designation, a combinator or a `{`/`(` after the type
/// sends the operand down the pattern path.
pub(crate) fn is_operand_is_type(
    mut c: TokenCursor<'_>,
    state: ParseState,
    options: &ParseOptions,
) -> bool {
    let first = c.current();
    if first == Ident
        && matches!(
            classify(Position::PatternStart, &c, state, options),
            Classification::Keyword(_)
        )
    {
        return false;
    }
    if first != Ident && !first.is_predefined_type() {
        return false;
    }
    let Some(shape) = scan_type(&mut c, TypeMode::Expression) else {
        return false;
    };
    !shape.nullable && !matches!(c.current(), Ident | BraceOpen | ParenOpen)
}
