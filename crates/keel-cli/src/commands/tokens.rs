//! Show the token stream, one token per line.

use std::fmt::Write;

use keel_syntax::parser::{lex, lexer::token_text};

use super::input::{SourceArgs, exit_with, load_source};

pub struct TokensArgs {
    pub source: SourceArgs,
    pub trivia: bool,
    pub spans: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_source(&args.source).unwrap_or_else(|e| exit_with(e));
    print!("{}", render_tokens(&source.text, args.trivia, args.spans));
}

pub fn render_tokens(source: &str, trivia: bool, spans: bool) -> String {
    let mut out = String::new();
    for token in lex(source) {
        if !trivia && token.kind.is_trivia() {
            continue;
        }
        let text = token_text(source, &token);
        if spans {
            writeln!(
                out,
                "{:?} [{}..{}] {:?}",
                token.kind,
                u32::from(token.span.start()),
                u32::from(token.span.end()),
                text
            )
        } else {
            writeln!(out, "{:?} {:?}", token.kind, text)
        }
        .expect("String write never fails");
    }
    out
}
