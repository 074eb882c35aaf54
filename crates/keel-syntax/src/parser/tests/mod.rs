//! Snapshot suites for the grammar and for error recovery.

mod grammar;
mod recovery;

use crate::{LanguageVersion, Parse, ParseOptions, parse, parse_expression, parse_statement};

pub(crate) fn options_for(version: LanguageVersion) -> ParseOptions {
    ParseOptions::default().with_language_version(version)
}

#[track_caller]
fn valid(parse: Parse) -> String {
    if !parse.diagnostics().is_empty() {
        panic!(
            "Expected a clean parse, got:\n{}",
            parse.diagnostics().printer("").snippets(false).render()
        );
    }
    parse.dump()
}

#[track_caller]
pub(crate) fn expect_valid_cst(src: &str) -> String {
    valid(parse(src, &ParseOptions::default()))
}

#[track_caller]
pub(crate) fn expect_valid_expr(src: &str) -> String {
    valid(parse_expression(src, &ParseOptions::default()))
}

#[track_caller]
pub(crate) fn expect_valid_stmt(src: &str) -> String {
    valid(parse_statement(src, &ParseOptions::default()))
}

/// One `Display` line per diagnostic.
pub(crate) fn diagnostic_lines(parse: &Parse) -> String {
    parse.diagnostics().printer("").snippets(false).render()
}

#[track_caller]
pub(crate) fn expect_invalid(parse: Parse) -> String {
    if parse.diagnostics().is_empty() {
        panic!("Expected diagnostics, got a clean parse:\n{}", parse.dump());
    }
    format!("{}---\n{}", parse.dump(), diagnostic_lines(&parse))
}
