use rowan::{TextRange, TextSize};

use crate::parser::core::Parser;
use crate::parser::lex;
use crate::{DiagnosticKind, ParseOptions, SyntaxKind, parse_statement};

fn with_parser<T>(source: &str, f: impl FnOnce(&mut Parser<'_, '_>) -> T) -> T {
    let options = ParseOptions::default();
    let mut parser = Parser::new(source, lex(source), &options);
    f(&mut parser)
}

#[test]
fn failed_trial_leaves_no_diagnostics() {
    with_parser("a b c", |p| {
        assert_eq!(p.current(), SyntaxKind::Ident);
        let start = p.pos;

        let reported = p.look_ahead(|p| {
            p.bump();
            p.expect(SyntaxKind::Colon);
            p.bump();
            p.expect(SyntaxKind::Semicolon);
            p.diagnostics.len()
        });

        assert_eq!(reported, 2);
        assert!(p.diagnostics.is_empty());
        assert_eq!(p.pos, start);
        assert_eq!(p.current_text(), "a");
    });
}

#[test]
fn parses_cleanly_reports_failure_without_keeping_it() {
    with_parser("a b", |p| {
        let (clean, next) = p.parses_cleanly(|p| {
            p.bump();
            p.expect(SyntaxKind::Colon);
        });
        assert!(!clean);
        assert_eq!(next, SyntaxKind::Ident);
        assert!(p.diagnostics.is_empty());

        let (clean, next) = p.parses_cleanly(|p| {
            p.bump();
        });
        assert!(clean);
        assert_eq!(next, SyntaxKind::Ident);
        assert_eq!(p.current_text(), "a");
    });
}

#[test]
fn reset_forgets_the_last_reported_position() {
    with_parser("a", |p| {
        let range = TextRange::empty(TextSize::from(0u32));
        let mark = p.mark();
        p.error_at_with(DiagnosticKind::ExpectedToken, range, "`:`");
        assert_eq!(p.diagnostics.len(), 1);

        p.reset(mark);
        assert!(p.diagnostics.is_empty());

        // Not swallowed as a duplicate of the rolled-back report.
        p.error_at_with(DiagnosticKind::ExpectedToken, range, "`:`");
        assert_eq!(p.diagnostics.len(), 1);
    });
}

#[test]
fn diagnostics_before_a_trial_survive_it() {
    with_parser("a b", |p| {
        let range = TextRange::empty(TextSize::from(0u32));
        p.error_at_with(DiagnosticKind::ExpectedToken, range, "`;`");

        p.look_ahead(|p| {
            p.bump();
            p.expect(SyntaxKind::Colon);
        });

        assert_eq!(p.diagnostics.len(), 1);
        assert_eq!(p.diagnostics.as_slice()[0].kind(), DiagnosticKind::ExpectedToken);
    });
}

fn nested_case_lambdas(levels: usize) -> String {
    let mut label = String::from("b");
    for _ in 0..levels {
        label = format!("(b => {{ switch (a) {{ case {label}: break; }} return 0; }})");
    }
    format!("switch (a) {{ case {label}: break; }}")
}

#[test]
fn case_labels_in_nested_lambdas_are_tried_once() {
    let source = nested_case_lambdas(24);
    let options = ParseOptions::default().with_recursion_limit(4096);
    let parse = parse_statement(&source, &options);

    assert!(parse.diagnostics().is_empty(), "{:?}", parse.diagnostics());
    assert_eq!(parse.syntax().to_string(), source);
    let labels = parse
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::CaseLabel)
        .count();
    assert_eq!(labels, 25);
}

#[test]
fn case_pattern_label_inside_a_case_lambda() {
    let source = "switch (a) { case (b => { switch (a) { case int n when n > 0: break; } return 0; }): break; }";
    let parse = parse_statement(source, &ParseOptions::default());

    assert!(parse.diagnostics().is_empty(), "{:?}", parse.diagnostics());
    let kinds: Vec<_> = parse
        .syntax()
        .descendants()
        .map(|node| node.kind())
        .filter(|kind| matches!(kind, SyntaxKind::CaseLabel | SyntaxKind::CasePatternLabel))
        .collect();
    assert_eq!(kinds, [SyntaxKind::CaseLabel, SyntaxKind::CasePatternLabel]);
}
