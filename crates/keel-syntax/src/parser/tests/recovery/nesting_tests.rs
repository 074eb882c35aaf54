use crate::{DiagnosticKind, ParseOptions, SyntaxKind, parse_expression, parse_statement};

fn shallow() -> ParseOptions {
    ParseOptions::default().with_recursion_limit(8)
}

#[test]
fn deep_parentheses_stop_at_the_limit() {
    let source = "((((((((((x))))))))))";
    let parse = parse_expression(source, &shallow());

    let diagnostics = parse.diagnostics().as_slice();
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::NestingTooDeep);
    assert_eq!(u32::from(diagnostics[0].range().end()), source.len() as u32);
    assert_eq!(
        diagnostics[0].message(),
        "nesting too deep; the rest of the input was not parsed"
    );
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn rest_of_input_lands_in_one_error_node() {
    let source = "((((((((((x))))))))))";
    let parse = parse_expression(source, &shallow());

    let errors: Vec<_> = parse
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].text().to_string().ends_with("x))))))))))"));
}

#[test]
fn deep_blocks_stop_at_the_limit() {
    let source = format!("{}{}", "{ ".repeat(20), "} ".repeat(20));
    let parse = parse_statement(&source, &shallow());

    assert_eq!(parse.diagnostics().len(), 1);
    assert_eq!(
        parse.diagnostics().as_slice()[0].kind(),
        DiagnosticKind::NestingTooDeep
    );
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn moderate_nesting_is_fine_with_the_default_limit() {
    let source = format!("{}x{}", "(".repeat(50), ")".repeat(50));
    let parse = parse_expression(&source, &ParseOptions::default());

    assert!(parse.diagnostics().is_empty());
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn unclosed_parentheses_beyond_the_limit_do_not_exhaust_the_stack() {
    let source = format!("{}x", "(".repeat(20_000));
    let parse = parse_expression(&source, &ParseOptions::default());

    assert_eq!(
        parse.diagnostics().as_slice()[0].kind(),
        DiagnosticKind::NestingTooDeep
    );
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn long_less_than_chains_are_not_type_arguments() {
    let source = format!("f{}", "<A".repeat(2_000));
    let parse = parse_expression(&source, &ParseOptions::default());

    assert!(parse.diagnostics().is_empty(), "{:?}", parse.diagnostics());
    assert_eq!(parse.syntax().to_string(), source);
}
