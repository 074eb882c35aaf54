use crate::parser::tests::diagnostic_lines;
use crate::{ParseOptions, parse};

#[test]
fn partial_before_other_modifiers_warns() {
    let parse = parse("class C { partial public void M(); }", &ParseOptions::default());

    assert!(!parse.has_errors());
    insta::assert_snapshot!(diagnostic_lines(&parse), @"warning[KS3002] at 10..17: the `partial` modifier should appear immediately before the declaration keyword");
}

#[test]
fn partial_in_last_position_is_quiet() {
    let parse = parse("class C { public partial void M(); }", &ParseOptions::default());

    assert!(parse.diagnostics().is_empty(), "{}", diagnostic_lines(&parse));
}

#[test]
fn unchecked_operator_warns() {
    let parse = parse(
        "class C { public static C operator unchecked +(C a, C b) => a; }",
        &ParseOptions::default(),
    );

    assert!(!parse.has_errors());
    insta::assert_snapshot!(diagnostic_lines(&parse), @"warning[KS3001] at 35..44: `unchecked` has no effect in an operator declaration and is ignored");
}

#[test]
fn base_arguments_without_parameter_list() {
    let parse = parse("class D : B(1) { }", &ParseOptions::default());

    assert!(parse.has_errors());
    insta::assert_snapshot!(diagnostic_lines(&parse), @"error[KS1012] at 11..14: unexpected argument list; `D` does not declare a parameter list");
}

#[test]
fn base_arguments_with_primary_constructor() {
    let parse = parse("class D(int x) : B(x) { }", &ParseOptions::default());

    assert!(parse.diagnostics().is_empty(), "{}", diagnostic_lines(&parse));
}
