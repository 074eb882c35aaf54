use crate::parser::tests::{diagnostic_lines, expect_invalid, options_for};
use crate::{LanguageVersion, Parse, parse, parse_expression, parse_statement};

#[track_caller]
fn gated(parse: Parse) -> String {
    assert_eq!(parse.diagnostics().len(), 1, "{}", diagnostic_lines(&parse));
    diagnostic_lines(&parse)
}

#[test]
fn switch_expression_before_v8() {
    let parse = parse_expression("x switch { _ => 1 }", &options_for(LanguageVersion::V7));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 2..8: feature `switch expressions` is not available in language version 7; use version 8 or later");
}

#[test]
fn with_expression_before_v9() {
    let parse = parse_expression("x with { }", &options_for(LanguageVersion::V8));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 2..6: feature `with expressions` is not available in language version 8; use version 9 or later");
}

#[test]
fn file_scoped_namespace_before_v10() {
    let parse = parse("namespace N;", &options_for(LanguageVersion::V9));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 0..12: feature `file-scoped namespaces` is not available in language version 9; use version 10 or later");
}

#[test]
fn primary_constructor_before_v12() {
    let parse = parse("class C(int x) { }", &options_for(LanguageVersion::V11));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 7..8: feature `primary constructors` is not available in language version 11; use version 12 or later");
}

#[test]
fn list_pattern_before_v11() {
    let parse = parse_expression("x is [1]", &options_for(LanguageVersion::V10));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 5..6: feature `list patterns` is not available in language version 10; use version 11 or later");
}

#[test]
fn pattern_combinator_before_v9() {
    let parse = parse_expression("x is not null", &options_for(LanguageVersion::V8));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 5..8: feature `pattern combinators` is not available in language version 8; use version 9 or later");
}

#[test]
fn relational_pattern_before_v9() {
    let parse = parse_expression("x is > 5", &options_for(LanguageVersion::V8));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 5..6: feature `relational patterns` is not available in language version 8; use version 9 or later");
}

#[test]
fn record_struct_before_v10() {
    let parse = parse("record struct P(int X);", &options_for(LanguageVersion::V9));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 0..13: feature `record structs` is not available in language version 9; use version 10 or later");
}

#[test]
fn null_coalescing_assignment_before_v8() {
    let parse = parse_expression("x ??= y", &options_for(LanguageVersion::V7));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 2..5: feature `null-coalescing assignment` is not available in language version 7; use version 8 or later");
}

#[test]
fn using_declaration_before_v8() {
    let parse = parse_statement("using var f = Open();", &options_for(LanguageVersion::V7));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 0..5: feature `using declarations` is not available in language version 7; use version 8 or later");
}

#[test]
fn static_local_function_before_v8() {
    let parse = parse_statement("static int F() => 1;", &options_for(LanguageVersion::V7));

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 0..6: feature `static local functions` is not available in language version 7; use version 8 or later");
}

#[test]
fn init_accessor_before_v9() {
    let parse = parse(
        "class C { public int P { get; init; } }",
        &options_for(LanguageVersion::V8),
    );

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 30..34: feature `init accessors` is not available in language version 8; use version 9 or later");
}

#[test]
fn checked_operator_before_v11() {
    let parse = parse(
        "class C { public static C operator checked +(C a, C b) => a; }",
        &options_for(LanguageVersion::V10),
    );

    insta::assert_snapshot!(gated(parse), @"error[KS2001] at 35..42: feature `checked operators` is not available in language version 10; use version 11 or later");
}

#[test]
fn gated_constructs_still_build_their_nodes() {
    let parse = parse_expression("x with { }", &options_for(LanguageVersion::V8));

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    ExprFragment
      WithExpr
        IdentName
          Ident "x"
        KwWith "with"
        InitializerExpr
          BraceOpen "{"
          BraceClose "}"
    ---
    error[KS2001] at 2..6: feature `with expressions` is not available in language version 8; use version 9 or later
    "#);
}

#[test]
fn record_at_v8_is_a_local_function_at_top_level() {
    let parse = parse("record Point(int X, int Y);", &options_for(LanguageVersion::V8));

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    CompilationUnit
      GlobalStatement
        LocalFunctionStmt
          IdentName
            Ident "record"
          Ident "Point"
          ParamList
            ParenOpen "("
            Param
              PredefinedType
                KwInt "int"
              Ident "X"
            Comma ","
            Param
              PredefinedType
                KwInt "int"
              Ident "Y"
            ParenClose ")"
          Semicolon ";"
    ---
    error[KS2001] at 0..6: feature `top-level statements` is not available in language version 8; use version 9 or later
    "#);
}

#[test]
fn latest_version_accepts_every_gated_construct() {
    let sources = [
        "namespace N;",
        "record struct P(int X);",
        "class C(int x) { }",
        "class C { public int P { get; init; } }",
        "class C { public static C operator checked +(C a, C b) => a; }",
    ];
    for source in sources {
        let parse = parse(source, &options_for(LanguageVersion::LATEST));
        assert!(parse.diagnostics().is_empty(), "{source}: {}", diagnostic_lines(&parse));
    }
}
