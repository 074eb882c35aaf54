use crate::parser::tests::expect_invalid;
use crate::{ParseOptions, parse, parse_expression, parse_statement};

#[test]
fn missing_semicolon_after_field() {
    let parse = parse("class C { int x }", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        FieldDecl
          VarDecl
            PredefinedType
              KwInt "int"
            VarDeclarator
              Ident "x"
          Semicolon (missing)
        BraceClose "}"
    ---
    error[KS1001] at 15..15: `;` expected
    "#);
}

#[test]
fn unterminated_argument_list_reports_once() {
    let parse = parse_expression("f(a,", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    ExprFragment
      InvocationExpr
        IdentName
          Ident "f"
        ArgList
          ParenOpen "("
          Arg
            IdentName
              Ident "a"
          Comma ","
          Arg
            IdentName
              Ident (missing)
          ParenClose (missing)
    ---
    error[KS1003] at 4..4: expression expected
    "#);
}

#[test]
fn unterminated_with_initializer_reports_once() {
    let parse = parse_expression("0 with {", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    ExprFragment
      WithExpr
        Literal
          IntLiteral "0"
        KwWith "with"
        InitializerExpr
          BraceOpen "{"
          BraceClose (missing)
    ---
    error[KS1001] at 8..8: `}` expected
    "#);
}

#[test]
fn garbage_in_class_body_is_skipped() {
    let parse = parse("class C { int x; # }", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r##"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        FieldDecl
          VarDecl
            PredefinedType
              KwInt "int"
            VarDeclarator
              Ident "x"
          Semicolon ";"
        Error
          Garbage "#"
        BraceClose "}"
    ---
    error[KS1011] at 17..18: invalid token `#` in member declaration
    "##);
}

#[test]
fn modifiers_without_member() {
    let parse = parse("class C { public }", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        IncompleteMember
          ModifierList
            KwPublic "public"
        BraceClose "}"
    ---
    error[KS1011] at 17..18: invalid token `}` in member declaration
    "#);
}

#[test]
fn unclosed_class_body() {
    let parse = parse("class C {", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        BraceClose (missing)
    ---
    error[KS1001] at 9..9: `}` expected
    "#);
}

#[test]
fn stray_closing_brace_at_file_level() {
    let parse = parse("}", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    CompilationUnit
      Error
        BraceClose "}"
    ---
    error[KS1010] at 0..1: unexpected token `}`
    "#);
}

#[test]
fn missing_close_paren_in_condition() {
    let parse = parse_statement("if (a { }", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    StmtFragment
      IfStmt
        KwIf "if"
        ParenOpen "("
        IdentName
          Ident "a"
        ParenClose (missing)
        Block
          BraceOpen "{"
          BraceClose "}"
    ---
    error[KS1001] at 5..5: `)` expected
    "#);
}

#[test]
fn stray_tokens_before_close_paren_are_skipped() {
    let parse = parse_statement("if (a b) { }", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    StmtFragment
      IfStmt
        KwIf "if"
        ParenOpen "("
        IdentName
          Ident "a"
        Error
          Ident "b"
        ParenClose ")"
        Block
          BraceOpen "{"
          BraceClose "}"
    ---
    error[KS1010] at 6..7: unexpected token `b`
    "#);
}

#[test]
fn expression_leftovers_are_kept() {
    let source = "a b c";
    let parse = parse_expression(source, &ParseOptions::default());

    assert_eq!(parse.syntax().to_string(), source);
    insta::assert_snapshot!(expect_invalid(parse), @r#"
    ExprFragment
      IdentName
        Ident "a"
      Error
        Ident "b"
        Ident "c"
    ---
    error[KS1010] at 2..3: unexpected token `b`
    "#);
}

#[test]
fn unclosed_parentheses_end_at_the_statement() {
    let parse = parse_statement("{ x = (a; y = (b; }", &ParseOptions::default());

    insta::assert_snapshot!(expect_invalid(parse), @r#"
    StmtFragment
      Block
        BraceOpen "{"
        ExprStmt
          AssignmentExpr
            IdentName
              Ident "x"
            Equals "="
            ParenExpr
              ParenOpen "("
              IdentName
                Ident "a"
              ParenClose (missing)
          Semicolon ";"
        ExprStmt
          AssignmentExpr
            IdentName
              Ident "y"
            Equals "="
            ParenExpr
              ParenOpen "("
              IdentName
                Ident "b"
              ParenClose (missing)
          Semicolon ";"
        BraceClose "}"
    ---
    error[KS1001] at 8..8: `)` expected
    error[KS1001] at 16..16: `)` expected
    "#);
}

#[test]
fn many_unclosed_parentheses_in_one_block() {
    let count = 2_000;
    let source = format!("{{ {}}}", "x = (a; ".repeat(count));
    let parse = parse_statement(&source, &ParseOptions::default());

    assert_eq!(parse.syntax().to_string(), source);
    assert_eq!(parse.diagnostics().len(), count);
}
