use crate::parser::ast::{CompilationUnit, Decl};
use crate::parser::tests::expect_valid_cst;
use crate::{LanguageVersion, ParseOptions, parse};
use indoc::indoc;

#[test]
fn empty_input() {
    insta::assert_snapshot!(expect_valid_cst(""), @"CompilationUnit");
}

#[test]
fn using_directive_and_class() {
    let input = indoc! {r#"
    using System;
    class C { }
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    CompilationUnit
      UsingDirective
        KwUsing "using"
        IdentName
          Ident "System"
        Semicolon ";"
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        BraceClose "}"
    "#);
}

#[test]
fn async_method_with_expression_body() {
    let input = "class C { public static async Task<int> M(int a, ref string b = null) => a; }";

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        MethodDecl
          ModifierList
            KwPublic "public"
            KwStatic "static"
            KwAsync "async"
          GenericName
            Ident "Task"
            TypeArgList
              Less "<"
              PredefinedType
                KwInt "int"
              Greater ">"
          Ident "M"
          ParamList
            ParenOpen "("
            Param
              PredefinedType
                KwInt "int"
              Ident "a"
            Comma ","
            Param
              KwRef "ref"
              PredefinedType
                KwString "string"
              Ident "b"
              EqualsValueClause
                Equals "="
                Literal
                  KwNull "null"
            ParenClose ")"
          ArrowExprClause
            FatArrow "=>"
            IdentName
              Ident "a"
          Semicolon ";"
        BraceClose "}"
    "#);
}

#[test]
fn positional_record() {
    insta::assert_snapshot!(expect_valid_cst("record Point(int X, int Y);"), @r#"
    CompilationUnit
      RecordDecl
        KwRecord "record"
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
    "#);
}

#[test]
fn file_scoped_namespace_owns_the_rest_of_the_file() {
    let input = indoc! {r#"
    namespace A.B;
    enum Color { Red, Green = 2, }
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    CompilationUnit
      FileScopedNamespaceDecl
        KwNamespace "namespace"
        QualifiedName
          IdentName
            Ident "A"
          Dot "."
          IdentName
            Ident "B"
        Semicolon ";"
        EnumDecl
          KwEnum "enum"
          Ident "Color"
          BraceOpen "{"
          EnumMemberDecl
            Ident "Red"
          Comma ","
          EnumMemberDecl
            Ident "Green"
            EqualsValueClause
              Equals "="
              Literal
                IntLiteral "2"
          Comma ","
          BraceClose "}"
    "#);
}

#[test]
fn constraint_clause_is_contextual() {
    insta::assert_snapshot!(expect_valid_cst("class C<T> where T : class, new() { }"), @r#"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        TypeParamList
          Less "<"
          TypeParam
            Ident "T"
          Greater ">"
        ConstraintClause
          KwWhere "where"
          Ident "T"
          Colon ":"
          ClassOrStructConstraint
            KwClass "class"
          Comma ","
          CtorConstraint
            KwNew "new"
            ParenOpen "("
            ParenClose ")"
        BraceOpen "{"
        BraceClose "}"
    "#);
}

#[test]
fn repeated_async_is_modifier_type_and_name() {
    insta::assert_snapshot!(expect_valid_cst("class C { async async async() { } }"), @r#"
    CompilationUnit
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        MethodDecl
          ModifierList
            KwAsync "async"
          IdentName
            Ident "async"
          Ident "async"
          ParamList
            ParenOpen "("
            ParenClose ")"
          Block
            BraceOpen "{"
            BraceClose "}"
        BraceClose "}"
    "#);
}

#[test]
fn shift_right_operator_is_one_token() {
    let input = "class C { public static C operator >>(C a, int b) => a; }";
    let parse = parse(input, &ParseOptions::default());

    assert!(parse.diagnostics().is_empty());
    let op = parse
        .syntax()
        .descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == crate::SyntaxKind::GreaterGreater)
        .expect("`>>` token");
    assert_eq!(op.text(), ">>");
    assert_eq!(parse.syntax().to_string(), input);
}

#[test]
fn top_level_statements_mix_with_declarations() {
    let input = indoc! {r#"
    using System;
    Console.WriteLine(1);
    class C { }
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    CompilationUnit
      UsingDirective
        KwUsing "using"
        IdentName
          Ident "System"
        Semicolon ";"
      GlobalStatement
        ExprStmt
          InvocationExpr
            MemberAccessExpr
              IdentName
                Ident "Console"
              Dot "."
              IdentName
                Ident "WriteLine"
            ArgList
              ParenOpen "("
              Arg
                Literal
                  IntLiteral "1"
              ParenClose ")"
          Semicolon ";"
      ClassDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        BraceClose "}"
    "#);
}

#[test]
fn record_is_a_name_before_records_exist() {
    let options = ParseOptions::default().with_language_version(LanguageVersion::V8);
    let parse = parse("class record { }", &options);

    assert!(parse.diagnostics().is_empty());
    let unit = CompilationUnit::cast(parse.syntax()).unwrap();
    let decl = unit.decls().next().unwrap();
    assert!(matches!(decl, Decl::Class(_)));
    assert_eq!(decl.name().unwrap().text(), "record");
}
