use crate::parser::tests::expect_valid_stmt;
use indoc::indoc;

#[test]
fn block_with_locals_and_local_function() {
    insta::assert_snapshot!(expect_valid_stmt("{ int x = 1; var y = x; void F() { } }"), @r#"
    StmtFragment
      Block
        BraceOpen "{"
        LocalDeclStmt
          VarDecl
            PredefinedType
              KwInt "int"
            VarDeclarator
              Ident "x"
              EqualsValueClause
                Equals "="
                Literal
                  IntLiteral "1"
          Semicolon ";"
        LocalDeclStmt
          VarDecl
            IdentName
              Ident "var"
            VarDeclarator
              Ident "y"
              EqualsValueClause
                Equals "="
                IdentName
                  Ident "x"
          Semicolon ";"
        LocalFunctionStmt
          PredefinedType
            KwVoid "void"
          Ident "F"
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
fn if_else() {
    insta::assert_snapshot!(expect_valid_stmt("if (a) return; else { b(); }"), @r#"
    StmtFragment
      IfStmt
        KwIf "if"
        ParenOpen "("
        IdentName
          Ident "a"
        ParenClose ")"
        ReturnStmt
          KwReturn "return"
          Semicolon ";"
        ElseClause
          KwElse "else"
          Block
            BraceOpen "{"
            ExprStmt
              InvocationExpr
                IdentName
                  Ident "b"
                ArgList
                  ParenOpen "("
                  ParenClose ")"
              Semicolon ";"
            BraceClose "}"
    "#);
}

#[test]
fn switch_sections_with_constant_and_pattern_labels() {
    let input = indoc! {r#"
    switch (x)
    {
        case 1:
        case int n when n > 10:
            break;
        default:
            return;
    }
    "#};

    insta::assert_snapshot!(expect_valid_stmt(input), @r#"
    StmtFragment
      SwitchStmt
        KwSwitch "switch"
        ParenOpen "("
        IdentName
          Ident "x"
        ParenClose ")"
        BraceOpen "{"
        SwitchSection
          CaseLabel
            KwCase "case"
            Literal
              IntLiteral "1"
            Colon ":"
          CasePatternLabel
            KwCase "case"
            DeclarationPattern
              PredefinedType
                KwInt "int"
              SingleVarDesignation
                Ident "n"
            WhenClause
              KwWhen "when"
              BinaryExpr
                IdentName
                  Ident "n"
                Greater ">"
                Literal
                  IntLiteral "10"
            Colon ":"
          BreakStmt
            KwBreak "break"
            Semicolon ";"
        SwitchSection
          DefaultLabel
            KwDefault "default"
            Colon ":"
          ReturnStmt
            KwReturn "return"
            Semicolon ";"
        BraceClose "}"
    "#);
}

#[test]
fn try_catch_filter_finally() {
    let input = "try { } catch (Exception e) when (e != null) { } finally { }";

    insta::assert_snapshot!(expect_valid_stmt(input), @r#"
    StmtFragment
      TryStmt
        KwTry "try"
        Block
          BraceOpen "{"
          BraceClose "}"
        CatchClause
          KwCatch "catch"
          CatchDecl
            ParenOpen "("
            IdentName
              Ident "Exception"
            Ident "e"
            ParenClose ")"
          CatchFilter
            KwWhen "when"
            ParenOpen "("
            BinaryExpr
              IdentName
                Ident "e"
              BangEquals "!="
              Literal
                KwNull "null"
            ParenClose ")"
          Block
            BraceOpen "{"
            BraceClose "}"
        FinallyClause
          KwFinally "finally"
          Block
            BraceOpen "{"
            BraceClose "}"
    "#);
}

#[test]
fn foreach_with_deconstruction() {
    insta::assert_snapshot!(expect_valid_stmt("foreach (var (k, v) in map) { }"), @r#"
    StmtFragment
      ForeachStmt
        KwForeach "foreach"
        ParenOpen "("
        DeclarationExpr
          IdentName
            Ident "var"
          ParenVarDesignation
            ParenOpen "("
            SingleVarDesignation
              Ident "k"
            Comma ","
            SingleVarDesignation
              Ident "v"
            ParenClose ")"
        KwIn "in"
        IdentName
          Ident "map"
        ParenClose ")"
        Block
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn yield_return() {
    insta::assert_snapshot!(expect_valid_stmt("yield return x;"), @r#"
    StmtFragment
      YieldStmt
        KwYield "yield"
        KwReturn "return"
        IdentName
          Ident "x"
        Semicolon ";"
    "#);
}

#[test]
fn yield_without_keyword_follow_is_a_name() {
    insta::assert_snapshot!(expect_valid_stmt("yield = 1;"), @r#"
    StmtFragment
      ExprStmt
        AssignmentExpr
          IdentName
            Ident "yield"
          Equals "="
          Literal
            IntLiteral "1"
        Semicolon ";"
    "#);
}
