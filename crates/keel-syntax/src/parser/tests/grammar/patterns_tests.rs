use crate::parser::tests::expect_valid_expr;

#[test]
fn property_pattern_with_designation() {
    insta::assert_snapshot!(expect_valid_expr("o is Point { X: 0, Y: var y } p"), @r#"
    ExprFragment
      IsPatternExpr
        IdentName
          Ident "o"
        KwIs "is"
        RecursivePattern
          IdentName
            Ident "Point"
          PropertyPatternClause
            BraceOpen "{"
            Subpattern
              NameColon
                Ident "X"
                Colon ":"
              ConstantPattern
                Literal
                  IntLiteral "0"
            Comma ","
            Subpattern
              NameColon
                Ident "Y"
                Colon ":"
              VarPattern
                KwVar "var"
                SingleVarDesignation
                  Ident "y"
            BraceClose "}"
          SingleVarDesignation
            Ident "p"
    "#);
}

#[test]
fn not_null() {
    insta::assert_snapshot!(expect_valid_expr("x is not null"), @r#"
    ExprFragment
      IsPatternExpr
        IdentName
          Ident "x"
        KwIs "is"
        NotPattern
          KwNot "not"
          ConstantPattern
            Literal
              KwNull "null"
    "#);
}

#[test]
fn list_pattern_with_slice() {
    insta::assert_snapshot!(expect_valid_expr("xs is [1, .., var last]"), @r#"
    ExprFragment
      IsPatternExpr
        IdentName
          Ident "xs"
        KwIs "is"
        ListPattern
          BracketOpen "["
          ConstantPattern
            Literal
              IntLiteral "1"
          Comma ","
          SlicePattern
            DotDot ".."
          Comma ","
          VarPattern
            KwVar "var"
            SingleVarDesignation
              Ident "last"
          BracketClose "]"
    "#);
}

#[test]
fn positional_pattern_with_discard() {
    insta::assert_snapshot!(expect_valid_expr("p is (int x, _)"), @r#"
    ExprFragment
      IsPatternExpr
        IdentName
          Ident "p"
        KwIs "is"
        RecursivePattern
          PositionalPatternClause
            ParenOpen "("
            Subpattern
              DeclarationPattern
                PredefinedType
                  KwInt "int"
                SingleVarDesignation
                  Ident "x"
            Comma ","
            Subpattern
              DiscardPattern
                Ident "_"
            ParenClose ")"
    "#);
}

#[test]
fn type_patterns_joined_by_or() {
    insta::assert_snapshot!(expect_valid_expr("x is int or string"), @r#"
    ExprFragment
      IsPatternExpr
        IdentName
          Ident "x"
        KwIs "is"
        OrPattern
          TypePattern
            PredefinedType
              KwInt "int"
          KwOr "or"
          TypePattern
            PredefinedType
              KwString "string"
    "#);
}

#[test]
fn plain_type_after_is_stays_a_type() {
    insta::assert_snapshot!(expect_valid_expr("x is List<int>"), @r#"
    ExprFragment
      IsExpr
        IdentName
          Ident "x"
        KwIs "is"
        GenericName
          Ident "List"
          TypeArgList
            Less "<"
            PredefinedType
              KwInt "int"
            Greater ">"
    "#);
}
