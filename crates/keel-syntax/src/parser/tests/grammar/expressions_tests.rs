use crate::parser::tests::expect_valid_expr;
use crate::{ParseOptions, SyntaxKind, parse_statement};

#[test]
fn multiplication_binds_tighter_than_addition() {
    insta::assert_snapshot!(expect_valid_expr("a + b * c"), @r#"
    ExprFragment
      BinaryExpr
        IdentName
          Ident "a"
        Plus "+"
        BinaryExpr
          IdentName
            Ident "b"
          Star "*"
          IdentName
            Ident "c"
    "#);
}

#[test]
fn null_coalescing_is_right_associative() {
    insta::assert_snapshot!(expect_valid_expr("a ?? b ?? c"), @r#"
    ExprFragment
      BinaryExpr
        IdentName
          Ident "a"
        QuestionQuestion "??"
        BinaryExpr
          IdentName
            Ident "b"
          QuestionQuestion "??"
          IdentName
            Ident "c"
    "#);
}

#[test]
fn adjacent_greater_tokens_join_into_shift() {
    insta::assert_snapshot!(expect_valid_expr("x >> 2"), @r#"
    ExprFragment
      BinaryExpr
        IdentName
          Ident "x"
        GreaterGreater ">>"
        Literal
          IntLiteral "2"
    "#);
}

#[test]
fn shift_assignment_is_one_operator() {
    insta::assert_snapshot!(expect_valid_expr("x >>= 1"), @r#"
    ExprFragment
      AssignmentExpr
        IdentName
          Ident "x"
        GreaterGreaterEquals ">>="
        Literal
          IntLiteral "1"
    "#);
}

#[test]
fn generic_invocation() {
    insta::assert_snapshot!(expect_valid_expr("F<int>(x)"), @r#"
    ExprFragment
      InvocationExpr
        GenericName
          Ident "F"
          TypeArgList
            Less "<"
            PredefinedType
              KwInt "int"
            Greater ">"
        ArgList
          ParenOpen "("
          Arg
            IdentName
              Ident "x"
          ParenClose ")"
    "#);
}

#[test]
fn nullable_type_pattern_before_conditional() {
    insta::assert_snapshot!(expect_valid_expr("x is T ? ? y : z"), @r#"
    ExprFragment
      ConditionalExpr
        IsPatternExpr
          IdentName
            Ident "x"
          KwIs "is"
          TypePattern
            NullableType
              IdentName
                Ident "T"
              Question "?"
        Question "?"
        IdentName
          Ident "y"
        Colon ":"
        IdentName
          Ident "z"
    "#);
}

#[test]
fn question_after_is_type_is_conditional() {
    insta::assert_snapshot!(expect_valid_expr("x is T ? a : b"), @r#"
    ExprFragment
      ConditionalExpr
        IsExpr
          IdentName
            Ident "x"
          KwIs "is"
          IdentName
            Ident "T"
        Question "?"
        IdentName
          Ident "a"
        Colon ":"
        IdentName
          Ident "b"
    "#);
}

#[test]
fn conditional_true_branch_may_start_with_a_name() {
    insta::assert_snapshot!(expect_valid_expr("x is T ? y && z : w"), @r#"
    ExprFragment
      ConditionalExpr
        IsExpr
          IdentName
            Ident "x"
          KwIs "is"
          IdentName
            Ident "T"
        Question "?"
        BinaryExpr
          IdentName
            Ident "y"
          AmpAmp "&&"
          IdentName
            Ident "z"
        Colon ":"
        IdentName
          Ident "w"
    "#);
    insta::assert_snapshot!(expect_valid_expr("x is T ? y ? a : b : c"), @r#"
    ExprFragment
      ConditionalExpr
        IsExpr
          IdentName
            Ident "x"
          KwIs "is"
          IdentName
            Ident "T"
        Question "?"
        ConditionalExpr
          IdentName
            Ident "y"
          Question "?"
          IdentName
            Ident "a"
          Colon ":"
          IdentName
            Ident "b"
        Colon ":"
        IdentName
          Ident "c"
    "#);
    insta::assert_snapshot!(expect_valid_expr("x is T ? y = 1 : w"), @r#"
    ExprFragment
      ConditionalExpr
        IsExpr
          IdentName
            Ident "x"
          KwIs "is"
          IdentName
            Ident "T"
        Question "?"
        AssignmentExpr
          IdentName
            Ident "y"
          Equals "="
          Literal
            IntLiteral "1"
        Colon ":"
        IdentName
          Ident "w"
    "#);
}

#[test]
fn nullable_designation_without_a_closing_colon() {
    insta::assert_snapshot!(expect_valid_expr("o is T? y && ok"), @r#"
    ExprFragment
      BinaryExpr
        IsPatternExpr
          IdentName
            Ident "o"
          KwIs "is"
          DeclarationPattern
            NullableType
              IdentName
                Ident "T"
              Question "?"
            SingleVarDesignation
              Ident "y"
        AmpAmp "&&"
        IdentName
          Ident "ok"
    "#);
}

#[test]
fn conditional_after_is_inside_a_declaration() {
    let parse = parse_statement("var r = x is T ? y && z : w;", &ParseOptions::default());

    assert!(parse.diagnostics().is_empty(), "{:?}", parse.diagnostics());
    let conditional = parse
        .syntax()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::ConditionalExpr)
        .expect("conditional expression");
    assert_eq!(conditional.text().to_string(), "x is T ? y && z : w");
}

#[test]
fn switch_expression_with_trailing_comma() {
    let input = r#"x switch { 1 => "one", > 5 and < 10 => "mid", _ => "other", }"#;

    insta::assert_snapshot!(expect_valid_expr(input), @r#"
    ExprFragment
      SwitchExpr
        IdentName
          Ident "x"
        KwSwitch "switch"
        BraceOpen "{"
        SwitchArm
          ConstantPattern
            Literal
              IntLiteral "1"
          FatArrow "=>"
          Literal
            StringLiteral "\"one\""
        Comma ","
        SwitchArm
          AndPattern
            RelationalPattern
              Greater ">"
              Literal
                IntLiteral "5"
            KwAnd "and"
            RelationalPattern
              Less "<"
              Literal
                IntLiteral "10"
          FatArrow "=>"
          Literal
            StringLiteral "\"mid\""
        Comma ","
        SwitchArm
          DiscardPattern
            Ident "_"
          FatArrow "=>"
          Literal
            StringLiteral "\"other\""
        Comma ","
        BraceClose "}"
    "#);
}

#[test]
fn async_lambda_awaits_in_its_body() {
    insta::assert_snapshot!(expect_valid_expr("async (a, b) => await a"), @r#"
    ExprFragment
      ParenLambdaExpr
        ModifierList
          KwAsync "async"
        ParamList
          ParenOpen "("
          Param
            Ident "a"
          Comma ","
          Param
            Ident "b"
          ParenClose ")"
        FatArrow "=>"
        AwaitExpr
          KwAwait "await"
          IdentName
            Ident "a"
    "#);
}

#[test]
fn await_outside_async_is_a_name() {
    insta::assert_snapshot!(expect_valid_expr("await(x)"), @r#"
    ExprFragment
      InvocationExpr
        IdentName
          Ident "await"
        ArgList
          ParenOpen "("
          Arg
            IdentName
              Ident "x"
          ParenClose ")"
    "#);
}

#[test]
fn simple_lambda() {
    insta::assert_snapshot!(expect_valid_expr("x => x + 1"), @r#"
    ExprFragment
      SimpleLambdaExpr
        Param
          Ident "x"
        FatArrow "=>"
        BinaryExpr
          IdentName
            Ident "x"
          Plus "+"
          Literal
            IntLiteral "1"
    "#);
}

#[test]
fn anonymous_method() {
    insta::assert_snapshot!(expect_valid_expr("delegate (int x) { return x; }"), @r#"
    ExprFragment
      AnonymousMethodExpr
        KwDelegate "delegate"
        ParamList
          ParenOpen "("
          Param
            PredefinedType
              KwInt "int"
            Ident "x"
          ParenClose ")"
        Block
          BraceOpen "{"
          ReturnStmt
            KwReturn "return"
            IdentName
              Ident "x"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn query_clauses_are_contextual() {
    let input = "from x in xs where x > 1 orderby x descending select x * 2";

    insta::assert_snapshot!(expect_valid_expr(input), @r#"
    ExprFragment
      QueryExpr
        FromClause
          KwFrom "from"
          Ident "x"
          KwIn "in"
          IdentName
            Ident "xs"
        QueryBody
          WhereClause
            KwWhere "where"
            BinaryExpr
              IdentName
                Ident "x"
              Greater ">"
              Literal
                IntLiteral "1"
          OrderByClause
            KwOrderBy "orderby"
            Ordering
              IdentName
                Ident "x"
              KwDescending "descending"
          SelectClause
            KwSelect "select"
            BinaryExpr
              IdentName
                Ident "x"
              Star "*"
              Literal
                IntLiteral "2"
    "#);
}

#[test]
fn object_creation_with_member_initializers() {
    insta::assert_snapshot!(expect_valid_expr("new Point { X = 1, Y = 2 }"), @r#"
    ExprFragment
      ObjectCreationExpr
        KwNew "new"
        IdentName
          Ident "Point"
        InitializerExpr
          BraceOpen "{"
          AssignmentExpr
            IdentName
              Ident "X"
            Equals "="
            Literal
              IntLiteral "1"
          Comma ","
          AssignmentExpr
            IdentName
              Ident "Y"
            Equals "="
            Literal
              IntLiteral "2"
          BraceClose "}"
    "#);
}

#[test]
fn jagged_array_creation_with_size() {
    insta::assert_snapshot!(expect_valid_expr("new int[n][]"), @r#"
    ExprFragment
      ArrayCreationExpr
        KwNew "new"
        ArrayType
          PredefinedType
            KwInt "int"
          ArrayRankSpecifier
            BracketOpen "["
            IdentName
              Ident "n"
            BracketClose "]"
          ArrayRankSpecifier
            BracketOpen "["
            BracketClose "]"
    "#);
}

#[test]
fn conditional_access_binds_the_rest_of_the_chain() {
    insta::assert_snapshot!(expect_valid_expr("a?.B()"), @r#"
    ExprFragment
      ConditionalAccessExpr
        IdentName
          Ident "a"
        QuestionDot "?."
        InvocationExpr
          MemberBindingExpr
            IdentName
              Ident "B"
          ArgList
            ParenOpen "("
            ParenClose ")"
    "#);
}

#[test]
fn cast_of_negation() {
    insta::assert_snapshot!(expect_valid_expr("(int)-x"), @r#"
    ExprFragment
      CastExpr
        ParenOpen "("
        PredefinedType
          KwInt "int"
        ParenClose ")"
        PrefixExpr
          Minus "-"
          IdentName
            Ident "x"
    "#);
}

#[test]
fn parenthesized_name_minus_is_subtraction() {
    insta::assert_snapshot!(expect_valid_expr("(a) - b"), @r#"
    ExprFragment
      BinaryExpr
        ParenExpr
          ParenOpen "("
          IdentName
            Ident "a"
          ParenClose ")"
        Minus "-"
        IdentName
          Ident "b"
    "#);
}

#[test]
fn tuple_with_named_element() {
    insta::assert_snapshot!(expect_valid_expr("(a: 1, b)"), @r#"
    ExprFragment
      TupleExpr
        ParenOpen "("
        Arg
          NameColon
            Ident "a"
            Colon ":"
          Literal
            IntLiteral "1"
        Comma ","
        Arg
          IdentName
            Ident "b"
        ParenClose ")"
    "#);
}

#[test]
fn range_with_hat_index() {
    insta::assert_snapshot!(expect_valid_expr("a[i..^1]"), @r#"
    ExprFragment
      ElementAccessExpr
        IdentName
          Ident "a"
        BracketedArgList
          BracketOpen "["
          Arg
            RangeExpr
              IdentName
                Ident "i"
              DotDot ".."
              PrefixExpr
                Caret "^"
                Literal
                  IntLiteral "1"
          BracketClose "]"
    "#);
}
