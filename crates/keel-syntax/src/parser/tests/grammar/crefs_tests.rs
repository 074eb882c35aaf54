use crate::parser::tests::diagnostic_lines;
use crate::{DocumentationMode, ParseOptions, parse, parse_cref};
use indoc::indoc;

fn cref(src: &str) -> String {
    let parse = parse_cref(src, &ParseOptions::default());
    assert!(parse.diagnostics().is_empty(), "{}", diagnostic_lines(&parse));
    parse.dump()
}

#[test]
fn generic_type_member_with_parameters() {
    insta::assert_snapshot!(cref("List{T}.Add(T)"), @r#"
    CrefFragment
      QualifiedCref
        NameMemberCref
          GenericName
            Ident "List"
            TypeArgList
              BraceOpen "{"
              IdentName
                Ident "T"
              BraceClose "}"
        Dot "."
        NameMemberCref
          IdentName
            Ident "Add"
          CrefParamList
            ParenOpen "("
            CrefParam
              IdentName
                Ident "T"
            ParenClose ")"
    "#);
}

#[test]
fn shift_operator_member() {
    insta::assert_snapshot!(cref("operator >>(C, int)"), @r#"
    CrefFragment
      OperatorMemberCref
        KwOperator "operator"
        GreaterGreater ">>"
        CrefParamList
          ParenOpen "("
          CrefParam
            IdentName
              Ident "C"
          Comma ","
          CrefParam
            PredefinedType
              KwInt "int"
          ParenClose ")"
    "#);
}

#[test]
fn indexer_member() {
    insta::assert_snapshot!(cref("this[int]"), @r#"
    CrefFragment
      IndexerMemberCref
        KwThis "this"
        CrefBracketedParamList
          BracketOpen "["
          CrefParam
            PredefinedType
              KwInt "int"
          BracketClose "]"
    "#);
}

const DOCUMENTED: &str = indoc! {r#"
/// <see cref="List{T}"/>
class C { }
"#};

#[test]
fn doc_crefs_are_ignored_without_documentation_mode() {
    let parse = parse(DOCUMENTED, &ParseOptions::default());

    assert!(parse.doc_crefs().is_empty());
    assert!(parse.diagnostics().is_empty());
}

#[test]
fn doc_crefs_are_parsed_at_their_source_offsets() {
    let options = ParseOptions::default().with_documentation_mode(DocumentationMode::Parse);
    let parse = parse(DOCUMENTED, &options);

    let [cref] = parse.doc_crefs() else {
        panic!("expected one cref, got {:?}", parse.doc_crefs());
    };
    assert_eq!(&DOCUMENTED[cref.range()], "List{T}");
    assert_eq!(cref.syntax().to_string(), "List{T}");
    assert_eq!(parse.syntax().to_string(), DOCUMENTED);
}

#[test]
fn malformed_cref_warns_only_in_diagnose_mode() {
    let source = indoc! {r#"
    /// <see cref="List{"/>
    class C { }
    "#};

    let parsed = parse(
        source,
        &ParseOptions::default().with_documentation_mode(DocumentationMode::Parse),
    );
    assert!(parsed.diagnostics().is_empty());
    assert_eq!(parsed.doc_crefs().len(), 1);

    let diagnosed = parse(
        source,
        &ParseOptions::default().with_documentation_mode(DocumentationMode::Diagnose),
    );
    assert!(!diagnosed.has_errors());
    insta::assert_snapshot!(diagnostic_lines(&diagnosed), @"warning[KS4001] at 15..20: malformed cref `List{`");
}
