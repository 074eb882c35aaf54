use std::io::Write;
use std::path::PathBuf;

use keel_syntax::{DocumentationMode, LanguageVersion, ParseOptions};

use super::ast::{Fragment, render_tree};
use super::check::CheckReport;
use super::input::{InputError, OptionsArgs, SourceArgs, load_source, resolve_options};
use super::tokens::render_tokens;

fn no_flags() -> OptionsArgs {
    OptionsArgs {
        file: None,
        lang_version: None,
        doc_mode: None,
    }
}

fn options_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn inline_text_wins() {
    let source = load_source(&SourceArgs {
        path: Some(PathBuf::from("ignored.kl")),
        text: Some("class C { }".into()),
    })
    .unwrap();

    assert_eq!(source.name, "<inline>");
    assert_eq!(source.text, "class C { }");
}

#[test]
fn reads_a_file() {
    let file = options_file("class C { }");
    let source = load_source(&SourceArgs {
        path: Some(file.path().to_path_buf()),
        text: None,
    })
    .unwrap();

    assert_eq!(source.text, "class C { }");
    assert_eq!(source.name, file.path().to_string_lossy());
}

#[test]
fn missing_source_is_an_error() {
    let err = load_source(&SourceArgs {
        path: None,
        text: None,
    })
    .unwrap_err();

    assert!(matches!(err, InputError::MissingSource));
}

#[test]
fn unreadable_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.kl");
    let err = load_source(&SourceArgs {
        path: Some(path.clone()),
        text: None,
    })
    .unwrap_err();

    assert!(matches!(err, InputError::Read { .. }));
    assert!(err.to_string().contains("absent.kl"));
}

#[test]
fn default_options_without_flags() {
    assert_eq!(resolve_options(&no_flags()).unwrap(), ParseOptions::default());
}

#[test]
fn flags_override_the_options_file() {
    let file = options_file(
        r#"{ "language_version": "9", "documentation_mode": "parse", "recursion_limit": 32 }"#,
    );
    let options = resolve_options(&OptionsArgs {
        file: Some(file.path().to_path_buf()),
        lang_version: Some("11".into()),
        doc_mode: None,
    })
    .unwrap();

    assert_eq!(options.language_version, LanguageVersion::V11);
    assert_eq!(options.documentation_mode, DocumentationMode::Parse);
    assert_eq!(options.recursion_limit, 32);
}

#[test]
fn partial_options_file_keeps_defaults() {
    let file = options_file(r#"{ "documentation_mode": "diagnose" }"#);
    let options = resolve_options(&OptionsArgs {
        file: Some(file.path().to_path_buf()),
        ..no_flags()
    })
    .unwrap();

    assert_eq!(options.language_version, LanguageVersion::LATEST);
    assert_eq!(options.documentation_mode, DocumentationMode::Diagnose);
}

#[test]
fn malformed_options_file() {
    let file = options_file(r#"{ "language": "9" }"#);
    let err = resolve_options(&OptionsArgs {
        file: Some(file.path().to_path_buf()),
        ..no_flags()
    })
    .unwrap_err();

    assert!(matches!(err, InputError::Options { .. }));
}

#[test]
fn unknown_version_flag() {
    let err = resolve_options(&OptionsArgs {
        lang_version: Some("6".into()),
        ..no_flags()
    })
    .unwrap_err();

    assert!(matches!(err, InputError::Syntax(_)));
    assert!(err.to_string().contains("unknown language version `6`"));
}

#[test]
fn tree_output_for_each_fragment() {
    let options = ParseOptions::default();

    insta::assert_snapshot!(render_tree(&Fragment::Expr.parse("a ?? b", &options), false, true), @r#"
    ExprFragment [0..6]
      BinaryExpr [0..6]
        IdentName [0..1]
          Ident [0..1] "a"
        QuestionQuestion [2..4] "??"
        IdentName [5..6]
          Ident [5..6] "b"
    "#);
    insta::assert_snapshot!(render_tree(&Fragment::Stmt.parse(";", &options), false, false), @r#"
    StmtFragment
      EmptyStmt
        Semicolon ";"
    "#);
    insta::assert_snapshot!(render_tree(&Fragment::Cref.parse("T", &options), false, false), @r#"
    CrefFragment
      NameMemberCref
        IdentName
          Ident "T"
    "#);
}

#[test]
fn token_output() {
    insta::assert_snapshot!(render_tokens("x >>= 1 // c", false, false), @r#"
    Ident "x"
    Greater ">"
    GreaterEquals ">="
    IntLiteral "1"
    "#);
    insta::assert_snapshot!(render_tokens("x;", true, true), @r#"
    Ident [0..1] "x"
    Semicolon [1..2] ";"
    "#);
}

#[test]
fn check_report_json() {
    let parsed = Fragment::File.parse("class C { int x }", &ParseOptions::default());
    let report = CheckReport::new("<inline>", parsed.diagnostics());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["source"], "<inline>");
    assert_eq!(json["errors"], 1);
    assert_eq!(json["warnings"], 0);
    assert_eq!(json["diagnostics"][0]["code"], "KS1001");
    assert_eq!(json["diagnostics"][0]["start"], 15);
    assert_eq!(json["diagnostics"][0]["message"], "`;` expected");
}
