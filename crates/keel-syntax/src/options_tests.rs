use crate::options::DEFAULT_RECURSION_LIMIT;
use crate::{DocumentationMode, Error, Feature, LanguageVersion, ParseOptions};

#[test]
fn defaults() {
    let options = ParseOptions::default();
    assert_eq!(options.language_version, LanguageVersion::LATEST);
    assert_eq!(options.documentation_mode, DocumentationMode::None);
    assert_eq!(options.recursion_limit, DEFAULT_RECURSION_LIMIT);
    assert_eq!(LanguageVersion::default(), LanguageVersion::V12);
}

#[test]
fn feature_gates_follow_version_table() {
    assert!(!LanguageVersion::V7.supports(Feature::RecursivePatterns));
    assert!(LanguageVersion::V8.supports(Feature::RecursivePatterns));
    assert!(!LanguageVersion::V8.supports(Feature::Records));
    assert!(LanguageVersion::V9.supports(Feature::TopLevelStatements));
    assert!(!LanguageVersion::V9.supports(Feature::FileScopedNamespaces));
    assert!(LanguageVersion::V10.supports(Feature::RecordStructs));
    assert!(!LanguageVersion::V10.supports(Feature::ListPatterns));
    assert!(LanguageVersion::V11.supports(Feature::CheckedOperators));
    assert!(!LanguageVersion::V11.supports(Feature::PrimaryConstructors));
    assert!(LanguageVersion::V12.supports(Feature::PrimaryConstructors));
}

#[test]
fn language_version_from_str() {
    assert_eq!("9".parse::<LanguageVersion>(), Ok(LanguageVersion::V9));
    assert_eq!("v10".parse::<LanguageVersion>(), Ok(LanguageVersion::V10));
    assert_eq!("latest".parse::<LanguageVersion>(), Ok(LanguageVersion::V12));
    assert_eq!(
        "13".parse::<LanguageVersion>(),
        Err(Error::InvalidLanguageVersion("13".to_string()))
    );
}

#[test]
fn documentation_mode_from_str() {
    assert_eq!(
        "Diagnose".parse::<DocumentationMode>(),
        Ok(DocumentationMode::Diagnose)
    );
    let err = "loud".parse::<DocumentationMode>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown documentation mode `loud`; expected `none`, `parse` or `diagnose`"
    );
}

#[test]
fn builder_methods() {
    let options = ParseOptions::new()
        .with_language_version(LanguageVersion::V8)
        .with_documentation_mode(DocumentationMode::Parse)
        .with_recursion_limit(16);
    assert_eq!(options.language_version, LanguageVersion::V8);
    assert_eq!(options.documentation_mode, DocumentationMode::Parse);
    assert_eq!(options.recursion_limit, 16);
    assert!(!options.supports(Feature::Records));
}

#[test]
fn options_json_round_trip() {
    let options = ParseOptions::default()
        .with_language_version(LanguageVersion::V9)
        .with_documentation_mode(DocumentationMode::Diagnose);
    let json = serde_json::to_string(&options).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"language_version":"9","documentation_mode":"diagnose","recursion_limit":256}"#
    );
    let back: ParseOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn options_json_fills_missing_fields() {
    let options: ParseOptions = serde_json::from_str(r#"{"language_version":"8"}"#).unwrap();
    assert_eq!(options.language_version, LanguageVersion::V8);
    assert_eq!(options.recursion_limit, DEFAULT_RECURSION_LIMIT);

    let unknown = serde_json::from_str::<ParseOptions>(r#"{"fuel":3}"#);
    assert!(unknown.is_err());
}
