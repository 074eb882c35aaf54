//! Keel syntax: a loss-less, error-tolerant parser for the Keel language.
//!
//! # Example
//!
//! ```
//! use keel_syntax::{ParseOptions, parse};
//!
//! let source = "class C { async void M() { } }";
//! let parse = parse(source, &ParseOptions::default());
//!
//! assert_eq!(parse.syntax().to_string(), source);
//! assert!(parse.diagnostics().is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod options;
pub mod parser;

#[cfg(test)]
mod options_tests;

pub use diagnostics::{
    DiagnosticKind, DiagnosticMessage, DiagnosticRecord, Diagnostics, DiagnosticsPrinter, Severity,
};
pub use options::{DocumentationMode, Feature, LanguageVersion, ParseOptions};
pub use parser::{
    DocCref, Parse, SyntaxKind, SyntaxNode, SyntaxToken, TreePrinter, parse, parse_cref,
    parse_expression, parse_statement, parse_tokens,
};

/// Errors from fallible configuration operations.
///
/// Parsing itself never fails; syntax errors are reported through [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown language version `{0}`; expected one of 7, 8, 9, 10, 11, 12 or `latest`")]
    InvalidLanguageVersion(String),

    #[error("unknown documentation mode `{0}`; expected `none`, `parse` or `diagnose`")]
    InvalidDocumentationMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
