//! Parse configuration.
//!
//! `ParseOptions` is an immutable value threaded through every parse; nothing
//! here is global, so parses under different configurations can run side by side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Language version gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum LanguageVersion {
    #[serde(rename = "7")]
    V7,
    #[serde(rename = "8")]
    V8,
    #[serde(rename = "9")]
    V9,
    #[serde(rename = "10")]
    V10,
    #[serde(rename = "11")]
    V11,
    #[default]
    #[serde(rename = "12")]
    V12,
}

impl LanguageVersion {
    pub const LATEST: LanguageVersion = LanguageVersion::V12;

    pub const ALL: [LanguageVersion; 6] = [
        LanguageVersion::V7,
        LanguageVersion::V8,
        LanguageVersion::V9,
        LanguageVersion::V10,
        LanguageVersion::V11,
        LanguageVersion::V12,
    ];

    pub fn number(self) -> u32 {
        match self {
            LanguageVersion::V7 => 7,
            LanguageVersion::V8 => 8,
            LanguageVersion::V9 => 9,
            LanguageVersion::V10 => 10,
            LanguageVersion::V11 => 11,
            LanguageVersion::V12 => 12,
        }
    }

    pub fn supports(self, feature: Feature) -> bool {
        self >= feature.required_version()
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for LanguageVersion {
    type Err = Error;

    /// Accepts `7`..`12`, an optional `v` prefix, and `latest`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("latest") {
            return Ok(LanguageVersion::LATEST);
        }
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        LanguageVersion::ALL
            .into_iter()
            .find(|v| digits.parse::<u32>().ok() == Some(v.number()))
            .ok_or_else(|| Error::InvalidLanguageVersion(s.to_string()))
    }
}

/// Version-gated language features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    RecursivePatterns,
    SwitchExpressions,
    UsingDeclarations,
    StaticLocalFunctions,
    Ranges,
    NullCoalescingAssignment,
    Records,
    TopLevelStatements,
    PatternCombinators,
    RelationalPatterns,
    InitAccessors,
    WithExpressions,
    TargetTypedNew,
    FileScopedNamespaces,
    RecordStructs,
    ExtendedPropertyPatterns,
    ListPatterns,
    CheckedOperators,
    PrimaryConstructors,
}

impl Feature {
    pub fn required_version(self) -> LanguageVersion {
        use Feature::*;
        match self {
            RecursivePatterns
            | SwitchExpressions
            | UsingDeclarations
            | StaticLocalFunctions
            | Ranges
            | NullCoalescingAssignment => LanguageVersion::V8,
            Records
            | TopLevelStatements
            | PatternCombinators
            | RelationalPatterns
            | InitAccessors
            | WithExpressions
            | TargetTypedNew => LanguageVersion::V9,
            FileScopedNamespaces | RecordStructs | ExtendedPropertyPatterns => LanguageVersion::V10,
            ListPatterns | CheckedOperators => LanguageVersion::V11,
            PrimaryConstructors => LanguageVersion::V12,
        }
    }

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        use Feature::*;
        match self {
            RecursivePatterns => "recursive patterns",
            SwitchExpressions => "switch expressions",
            UsingDeclarations => "using declarations",
            StaticLocalFunctions => "static local functions",
            Ranges => "ranges",
            NullCoalescingAssignment => "null-coalescing assignment",
            Records => "records",
            TopLevelStatements => "top-level statements",
            PatternCombinators => "pattern combinators",
            RelationalPatterns => "relational patterns",
            InitAccessors => "init accessors",
            WithExpressions => "with expressions",
            TargetTypedNew => "target-typed new",
            FileScopedNamespaces => "file-scoped namespaces",
            RecordStructs => "record structs",
            ExtendedPropertyPatterns => "extended property patterns",
            ListPatterns => "list patterns",
            CheckedOperators => "checked operators",
            PrimaryConstructors => "primary constructors",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How `///` comments are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentationMode {
    /// Plain trivia.
    #[default]
    None,
    /// `cref` attributes are parsed; no diagnostics.
    Parse,
    /// `cref` attributes are parsed and malformed ones are reported as warnings.
    Diagnose,
}

impl fmt::Display for DocumentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentationMode::None => write!(f, "none"),
            DocumentationMode::Parse => write!(f, "parse"),
            DocumentationMode::Diagnose => write!(f, "diagnose"),
        }
    }
}

impl FromStr for DocumentationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DocumentationMode::None),
            "parse" => Ok(DocumentationMode::Parse),
            "diagnose" => Ok(DocumentationMode::Diagnose),
            _ => Err(Error::InvalidDocumentationMode(s.to_string())),
        }
    }
}

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    pub language_version: LanguageVersion,
    pub documentation_mode: DocumentationMode,
    pub recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            language_version: LanguageVersion::LATEST,
            documentation_mode: DocumentationMode::None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_version(mut self, version: LanguageVersion) -> Self {
        self.language_version = version;
        self
    }

    pub fn with_documentation_mode(mut self, mode: DocumentationMode) -> Self {
        self.documentation_mode = mode;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.language_version.supports(feature)
    }
}
