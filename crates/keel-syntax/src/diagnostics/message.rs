use rowan::TextRange;
use serde::Serialize;

/// Diagnostic kinds, grouped by the taxonomy the parser reports.
///
/// Every kind has a stable code, a default severity and a message template with
/// positional `{0}`, `{1}`, ... placeholders filled from the diagnostic's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // A required terminal or construct is absent; recovery synthesized a placeholder
    ExpectedToken,
    ExpectedIdentifier,
    ExpectedExpression,
    ExpectedType,
    ExpectedPattern,
    ExpectedStatement,

    // Input contains something that cannot start any production here
    UnexpectedToken,
    InvalidMemberToken,
    UnexpectedArgumentList,
    NestingTooDeep,

    // Well-formed but gated by the configured language version
    FeatureNotAvailable,

    // Historically accepted placements, parsed and downgraded to warnings
    MisplacedUncheckedOperator,
    PartialModifierNotLast,

    // Documentation comments
    MalformedCref,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExpectedToken => "KS1001",
            Self::ExpectedIdentifier => "KS1002",
            Self::ExpectedExpression => "KS1003",
            Self::ExpectedType => "KS1004",
            Self::ExpectedPattern => "KS1005",
            Self::ExpectedStatement => "KS1006",
            Self::UnexpectedToken => "KS1010",
            Self::InvalidMemberToken => "KS1011",
            Self::UnexpectedArgumentList => "KS1012",
            Self::NestingTooDeep => "KS1020",
            Self::FeatureNotAvailable => "KS2001",
            Self::MisplacedUncheckedOperator => "KS3001",
            Self::PartialModifierNotLast => "KS3002",
            Self::MalformedCref => "KS4001",
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MisplacedUncheckedOperator | Self::PartialModifierNotLast | Self::MalformedCref => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Missing-token kinds: the parser inserted a zero-width placeholder.
    pub fn is_missing_token(&self) -> bool {
        matches!(
            self,
            Self::ExpectedToken
                | Self::ExpectedIdentifier
                | Self::ExpectedExpression
                | Self::ExpectedType
                | Self::ExpectedPattern
                | Self::ExpectedStatement
        )
    }

    /// Message template. `{N}` is replaced by the N-th argument.
    pub fn template(&self) -> &'static str {
        match self {
            Self::ExpectedToken => "{0} expected",
            Self::ExpectedIdentifier => "identifier expected",
            Self::ExpectedExpression => "expression expected",
            Self::ExpectedType => "type expected",
            Self::ExpectedPattern => "pattern expected",
            Self::ExpectedStatement => "statement expected",
            Self::UnexpectedToken => "unexpected token {0}",
            Self::InvalidMemberToken => "invalid token {0} in member declaration",
            Self::UnexpectedArgumentList => {
                "unexpected argument list; `{0}` does not declare a parameter list"
            }
            Self::NestingTooDeep => "nesting too deep; the rest of the input was not parsed",
            Self::FeatureNotAvailable => {
                "feature `{0}` is not available in language version {1}; use version {2} or later"
            }
            Self::MisplacedUncheckedOperator => {
                "`unchecked` has no effect in an operator declaration and is ignored"
            }
            Self::PartialModifierNotLast => {
                "the `partial` modifier should appear immediately before the declaration keyword"
            }
            Self::MalformedCref => "malformed cref `{0}`",
        }
    }

    /// Render the template with positional arguments.
    ///
    /// Placeholders without a matching argument are left as they are.
    pub fn format(&self, args: &[String]) -> String {
        let mut out = self.template().to_string();
        for (i, arg) in args.iter().enumerate() {
            out = out.replace(&format!("{{{i}}}"), arg);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output). Zero-width for missing tokens.
    pub(crate) range: TextRange,
    pub(crate) args: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            args: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn message(&self) -> String {
        self.kind.format(&self.args)
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// Flattened, serializable view.
    pub fn to_record(&self) -> DiagnosticRecord {
        DiagnosticRecord {
            code: self.code(),
            severity: self.severity(),
            start: self.range.start().into(),
            end: self.range.end().into(),
            message: self.message(),
        }
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] at {}..{}: {}",
            self.severity(),
            self.code(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message()
        )
    }
}

/// JSON shape of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub code: &'static str,
    pub severity: Severity,
    pub start: u32,
    pub end: u32,
    pub message: String,
}
