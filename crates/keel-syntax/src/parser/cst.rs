//! Syntax kinds for Keel.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the parser).
//! Logos derives token recognition; contextual keywords and node kinds carry no lexer attributes.
//! Contextual keywords are lexed as `Ident` and re-tagged by the parser when it commits to them.
//! `KeelLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then the `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("?")]
    Question,
    #[token("??")]
    QuestionQuestion,
    #[token("??=")]
    QuestionQuestionEquals,
    #[token("?.")]
    QuestionDot,
    #[token("=")]
    Equals,
    #[token("==")]
    EqualsEquals,
    #[token("=>")]
    FatArrow,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEquals,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEquals,
    #[token("<<")]
    LessLess,
    #[token("<<=")]
    LessLessEquals,
    /// `>>` and `>>=` are never lexed; the parser joins adjacent `>` tokens.
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEquals,
    #[token("+")]
    Plus,
    #[token("+=")]
    PlusEquals,
    #[token("++")]
    PlusPlus,
    #[token("-")]
    Minus,
    #[token("-=")]
    MinusEquals,
    #[token("--")]
    MinusMinus,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEquals,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEquals,
    #[token("%")]
    Percent,
    #[token("%=")]
    PercentEquals,
    #[token("&")]
    Amp,
    #[token("&=")]
    AmpEquals,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("|=")]
    PipeEquals,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("^=")]
    CaretEquals,
    #[token("~")]
    Tilde,
    /// Joined by the parser from adjacent `>` `>`.
    GreaterGreater,
    /// Joined by the parser from adjacent `>` `>=`.
    GreaterGreaterEquals,

    // --- Reserved keywords ---
    #[token("abstract")]
    KwAbstract,
    #[token("as")]
    KwAs,
    #[token("base")]
    KwBase,
    #[token("bool")]
    KwBool,
    #[token("break")]
    KwBreak,
    #[token("byte")]
    KwByte,
    #[token("case")]
    KwCase,
    #[token("catch")]
    KwCatch,
    #[token("char")]
    KwChar,
    #[token("checked")]
    KwChecked,
    #[token("class")]
    KwClass,
    #[token("const")]
    KwConst,
    #[token("continue")]
    KwContinue,
    #[token("decimal")]
    KwDecimal,
    #[token("default")]
    KwDefault,
    #[token("delegate")]
    KwDelegate,
    #[token("do")]
    KwDo,
    #[token("double")]
    KwDouble,
    #[token("else")]
    KwElse,
    #[token("enum")]
    KwEnum,
    #[token("event")]
    KwEvent,
    #[token("explicit")]
    KwExplicit,
    #[token("extern")]
    KwExtern,
    #[token("false")]
    KwFalse,
    #[token("finally")]
    KwFinally,
    #[token("float")]
    KwFloat,
    #[token("for")]
    KwFor,
    #[token("foreach")]
    KwForeach,
    #[token("if")]
    KwIf,
    #[token("implicit")]
    KwImplicit,
    #[token("in")]
    KwIn,
    #[token("int")]
    KwInt,
    #[token("interface")]
    KwInterface,
    #[token("internal")]
    KwInternal,
    #[token("is")]
    KwIs,
    #[token("long")]
    KwLong,
    #[token("namespace")]
    KwNamespace,
    #[token("new")]
    KwNew,
    #[token("null")]
    KwNull,
    #[token("object")]
    KwObject,
    #[token("operator")]
    KwOperator,
    #[token("out")]
    KwOut,
    #[token("override")]
    KwOverride,
    #[token("params")]
    KwParams,
    #[token("private")]
    KwPrivate,
    #[token("protected")]
    KwProtected,
    #[token("public")]
    KwPublic,
    #[token("readonly")]
    KwReadonly,
    #[token("ref")]
    KwRef,
    #[token("return")]
    KwReturn,
    #[token("sbyte")]
    KwSbyte,
    #[token("sealed")]
    KwSealed,
    #[token("short")]
    KwShort,
    #[token("sizeof")]
    KwSizeof,
    #[token("static")]
    KwStatic,
    #[token("string")]
    KwString,
    #[token("struct")]
    KwStruct,
    #[token("switch")]
    KwSwitch,
    #[token("this")]
    KwThis,
    #[token("throw")]
    KwThrow,
    #[token("true")]
    KwTrue,
    #[token("try")]
    KwTry,
    #[token("typeof")]
    KwTypeof,
    #[token("uint")]
    KwUint,
    #[token("ulong")]
    KwUlong,
    #[token("unchecked")]
    KwUnchecked,
    #[token("ushort")]
    KwUshort,
    #[token("using")]
    KwUsing,
    #[token("virtual")]
    KwVirtual,
    #[token("void")]
    KwVoid,
    #[token("volatile")]
    KwVolatile,
    #[token("while")]
    KwWhile,

    // --- Contextual keywords (never produced by the lexer) ---
    KwAsync,
    KwAwait,
    KwRecord,
    KwWith,
    KwAnd,
    KwOr,
    KwNot,
    KwWhen,
    KwGet,
    KwSet,
    KwInit,
    KwPartial,
    KwWhere,
    KwYield,
    KwVar,
    KwFrom,
    KwSelect,
    KwLet,
    KwOrderBy,
    KwAscending,
    KwDescending,
    KwGroup,
    KwBy,

    /// Identifier, optionally `@`-escaped. Keywords win over this regex on equal length.
    #[regex(r"@?[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*[uUlL]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+[uUlL]*")]
    #[regex(r"0[bB][01_]+[uUlL]*")]
    IntLiteral,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdDmM]?")]
    #[regex(r"[0-9][0-9_]*[fFdDmM]")]
    RealLiteral,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r#"@"(?:[^"]|"")*""#)]
    StringLiteral,

    /// Interpolated strings are a single token; holes are not parsed.
    #[regex(r#"\$"(?:[^"\\\n]|\\.)*""#)]
    #[regex(r#"\$@"(?:[^"]|"")*""#)]
    #[regex(r#"@\$"(?:[^"]|"")*""#)]
    InterpolatedString,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    CharLiteral,

    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//([^/\n][^\n]*)?", allow_greedy = true)]
    #[regex(r"////[^\n]*", allow_greedy = true)]
    LineComment,

    /// `///` documentation comment. Plain trivia unless documentation mode is on.
    #[regex(r"///([^/\n][^\n]*)?", allow_greedy = true)]
    DocComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    /// Lookahead past the last token. Never stored in a token stream.
    Eof,

    // --- Node kinds (non-terminals) ---
    CompilationUnit,
    ExprFragment,
    StmtFragment,
    CrefFragment,
    Error,
    IncompleteMember,

    UsingDirective,
    NameEquals,
    NamespaceDecl,
    FileScopedNamespaceDecl,
    GlobalStatement,

    AttributeList,
    Attribute,
    AttributeArgList,
    AttributeArg,
    ModifierList,

    ClassDecl,
    StructDecl,
    InterfaceDecl,
    EnumDecl,
    RecordDecl,
    DelegateDecl,
    EnumMemberDecl,
    TypeParamList,
    TypeParam,
    BaseList,
    SimpleBaseType,
    PrimaryCtorBaseType,
    ConstraintClause,
    TypeConstraint,
    ClassOrStructConstraint,
    CtorConstraint,

    FieldDecl,
    EventFieldDecl,
    MethodDecl,
    CtorDecl,
    CtorInitializer,
    DtorDecl,
    PropertyDecl,
    IndexerDecl,
    AccessorList,
    Accessor,
    OperatorDecl,
    ConversionOperatorDecl,
    ParamList,
    BracketedParamList,
    Param,
    ArrowExprClause,
    EqualsValueClause,
    VarDecl,
    VarDeclarator,

    PredefinedType,
    IdentName,
    GenericName,
    TypeArgList,
    QualifiedName,
    AliasQualifiedName,
    ArrayType,
    ArrayRankSpecifier,
    NullableType,
    TupleType,
    TupleElement,

    Block,
    LocalDeclStmt,
    LocalFunctionStmt,
    ExprStmt,
    EmptyStmt,
    IfStmt,
    ElseClause,
    WhileStmt,
    DoStmt,
    ForStmt,
    ForeachStmt,
    SwitchStmt,
    SwitchSection,
    CaseLabel,
    CasePatternLabel,
    DefaultLabel,
    WhenClause,
    BreakStmt,
    ContinueStmt,
    ReturnStmt,
    ThrowStmt,
    TryStmt,
    CatchClause,
    CatchDecl,
    CatchFilter,
    FinallyClause,
    UsingStmt,
    YieldStmt,
    LabeledStmt,

    Literal,
    ParenExpr,
    TupleExpr,
    ArgList,
    BracketedArgList,
    Arg,
    NameColon,
    InvocationExpr,
    MemberAccessExpr,
    ConditionalAccessExpr,
    MemberBindingExpr,
    ElementBindingExpr,
    ElementAccessExpr,
    PostfixExpr,
    PrefixExpr,
    CastExpr,
    AwaitExpr,
    BinaryExpr,
    AssignmentExpr,
    ConditionalExpr,
    IsExpr,
    AsExpr,
    IsPatternExpr,
    SwitchExpr,
    SwitchArm,
    WithExpr,
    InitializerExpr,
    ObjectCreationExpr,
    ImplicitObjectCreationExpr,
    AnonymousObjectCreationExpr,
    ArrayCreationExpr,
    ImplicitArrayCreationExpr,
    ThisExpr,
    BaseExpr,
    TypeOfExpr,
    DefaultExpr,
    SizeOfExpr,
    CheckedExpr,
    ThrowExpr,
    SimpleLambdaExpr,
    ParenLambdaExpr,
    AnonymousMethodExpr,
    RangeExpr,
    DeclarationExpr,
    QueryExpr,
    FromClause,
    QueryBody,
    WhereClause,
    LetClause,
    OrderByClause,
    Ordering,
    SelectClause,
    GroupClause,

    ConstantPattern,
    DeclarationPattern,
    VarPattern,
    DiscardPattern,
    TypePattern,
    RelationalPattern,
    NotPattern,
    AndPattern,
    OrPattern,
    ParenPattern,
    RecursivePattern,
    PositionalPatternClause,
    PropertyPatternClause,
    Subpattern,
    ListPattern,
    SlicePattern,
    SingleVarDesignation,
    DiscardDesignation,
    ParenVarDesignation,

    TypeCref,
    QualifiedCref,
    NameMemberCref,
    IndexerMemberCref,
    OperatorMemberCref,
    CrefParamList,
    CrefBracketedParamList,
    CrefParam,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | Newline | LineComment | BlockComment | DocComment
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage | IncompleteMember)
    }

    /// Reserved words: never usable as identifiers without `@`.
    #[inline]
    pub fn is_reserved_keyword(self) -> bool {
        (KwAbstract as u16..=KwWhile as u16).contains(&(self as u16))
    }

    /// Kinds the parser assigns to identifier tokens it reclassifies.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        (KwAsync as u16..=KwBy as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= Eof as u16
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            IntLiteral
                | RealLiteral
                | StringLiteral
                | InterpolatedString
                | CharLiteral
                | KwTrue
                | KwFalse
                | KwNull
        )
    }

    #[inline]
    pub fn is_predefined_type(self) -> bool {
        matches!(
            self,
            KwBool
                | KwByte
                | KwChar
                | KwDecimal
                | KwDouble
                | KwFloat
                | KwInt
                | KwLong
                | KwObject
                | KwSbyte
                | KwShort
                | KwString
                | KwUint
                | KwUlong
                | KwUshort
                | KwVoid
        )
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            Equals
                | PlusEquals
                | MinusEquals
                | StarEquals
                | SlashEquals
                | PercentEquals
                | AmpEquals
                | PipeEquals
                | CaretEquals
                | LessLessEquals
                | GreaterGreaterEquals
                | QuestionQuestionEquals
        )
    }

    /// Operator tokens that can be overloaded in an operator declaration.
    #[inline]
    pub fn is_overloadable_operator(self) -> bool {
        matches!(
            self,
            Plus | Minus
                | Bang
                | Tilde
                | PlusPlus
                | MinusMinus
                | Star
                | Slash
                | Percent
                | Amp
                | Pipe
                | Caret
                | LessLess
                | GreaterGreater
                | EqualsEquals
                | BangEquals
                | Less
                | LessEquals
                | Greater
                | GreaterEquals
                | KwTrue
                | KwFalse
        )
    }

    /// Fixed source text of punctuation and keyword tokens, used in "expected" messages.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            BraceOpen => "{",
            BraceClose => "}",
            Semicolon => ";",
            Comma => ",",
            Dot => ".",
            DotDot => "..",
            Colon => ":",
            DoubleColon => "::",
            Question => "?",
            QuestionQuestion => "??",
            QuestionQuestionEquals => "??=",
            QuestionDot => "?.",
            Equals => "=",
            EqualsEquals => "==",
            FatArrow => "=>",
            Bang => "!",
            BangEquals => "!=",
            Less => "<",
            LessEquals => "<=",
            LessLess => "<<",
            LessLessEquals => "<<=",
            Greater => ">",
            GreaterEquals => ">=",
            Plus => "+",
            PlusEquals => "+=",
            PlusPlus => "++",
            Minus => "-",
            MinusEquals => "-=",
            MinusMinus => "--",
            Star => "*",
            StarEquals => "*=",
            Slash => "/",
            SlashEquals => "/=",
            Percent => "%",
            PercentEquals => "%=",
            Amp => "&",
            AmpEquals => "&=",
            AmpAmp => "&&",
            Pipe => "|",
            PipeEquals => "|=",
            PipePipe => "||",
            Caret => "^",
            CaretEquals => "^=",
            Tilde => "~",
            GreaterGreater => ">>",
            GreaterGreaterEquals => ">>=",
            KwAbstract => "abstract",
            KwAs => "as",
            KwBase => "base",
            KwBool => "bool",
            KwBreak => "break",
            KwByte => "byte",
            KwCase => "case",
            KwCatch => "catch",
            KwChar => "char",
            KwChecked => "checked",
            KwClass => "class",
            KwConst => "const",
            KwContinue => "continue",
            KwDecimal => "decimal",
            KwDefault => "default",
            KwDelegate => "delegate",
            KwDo => "do",
            KwDouble => "double",
            KwElse => "else",
            KwEnum => "enum",
            KwEvent => "event",
            KwExplicit => "explicit",
            KwExtern => "extern",
            KwFalse => "false",
            KwFinally => "finally",
            KwFloat => "float",
            KwFor => "for",
            KwForeach => "foreach",
            KwIf => "if",
            KwImplicit => "implicit",
            KwIn => "in",
            KwInt => "int",
            KwInterface => "interface",
            KwInternal => "internal",
            KwIs => "is",
            KwLong => "long",
            KwNamespace => "namespace",
            KwNew => "new",
            KwNull => "null",
            KwObject => "object",
            KwOperator => "operator",
            KwOut => "out",
            KwOverride => "override",
            KwParams => "params",
            KwPrivate => "private",
            KwProtected => "protected",
            KwPublic => "public",
            KwReadonly => "readonly",
            KwRef => "ref",
            KwReturn => "return",
            KwSbyte => "sbyte",
            KwSealed => "sealed",
            KwShort => "short",
            KwSizeof => "sizeof",
            KwStatic => "static",
            KwString => "string",
            KwStruct => "struct",
            KwSwitch => "switch",
            KwThis => "this",
            KwThrow => "throw",
            KwTrue => "true",
            KwTry => "try",
            KwTypeof => "typeof",
            KwUint => "uint",
            KwUlong => "ulong",
            KwUnchecked => "unchecked",
            KwUshort => "ushort",
            KwUsing => "using",
            KwVirtual => "virtual",
            KwVoid => "void",
            KwVolatile => "volatile",
            KwWhile => "while",
            KwAsync => "async",
            KwAwait => "await",
            KwRecord => "record",
            KwWith => "with",
            KwAnd => "and",
            KwOr => "or",
            KwNot => "not",
            KwWhen => "when",
            KwGet => "get",
            KwSet => "set",
            KwInit => "init",
            KwPartial => "partial",
            KwWhere => "where",
            KwYield => "yield",
            KwVar => "var",
            KwFrom => "from",
            KwSelect => "select",
            KwLet => "let",
            KwOrderBy => "orderby",
            KwAscending => "ascending",
            KwDescending => "descending",
            KwGroup => "group",
            KwBy => "by",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics: `` `;` `` for fixed tokens, a noun otherwise.
    pub fn describe(self) -> String {
        if let Some(text) = self.fixed_text() {
            return format!("`{text}`");
        }
        match self {
            Ident => "identifier".to_string(),
            IntLiteral | RealLiteral => "number".to_string(),
            StringLiteral | InterpolatedString => "string".to_string(),
            CharLiteral => "character literal".to_string(),
            Eof => "end of input".to_string(),
            other => format!("{other:?}"),
        }
    }

    pub(crate) fn from_raw(raw: u16) -> SyntaxKind {
        assert!(raw < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeelLang {}

impl Language for KeelLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw.0)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<KeelLang>;
pub type SyntaxToken = rowan::SyntaxToken<KeelLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

const TOKEN_SET_WORDS: usize = 4;
const TOKEN_SET_CAPACITY: u16 = (TOKEN_SET_WORDS * 64) as u16;

/// 256-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; TOKEN_SET_WORDS]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; TOKEN_SET_WORDS]);

    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(
                kind < TOKEN_SET_CAPACITY,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= TOKEN_SET_CAPACITY {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < TOKEN_SET_WORDS {
            bits[i] = self.0[i] | other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..TOKEN_SET_CAPACITY.min(__LAST as u16) {
            let kind = SyntaxKind::from_raw(i);
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet =
        TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment, DocComment]);

    pub const PREDEFINED_TYPES: TokenSet = TokenSet::new(&[
        KwBool, KwByte, KwChar, KwDecimal, KwDouble, KwFloat, KwInt, KwLong, KwObject, KwSbyte,
        KwShort, KwString, KwUint, KwUlong, KwUshort, KwVoid,
    ]);

    pub const MODIFIERS: TokenSet = TokenSet::new(&[
        KwAbstract,
        KwConst,
        KwExtern,
        KwInternal,
        KwNew,
        KwOverride,
        KwPrivate,
        KwProtected,
        KwPublic,
        KwReadonly,
        KwSealed,
        KwStatic,
        KwVirtual,
        KwVolatile,
    ]);

    pub const TYPE_DECL_KEYWORDS: TokenSet =
        TokenSet::new(&[KwClass, KwStruct, KwInterface, KwEnum, KwDelegate]);

    pub const LITERALS: TokenSet = TokenSet::new(&[
        IntLiteral,
        RealLiteral,
        StringLiteral,
        InterpolatedString,
        CharLiteral,
        KwTrue,
        KwFalse,
        KwNull,
    ]);

    /// FIRST set of expressions (contextual keywords arrive as `Ident`).
    pub const EXPR_FIRST: TokenSet = LITERALS
        .union(PREDEFINED_TYPES)
        .union(TokenSet::new(&[
            Ident,
            ParenOpen,
            Plus,
            Minus,
            Bang,
            Tilde,
            Caret,
            PlusPlus,
            MinusMinus,
            DotDot,
            KwThis,
            KwBase,
            KwNew,
            KwTypeof,
            KwDefault,
            KwSizeof,
            KwChecked,
            KwUnchecked,
            KwThrow,
            KwDelegate,
            KwRef,
            KwOut,
        ]));

    /// Statement keywords that always start a statement.
    pub const STMT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwIf, KwWhile, KwDo, KwFor, KwForeach, KwSwitch, KwBreak, KwContinue, KwReturn, KwThrow,
        KwTry, KwUsing, KwConst,
    ]);

    pub const STMT_FIRST: TokenSet =
        STMT_KEYWORDS.union(EXPR_FIRST).union(TokenSet::new(&[BraceOpen, Semicolon]));

    /// Tokens that can begin a member declaration in a type body.
    pub const MEMBER_FIRST: TokenSet = MODIFIERS
        .union(PREDEFINED_TYPES)
        .union(TYPE_DECL_KEYWORDS)
        .union(TokenSet::new(&[
            Ident,
            BracketOpen,
            ParenOpen,
            Tilde,
            KwEvent,
            KwImplicit,
            KwExplicit,
        ]));

    /// Recovery points inside a type body.
    pub const MEMBER_RECOVERY: TokenSet = MEMBER_FIRST.union(TokenSet::new(&[BraceClose]));

    /// Closers that end any enclosing list.
    pub const LIST_CLOSERS: TokenSet =
        TokenSet::new(&[ParenClose, BracketClose, BraceClose, Semicolon]);

    /// Tokens after which a type argument list is committed as generic.
    pub const TYPE_ARG_FOLLOW: TokenSet = TokenSet::new(&[
        ParenOpen,
        ParenClose,
        BracketClose,
        BraceClose,
        Colon,
        Semicolon,
        Comma,
        Dot,
        Question,
        QuestionDot,
        EqualsEquals,
        BangEquals,
        Pipe,
        Caret,
        AmpAmp,
        PipePipe,
        Amp,
        BracketOpen,
        Eof,
    ]);

    /// Tokens that can only continue a type or pattern, never begin a value.
    pub const PATTERN_CONTINUATION: TokenSet = TokenSet::new(&[
        BraceOpen,
        BracketOpen,
        ParenClose,
        BracketClose,
        BraceClose,
        Comma,
        Semicolon,
        FatArrow,
        Equals,
        Question,
        Eof,
    ]);

    /// After `T?`, tokens that confirm the `?` as a nullable suffix.
    pub const NULLABLE_FOLLOW: TokenSet = PATTERN_CONTINUATION.union(TokenSet::new(&[Greater]));

    /// Tokens that may follow a variable designation such as the `x` in `T? x`.
    pub const DESIGNATION_FOLLOW: TokenSet = TokenSet::new(&[
        ParenClose,
        Comma,
        Semicolon,
        BracketClose,
        BraceOpen,
        BraceClose,
        FatArrow,
        Equals,
        AmpAmp,
        PipePipe,
        Question,
        KwIn,
        Eof,
    ]);

    /// Tokens that can start a pattern (contextual `var`/`not` arrive as `Ident`).
    pub const PATTERN_FIRST: TokenSet = LITERALS.union(PREDEFINED_TYPES).union(TokenSet::new(&[
        Ident,
        ParenOpen,
        BraceOpen,
        BracketOpen,
        DotDot,
        Less,
        LessEquals,
        Greater,
        GreaterEquals,
        EqualsEquals,
        BangEquals,
        Minus,
        Plus,
        Tilde,
        Bang,
        KwDefault,
        KwTypeof,
        KwSizeof,
        KwThis,
        KwBase,
    ]));

    /// Tokens that may directly follow the `)` of a cast to a named type.
    pub const CAST_FOLLOW: TokenSet = LITERALS.union(PREDEFINED_TYPES).union(TokenSet::new(&[
        Ident,
        ParenOpen,
        Bang,
        Tilde,
        KwThis,
        KwBase,
        KwNew,
        KwTypeof,
        KwDefault,
        KwSizeof,
        KwChecked,
        KwUnchecked,
    ]));
}
