//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` of one kind and provides typed accessors.
//! Accessors return `None` rather than failing: recovered trees may lack any child.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(CompilationUnit, CompilationUnit);
ast_node!(UsingDirective, UsingDirective);
ast_node!(NamespaceDecl, NamespaceDecl);
ast_node!(FileScopedNamespaceDecl, FileScopedNamespaceDecl);
ast_node!(GlobalStatement, GlobalStatement);
ast_node!(ClassDecl, ClassDecl);
ast_node!(StructDecl, StructDecl);
ast_node!(InterfaceDecl, InterfaceDecl);
ast_node!(RecordDecl, RecordDecl);
ast_node!(EnumDecl, EnumDecl);
ast_node!(DelegateDecl, DelegateDecl);
ast_node!(MethodDecl, MethodDecl);
ast_node!(PropertyDecl, PropertyDecl);
ast_node!(FieldDecl, FieldDecl);
ast_node!(ModifierList, ModifierList);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(Block, Block);
ast_node!(LocalFunctionStmt, LocalFunctionStmt);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(ConditionalExpr, ConditionalExpr);
ast_node!(InvocationExpr, InvocationExpr);
ast_node!(SwitchExpr, SwitchExpr);
ast_node!(SwitchArm, SwitchArm);
ast_node!(WithExpr, WithExpr);

/// Any declaration that can appear among namespace or type members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl {
    Namespace(NamespaceDecl),
    FileScopedNamespace(FileScopedNamespaceDecl),
    Class(ClassDecl),
    Struct(StructDecl),
    Interface(InterfaceDecl),
    Record(RecordDecl),
    Enum(EnumDecl),
    Delegate(DelegateDecl),
    Method(MethodDecl),
    Property(PropertyDecl),
    Field(FieldDecl),
}

impl Decl {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::NamespaceDecl => NamespaceDecl::cast(node).map(Decl::Namespace),
            SyntaxKind::FileScopedNamespaceDecl => {
                FileScopedNamespaceDecl::cast(node).map(Decl::FileScopedNamespace)
            }
            SyntaxKind::ClassDecl => ClassDecl::cast(node).map(Decl::Class),
            SyntaxKind::StructDecl => StructDecl::cast(node).map(Decl::Struct),
            SyntaxKind::InterfaceDecl => InterfaceDecl::cast(node).map(Decl::Interface),
            SyntaxKind::RecordDecl => RecordDecl::cast(node).map(Decl::Record),
            SyntaxKind::EnumDecl => EnumDecl::cast(node).map(Decl::Enum),
            SyntaxKind::DelegateDecl => DelegateDecl::cast(node).map(Decl::Delegate),
            SyntaxKind::MethodDecl => MethodDecl::cast(node).map(Decl::Method),
            SyntaxKind::PropertyDecl => PropertyDecl::cast(node).map(Decl::Property),
            SyntaxKind::FieldDecl => FieldDecl::cast(node).map(Decl::Field),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Decl::Namespace(n) => n.as_cst(),
            Decl::FileScopedNamespace(n) => n.as_cst(),
            Decl::Class(n) => n.as_cst(),
            Decl::Struct(n) => n.as_cst(),
            Decl::Interface(n) => n.as_cst(),
            Decl::Record(n) => n.as_cst(),
            Decl::Enum(n) => n.as_cst(),
            Decl::Delegate(n) => n.as_cst(),
            Decl::Method(n) => n.as_cst(),
            Decl::Property(n) => n.as_cst(),
            Decl::Field(n) => n.as_cst(),
        }
    }

    /// Declared name. Fields name their first declarator; namespaces have no single token.
    pub fn name(&self) -> Option<SyntaxToken> {
        match self {
            Decl::Field(field) => field.names().next(),
            Decl::Namespace(_) | Decl::FileScopedNamespace(_) => None,
            other => ident_token(other.as_cst()),
        }
    }

    pub fn modifiers(&self) -> Option<ModifierList> {
        self.as_cst().children().find_map(ModifierList::cast)
    }
}

/// First `Ident` token among the direct children.
fn ident_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    token_of(node, SyntaxKind::Ident)
}

fn token_of(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

impl CompilationUnit {
    pub fn usings(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }

    pub fn decls(&self) -> impl Iterator<Item = Decl> + '_ {
        self.0.children().filter_map(Decl::cast)
    }

    pub fn global_statements(&self) -> impl Iterator<Item = GlobalStatement> + '_ {
        self.0.children().filter_map(GlobalStatement::cast)
    }
}

impl UsingDirective {
    pub fn is_static(&self) -> bool {
        token_of(&self.0, SyntaxKind::KwStatic).is_some()
    }

    /// `A` in `using A = N.T;`
    pub fn alias(&self) -> Option<SyntaxToken> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::NameEquals)
            .and_then(|n| ident_token(&n))
    }
}

impl NamespaceDecl {
    pub fn decls(&self) -> impl Iterator<Item = Decl> + '_ {
        self.0.children().filter_map(Decl::cast)
    }
}

impl RecordDecl {
    pub fn is_struct(&self) -> bool {
        token_of(&self.0, SyntaxKind::KwStruct).is_some()
    }

    pub fn param_list(&self) -> Option<ParamList> {
        self.0.children().find_map(ParamList::cast)
    }
}

impl ClassDecl {
    pub fn members(&self) -> impl Iterator<Item = Decl> + '_ {
        self.0.children().filter_map(Decl::cast)
    }
}

impl MethodDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident_token(&self.0)
    }

    pub fn modifiers(&self) -> Option<ModifierList> {
        self.0.children().find_map(ModifierList::cast)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        self.0.children().find_map(ParamList::cast)
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

impl FieldDecl {
    /// One name per declarator.
    pub fn names(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::VarDeclarator)
            .filter_map(|n| ident_token(&n))
    }
}

impl ModifierList {
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
    }

    pub fn has(&self, kind: SyntaxKind) -> bool {
        self.tokens().any(|t| t.kind() == kind)
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident_token(&self.0)
    }
}

impl Block {
    /// Statement nodes in order.
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

impl LocalFunctionStmt {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident_token(&self.0)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn rhs(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| !t.kind().is_trivia())
    }
}

impl ConditionalExpr {
    pub fn condition(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn when_true(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }

    pub fn when_false(&self) -> Option<SyntaxNode> {
        self.0.children().nth(2)
    }
}

impl InvocationExpr {
    pub fn callee(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn args(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::ArgList)
            .flat_map(|list| list.children().filter(|n| n.kind() == SyntaxKind::Arg))
    }
}

impl SwitchExpr {
    pub fn governing(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn arms(&self) -> impl Iterator<Item = SwitchArm> + '_ {
        self.0.children().filter_map(SwitchArm::cast)
    }
}

impl SwitchArm {
    pub fn pattern(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn has_guard(&self) -> bool {
        self.0
            .children()
            .any(|n| n.kind() == SyntaxKind::WhenClause)
    }
}

impl WithExpr {
    pub fn receiver(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn initializer(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::InitializerExpr)
    }
}
