use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range of a node in its source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Root node of one parsed file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub imports: Vec<ImportDecl>,
    pub re_exports: Vec<ReExport>,
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Find a top-level interface, type alias or enum by name
    pub fn find_declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|decl| decl.name() == name)
    }

    /// The declaration marked `export default`, if any
    pub fn default_export(&self) -> Option<&Declaration> {
        self.declarations.iter().find(|decl| decl.is_default_export())
    }

    /// Names of all declarations in source order
    pub fn declaration_names(&self) -> Vec<&str> {
        self.declarations.iter().map(|decl| decl.name()).collect()
    }

    /// Find the import that binds `local_name` in this file
    pub fn find_named_import(&self, local_name: &str) -> Option<(&ImportDecl, &ImportSpecifier)> {
        self.imports.iter().find_map(|import| {
            import
                .names
                .iter()
                .find(|spec| spec.local == local_name)
                .map(|spec| (import, spec))
        })
    }

    /// Find the `import X from "..."` that binds `local_name`
    pub fn find_default_import(&self, local_name: &str) -> Option<&ImportDecl> {
        self.imports
            .iter()
            .find(|import| import.default.as_deref() == Some(local_name))
    }

    /// Find the `import * as ns from "..."` that binds `alias`
    pub fn find_namespace_import(&self, alias: &str) -> Option<&ImportDecl> {
        self.imports
            .iter()
            .find(|import| import.namespace.as_deref() == Some(alias))
    }
}

/// `import ... from "specifier"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub specifier: String,
    pub type_only: bool,
    pub default: Option<String>,
    pub namespace: Option<String>,
    pub names: Vec<ImportSpecifier>,
    pub span: Span,
}

/// One `imported as local` binding of an import or re-export list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpecifier {
    pub imported: String,
    pub local: String,
    pub type_only: bool,
}

/// `export { A as B } from "specifier"` or `export * from "specifier"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReExport {
    pub specifier: String,
    /// `None` for `export *`
    pub names: Option<Vec<ImportSpecifier>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Interface,
    #[serde(rename = "type")]
    TypeAlias,
    Enum,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Interface => write!(f, "interface"),
            DeclarationKind::TypeAlias => write!(f, "type"),
            DeclarationKind::Enum => write!(f, "enum"),
        }
    }
}

/// Top-level named declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Declaration {
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    Enum(EnumDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(decl) => &decl.name,
            Declaration::TypeAlias(decl) => &decl.name,
            Declaration::Enum(decl) => &decl.name,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::TypeAlias(_) => DeclarationKind::TypeAlias,
            Declaration::Enum(_) => DeclarationKind::Enum,
        }
    }

    pub fn documentation(&self) -> Option<&str> {
        match self {
            Declaration::Interface(decl) => decl.documentation.as_deref(),
            Declaration::TypeAlias(decl) => decl.documentation.as_deref(),
            Declaration::Enum(decl) => decl.documentation.as_deref(),
        }
    }

    /// Declared type parameters (enums have none)
    pub fn type_params(&self) -> &[TypeParam] {
        match self {
            Declaration::Interface(decl) => &decl.type_params,
            Declaration::TypeAlias(decl) => &decl.type_params,
            Declaration::Enum(_) => &[],
        }
    }

    pub fn find_type_param(&self, name: &str) -> Option<&TypeParam> {
        self.type_params().iter().find(|param| param.name == name)
    }

    pub fn is_exported(&self) -> bool {
        match self {
            Declaration::Interface(decl) => decl.exported,
            Declaration::TypeAlias(decl) => decl.exported,
            Declaration::Enum(decl) => decl.exported,
        }
    }

    pub fn is_default_export(&self) -> bool {
        match self {
            Declaration::Interface(decl) => decl.default_export,
            Declaration::TypeAlias(_) => false,
            Declaration::Enum(_) => false,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Declaration::Interface(decl) => decl.span,
            Declaration::TypeAlias(decl) => decl.span,
            Declaration::Enum(decl) => decl.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub type_params: Vec<TypeParam>,
    /// Heritage clauses, each a type reference
    pub extends: Vec<TypeNode>,
    pub members: Vec<TypeMember>,
    pub documentation: Option<String>,
    pub exported: bool,
    pub default_export: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: String,
    pub type_params: Vec<TypeParam>,
    pub ty: TypeNode,
    pub documentation: Option<String>,
    pub exported: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    pub is_const: bool,
    pub members: Vec<EnumMember>,
    pub documentation: Option<String>,
    pub exported: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    /// Literal initializer; computed initializers are not evaluated
    pub initializer: Option<Literal>,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Option<TypeNode>,
    pub default: Option<TypeNode>,
}

/// Member of an interface body or object type literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member")]
pub enum TypeMember {
    Property(PropertySignature),
    Method(MethodSignature),
    Index(IndexSignature),
    Call(CallSignature),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: String,
    pub optional: bool,
    pub readonly: bool,
    /// `None` when the property has no annotation (implicitly `any`)
    pub ty: Option<TypeNode>,
    pub documentation: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub optional: bool,
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeNode>,
    pub documentation: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSignature {
    pub key_name: String,
    pub key_type: TypeNode,
    pub value_type: TypeNode,
    pub readonly: bool,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSignature {
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeNode>,
    pub is_construct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub optional: bool,
    pub rest: bool,
    pub ty: Option<TypeNode>,
}

/// A type expression together with its verbatim source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeNode {
    pub kind: TypeKind,
    pub text: String,
    pub span: Span,
}

impl TypeNode {
    pub fn new(kind: TypeKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Build a node that has no source location; its text is rendered
    pub fn synthetic(kind: TypeKind) -> Self {
        let text = crate::printer::render_kind(&kind);
        Self {
            kind,
            text,
            span: Span::default(),
        }
    }

    /// Reference to a named type without type arguments
    pub fn reference(name: impl Into<String>) -> Self {
        Self::synthetic(TypeKind::Reference {
            name: name.into(),
            type_args: Vec::new(),
        })
    }

    pub fn keyword(keyword: Keyword) -> Self {
        Self::synthetic(TypeKind::Keyword(keyword))
    }

    pub fn literal(literal: Literal) -> Self {
        Self::synthetic(TypeKind::Literal(literal))
    }

    /// Strip any number of surrounding parentheses
    pub fn unparenthesized(&self) -> &TypeNode {
        match &self.kind {
            TypeKind::Parenthesized(inner) => inner.unparenthesized(),
            _ => self,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.unparenthesized().kind, TypeKind::Keyword(k) if *k == keyword)
    }

    /// Name of a plain reference, ignoring type arguments
    pub fn reference_name(&self) -> Option<&str> {
        match &self.unparenthesized().kind {
            TypeKind::Reference { name, .. } => Some(name),
            _ => None,
        }
    }

    /// `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        self.is_keyword(Keyword::Null) || self.is_keyword(Keyword::Undefined)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypeKind {
    Keyword(Keyword),
    Literal(Literal),
    /// Template literal type, kept as raw text
    TemplateLiteral(String),
    Reference {
        name: String,
        type_args: Vec<TypeNode>,
    },
    Array(Box<TypeNode>),
    Tuple(Vec<TupleElement>),
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    TypeLiteral(Vec<TypeMember>),
    Mapped(Box<MappedType>),
    Parenthesized(Box<TypeNode>),
    Function {
        params: Vec<Parameter>,
        return_type: Box<TypeNode>,
        is_construct: bool,
    },
    Operator {
        operator: TypeOperator,
        ty: Box<TypeNode>,
    },
    IndexedAccess {
        object: Box<TypeNode>,
        index: Box<TypeNode>,
    },
    Conditional {
        check: Box<TypeNode>,
        extends: Box<TypeNode>,
        true_type: Box<TypeNode>,
        false_type: Box<TypeNode>,
    },
    /// `typeof entity`
    Query(String),
    /// `infer X`
    Infer(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleElement {
    pub label: Option<String>,
    pub optional: bool,
    pub rest: bool,
    pub ty: TypeNode,
}

/// `{ [K in Constraint as NameType]?: T }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedType {
    pub param: String,
    pub constraint: TypeNode,
    pub name_type: Option<TypeNode>,
    pub readonly: bool,
    /// `Some(true)` for `?`/`+?`, `Some(false)` for `-?`
    pub optional: Option<bool>,
    pub ty: Option<TypeNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeOperator {
    KeyOf,
    Readonly,
    Unique,
}

impl TypeOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeOperator::KeyOf => "keyof",
            TypeOperator::Readonly => "readonly",
            TypeOperator::Unique => "unique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Object,
    This,
}

impl Keyword {
    pub fn from_name(name: &str) -> Option<Self> {
        let keyword = match name {
            "string" => Keyword::String,
            "number" => Keyword::Number,
            "boolean" => Keyword::Boolean,
            "bigint" => Keyword::BigInt,
            "symbol" => Keyword::Symbol,
            "any" => Keyword::Any,
            "unknown" => Keyword::Unknown,
            "never" => Keyword::Never,
            "void" => Keyword::Void,
            "undefined" => Keyword::Undefined,
            "null" => Keyword::Null,
            "object" => Keyword::Object,
            "this" => Keyword::This,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::String => "string",
            Keyword::Number => "number",
            Keyword::Boolean => "boolean",
            Keyword::BigInt => "bigint",
            Keyword::Symbol => "symbol",
            Keyword::Any => "any",
            Keyword::Unknown => "unknown",
            Keyword::Never => "never",
            Keyword::Void => "void",
            Keyword::Undefined => "undefined",
            Keyword::Null => "null",
            Keyword::Object => "object",
            Keyword::This => "this",
        }
    }
}

/// Literal value in a type position or enum initializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Literal {
    /// The literal as a property key: strings unquoted, numbers in their
    /// shortest decimal form
    pub fn as_key(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Number(n) => format_number(*n),
            Literal::Boolean(b) => b.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Literal::Number(n) => write!(f, "{}", format_number(*n)),
            Literal::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Render a number without a trailing `.0` for integral values
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
