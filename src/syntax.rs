//! The consumed front-end interface.
//!
//! The parsing/symbol-resolution front end is an external collaborator; this
//! module defines exactly what it must hand over per file: top-level
//! declaration facts, import/export clauses, and a [`SymbolResolver`] that
//! can follow an identifier or specifier back to its originating declaration.
//! Mapping performs no I/O of its own; everything it needs is in these
//! values.

use serde::{Deserialize, Serialize};

use crate::graph::node::EntityKind;
use crate::graph::payload::{Param, Visibility};
use crate::ident::Span;

// ---------------------------------------------------------------------------
// Syntactic construct kinds
// ---------------------------------------------------------------------------

/// The syntactic kind of a parsed construct, as reported by the front end.
///
/// `Other` carries any kind outside the closed set; the classifier rejects it
/// rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructKind {
    ClassDeclaration,
    InterfaceDeclaration,
    FunctionDeclaration,
    ArrowFunction,
    FunctionExpression,
    MethodDeclaration,
    GetAccessor,
    SetAccessor,
    ConstructorDeclaration,
    PropertyDeclaration,
    PropertySignature,
    VariableDeclaration,
    EnumDeclaration,
    TypeAliasDeclaration,
    Decorator,
    ModuleDeclaration,
    /// A construct kind the front end saw but this core does not model.
    Other(String),
}

impl Default for ConstructKind {
    fn default() -> Self {
        ConstructKind::VariableDeclaration
    }
}

// ---------------------------------------------------------------------------
// Declaration facts
// ---------------------------------------------------------------------------

/// A member of a class or interface body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub construct: ConstructKind,
    pub span: Span,
    pub params: Vec<Param>,
    pub return_type: String,
    /// Declared type annotation for properties/signatures.
    pub type_text: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_async: bool,
    pub readonly: bool,
}

/// A top-level declaration, flattened into the facts the mappers consume.
///
/// Fields irrelevant to a given construct kind stay at their defaults; the
/// classifier and factories pick what applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub construct: ConstructKind,
    pub span: Span,
    /// Set for `export class X` / `export const y` style direct exports.
    pub exported: bool,
    /// Set for `export default ...`.
    pub default_export: bool,
    pub decorators: Vec<String>,
    pub generics: Vec<String>,
    /// Supertype names as written (`extends` clause).
    pub extends: Vec<String>,
    /// Implemented interface names as written (classes only).
    pub implements: Vec<String>,
    pub members: Vec<Member>,
    pub params: Vec<Param>,
    pub return_type: String,
    pub is_async: bool,
    /// Declared type annotation (variables).
    pub declared_type: String,
    pub is_const: bool,
    /// Aliased type expression (type aliases).
    pub aliased_type: String,
    /// Member names (enums).
    pub enum_members: Vec<String>,
}

// ---------------------------------------------------------------------------
// Import / export clauses
// ---------------------------------------------------------------------------

/// One named specifier of an import clause: `{ name as alias }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSpecifier {
    /// The original exported name.
    pub name: String,
    /// The local binding, when it differs from `name`.
    pub alias: Option<String>,
}

/// One import statement, already split into its three possible parts.
/// `import def, { a as b } from "x"` carries both `default` and `named`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportClause {
    /// The raw module specifier string as written.
    pub specifier: String,
    pub named: Vec<NamedSpecifier>,
    /// The local binding of a default import.
    pub default: Option<String>,
    /// The local binding of a namespace import (`* as ns`).
    pub namespace: Option<String>,
}

/// One entry of an export clause: `{ name as alias }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSpecifier {
    /// The declaration name on the source side.
    pub name: String,
    /// The name visible to importers, when it differs.
    pub alias: Option<String>,
}

/// One standalone export statement. Direct exports (`export class X`) are not
/// clauses; they arrive as flags on the [`Declaration`] itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportClause {
    /// `export { ... }`, optionally `from <source>` (a named re-export).
    Named {
        entries: Vec<ExportSpecifier>,
        source: Option<String>,
    },
    /// `export * from <source>`, optionally `as <alias>`.
    Wildcard {
        source: String,
        alias: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// The parsed file
// ---------------------------------------------------------------------------

/// Everything the front end reports for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModule {
    /// Path of the file, as the front end addresses it.
    pub path: String,
    /// Span of the whole file, first to last character.
    pub span: Span,
    /// Names of namespace-style module declarations found in the file.
    /// A dotted name marks the file as a namespace module; a non-dotted one
    /// as an ambient module.
    pub module_declarations: Vec<String>,
    pub declarations: Vec<Declaration>,
    pub imports: Vec<ImportClause>,
    pub exports: Vec<ExportClause>,
}

// ---------------------------------------------------------------------------
// Symbol resolution
// ---------------------------------------------------------------------------

/// Where a module specifier leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleTarget {
    /// A file of the analyzed project.
    Local { file: String },
    /// An external package; `package` is the raw specifier.
    External { package: String },
    /// Nothing the front end knows about.
    Unresolved,
}

/// Where a named symbol leads, after following any re-export alias chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The originating declaration: its owning file, its *declared* name
    /// (aliases already unwound), and its syntactic kind.
    Local {
        file: String,
        name: String,
        construct: ConstructKind,
    },
    /// Declared by an external package.
    External { package: String },
    Unresolved,
}

/// The symbol-resolution capability the front end must provide.
///
/// Implementations are expected to be pure lookups over already-parsed state;
/// the mappers call them synchronously and never cache across files.
pub trait SymbolResolver {
    /// Resolve a module specifier as seen from `from`.
    fn resolve_module(&self, from: &str, specifier: &str) -> ModuleTarget;

    /// Resolve a named symbol visible from `from` to its originating
    /// declaration, following aliasing. The lookup goes through `specifier`
    /// when one is given (import/re-export), otherwise through the file's
    /// own scope.
    fn resolve_symbol(&self, from: &str, specifier: Option<&str>, name: &str) -> Resolution;

    /// The declared name of `file`'s default export, if it is of the given
    /// entity kind. Drives the fixed-order default-import probe.
    fn default_export_of(&self, file: &str, kind: EntityKind) -> Option<String>;
}
