//! Per-entity node payloads and the module import/export tables.
//!
//! Each entity kind carries its own payload shape. Shared structural concerns
//! (generic parameters, heritage clauses, member-name indexes, parameter
//! lists) are composed by value into whichever payload needs them; there is
//! no payload inheritance. Every field has a documented default, and the
//! defaults double as the "is this unset" witness for the result combiner.

use serde::{Deserialize, Serialize};

use crate::graph::node::EntityKind;

// ---------------------------------------------------------------------------
// Shared payload fragments
// ---------------------------------------------------------------------------

/// Generic type parameters, as written. Default: none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generics {
    pub params: Vec<String>,
}

/// Heritage clauses of a class: the raw supertype names as written in source.
/// Default: no supertypes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heritage {
    pub extends: Vec<String>,
    pub implements: Vec<String>,
}

/// Names of the members a container declares, in declaration order.
/// Default: empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberIndex {
    pub names: Vec<String>,
}

/// One parameter of a callable. `type_text` is the annotation as written,
/// empty when unannotated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub type_text: String,
}

/// Whether a callable completes synchronously or returns a promise/future.
/// Default: `Sync`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallCapability {
    #[default]
    Sync,
    Async,
}

/// Declared member visibility. Default: `Public`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

// ---------------------------------------------------------------------------
// Per-entity payloads
// ---------------------------------------------------------------------------

/// Payload of a class node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassData {
    pub generics: Generics,
    pub heritage: Heritage,
    /// Decorator names applied to the class, without arguments.
    pub decorators: Vec<String>,
    /// Parameter lists of the declared constructors (usually zero or one).
    pub constructors: Vec<Vec<Param>>,
    pub members: MemberIndex,
}

/// Payload of an interface node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceData {
    pub generics: Generics,
    /// Super-interfaces, as written. Interfaces may extend several.
    pub extends: Vec<String>,
    pub members: MemberIndex,
}

/// Payload of a free function node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionData {
    pub params: Vec<Param>,
    /// Return type annotation as written, empty when unannotated.
    pub return_type: String,
    pub call: CallCapability,
}

/// Payload shared by methods, accessors, and constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableData {
    pub params: Vec<Param>,
    pub return_type: String,
    pub visibility: Visibility,
    pub call: CallCapability,
    pub is_static: bool,
}

/// Payload of a property node (class property or interface signature).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyData {
    /// Declared type annotation as written, empty when unannotated.
    pub type_text: String,
    pub visibility: Visibility,
    pub readonly: bool,
}

/// Payload of a top-level variable node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableData {
    pub type_text: String,
    pub is_const: bool,
}

/// Payload of an enum node: its member names in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumData {
    pub members: Vec<String>,
}

/// Payload of a type-alias node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub generics: Generics,
    /// The aliased type expression as written, empty for placeholders.
    pub aliased: String,
}

/// Payload of a decorator node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratorData {}

/// Payload of the exported namespace binding of `export * as ns from X`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceImportData {
    /// The module specifier the binding forwards, as written.
    pub source: String,
}

/// Payload of an entity imported from an external package. Externals are
/// definitionally opaque; the package specifier is all there is to know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEntityData {
    pub package: String,
}

/// Payload of an external package addressed as a whole module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalModuleData {
    pub package: String,
}

// ---------------------------------------------------------------------------
// Module payload: kind + import/export tables
// ---------------------------------------------------------------------------

/// How the file declares itself. Default: a plain ES module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    #[default]
    EsModule,
    /// Contains a dotted namespace-style module declaration.
    Namespace,
    /// Contains a non-dotted ambient module declaration.
    Ambient,
}

/// One named-import entry: `import { name as alias } from source`.
/// `name` is the original declared name; `alias` the local binding, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedImport {
    pub source: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// One default-import entry: `import local from source`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultImport {
    pub source: String,
    pub local: String,
}

/// One namespace-import entry: `import * as alias from source`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceImportEntry {
    pub source: String,
    pub alias: String,
}

/// The module's aggregated import metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTable {
    pub named: Vec<NamedImport>,
    pub defaults: Vec<DefaultImport>,
    pub namespaces: Vec<NamespaceImportEntry>,
}

/// One named-export entry: the name visible to importers and the resolved
/// declaration's own name (they differ when the export carries an alias).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedExport {
    pub exported: String,
    pub original: String,
}

/// One named re-export entry: `export { name as alias } from source`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReExport {
    pub source: String,
    /// The resolved declaration's own name, kept for traceability.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// The module's aggregated export metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTable {
    pub named: Vec<NamedExport>,
    pub re_exports: Vec<ReExport>,
    /// Module specifiers forwarded wholesale by `export * from X`.
    pub wildcards: Vec<String>,
    /// The declared name of the default export, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Payload of a module node, and the `data` field of a [`MappingResult`].
///
/// [`MappingResult`]: crate::graph::MappingResult
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleData {
    /// The file path the module was mapped from. Empty for partial fragments
    /// produced by the import/export resolvers (first-wins on merge).
    pub path: String,
    pub module_kind: ModuleKind,
    pub imports: ImportTable,
    pub exports: ExportTable,
}

// ---------------------------------------------------------------------------
// The tagged payload union
// ---------------------------------------------------------------------------

/// Type-specific node payload: one variant per entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeData {
    Module(ModuleData),
    Class(ClassData),
    Interface(InterfaceData),
    Method(CallableData),
    Function(FunctionData),
    Property(PropertyData),
    Getter(CallableData),
    Setter(CallableData),
    Constructor(CallableData),
    Variable(VariableData),
    Enum(EnumData),
    #[serde(rename = "type")]
    TypeAlias(TypeAliasData),
    Decorator(DecoratorData),
    NamespaceImport(NamespaceImportData),
    ExternalImportEntity(ExternalEntityData),
    ExternalModule(ExternalModuleData),
}

impl NodeData {
    /// The entity kind this payload belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            NodeData::Module(_) => EntityKind::Module,
            NodeData::Class(_) => EntityKind::Class,
            NodeData::Interface(_) => EntityKind::Interface,
            NodeData::Method(_) => EntityKind::Method,
            NodeData::Function(_) => EntityKind::Function,
            NodeData::Property(_) => EntityKind::Property,
            NodeData::Getter(_) => EntityKind::Getter,
            NodeData::Setter(_) => EntityKind::Setter,
            NodeData::Constructor(_) => EntityKind::Constructor,
            NodeData::Variable(_) => EntityKind::Variable,
            NodeData::Enum(_) => EntityKind::Enum,
            NodeData::TypeAlias(_) => EntityKind::TypeAlias,
            NodeData::Decorator(_) => EntityKind::Decorator,
            NodeData::NamespaceImport(_) => EntityKind::NamespaceImport,
            NodeData::ExternalImportEntity(_) => EntityKind::ExternalImportEntity,
            NodeData::ExternalModule(_) => EntityKind::ExternalModule,
        }
    }

    /// The minimal (all-defaults) payload for a kind; what placeholder nodes
    /// carry: the type tag and nothing else.
    pub fn default_for(kind: EntityKind) -> NodeData {
        match kind {
            EntityKind::Module => NodeData::Module(ModuleData::default()),
            EntityKind::Class => NodeData::Class(ClassData::default()),
            EntityKind::Interface => NodeData::Interface(InterfaceData::default()),
            EntityKind::Method => NodeData::Method(CallableData::default()),
            EntityKind::Function => NodeData::Function(FunctionData::default()),
            EntityKind::Property => NodeData::Property(PropertyData::default()),
            EntityKind::Getter => NodeData::Getter(CallableData::default()),
            EntityKind::Setter => NodeData::Setter(CallableData::default()),
            EntityKind::Constructor => NodeData::Constructor(CallableData::default()),
            EntityKind::Variable => NodeData::Variable(VariableData::default()),
            EntityKind::Enum => NodeData::Enum(EnumData::default()),
            EntityKind::TypeAlias => NodeData::TypeAlias(TypeAliasData::default()),
            EntityKind::Decorator => NodeData::Decorator(DecoratorData::default()),
            EntityKind::NamespaceImport => {
                NodeData::NamespaceImport(NamespaceImportData::default())
            }
            EntityKind::ExternalImportEntity => {
                NodeData::ExternalImportEntity(ExternalEntityData::default())
            }
            EntityKind::ExternalModule => {
                NodeData::ExternalModule(ExternalModuleData::default())
            }
        }
    }
}
