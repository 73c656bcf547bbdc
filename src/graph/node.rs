use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::payload::NodeData;
use crate::ident::SourceLocation;

/// The closed set of entity types a node can represent.
///
/// The serialized tag of each variant is also its on-ID tag (the middle
/// component of `<owner>::<tag>::<name>`), so the two can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// A source file mapped as a module.
    Module,
    /// A class declaration.
    Class,
    /// An interface declaration.
    Interface,
    /// A class method.
    Method,
    /// A free function (declaration, arrow, or function expression).
    Function,
    /// A class property or interface property/method signature.
    Property,
    /// A `get` accessor.
    Getter,
    /// A `set` accessor.
    Setter,
    /// A class constructor.
    Constructor,
    /// A top-level variable declaration.
    Variable,
    /// An enum declaration.
    Enum,
    /// A type alias declaration.
    #[serde(rename = "type")]
    TypeAlias,
    /// A decorator.
    Decorator,
    /// The exported namespace binding of `export * as ns from X`.
    NamespaceImport,
    /// A named or default entity imported from an external package.
    /// Internals of external packages are never indexed.
    ExternalImportEntity,
    /// An external package addressed as a whole module
    /// (`import * as ns from "pkg"`, `export * from "pkg"`).
    ExternalModule,
}

impl EntityKind {
    /// The tag used inside node IDs.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Module => "module",
            EntityKind::Class => "class",
            EntityKind::Interface => "interface",
            EntityKind::Method => "method",
            EntityKind::Function => "function",
            EntityKind::Property => "property",
            EntityKind::Getter => "getter",
            EntityKind::Setter => "setter",
            EntityKind::Constructor => "constructor",
            EntityKind::Variable => "variable",
            EntityKind::Enum => "enum",
            EntityKind::TypeAlias => "type",
            EntityKind::Decorator => "decorator",
            EntityKind::NamespaceImport => "namespace-import",
            EntityKind::ExternalImportEntity => "external-import-entity",
            EntityKind::ExternalModule => "external-module",
        }
    }

    /// The fixed probe order for default-import resolution: one entry per
    /// entity type that can be default-exported.
    pub const DEFAULT_EXPORTABLE: [EntityKind; 6] = [
        EntityKind::Class,
        EntityKind::Function,
        EntityKind::Variable,
        EntityKind::Enum,
        EntityKind::Interface,
        EntityKind::TypeAlias,
    ];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Visibility classification of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Declared in the file, not exported.
    #[default]
    Internal,
    /// Reachable through a named export.
    NamedExport,
    /// The file's default export.
    DefaultExport,
    /// Owned by an external package.
    External,
}

/// Resolution state of a node.
///
/// A `Placeholder` node exists only because something referenced it; the
/// fragment that processes the owning declaration produces a `Resolved` node
/// with the identical ID, and reconciling the two is the project-level
/// aggregator's job, not this crate's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Resolved,
    Placeholder,
}

/// A vertex in the extracted code graph.
///
/// Immutable once constructed: mappers return fresh nodes upward and never
/// touch them again. Identity lives entirely in `id`; `location` is
/// diagnostics-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Deterministic ID: `<owner>::<kind-tag>::<name>`.
    pub id: String,
    /// The declared name. For imported entities this is the original declared
    /// name, never the local alias.
    pub name: String,
    pub kind: EntityKind,
    pub scope: Scope,
    pub status: Status,
    /// Source position, when the construct was seen directly. Placeholders
    /// referencing other files carry `None`.
    pub location: Option<SourceLocation>,
    /// Type-specific payload; a placeholder carries its kind's default.
    pub data: NodeData,
}
