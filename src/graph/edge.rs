use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ident;

/// The closed vocabulary of relationships between two nodes.
///
/// As with entity kinds, the serialized tag doubles as the on-ID tag (the
/// middle component of `<source>--><tag>--><target>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeLabel {
    /// Module -> declaration, or declaration -> member.
    Contains,
    /// Module -> entity reachable through a named export.
    ExportsNamed,
    /// Module -> its default-exported entity.
    ExportsDefault,
    /// Importing module -> the imported entity's node in its defining file.
    ImportsNamed,
    /// Importing module -> the target file's default-exported entity.
    ImportsDefault,
    /// Importing module -> the target file's module node (whole-module bind).
    ImportsNamespace,
    /// Class -> superclass, or interface -> super-interface.
    Extends,
    /// Class -> implemented interface.
    Implements,
    /// A binding -> the entity it aliases (namespace re-export binding).
    AliasOf,
    /// Re-exporting module -> the forwarded entity or module.
    ReExports,
}

impl EdgeLabel {
    /// The tag used inside edge IDs.
    pub fn tag(self) -> &'static str {
        match self {
            EdgeLabel::Contains => "contains",
            EdgeLabel::ExportsNamed => "exports-named",
            EdgeLabel::ExportsDefault => "exports-default",
            EdgeLabel::ImportsNamed => "imports-named",
            EdgeLabel::ImportsDefault => "imports-default",
            EdgeLabel::ImportsNamespace => "imports-namespace",
            EdgeLabel::Extends => "extends",
            EdgeLabel::Implements => "implements",
            EdgeLabel::AliasOf => "alias-of",
            EdgeLabel::ReExports => "re-exports",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A directed relationship between two nodes, referenced by ID.
///
/// Either endpoint may be absent from the fragment carrying the edge: the
/// target of a cross-file reference is computable from local information
/// (file path + entity type + name) without having mapped the other file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Deterministic ID: `<source>--><label-tag>--><target>`.
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: EdgeLabel,
    /// Local binding name for `imports-namespace` edges; `None` elsewhere
    /// (named-import aliases live in the module's import table instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Edge {
    /// Build an edge between two node IDs; the edge ID is derived.
    pub fn new(source: impl Into<String>, label: EdgeLabel, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: ident::edge_id(&source, label, &target),
            source,
            target,
            label,
            alias: None,
        }
    }

    /// Attach a local alias (namespace binding name) to the edge.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
