//! Identity & location service.
//!
//! Node and edge IDs are pure string functions of their logical inputs: no
//! lookups, no randomness, no timestamps. Identical input produces
//! byte-identical output, which is what lets fragments produced on separate
//! workers reference each other's nodes without coordination.

use serde::{Deserialize, Serialize};

use crate::graph::edge::EdgeLabel;
use crate::graph::node::EntityKind;

/// Separator between the three components of a node ID.
const NODE_SEP: &str = "::";

/// Separator between the three components of an edge ID. Distinct from
/// [`NODE_SEP`] so IDs stay unambiguous to parse.
const EDGE_SEP: &str = "-->";

/// Owner prefix used for inheritance targets that resolve to nothing.
const UNRESOLVED_OWNER: &str = "unresolved";

/// Build a node ID: `<owner>::<entityType>::<name>`.
///
/// `owner` is the containing file path for locally-owned entities, or the raw
/// package specifier for external entities.
pub fn node_id(owner: &str, kind: EntityKind, name: &str) -> String {
    format!("{owner}{NODE_SEP}{}{NODE_SEP}{name}", kind.tag())
}

/// Build an edge ID: `<sourceId>--><relationshipLabel>--><targetId>`.
pub fn edge_id(source: &str, label: EdgeLabel, target: &str) -> String {
    format!("{source}{EDGE_SEP}{}{EDGE_SEP}{target}", label.tag())
}

/// Build the synthetic ID used for inheritance targets that could not be
/// resolved to any file: `unresolved::<entityType>::<name>`.
pub fn unresolved_node_id(kind: EntityKind, name: &str) -> String {
    node_id(UNRESOLVED_OWNER, kind, name)
}

/// The display name of the module node for a file: the file stem.
///
/// Derived from the path alone so that any file can compute a sibling's
/// module ID without having mapped it.
pub fn module_name_of(path: &str) -> &str {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(idx) => &base[..idx],
    }
}

/// The ID of the module node owning `path`.
pub fn module_node_id(path: &str) -> String {
    node_id(path, EntityKind::Module, module_name_of(path))
}

/// A half-open span inside one file, as reported by the parsing front end.
/// Lines are 1-based, columns 0-based (the front end's convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// A source position attached to nodes for diagnostics and tooling.
/// Never participates in identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file_path: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceLocation {
    /// Capture the location of a sub-construct from its span.
    pub fn from_span(file_path: &str, span: Span) -> Self {
        Self {
            file_path: file_path.to_owned(),
            start_line: span.start_line,
            start_column: span.start_column,
            end_line: span.end_line,
            end_column: span.end_column,
        }
    }
}
