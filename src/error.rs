use thiserror::Error;

use crate::graph::node::EntityKind;

/// Errors produced while mapping one file into a graph fragment.
///
/// The first three kinds are structural and abort the whole file's fragment;
/// a fragment is either fully valid or not produced. `UnresolvedSymbol` is
/// recoverable: resolvers log it and degrade (omit the entry, or fall back to
/// a placeholder node for inheritance targets).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The classifier saw a syntactic construct outside the closed set.
    /// Intentionally strict so silent misclassification never occurs.
    #[error("unrecognized construct `{construct}` in {file}")]
    UnrecognizedConstruct { construct: String, file: String },

    /// The factory registry has no constructor for a classified entity type.
    /// Signals an internal inconsistency between classifier and registry;
    /// unreachable as long as the registry match stays total.
    #[error("no node constructor registered for entity type `{kind}`")]
    UnknownEntityType { kind: EntityKind },

    /// An import, export, or inheritance target could not be resolved.
    /// Never fatal: carried only as a warning payload.
    #[error("could not resolve `{name}` (referenced from {file})")]
    UnresolvedSymbol { name: String, file: String },

    /// A constructed node failed its own shape validation. A mapper bug,
    /// not an error in the analyzed code.
    #[error("malformed payload for node `{node_id}`: {reason}")]
    MalformedPayload { node_id: String, reason: String },
}
