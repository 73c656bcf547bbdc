//! Node factory registry: one validated constructor per entity type.
//!
//! Nodes enter a fragment only through this module, which is what makes the
//! shape guarantees (payload variant matches the kind, IDs carry the kind
//! tag, defaults filled in) hold everywhere downstream. The dispatch is an
//! exhaustive match over [`EntityKind`], so the classifier's output set and
//! this registry's key set cannot drift apart without a build error.
//! `UnknownEntityType` exists to name that invariant, not as a reachable
//! runtime case.

use crate::error::MapError;
use crate::graph::node::{EntityKind, Node, Scope, Status};
use crate::graph::payload::NodeData;
use crate::ident::SourceLocation;

/// Construct a fully validated node.
///
/// A `None` payload gets the kind's documented default (empty generics,
/// `Sync` call capability, `Public` visibility, empty tables). A payload
/// whose variant does not match `kind`, an empty name, or an ID missing the
/// kind tag all fail with `MalformedPayload`: mapper bugs, never user-code
/// errors.
pub fn build(
    kind: EntityKind,
    id: impl Into<String>,
    name: impl Into<String>,
    scope: Scope,
    status: Status,
    location: Option<SourceLocation>,
    partial: Option<NodeData>,
) -> Result<Node, MapError> {
    let id = id.into();
    let name = name.into();
    let data = partial.unwrap_or_else(|| NodeData::default_for(kind));

    // One arm per registered entity type; each variant is validated
    // independently against the requested kind.
    let expected = match kind {
        EntityKind::Module => matches!(data, NodeData::Module(_)),
        EntityKind::Class => matches!(data, NodeData::Class(_)),
        EntityKind::Interface => matches!(data, NodeData::Interface(_)),
        EntityKind::Method => matches!(data, NodeData::Method(_)),
        EntityKind::Function => matches!(data, NodeData::Function(_)),
        EntityKind::Property => matches!(data, NodeData::Property(_)),
        EntityKind::Getter => matches!(data, NodeData::Getter(_)),
        EntityKind::Setter => matches!(data, NodeData::Setter(_)),
        EntityKind::Constructor => matches!(data, NodeData::Constructor(_)),
        EntityKind::Variable => matches!(data, NodeData::Variable(_)),
        EntityKind::Enum => matches!(data, NodeData::Enum(_)),
        EntityKind::TypeAlias => matches!(data, NodeData::TypeAlias(_)),
        EntityKind::Decorator => matches!(data, NodeData::Decorator(_)),
        EntityKind::NamespaceImport => matches!(data, NodeData::NamespaceImport(_)),
        EntityKind::ExternalImportEntity => matches!(data, NodeData::ExternalImportEntity(_)),
        EntityKind::ExternalModule => matches!(data, NodeData::ExternalModule(_)),
    };
    if !expected {
        return Err(MapError::MalformedPayload {
            node_id: id,
            reason: format!(
                "payload variant `{}` does not match entity type `{}`",
                data.kind(),
                kind
            ),
        });
    }

    if name.is_empty() {
        return Err(MapError::MalformedPayload {
            node_id: id,
            reason: "node name must not be empty".into(),
        });
    }

    let tag_segment = format!("::{}::", kind.tag());
    if !id.contains(&tag_segment) {
        return Err(MapError::MalformedPayload {
            node_id: id,
            reason: format!("node ID does not carry the `{}` kind tag", kind.tag()),
        });
    }

    Ok(Node { id, name, kind, scope, status, location, data })
}

/// The standard way resolvers materialize a referenced-not-owned entity:
/// a `Placeholder` node with the kind's minimal payload and no location.
///
/// Infallible; the inputs come from the identity service, which always
/// produces well-formed IDs.
pub fn placeholder(id: impl Into<String>, kind: EntityKind, name: impl Into<String>) -> Node {
    Node {
        id: id.into(),
        name: name.into(),
        kind,
        scope: Scope::Internal,
        status: Status::Placeholder,
        location: None,
        data: NodeData::default_for(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::payload::{CallCapability, ClassData, FunctionData, Visibility};
    use crate::ident::node_id;

    #[test]
    fn test_build_fills_documented_defaults() {
        let id = node_id("a.ts", EntityKind::Function, "run");
        let node = build(
            EntityKind::Function,
            id,
            "run",
            Scope::NamedExport,
            Status::Resolved,
            None,
            None,
        )
        .unwrap();
        match node.data {
            NodeData::Function(FunctionData { params, return_type, call }) => {
                assert!(params.is_empty());
                assert!(return_type.is_empty());
                assert_eq!(call, CallCapability::Sync, "call capability defaults to Sync");
            }
            other => panic!("expected function payload, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_mismatched_payload() {
        let id = node_id("a.ts", EntityKind::Function, "run");
        let err = build(
            EntityKind::Function,
            id,
            "run",
            Scope::Internal,
            Status::Resolved,
            None,
            Some(NodeData::Class(ClassData::default())),
        )
        .unwrap_err();
        assert!(matches!(err, MapError::MalformedPayload { .. }));
    }

    #[test]
    fn test_build_rejects_empty_name() {
        let id = node_id("a.ts", EntityKind::Class, "");
        let err = build(EntityKind::Class, id, "", Scope::Internal, Status::Resolved, None, None)
            .unwrap_err();
        assert!(matches!(err, MapError::MalformedPayload { .. }));
    }

    #[test]
    fn test_build_rejects_id_without_kind_tag() {
        // An interface ID handed to the class constructor is a mapper bug.
        let id = node_id("a.ts", EntityKind::Interface, "A");
        let err = build(EntityKind::Class, id, "A", Scope::Internal, Status::Resolved, None, None)
            .unwrap_err();
        assert!(matches!(err, MapError::MalformedPayload { .. }));
    }

    #[test]
    fn test_placeholder_carries_type_tag_only() {
        let id = node_id("b.ts", EntityKind::Class, "Base");
        let node = placeholder(id.clone(), EntityKind::Class, "Base");
        assert_eq!(node.status, Status::Placeholder);
        assert_eq!(node.id, id);
        assert_eq!(node.data, NodeData::default_for(EntityKind::Class));
        assert!(node.location.is_none(), "a placeholder has no source position");
    }

    #[test]
    fn test_member_defaults() {
        let id = node_id("a.ts", EntityKind::Method, "User.save");
        let node = build(
            EntityKind::Method,
            id,
            "User.save",
            Scope::Internal,
            Status::Resolved,
            None,
            None,
        )
        .unwrap();
        match node.data {
            NodeData::Method(callable) => {
                assert_eq!(callable.visibility, Visibility::Public, "defaults to Public");
                assert!(!callable.is_static);
            }
            other => panic!("expected method payload, got {other:?}"),
        }
    }
}
