//! Declaration mapping: one top-level declaration -> nodes + edges.
//!
//! Shared between the export resolver (direct exports) and the module mapper
//! (internal declarations). Produces the declaration's own node, member nodes
//! with `contains` edges, and inheritance edges; including the synthetic
//! `unresolved::` fallback that keeps inheritance edges constructible for
//! symbols outside the scanned file set.

use log::warn;

use crate::classify::classify;
use crate::error::MapError;
use crate::factory;
use crate::graph::edge::{Edge, EdgeLabel};
use crate::graph::node::{EntityKind, Scope, Status};
use crate::graph::payload::{
    CallCapability, CallableData, ClassData, EnumData, ExternalEntityData, FunctionData,
    Generics, Heritage, MemberIndex, NodeData, PropertyData, TypeAliasData, VariableData,
};
use crate::graph::MappingResult;
use crate::ident::{self, SourceLocation};
use crate::syntax::{ConstructKind, Declaration, Member, ParsedModule, Resolution, SymbolResolver};

/// Map one top-level declaration into a partial fragment.
///
/// Emits the declaration node (`Resolved`; this file owns it), a `contains`
/// edge from the module, member nodes with their `contains` edges, and
/// inheritance edges. Export edges and table entries are the caller's
/// concern.
pub(crate) fn map_declaration(
    module: &ParsedModule,
    module_id: &str,
    decl: &Declaration,
    scope: Scope,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    let kind = classify(&decl.construct, &module.path)?;
    let id = ident::node_id(&module.path, kind, &decl.name);
    let location = SourceLocation::from_span(&module.path, decl.span);

    let node = factory::build(
        kind,
        id.clone(),
        &decl.name,
        scope,
        Status::Resolved,
        Some(location),
        Some(payload_for(decl, kind)),
    )?;

    let mut result = MappingResult {
        nodes: vec![node],
        edges: vec![Edge::new(module_id, EdgeLabel::Contains, &id)],
        data: Default::default(),
    };

    for member in &decl.members {
        let member_frag = map_member(module, &id, &decl.name, member)?;
        result = MappingResult::combine([result, member_frag]);
    }

    // Inheritance edges, produced alongside the declaration that carries the
    // heritage clause.
    match kind {
        EntityKind::Class => {
            for supertype in &decl.extends {
                let edge = heritage_edge(
                    module,
                    &id,
                    EdgeLabel::Extends,
                    EntityKind::Class,
                    supertype,
                    resolver,
                );
                result = MappingResult::combine([result, edge]);
            }
            for iface in &decl.implements {
                let edge = heritage_edge(
                    module,
                    &id,
                    EdgeLabel::Implements,
                    EntityKind::Interface,
                    iface,
                    resolver,
                );
                result = MappingResult::combine([result, edge]);
            }
        }
        EntityKind::Interface => {
            for supertype in &decl.extends {
                let edge = heritage_edge(
                    module,
                    &id,
                    EdgeLabel::Extends,
                    EntityKind::Interface,
                    supertype,
                    resolver,
                );
                result = MappingResult::combine([result, edge]);
            }
        }
        _ => {}
    }

    Ok(result)
}

/// Map one class/interface member into its node plus a `contains` edge.
///
/// Member identity uses the qualified `Owner.member` name so two containers
/// in one file can declare same-named members without colliding.
fn map_member(
    module: &ParsedModule,
    owner_id: &str,
    owner_name: &str,
    member: &Member,
) -> Result<MappingResult, MapError> {
    let kind = classify(&member.construct, &module.path)?;
    let qualified = format!("{owner_name}.{}", member.name);
    let id = ident::node_id(&module.path, kind, &qualified);
    let location = SourceLocation::from_span(&module.path, member.span);

    let node = factory::build(
        kind,
        id.clone(),
        qualified,
        Scope::Internal,
        Status::Resolved,
        Some(location),
        Some(member_payload(member, kind)),
    )?;

    Ok(MappingResult {
        nodes: vec![node],
        edges: vec![Edge::new(owner_id, EdgeLabel::Contains, id)],
        data: Default::default(),
    })
}

/// Build one inheritance edge for a supertype reference.
///
/// The target ID is computed against the supertype's defining file when the
/// resolver can find it, keyed by the package specifier when it is external,
/// and the synthetic `unresolved::<type>::<name>` ID with a placeholder node
/// otherwise; the edge is always constructible.
fn heritage_edge(
    module: &ParsedModule,
    source_id: &str,
    label: EdgeLabel,
    target_kind: EntityKind,
    supertype: &str,
    resolver: &dyn SymbolResolver,
) -> MappingResult {
    match resolver.resolve_symbol(&module.path, None, supertype) {
        Resolution::Local { file, name, construct } => {
            let kind = classify(&construct, &module.path).unwrap_or(target_kind);
            let target = ident::node_id(&file, kind, &name);
            MappingResult {
                nodes: Vec::new(),
                edges: vec![Edge::new(source_id, label, target)],
                data: Default::default(),
            }
        }
        Resolution::External { package } => {
            let target = ident::node_id(&package, EntityKind::ExternalImportEntity, supertype);
            let node = match factory::build(
                EntityKind::ExternalImportEntity,
                target.clone(),
                supertype,
                Scope::External,
                Status::Resolved,
                None,
                Some(NodeData::ExternalImportEntity(ExternalEntityData {
                    package: package.clone(),
                })),
            ) {
                Ok(node) => node,
                // Inputs come from the identity service; treat a validation
                // failure on this path like an unresolved target.
                Err(err) => {
                    warn!("{err}");
                    return MappingResult::empty();
                }
            };
            MappingResult {
                nodes: vec![node],
                edges: vec![Edge::new(source_id, label, target)],
                data: Default::default(),
            }
        }
        Resolution::Unresolved => {
            warn!(
                "{}",
                MapError::UnresolvedSymbol {
                    name: supertype.to_owned(),
                    file: module.path.clone(),
                }
            );
            let target = ident::unresolved_node_id(target_kind, supertype);
            let node = factory::placeholder(target.clone(), target_kind, supertype);
            MappingResult {
                nodes: vec![node],
                edges: vec![Edge::new(source_id, label, target)],
                data: Default::default(),
            }
        }
    }
}

/// Assemble the payload of a top-level declaration from its parsed facts.
fn payload_for(decl: &Declaration, kind: EntityKind) -> NodeData {
    match kind {
        EntityKind::Class => NodeData::Class(ClassData {
            generics: Generics { params: decl.generics.clone() },
            heritage: Heritage {
                extends: decl.extends.clone(),
                implements: decl.implements.clone(),
            },
            decorators: decl.decorators.clone(),
            constructors: decl
                .members
                .iter()
                .filter(|m| m.construct == ConstructKind::ConstructorDeclaration)
                .map(|m| m.params.clone())
                .collect(),
            members: MemberIndex {
                names: decl.members.iter().map(|m| m.name.clone()).collect(),
            },
        }),
        EntityKind::Interface => NodeData::Interface(crate::graph::payload::InterfaceData {
            generics: Generics { params: decl.generics.clone() },
            extends: decl.extends.clone(),
            members: MemberIndex {
                names: decl.members.iter().map(|m| m.name.clone()).collect(),
            },
        }),
        EntityKind::Function => NodeData::Function(FunctionData {
            params: decl.params.clone(),
            return_type: decl.return_type.clone(),
            call: if decl.is_async { CallCapability::Async } else { CallCapability::Sync },
        }),
        EntityKind::Variable => NodeData::Variable(VariableData {
            type_text: decl.declared_type.clone(),
            is_const: decl.is_const,
        }),
        EntityKind::Enum => NodeData::Enum(EnumData { members: decl.enum_members.clone() }),
        EntityKind::TypeAlias => NodeData::TypeAlias(TypeAliasData {
            generics: Generics { params: decl.generics.clone() },
            aliased: decl.aliased_type.clone(),
        }),
        // Remaining kinds carry no declaration-level facts beyond defaults.
        other => NodeData::default_for(other),
    }
}

/// Assemble the payload of a member from its parsed facts.
fn member_payload(member: &Member, kind: EntityKind) -> NodeData {
    let callable = || CallableData {
        params: member.params.clone(),
        return_type: member.return_type.clone(),
        visibility: member.visibility,
        call: if member.is_async { CallCapability::Async } else { CallCapability::Sync },
        is_static: member.is_static,
    };
    match kind {
        EntityKind::Method => NodeData::Method(callable()),
        EntityKind::Getter => NodeData::Getter(callable()),
        EntityKind::Setter => NodeData::Setter(callable()),
        EntityKind::Constructor => NodeData::Constructor(callable()),
        EntityKind::Property => NodeData::Property(PropertyData {
            type_text: member.type_text.clone(),
            visibility: member.visibility,
            readonly: member.readonly,
        }),
        other => NodeData::default_for(other),
    }
}
