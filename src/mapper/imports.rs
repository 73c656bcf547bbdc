//! Import resolver: one fragment per import clause, three strategies.
//!
//! Named, default, and namespace parts of a clause are handled independently
//! and their partial results combined. Reference-resolution failures degrade
//! gracefully (warn and omit); only a classifier failure, an unrecognized
//! construct coming back from symbol resolution, aborts the file.

use log::{debug, warn};

use crate::classify::classify;
use crate::error::MapError;
use crate::factory;
use crate::graph::edge::{Edge, EdgeLabel};
use crate::graph::node::{EntityKind, Node, Scope, Status};
use crate::graph::payload::{
    DefaultImport, ExternalEntityData, ExternalModuleData, NamedImport, NamespaceImportEntry,
    NodeData,
};
use crate::graph::MappingResult;
use crate::ident;
use crate::syntax::{ImportClause, ModuleTarget, ParsedModule, Resolution, SymbolResolver};

/// Map every import clause of the file into one combined fragment.
pub fn resolve_imports(
    module: &ParsedModule,
    module_id: &str,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    let mut parts = Vec::new();
    for clause in &module.imports {
        parts.push(resolve_clause(module, module_id, clause, resolver)?);
    }
    Ok(MappingResult::combine(parts))
}

fn resolve_clause(
    module: &ParsedModule,
    module_id: &str,
    clause: &ImportClause,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    match resolver.resolve_module(&module.path, &clause.specifier) {
        ModuleTarget::Local { file } => {
            let named = resolve_named(module, module_id, clause, resolver)?;
            let default = resolve_default(module_id, clause, &file, resolver);
            let namespace = resolve_namespace(clause, module_id, &file);
            Ok(MappingResult::combine([named, default, namespace]))
        }
        ModuleTarget::External { package } => Ok(resolve_external(module_id, clause, &package)),
        ModuleTarget::Unresolved => {
            warn!(
                "{}",
                MapError::UnresolvedSymbol {
                    name: clause.specifier.clone(),
                    file: module.path.clone(),
                }
            );
            Ok(MappingResult::empty())
        }
    }
}

/// Named specifiers against a local target file.
///
/// Each name is resolved through any re-export aliasing chain to its true
/// declaring file; the node ID is built from *that* file and the original
/// declared name. A local alias is import-table metadata only; identity
/// never tracks the alias.
fn resolve_named(
    module: &ParsedModule,
    module_id: &str,
    clause: &ImportClause,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    let mut result = MappingResult::empty();
    for spec in &clause.named {
        match resolver.resolve_symbol(&module.path, Some(&clause.specifier), &spec.name) {
            Resolution::Local { file, name, construct } => {
                let kind = classify(&construct, &module.path)?;
                let target = ident::node_id(&file, kind, &name);
                // The owning file is processed elsewhere (or not at all in
                // this run); a placeholder stands in for it.
                result.nodes.push(factory::placeholder(target.clone(), kind, &name));
                result.edges.push(Edge::new(module_id, EdgeLabel::ImportsNamed, target));
                result.data.imports.named.push(NamedImport {
                    source: clause.specifier.clone(),
                    name,
                    alias: spec.alias.clone(),
                });
            }
            Resolution::External { package } => {
                let part = external_named(
                    module_id,
                    &clause.specifier,
                    &package,
                    &spec.name,
                    spec.alias.clone(),
                );
                result = MappingResult::combine([result, part]);
            }
            Resolution::Unresolved => {
                warn!(
                    "{}",
                    MapError::UnresolvedSymbol {
                        name: spec.name.clone(),
                        file: module.path.clone(),
                    }
                );
            }
        }
    }
    Ok(result)
}

/// Default import against a local target file: probe the fixed candidate
/// order; the first entity type the target default-exports wins.
fn resolve_default(
    module_id: &str,
    clause: &ImportClause,
    target_file: &str,
    resolver: &dyn SymbolResolver,
) -> MappingResult {
    let Some(local) = &clause.default else {
        return MappingResult::empty();
    };

    for kind in EntityKind::DEFAULT_EXPORTABLE {
        if let Some(declared) = resolver.default_export_of(target_file, kind) {
            let target = ident::node_id(target_file, kind, &declared);
            let mut result = MappingResult::empty();
            result.nodes.push(factory::placeholder(target.clone(), kind, declared));
            result.edges.push(Edge::new(module_id, EdgeLabel::ImportsDefault, target));
            result.data.imports.defaults.push(DefaultImport {
                source: clause.specifier.clone(),
                local: local.clone(),
            });
            return result;
        }
    }

    debug!("no default-export candidate matched in {target_file}");
    MappingResult::empty()
}

/// Namespace import against a local target file: a single edge straight to
/// the target's module node, no per-member nodes. The local alias rides on
/// the edge.
fn resolve_namespace(clause: &ImportClause, module_id: &str, target_file: &str) -> MappingResult {
    let Some(alias) = &clause.namespace else {
        return MappingResult::empty();
    };

    let target = ident::module_node_id(target_file);
    let mut result = MappingResult::empty();
    result
        .edges
        .push(Edge::new(module_id, EdgeLabel::ImportsNamespace, target).with_alias(alias));
    result.data.imports.namespaces.push(NamespaceImportEntry {
        source: clause.specifier.clone(),
        alias: alias.clone(),
    });
    result
}

/// A clause whose module specifier does not resolve to a local file.
///
/// External entities are keyed by the raw package specifier and are always
/// `Resolved`; there is nothing further to resolve behind a package
/// boundary.
fn resolve_external(module_id: &str, clause: &ImportClause, package: &str) -> MappingResult {
    let mut parts = Vec::new();

    for spec in &clause.named {
        parts.push(external_named(
            module_id,
            &clause.specifier,
            package,
            &spec.name,
            spec.alias.clone(),
        ));
    }

    if let Some(local) = &clause.default {
        // Externals cannot be probed for their default export's declared
        // name; the local binding names the entity.
        let target = ident::node_id(package, EntityKind::ExternalImportEntity, local);
        let mut part = MappingResult::empty();
        part.nodes.push(external_entity_node(&target, local, package));
        part.edges.push(Edge::new(module_id, EdgeLabel::ImportsDefault, target));
        part.data.imports.defaults.push(DefaultImport {
            source: clause.specifier.clone(),
            local: local.clone(),
        });
        parts.push(part);
    }

    if let Some(alias) = &clause.namespace {
        // No module node exists for a package; the edge points at an
        // external-module node standing in for the package as a whole.
        let target = ident::node_id(package, EntityKind::ExternalModule, package);
        let mut part = MappingResult::empty();
        part.nodes.push(external_module_node(&target, package));
        part.edges
            .push(Edge::new(module_id, EdgeLabel::ImportsNamespace, target).with_alias(alias));
        part.data.imports.namespaces.push(NamespaceImportEntry {
            source: clause.specifier.clone(),
            alias: alias.clone(),
        });
        parts.push(part);
    }

    MappingResult::combine(parts)
}

fn external_named(
    module_id: &str,
    specifier: &str,
    package: &str,
    name: &str,
    alias: Option<String>,
) -> MappingResult {
    let target = ident::node_id(package, EntityKind::ExternalImportEntity, name);
    let mut part = MappingResult::empty();
    part.nodes.push(external_entity_node(&target, name, package));
    part.edges.push(Edge::new(module_id, EdgeLabel::ImportsNamed, target));
    part.data.imports.named.push(NamedImport {
        source: specifier.to_owned(),
        name: name.to_owned(),
        alias,
    });
    part
}

pub(crate) fn external_entity_node(id: &str, name: &str, package: &str) -> Node {
    Node {
        id: id.to_owned(),
        name: name.to_owned(),
        kind: EntityKind::ExternalImportEntity,
        scope: Scope::External,
        status: Status::Resolved,
        location: None,
        data: NodeData::ExternalImportEntity(ExternalEntityData { package: package.to_owned() }),
    }
}

pub(crate) fn external_module_node(id: &str, package: &str) -> Node {
    Node {
        id: id.to_owned(),
        name: package.to_owned(),
        kind: EntityKind::ExternalModule,
        scope: Scope::External,
        status: Status::Resolved,
        location: None,
        data: NodeData::ExternalModule(ExternalModuleData { package: package.to_owned() }),
    }
}
