//! Export resolver: export declarations, direct/default exports, re-exports.
//!
//! Two syntactic shapes are reconciled here. Standalone export clauses
//! (`export { ... }`, `export { ... } from X`, `export * from X`) resolve
//! their underlying declarations, across the re-export boundary when one is
//! present, and produce edges plus export-table entries. Direct and default
//! exports (`export class X`, `export default ...`) arrive as flags on the
//! declarations themselves and produce the declarations' own nodes at
//! `Resolved` status, since this file is the owning file.

use log::warn;

use crate::classify::classify;
use crate::error::MapError;
use crate::factory;
use crate::graph::edge::{Edge, EdgeLabel};
use crate::graph::node::{EntityKind, Scope, Status};
use crate::graph::payload::{NamedExport, NamespaceImportData, NodeData, ReExport};
use crate::graph::MappingResult;
use crate::ident;
use crate::mapper::decl::map_declaration;
use crate::mapper::imports::{external_entity_node, external_module_node};
use crate::syntax::{
    ExportClause, ExportSpecifier, ModuleTarget, ParsedModule, Resolution, SymbolResolver,
};

/// Map every export of the file, clauses and directly-exported declarations
/// alike, into one combined fragment.
pub fn resolve_exports(
    module: &ParsedModule,
    module_id: &str,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    let mut parts = Vec::new();

    for decl in &module.declarations {
        if !decl.exported && !decl.default_export {
            continue;
        }
        let scope = if decl.default_export { Scope::DefaultExport } else { Scope::NamedExport };
        let mut part = map_declaration(module, module_id, decl, scope, resolver)?;
        let decl_kind = classify(&decl.construct, &module.path)?;
        let decl_id = ident::node_id(&module.path, decl_kind, &decl.name);
        if decl.default_export {
            part.edges.push(Edge::new(module_id, EdgeLabel::ExportsDefault, decl_id));
            part.data.exports.default = Some(decl.name.clone());
        } else {
            part.edges.push(Edge::new(module_id, EdgeLabel::ExportsNamed, decl_id));
            part.data.exports.named.push(NamedExport {
                exported: decl.name.clone(),
                original: decl.name.clone(),
            });
        }
        parts.push(part);
    }

    for clause in &module.exports {
        parts.push(resolve_clause(module, module_id, clause, resolver)?);
    }

    Ok(MappingResult::combine(parts))
}

/// The names a file exports through plain `export { ... }` clauses (no
/// source). The module mapper uses this to give the referenced internal
/// declarations `NamedExport` scope.
pub(crate) fn clause_exported_names(module: &ParsedModule) -> Vec<&str> {
    module
        .exports
        .iter()
        .filter_map(|clause| match clause {
            ExportClause::Named { entries, source: None } => Some(entries),
            _ => None,
        })
        .flatten()
        .map(|entry| entry.name.as_str())
        .collect()
}

fn resolve_clause(
    module: &ParsedModule,
    module_id: &str,
    clause: &ExportClause,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    match clause {
        ExportClause::Named { entries, source } => {
            let mut parts = Vec::new();
            for entry in entries {
                parts.push(resolve_named_entry(
                    module,
                    module_id,
                    entry,
                    source.as_deref(),
                    resolver,
                )?);
            }
            Ok(MappingResult::combine(parts))
        }
        ExportClause::Wildcard { source, alias } => {
            Ok(resolve_wildcard(module, module_id, source, alias.as_deref(), resolver))
        }
    }
}

/// One entry of `export { name as alias }` / `export { name as alias } from
/// src`. The alias becomes the exported name; the resolved declaration's own
/// name is preserved as metadata for traceability.
fn resolve_named_entry(
    module: &ParsedModule,
    module_id: &str,
    entry: &ExportSpecifier,
    source: Option<&str>,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    match resolver.resolve_symbol(&module.path, source, &entry.name) {
        Resolution::Local { file, name, construct } => {
            let kind = classify(&construct, &module.path)?;
            let target = ident::node_id(&file, kind, &name);
            let mut result = MappingResult::empty();
            match source {
                Some(src) => {
                    // Re-export: the declaration lives behind `src`. A
                    // placeholder stands in for the foreign node.
                    result.nodes.push(factory::placeholder(target.clone(), kind, &name));
                    result.edges.push(Edge::new(module_id, EdgeLabel::ReExports, target));
                    result.data.exports.re_exports.push(ReExport {
                        source: src.to_owned(),
                        name,
                        alias: entry.alias.clone(),
                    });
                }
                None => {
                    // Plain named export of a declaration this file owns; the
                    // node itself comes from the declaration pass.
                    result.edges.push(Edge::new(module_id, EdgeLabel::ExportsNamed, target));
                    result.data.exports.named.push(NamedExport {
                        exported: entry.alias.clone().unwrap_or_else(|| entry.name.clone()),
                        original: name,
                    });
                }
            }
            Ok(result)
        }
        Resolution::External { package } => {
            let target = ident::node_id(&package, EntityKind::ExternalImportEntity, &entry.name);
            let mut result = MappingResult::empty();
            result.nodes.push(external_entity_node(&target, &entry.name, &package));
            match source {
                Some(src) => {
                    result.edges.push(Edge::new(module_id, EdgeLabel::ReExports, target));
                    result.data.exports.re_exports.push(ReExport {
                        source: src.to_owned(),
                        name: entry.name.clone(),
                        alias: entry.alias.clone(),
                    });
                }
                None => {
                    result.edges.push(Edge::new(module_id, EdgeLabel::ExportsNamed, target));
                    result.data.exports.named.push(NamedExport {
                        exported: entry.alias.clone().unwrap_or_else(|| entry.name.clone()),
                        original: entry.name.clone(),
                    });
                }
            }
            Ok(result)
        }
        Resolution::Unresolved => {
            // Exporting a nonexistent symbol is an error in the analyzed
            // code, not a mapper failure: drop the entry, keep the file.
            warn!(
                "{}",
                MapError::UnresolvedSymbol {
                    name: entry.name.clone(),
                    file: module.path.clone(),
                }
            );
            Ok(MappingResult::empty())
        }
    }
}

/// `export * from src` and `export * as ns from src`.
fn resolve_wildcard(
    module: &ParsedModule,
    module_id: &str,
    source: &str,
    alias: Option<&str>,
    resolver: &dyn SymbolResolver,
) -> MappingResult {
    let target = match resolver.resolve_module(&module.path, source) {
        ModuleTarget::Local { file } => {
            let target = ident::module_node_id(&file);
            let mut result = MappingResult::empty();
            result.nodes.push(factory::placeholder(
                target.clone(),
                EntityKind::Module,
                ident::module_name_of(&file),
            ));
            result.edges.push(Edge::new(module_id, EdgeLabel::ReExports, target.clone()));
            result.data.exports.wildcards.push(source.to_owned());
            (result, target)
        }
        ModuleTarget::External { package } => {
            let target = ident::node_id(&package, EntityKind::ExternalModule, &package);
            let mut result = MappingResult::empty();
            result.nodes.push(external_module_node(&target, &package));
            result.edges.push(Edge::new(module_id, EdgeLabel::ReExports, target.clone()));
            result.data.exports.wildcards.push(source.to_owned());
            (result, target)
        }
        ModuleTarget::Unresolved => {
            warn!(
                "{}",
                MapError::UnresolvedSymbol {
                    name: source.to_owned(),
                    file: module.path.clone(),
                }
            );
            return MappingResult::empty();
        }
    };
    let (mut result, target_id) = target;

    // `export * as ns from X` additionally creates the exported namespace
    // binding: a node this file owns, exported by name, aliasing the target
    // module.
    if let Some(ns) = alias {
        let binding_id = ident::node_id(&module.path, EntityKind::NamespaceImport, ns);
        match factory::build(
            EntityKind::NamespaceImport,
            binding_id.clone(),
            ns,
            Scope::NamedExport,
            Status::Resolved,
            None,
            Some(NodeData::NamespaceImport(NamespaceImportData { source: source.to_owned() })),
        ) {
            Ok(binding) => {
                result.nodes.push(binding);
                result
                    .edges
                    .push(Edge::new(module_id, EdgeLabel::ExportsNamed, binding_id.clone()));
                result.edges.push(Edge::new(binding_id, EdgeLabel::AliasOf, target_id));
                result.data.exports.named.push(NamedExport {
                    exported: ns.to_owned(),
                    original: ns.to_owned(),
                });
            }
            Err(err) => warn!("{err}"),
        }
    }

    result
}
