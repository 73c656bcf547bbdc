//! Module mapper: one parsed file in, one fragment out.
//!
//! Runs the import and export resolvers, maps the remaining internal
//! declarations, combines everything in declaration order, and wraps the
//! merged import/export tables into the module's own node. Structural
//! failures (unrecognized syntax, payload validation) abort the whole file;
//! a fragment is either fully valid or not produced.

pub mod decl;
pub mod exports;
pub mod imports;

use log::warn;

use crate::error::MapError;
use crate::factory;
use crate::graph::node::{EntityKind, Scope, Status};
use crate::graph::payload::{ExportTable, ImportTable, ModuleData, ModuleKind, NodeData};
use crate::graph::MappingResult;
use crate::ident::{self, SourceLocation};
use crate::syntax::{ParsedModule, SymbolResolver};

use exports::{clause_exported_names, resolve_exports};
use imports::resolve_imports;

/// Map one parsed file into its graph fragment.
///
/// The returned fragment's first node is always the module node; `data` is
/// that node's payload. Reference-resolution failures inside degrade with
/// warnings; classifier and factory failures propagate and no fragment is
/// produced.
pub fn map_module(
    module: &ParsedModule,
    resolver: &dyn SymbolResolver,
) -> Result<MappingResult, MapError> {
    let module_kind = detect_module_kind(module);
    let module_id = ident::module_node_id(&module.path);

    let imported = resolve_imports(module, &module_id, resolver)?;
    let exported = resolve_exports(module, &module_id, resolver)?;

    // Declarations not handled by the export resolver: everything without an
    // inline export flag. Names referenced by a plain `export { ... }` clause
    // still get named-export scope; the clause pass only adds edges.
    let clause_names = clause_exported_names(module);
    let mut internal_parts = Vec::new();
    for declaration in &module.declarations {
        if declaration.exported || declaration.default_export {
            continue;
        }
        let scope = if clause_names.contains(&declaration.name.as_str()) {
            Scope::NamedExport
        } else {
            Scope::Internal
        };
        internal_parts.push(decl::map_declaration(
            module,
            &module_id,
            declaration,
            scope,
            resolver,
        )?);
    }

    let mut fragments = vec![imported, exported];
    fragments.extend(internal_parts);
    let combined = MappingResult::combine(fragments);

    if !tables_are_sound(&combined.data.imports, &combined.data.exports) {
        warn!(
            "merged import/export tables for {} carry entries with empty keys",
            module.path
        );
    }

    let data = ModuleData {
        path: module.path.clone(),
        module_kind,
        imports: combined.data.imports,
        exports: combined.data.exports,
    };

    let module_node = factory::build(
        EntityKind::Module,
        module_id,
        ident::module_name_of(&module.path),
        Scope::Internal,
        Status::Resolved,
        Some(SourceLocation::from_span(&module.path, module.span)),
        Some(NodeData::Module(data.clone())),
    )?;

    let mut nodes = Vec::with_capacity(combined.nodes.len() + 1);
    nodes.push(module_node);
    nodes.extend(combined.nodes);

    Ok(MappingResult { nodes, edges: combined.edges, data })
}

/// Determine how the file declares itself.
///
/// A dotted namespace-style module declaration marks the file as a namespace
/// module; any other module declaration marks it ambient; absence of both
/// means a plain ES module.
fn detect_module_kind(module: &ParsedModule) -> ModuleKind {
    if module.module_declarations.iter().any(|name| name.contains('.')) {
        ModuleKind::Namespace
    } else if !module.module_declarations.is_empty() {
        ModuleKind::Ambient
    } else {
        ModuleKind::EsModule
    }
}

/// Sanity predicate over the merged import and export tables.
///
/// An entry with an empty source or name can only come out of a resolver bug,
/// never out of user code; it is worth a warning but not a failed file, and
/// mapping continues with the data as merged.
fn tables_are_sound(imports: &ImportTable, exports: &ExportTable) -> bool {
    let imports_sound = imports
        .named
        .iter()
        .all(|n| !n.source.is_empty() && !n.name.is_empty())
        && imports.defaults.iter().all(|d| !d.source.is_empty() && !d.local.is_empty())
        && imports.namespaces.iter().all(|n| !n.source.is_empty() && !n.alias.is_empty());
    let exports_sound = exports
        .named
        .iter()
        .all(|n| !n.exported.is_empty() && !n.original.is_empty())
        && exports.re_exports.iter().all(|r| !r.source.is_empty() && !r.name.is_empty())
        && exports.wildcards.iter().all(|w| !w.is_empty())
        && exports.default.as_deref() != Some("");
    imports_sound && exports_sound
}
