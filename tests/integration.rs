//! Integration test suite: maps a small fixture project end to end.
//!
//! The fixture models three files of a typical TypeScript-style project:
//!
//! - `src/user.ts`   declares `Profile` (interface), `User` (class
//!   implementing it), and a default-exported factory function.
//! - `src/index.ts`  is a barrel: re-exports `Profile` under an alias and
//!   forwards `./user` wholesale.
//! - `src/app.ts`    imports named/default/namespace bindings from the
//!   barrel and from an external package.
//!
//! The front end is simulated by a map-backed `SymbolResolver`; each file is
//! mapped independently, the way a parallel driver would, and the tests check
//! that the fragments agree on IDs without any coordination.

use std::collections::HashMap;

use code_graph_mapper::graph::payload::NodeData;
use code_graph_mapper::ident;
use code_graph_mapper::mapper::map_module;
use code_graph_mapper::syntax::{
    ConstructKind, Declaration, ExportClause, ExportSpecifier, ImportClause, Member, ModuleTarget,
    NamedSpecifier, ParsedModule, Resolution, SymbolResolver,
};
use code_graph_mapper::{EdgeLabel, EntityKind, MappingResult, Scope, Status};

// ---------------------------------------------------------------------------
// Fixture resolver
// ---------------------------------------------------------------------------

/// A project index backed by hash maps: specifiers to files, plus a symbol
/// table that already follows re-export chains (as the real front end would).
#[derive(Default)]
struct ProjectResolver {
    /// (from-file, specifier) -> target file
    modules: HashMap<(String, String), String>,
    /// (from-file, specifier-or-empty, name) -> (defining file, declared name, construct)
    symbols: HashMap<(String, String, String), (String, String, ConstructKind)>,
    /// (file, kind) -> declared name of the default export
    defaults: HashMap<(String, EntityKind), String>,
}

impl ProjectResolver {
    fn module(&mut self, from: &str, specifier: &str, target: &str) {
        self.modules.insert((from.into(), specifier.into()), target.into());
    }

    fn symbol(
        &mut self,
        from: &str,
        specifier: &str,
        name: &str,
        file: &str,
        declared: &str,
        construct: ConstructKind,
    ) {
        self.symbols.insert(
            (from.into(), specifier.into(), name.into()),
            (file.into(), declared.into(), construct),
        );
    }
}

impl SymbolResolver for ProjectResolver {
    fn resolve_module(&self, from: &str, specifier: &str) -> ModuleTarget {
        match self.modules.get(&(from.to_owned(), specifier.to_owned())) {
            Some(file) => ModuleTarget::Local { file: file.clone() },
            None if !specifier.starts_with('.') => {
                ModuleTarget::External { package: specifier.to_owned() }
            }
            None => ModuleTarget::Unresolved,
        }
    }

    fn resolve_symbol(&self, from: &str, specifier: Option<&str>, name: &str) -> Resolution {
        let key = (from.to_owned(), specifier.unwrap_or("").to_owned(), name.to_owned());
        match self.symbols.get(&key) {
            Some((file, declared, construct)) => Resolution::Local {
                file: file.clone(),
                name: declared.clone(),
                construct: construct.clone(),
            },
            None => Resolution::Unresolved,
        }
    }

    fn default_export_of(&self, file: &str, kind: EntityKind) -> Option<String> {
        self.defaults.get(&(file.to_owned(), kind)).cloned()
    }
}

// ---------------------------------------------------------------------------
// Fixture files
// ---------------------------------------------------------------------------

fn user_ts() -> ParsedModule {
    ParsedModule {
        path: "src/user.ts".into(),
        declarations: vec![
            Declaration {
                name: "Profile".into(),
                construct: ConstructKind::InterfaceDeclaration,
                exported: true,
                members: vec![Member {
                    name: "displayName".into(),
                    construct: ConstructKind::PropertySignature,
                    type_text: "string".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            Declaration {
                name: "User".into(),
                construct: ConstructKind::ClassDeclaration,
                exported: true,
                implements: vec!["Profile".into()],
                extends: vec!["BaseEntity".into()],
                members: vec![Member {
                    name: "save".into(),
                    construct: ConstructKind::MethodDeclaration,
                    is_async: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            Declaration {
                name: "createUser".into(),
                construct: ConstructKind::FunctionDeclaration,
                default_export: true,
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

fn index_ts() -> ParsedModule {
    ParsedModule {
        path: "src/index.ts".into(),
        exports: vec![
            ExportClause::Named {
                entries: vec![ExportSpecifier {
                    name: "Profile".into(),
                    alias: Some("UserProfile".into()),
                }],
                source: Some("./user".into()),
            },
            ExportClause::Wildcard { source: "./user".into(), alias: None },
        ],
        ..Default::default()
    }
}

fn app_ts() -> ParsedModule {
    ParsedModule {
        path: "src/app.ts".into(),
        imports: vec![
            ImportClause {
                specifier: "./index".into(),
                named: vec![NamedSpecifier {
                    name: "UserProfile".into(),
                    alias: Some("P".into()),
                }],
                ..Default::default()
            },
            ImportClause {
                specifier: "./user".into(),
                default: Some("makeUser".into()),
                namespace: None,
                ..Default::default()
            },
            ImportClause {
                specifier: "react".into(),
                named: vec![NamedSpecifier { name: "useState".into(), alias: None }],
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

fn project_resolver() -> ProjectResolver {
    let mut resolver = ProjectResolver::default();
    resolver.module("src/index.ts", "./user", "src/user.ts");
    resolver.module("src/app.ts", "./index", "src/index.ts");
    resolver.module("src/app.ts", "./user", "src/user.ts");

    // Re-export chain: `UserProfile` through the barrel lands on the
    // `Profile` interface declared in src/user.ts.
    resolver.symbol(
        "src/app.ts",
        "./index",
        "UserProfile",
        "src/user.ts",
        "Profile",
        ConstructKind::InterfaceDeclaration,
    );
    resolver.symbol(
        "src/index.ts",
        "./user",
        "Profile",
        "src/user.ts",
        "Profile",
        ConstructKind::InterfaceDeclaration,
    );
    // In-file resolution inside src/user.ts (heritage clauses).
    resolver.symbol(
        "src/user.ts",
        "",
        "Profile",
        "src/user.ts",
        "Profile",
        ConstructKind::InterfaceDeclaration,
    );
    resolver
        .defaults
        .insert(("src/user.ts".into(), EntityKind::Function), "createUser".into());
    resolver
}

// ---------------------------------------------------------------------------
// Cross-file identity
// ---------------------------------------------------------------------------

#[test]
fn test_fragments_agree_on_ids_without_coordination() {
    let resolver = project_resolver();
    let user = map_module(&user_ts(), &resolver).unwrap();
    let app = map_module(&app_ts(), &resolver).unwrap();

    // src/user.ts owns the Profile interface at Resolved status.
    let owned = user
        .nodes
        .iter()
        .find(|n| n.id == "src/user.ts::interface::Profile")
        .expect("owning fragment has the interface node");
    assert_eq!(owned.status, Status::Resolved);
    assert_eq!(owned.scope, Scope::NamedExport);

    // src/app.ts, mapped independently and through a re-export alias chain,
    // references the very same ID as a placeholder.
    let referenced = app
        .nodes
        .iter()
        .find(|n| n.id == "src/user.ts::interface::Profile")
        .expect("importing fragment has a placeholder with the same ID");
    assert_eq!(referenced.status, Status::Placeholder);
    assert_eq!(referenced.name, "Profile", "identity tracks the declared name, not the alias");
}

#[test]
fn test_importing_module_alias_lands_in_table_only() {
    let resolver = project_resolver();
    let app = map_module(&app_ts(), &resolver).unwrap();

    let named = &app.data.imports.named;
    assert_eq!(named.len(), 2, "one local named import + one external");
    assert_eq!(named[0].name, "Profile");
    assert_eq!(named[0].alias.as_deref(), Some("P"));
    assert_eq!(named[0].source, "./index");
}

#[test]
fn test_default_import_probes_to_the_declared_function() {
    let resolver = project_resolver();
    let app = map_module(&app_ts(), &resolver).unwrap();

    let edge = app
        .edges
        .iter()
        .find(|e| e.label == EdgeLabel::ImportsDefault)
        .expect("imports-default edge");
    assert_eq!(edge.target, "src/user.ts::function::createUser");
    assert_eq!(app.data.imports.defaults[0].local, "makeUser");
}

#[test]
fn test_external_import_is_opaque_and_resolved() {
    let resolver = project_resolver();
    let app = map_module(&app_ts(), &resolver).unwrap();

    let external = app
        .nodes
        .iter()
        .find(|n| n.id == "react::external-import-entity::useState")
        .expect("external entity node");
    assert_eq!(external.scope, Scope::External);
    assert_eq!(external.status, Status::Resolved);
}

// ---------------------------------------------------------------------------
// Re-exports and wildcards (barrel file)
// ---------------------------------------------------------------------------

#[test]
fn test_reexport_round_trip() {
    let resolver = project_resolver();
    let barrel = map_module(&index_ts(), &resolver).unwrap();

    let re = &barrel.data.exports.re_exports;
    assert_eq!(re.len(), 1);
    assert_eq!(re[0].source, "./user");
    assert_eq!(re[0].name, "Profile");
    assert_eq!(re[0].alias.as_deref(), Some("UserProfile"));

    // The edge lands on the declaration's true ID behind the barrel.
    let module_id = ident::module_node_id("src/index.ts");
    let entry_edges: Vec<_> = barrel
        .edges
        .iter()
        .filter(|e| {
            e.label == EdgeLabel::ReExports && e.target == "src/user.ts::interface::Profile"
        })
        .collect();
    assert_eq!(entry_edges.len(), 1);
    assert_eq!(entry_edges[0].source, module_id);
}

#[test]
fn test_wildcard_reexport_bookkeeping() {
    let resolver = project_resolver();
    let barrel = map_module(&index_ts(), &resolver).unwrap();

    assert_eq!(barrel.data.exports.wildcards, vec!["./user".to_owned()]);

    let target_module = barrel
        .nodes
        .iter()
        .find(|n| n.id == "src/user.ts::module::user")
        .expect("placeholder node for the forwarded module");
    assert_eq!(target_module.status, Status::Placeholder);

    let module_id = ident::module_node_id("src/index.ts");
    let wildcard_edges: Vec<_> = barrel
        .edges
        .iter()
        .filter(|e| {
            e.label == EdgeLabel::ReExports
                && e.source == module_id
                && e.target == "src/user.ts::module::user"
        })
        .collect();
    assert_eq!(wildcard_edges.len(), 1);
}

// ---------------------------------------------------------------------------
// Inheritance
// ---------------------------------------------------------------------------

#[test]
fn test_inheritance_edges_split_resolved_and_placeholder() {
    let resolver = project_resolver();
    let user = map_module(&user_ts(), &resolver).unwrap();

    // implements Profile: resolvable in-file, edge to the real ID, no
    // placeholder needed.
    let implements = user
        .edges
        .iter()
        .find(|e| e.label == EdgeLabel::Implements)
        .expect("implements edge");
    assert_eq!(implements.source, "src/user.ts::class::User");
    assert_eq!(implements.target, "src/user.ts::interface::Profile");

    // extends BaseEntity: never scanned, degrades to the synthetic ID plus
    // a placeholder node.
    let extends = user
        .edges
        .iter()
        .find(|e| e.label == EdgeLabel::Extends)
        .expect("extends edge");
    assert_eq!(extends.target, "unresolved::class::BaseEntity");
    let placeholder = user
        .nodes
        .iter()
        .find(|n| n.id == "unresolved::class::BaseEntity")
        .expect("placeholder for the unscanned superclass");
    assert_eq!(placeholder.status, Status::Placeholder);
}

// ---------------------------------------------------------------------------
// Whole-fragment shape
// ---------------------------------------------------------------------------

#[test]
fn test_owning_fragment_shape() {
    let resolver = project_resolver();
    let user = map_module(&user_ts(), &resolver).unwrap();

    // Module node first, carrying the merged tables as its payload.
    assert_eq!(user.nodes[0].kind, EntityKind::Module);
    match &user.nodes[0].data {
        NodeData::Module(data) => {
            assert_eq!(data.path, "src/user.ts");
            assert_eq!(data.exports.default.as_deref(), Some("createUser"));
            let named: Vec<_> =
                data.exports.named.iter().map(|n| n.exported.as_str()).collect();
            assert_eq!(named, ["Profile", "User"]);
        }
        other => panic!("expected module payload, got {other:?}"),
    }

    // Every contains edge is rooted in this fragment.
    let ids: Vec<&str> = user.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in user.edges.iter().filter(|e| e.label == EdgeLabel::Contains) {
        assert!(ids.contains(&edge.source.as_str()), "contains source {} in fragment", edge.source);
        assert!(ids.contains(&edge.target.as_str()), "contains target {} in fragment", edge.target);
    }

    // Members are nodes of their own, qualified by owner.
    assert!(ids.contains(&"src/user.ts::method::User.save"));
    assert!(ids.contains(&"src/user.ts::property::Profile.displayName"));
}

#[test]
fn test_determinism_across_runs() {
    let resolver = project_resolver();
    for module in [user_ts(), index_ts(), app_ts()] {
        let first = map_module(&module, &resolver).unwrap();
        let second = map_module(&module, &resolver).unwrap();
        assert_eq!(first, second, "mapping {} must be deterministic", module.path);
    }
}

#[test]
fn test_no_two_nodes_share_an_id_within_a_fragment() {
    let resolver = project_resolver();
    let user = map_module(&user_ts(), &resolver).unwrap();
    let mut seen = std::collections::HashSet::new();
    for node in &user.nodes {
        assert!(seen.insert(node.id.clone()), "duplicate node ID {}", node.id);
    }
}

#[test]
fn test_combining_independent_fragments_keeps_order() {
    let resolver = project_resolver();
    let user = map_module(&user_ts(), &resolver).unwrap();
    let barrel = map_module(&index_ts(), &resolver).unwrap();

    let combined = MappingResult::combine([user.clone(), barrel.clone()]);
    assert_eq!(combined.nodes.len(), user.nodes.len() + barrel.nodes.len());
    // First-wins on the path field: the earlier fragment's path survives.
    assert_eq!(combined.data.path, "src/user.ts");
    // Wildcards from the later fragment are appended, not lost.
    assert_eq!(combined.data.exports.wildcards, vec!["./user".to_owned()]);
}

#[test]
fn test_fragment_serializes_to_json() {
    let resolver = project_resolver();
    let user = map_module(&user_ts(), &resolver).unwrap();
    let json = serde_json::to_string(&user).expect("fragment serializes");
    let back: MappingResult = serde_json::from_str(&json).expect("fragment deserializes");
    assert_eq!(user, back);
}
