//! Per-file code-graph mapping core.
//!
//! Turns one parsed source file (class/interface/module-based language) into
//! a typed, queryable graph fragment: nodes for declared entities, edges for
//! the relationships between them, and a module-level import/export table.
//! Fragments carry deterministic IDs so a project-level aggregator can merge
//! them (out of order, across workers) without coordination.
//!
//! The parsing front end is an external collaborator: it hands over a
//! [`syntax::ParsedModule`] plus a [`syntax::SymbolResolver`], and
//! [`mapper::map_module`] does the rest. This crate performs no I/O.

pub mod classify;
pub mod error;
pub mod factory;
pub mod graph;
pub mod ident;
pub mod mapper;
pub mod merge;
pub mod syntax;

pub use error::MapError;
pub use graph::edge::{Edge, EdgeLabel};
pub use graph::node::{EntityKind, Node, Scope, Status};
pub use graph::payload::{ModuleData, NodeData};
pub use graph::MappingResult;
pub use mapper::map_module;
