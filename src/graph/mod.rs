pub mod edge;
pub mod node;
pub mod payload;

use serde::{Deserialize, Serialize};

use crate::merge::Merge;

use edge::Edge;
use node::Node;
use payload::ModuleData;

/// The unit of composition: everything one mapping step produced.
///
/// Every mapping function returns one of these and nothing else. Fragments
/// are immutable values designed to be combined; node and edge lists
/// concatenate in declaration order, and the partial module data merges under
/// the rules in [`crate::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub data: ModuleData,
}

impl MappingResult {
    /// A fragment with empty node/edge lists and all-default data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Combine an ordered sequence of fragments into one.
    ///
    /// Associative, but not commutative for string-valued data fields;
    /// callers must pass fragments in declaration order.
    pub fn combine(results: impl IntoIterator<Item = MappingResult>) -> MappingResult {
        results
            .into_iter()
            .fold(MappingResult::empty(), |acc, next| MappingResult {
                nodes: crate::merge::merge_vec(acc.nodes, next.nodes),
                edges: crate::merge::merge_vec(acc.edges, next.edges),
                data: acc.data.merge(next.data),
            })
    }
}
