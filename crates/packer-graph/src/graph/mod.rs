//! Quantity graph: construction, candidate tracking, and pruning.

pub mod builder;
pub mod pruning;
pub mod quantity_graph;

pub use builder::build;
pub use pruning::{prune_to_closest_candidate, PruneResult};
pub use quantity_graph::{PackEdge, QuantityGraph, QuantityNode};
