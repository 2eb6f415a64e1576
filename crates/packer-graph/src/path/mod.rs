//! Minimum-hop path extraction and conversion into required packs.
//!
//! Every edge costs one hop, so the shortest path is found breadth-first.
//! Outgoing edges are explored largest pack first; among equally short paths
//! the one taking bigger packs earlier wins, which keeps results stable.

use std::collections::VecDeque;

use packer_core::types::{FxHashMap, PackSize, Quantity, RequiredPacks};
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::graph::QuantityGraph;

/// A root-to-candidate path through the quantity graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityPath {
    /// Quantities visited, starting at the root.
    pub quantities: Vec<Quantity>,
    /// Pack size of each traversed edge; one shorter than `quantities`.
    pub pack_sizes: Vec<PackSize>,
}

impl QuantityPath {
    pub fn hops(&self) -> usize {
        self.pack_sizes.len()
    }

    /// Count each traversed pack size. Empty for a zero-hop path.
    pub fn required_packs(&self) -> RequiredPacks {
        let mut packs = RequiredPacks::new();
        for &size in &self.pack_sizes {
            packs.add(size, 1);
        }
        packs
    }
}

/// Find a minimum-hop path `from -> to`. `None` if `to` is unreachable.
pub fn shortest_path(graph: &QuantityGraph, from: NodeIndex, to: NodeIndex) -> Option<QuantityPath> {
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }

    let mut prev: FxHashMap<NodeIndex, (NodeIndex, PackSize)> = FxHashMap::default();
    let mut queue = VecDeque::from([from]);
    let mut found = from == to;

    while let Some(node) = queue.pop_front() {
        if found {
            break;
        }

        let mut edges: Vec<(NodeIndex, PackSize)> = graph
            .graph
            .edges(node)
            .map(|e| (e.target(), e.weight().pack_size))
            .collect();
        edges.sort_unstable_by(|a, b| b.1.cmp(&a.1));

        for (next, size) in edges {
            if next == from || prev.contains_key(&next) {
                continue;
            }
            prev.insert(next, (node, size));
            if next == to {
                found = true;
                break;
            }
            queue.push_back(next);
        }
    }

    if !found {
        return None;
    }

    // Reconstruct path
    let mut quantities = vec![graph.quantity_of(to)?];
    let mut pack_sizes = Vec::new();
    let mut current = to;
    while let Some(&(parent, size)) = prev.get(&current) {
        quantities.push(graph.quantity_of(parent)?);
        pack_sizes.push(size);
        current = parent;
    }
    quantities.reverse();
    pack_sizes.reverse();

    debug!(hops = pack_sizes.len(), ?pack_sizes, "shortest path extracted");
    Some(QuantityPath {
        quantities,
        pack_sizes,
    })
}
