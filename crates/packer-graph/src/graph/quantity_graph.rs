//! petgraph::StableGraph wrapper keyed by remaining quantity.

use packer_core::types::{FxHashMap, FxHashSet, PackSize, Quantity};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

/// A graph vertex. Its identity is the remaining quantity it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityNode {
    pub quantity: Quantity,
}

/// Edge `a -> b` meaning `b = a - pack_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackEdge {
    pub pack_size: PackSize,
}

/// The underlying directed graph type.
pub type QuantityStableGraph = StableGraph<QuantityNode, PackEdge, Directed>;

/// Arena of quantity nodes with O(1) lookup by quantity.
///
/// Candidates (nodes at or below zero) are tracked as they are discovered.
#[derive(Debug)]
pub struct QuantityGraph {
    /// The petgraph stable graph.
    pub graph: QuantityStableGraph,
    node_index: FxHashMap<Quantity, NodeIndex>,
    candidates: FxHashMap<Quantity, NodeIndex>,
    root: NodeIndex,
}

impl QuantityGraph {
    /// Create a graph holding only the root node.
    pub fn new(root_quantity: Quantity) -> Self {
        let mut graph = QuantityStableGraph::default();
        let root = graph.add_node(QuantityNode {
            quantity: root_quantity,
        });
        let mut node_index = FxHashMap::default();
        node_index.insert(root_quantity, root);
        Self {
            graph,
            node_index,
            candidates: FxHashMap::default(),
            root,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Find or create the node for `quantity`.
    pub fn ensure_node(&mut self, quantity: Quantity) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&quantity) {
            return idx;
        }
        let idx = self.graph.add_node(QuantityNode { quantity });
        self.node_index.insert(quantity, idx);
        idx
    }

    /// Look up a node index by quantity.
    pub fn get_node(&self, quantity: Quantity) -> Option<NodeIndex> {
        self.node_index.get(&quantity).copied()
    }

    pub fn quantity_of(&self, idx: NodeIndex) -> Option<Quantity> {
        self.graph.node_weight(idx).map(|n| n.quantity)
    }

    /// Whether an edge of weight `pack_size` already runs `from -> to`.
    pub fn has_edge_with_weight(&self, from: NodeIndex, to: NodeIndex, pack_size: PackSize) -> bool {
        self.graph
            .edges_directed(from, Direction::Outgoing)
            .any(|e| e.target() == to && e.weight().pack_size == pack_size)
    }

    /// Link `from -> to` by `pack_size` unless that exact edge exists.
    ///
    /// Returns `false` when the edge was already present.
    pub fn link(&mut self, from: NodeIndex, to: NodeIndex, pack_size: PackSize) -> bool {
        if self.has_edge_with_weight(from, to, pack_size) {
            return false;
        }
        self.graph.add_edge(from, to, PackEdge { pack_size });
        true
    }

    pub fn register_candidate(&mut self, quantity: Quantity, idx: NodeIndex) {
        self.candidates.insert(quantity, idx);
    }

    /// Candidate quantities and their nodes, in no particular order.
    pub fn candidates(&self) -> impl Iterator<Item = (Quantity, NodeIndex)> + '_ {
        self.candidates.iter().map(|(&q, &idx)| (q, idx))
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The candidate closest to zero from below (exact zero wins).
    pub fn closest_candidate(&self) -> Option<(Quantity, NodeIndex)> {
        self.candidates().max_by_key(|&(q, _)| q)
    }

    /// Number of distinct nodes with an edge into the zero node.
    pub fn zero_predecessor_count(&self) -> usize {
        let Some(zero) = self.get_node(0) else {
            return 0;
        };
        self.graph
            .neighbors_directed(zero, Direction::Incoming)
            .collect::<FxHashSet<_>>()
            .len()
    }

    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    /// Remove a node, its edges, and any candidate entry for it.
    pub fn remove_node(&mut self, idx: NodeIndex) -> bool {
        let Some(node) = self.graph.remove_node(idx) else {
            return false;
        };
        self.node_index.remove(&node.quantity);
        self.candidates.remove(&node.quantity);
        true
    }

    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.graph.contains_node(idx)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
