//! Graph construction by repeated pack subtraction.
//!
//! For `i` from the number of pack sizes down to 1, the root is expanded with
//! the `i` largest sizes. Early sweeps only see the biggest packs, so paths of
//! few large steps are discovered before smaller sizes widen the search.
//!
//! Expansion stops early once the zero node has at least as many distinct
//! predecessors as there are pack sizes. That cutoff bounds the graph but
//! means not every path is enumerated.

use packer_core::types::{PackSize, Quantity};
use petgraph::stable_graph::NodeIndex;
use tracing::debug;

use super::QuantityGraph;

/// One pending expansion: a node and the next size to subtract from it.
struct Frame {
    node: NodeIndex,
    quantity: Quantity,
    next: usize,
}

/// Build the quantity graph rooted at `root_quantity`.
///
/// `sizes_desc` must be sorted descending and free of zeros and duplicates.
pub fn build(root_quantity: Quantity, sizes_desc: &[PackSize]) -> QuantityGraph {
    let mut graph = QuantityGraph::new(root_quantity);
    let stop_at = sizes_desc.len();

    for width in (1..=sizes_desc.len()).rev() {
        expand(&mut graph, &sizes_desc[..width], stop_at);
    }

    debug!(
        root_quantity,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        candidates = graph.candidate_count(),
        "quantity graph built"
    );
    graph
}

/// Depth-first expansion of the root with `available`, on an explicit stack.
///
/// Visits nodes in the same order as the recursive formulation: for each size
/// in turn, link `q -> q - size`; stop at candidates (≤ 0), otherwise descend
/// before trying the next size. An edge that already exists is not expanded
/// again.
fn expand(graph: &mut QuantityGraph, available: &[PackSize], stop_at: usize) {
    if graph.zero_predecessor_count() >= stop_at {
        return;
    }

    let root = graph.root();
    let Some(root_quantity) = graph.quantity_of(root) else {
        return;
    };
    let mut stack = vec![Frame {
        node: root,
        quantity: root_quantity,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&size) = available.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let (node, quantity) = (frame.node, frame.quantity);

        let next_quantity = quantity - Quantity::from(size);
        let next_node = graph.ensure_node(next_quantity);
        if !graph.link(node, next_node, size) {
            continue;
        }

        if next_quantity <= 0 {
            graph.register_candidate(next_quantity, next_node);
            continue;
        }

        if graph.zero_predecessor_count() >= stop_at {
            continue;
        }
        stack.push(Frame {
            node: next_node,
            quantity: next_quantity,
            next: 0,
        });
    }
}
