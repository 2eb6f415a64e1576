//! Collapse the graph onto the closest candidate and drop dead branches.

use packer_core::errors::CalcError;
use packer_core::types::Quantity;
use petgraph::stable_graph::NodeIndex;
use tracing::debug;

use super::QuantityGraph;

/// Result of a pruning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneResult {
    /// Quantity of the surviving candidate (≤ 0).
    pub retained_quantity: Quantity,
    /// Node index of the surviving candidate.
    pub retained_node: NodeIndex,
    /// Number of other candidates removed.
    pub candidates_removed: usize,
    /// Number of dead-end nodes removed.
    pub nodes_removed: usize,
    /// Full scans performed, including the final one that removed nothing.
    pub passes: usize,
}

/// Keep only the candidate closest to zero, then repeatedly remove every
/// other node without outgoing edges until a scan removes nothing.
///
/// Afterwards every remaining node has a path to the retained candidate.
pub fn prune_to_closest_candidate(graph: &mut QuantityGraph) -> Result<PruneResult, CalcError> {
    let (retained_quantity, retained_node) =
        graph
            .closest_candidate()
            .ok_or_else(|| CalcError::GraphInconsistency {
                details: "no candidate at or below zero was reached".to_string(),
            })?;

    let others: Vec<NodeIndex> = graph
        .candidates()
        .filter(|&(_, idx)| idx != retained_node)
        .map(|(_, idx)| idx)
        .collect();
    let candidates_removed = others.len();
    for idx in others {
        graph.remove_node(idx);
    }

    let mut nodes_removed = 0;
    let mut passes = 0;
    loop {
        passes += 1;
        let dead: Vec<NodeIndex> = graph
            .graph
            .node_indices()
            .filter(|&idx| idx != retained_node && graph.out_degree(idx) == 0)
            .collect();
        if dead.is_empty() {
            break;
        }
        nodes_removed += dead.len();
        for idx in dead {
            graph.remove_node(idx);
        }
    }

    debug!(
        retained_quantity,
        candidates_removed,
        nodes_removed,
        passes,
        remaining = graph.node_count(),
        "quantity graph pruned"
    );

    Ok(PruneResult {
        retained_quantity,
        retained_node,
        candidates_removed,
        nodes_removed,
        passes,
    })
}
