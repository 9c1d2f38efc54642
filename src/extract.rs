/// Pipeline orchestration
///
/// `extract_graph` is the single operation exposed to collaborators: it runs
/// classification, compaction and path/edge construction over a validated
/// alignment in one pass. The computation is pure and deterministic; node IDs
/// come from a counter local to the call, so concurrent extractions never
/// interleave ID sequences.
use log::info;
use thiserror::Error;

use crate::alignment::{Alignment, AlignmentError};
use crate::compact::compact;
use crate::graph::{build_graph, Graph};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("min_count must be at least 1")]
    InvalidMinCount,
    #[error("malformed alignment: {0}")]
    Malformed(#[from] AlignmentError),
}

/// Auxiliary metadata: the alignment columns covered by one node.
///
/// Returned alongside the graph as a column-to-node index for rendering and
/// debugging; callers that only need the graph can discard it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSpan {
    pub node_id: u64,
    /// First covered column.
    pub start: usize,
    /// Last covered column, inclusive. All-gap columns inside a run are
    /// covered by the span but contribute no content.
    pub end: usize,
}

/// Convert a multiple sequence alignment into a variation graph.
///
/// Fails on unequal-length sequences or `min_count == 0`; an empty alignment
/// yields an empty graph. Otherwise always succeeds.
pub fn extract_graph(
    alignment: &Alignment,
    min_count: usize,
) -> Result<(Graph, Vec<NodeSpan>), ExtractError> {
    if min_count < 1 {
        return Err(ExtractError::InvalidMinCount);
    }
    alignment.validate_lengths()?;

    if alignment.is_empty() {
        return Ok((Graph::default(), Vec::new()));
    }

    let (nodes, participation) = compact(alignment, min_count);
    let spans: Vec<NodeSpan> = nodes
        .iter()
        .map(|node| NodeSpan {
            node_id: node.id,
            start: node.start_col,
            end: node.end_col,
        })
        .collect();
    let graph = build_graph(alignment, nodes, participation);

    info!(
        "extracted graph: {} nodes, {} edges, {} paths",
        graph.node_count(),
        graph.edge_count(),
        graph.paths.len()
    );
    Ok((graph, spans))
}
