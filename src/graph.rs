/// Graph model and path/edge construction
///
/// The output graph: nodes with content, deduplicated directed edges, and one
/// traversal path per input sequence. Field names here are internal; the
/// rendering contracts live in the `vg` and `gfa` modules.
use std::collections::BTreeSet;

use crate::alignment::Alignment;
use crate::compact::CompactedNode;

/// A graph node: a merged run of alignment columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: u64,
    pub sequence: String,
}

/// A directed edge between nodes. Deduplicated: multiplicity of traversal is
/// not stored, only existence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub from: u64,
    pub to: u64,
}

/// One sequence's ordered traversal of nodes. May be empty for an all-gap
/// sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphPath {
    pub name: String,
    pub nodes: Vec<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    /// Sorted by (from, to) for deterministic output.
    pub edges: Vec<Edge>,
    /// One entry per input sequence, in input order.
    pub paths: Vec<GraphPath>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Assemble the final graph from the compactor's output.
///
/// Paths are the per-sequence participation lists; edges are the union of
/// consecutive node pairs across all paths. A self-loop cannot arise from a
/// correct compaction (runs are already merged) and is treated as a fatal
/// defect.
pub fn build_graph(
    alignment: &Alignment,
    compacted: Vec<CompactedNode>,
    participation: Vec<Vec<u64>>,
) -> Graph {
    let nodes: Vec<Node> = compacted
        .into_iter()
        .map(|node| {
            assert!(
                !node.members.is_empty(),
                "node {} has no member sequences",
                node.id
            );
            Node {
                id: node.id,
                // Class symbols are plain ASCII residues taken from the input.
                sequence: String::from_utf8_lossy(&node.sequence).into_owned(),
            }
        })
        .collect();

    let known: BTreeSet<u64> = nodes.iter().map(|node| node.id).collect();
    let mut edges: BTreeSet<Edge> = BTreeSet::new();
    let mut paths: Vec<GraphPath> = Vec::with_capacity(participation.len());

    for (name, visited) in alignment.ids().iter().zip(participation) {
        for &id in &visited {
            assert!(known.contains(&id), "path '{}' references unknown node {}", name, id);
        }
        for pair in visited.windows(2) {
            assert_ne!(pair[0], pair[1], "self-loop on node {}", pair[0]);
            edges.insert(Edge {
                from: pair[0],
                to: pair[1],
            });
        }
        paths.push(GraphPath {
            name: name.clone(),
            nodes: visited,
        });
    }

    Graph {
        nodes,
        edges: edges.into_iter().collect(),
        paths,
    }
}
