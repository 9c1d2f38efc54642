/// vg-style JSON serialization
///
/// The shape consumed by the tube map front end: a `node` list with `id` and
/// `sequence`, an `edge` list with `from`/`to`, and a `path` list where each
/// path carries a `mapping` of positions with 1-based ranks. These field
/// names are a rendering-layer contract and are confined to this module; the
/// core graph types know nothing about them.
use serde::Serialize;

use crate::graph::Graph;

#[derive(Serialize, Debug)]
pub struct VgGraph {
    pub node: Vec<VgNode>,
    pub edge: Vec<VgEdge>,
    pub path: Vec<VgPath>,
}

#[derive(Serialize, Debug)]
pub struct VgNode {
    pub id: u64,
    pub sequence: String,
}

#[derive(Serialize, Debug)]
pub struct VgEdge {
    pub from: u64,
    pub to: u64,
}

#[derive(Serialize, Debug)]
pub struct VgPath {
    pub name: String,
    pub mapping: Vec<VgMapping>,
}

#[derive(Serialize, Debug)]
pub struct VgMapping {
    pub position: VgPosition,
    pub rank: u64,
}

#[derive(Serialize, Debug)]
pub struct VgPosition {
    pub node_id: u64,
}

impl From<&Graph> for VgGraph {
    fn from(graph: &Graph) -> Self {
        VgGraph {
            node: graph
                .nodes
                .iter()
                .map(|n| VgNode {
                    id: n.id,
                    sequence: n.sequence.clone(),
                })
                .collect(),
            edge: graph
                .edges
                .iter()
                .map(|e| VgEdge {
                    from: e.from,
                    to: e.to,
                })
                .collect(),
            path: graph
                .paths
                .iter()
                .map(|p| VgPath {
                    name: p.name.clone(),
                    mapping: p
                        .nodes
                        .iter()
                        .enumerate()
                        .map(|(rank, &node_id)| VgMapping {
                            position: VgPosition { node_id },
                            rank: rank as u64 + 1,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Serialize a graph as vg-style JSON.
pub fn to_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string(&VgGraph::from(graph))
}
