/// Node compaction
///
/// Scans alignment columns left to right and merges consecutive columns that
/// induce the same effective partition of sequences into single nodes. This
/// is the algorithmic core of the MSA-to-graph conversion.
///
/// The `min_count` threshold controls bubble formation: a residue class at a
/// column qualifies for its own node only when it has at least `min_count`
/// members. Members of non-qualifying classes are attributed to the largest
/// qualifying class at that column, so rare single-sequence substitutions do
/// not explode the node count. Gapped sequences never join a residue node;
/// their paths simply skip the column.
use log::debug;

use crate::alignment::Alignment;
use crate::columns::{classify, ColumnPartition, SeqIndex};

/// A finalized node: a maximal run of columns over a stable member set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactedNode {
    /// Node ID, assigned in finalization order starting at 1. The counter is
    /// local to one compaction call.
    pub id: u64,
    /// One symbol per covered column (the class symbol, which may differ
    /// from an absorbed minority member's own residue).
    pub sequence: Vec<u8>,
    /// Sequences traversing this node, ascending input index. Never empty.
    pub members: Vec<SeqIndex>,
    /// First alignment column covered by this node.
    pub start_col: usize,
    /// Last alignment column covered by this node (inclusive).
    pub end_col: usize,
}

/// One effective (post-threshold) class at a column.
#[derive(Clone, Debug)]
struct EffectiveClass {
    symbol: u8,
    members: Vec<SeqIndex>,
}

/// A node candidate still growing to the right.
#[derive(Debug)]
struct OpenNode {
    sequence: Vec<u8>,
    members: Vec<SeqIndex>,
    start_col: usize,
    end_col: usize,
}

/// Apply the `min_count` threshold to a raw column partition.
///
/// Classes with fewer than `min_count` members are folded into the largest
/// qualifying class (ties broken by first-appearance order). When no class
/// qualifies, the dominant class is materialized anyway: a column where any
/// sequence carries a residue must be represented by at least one node.
/// The result is re-sorted by lowest member index so that the class order is
/// a function of the member sets alone, independent of which raw classes
/// were folded together.
fn apply_threshold(partition: &ColumnPartition, min_count: usize) -> Vec<EffectiveClass> {
    if partition.classes.is_empty() {
        return Vec::new();
    }

    let mut qualifying: Vec<usize> = (0..partition.classes.len())
        .filter(|&i| partition.classes[i].size() >= min_count)
        .collect();
    if qualifying.is_empty() {
        let dominant = (0..partition.classes.len())
            .max_by(|&a, &b| {
                partition.classes[a]
                    .size()
                    .cmp(&partition.classes[b].size())
                    // prefer the earlier class on equal size
                    .then(b.cmp(&a))
            })
            .unwrap_or(0);
        qualifying.push(dominant);
    }

    let absorber = qualifying
        .iter()
        .copied()
        .max_by(|&a, &b| {
            partition.classes[a]
                .size()
                .cmp(&partition.classes[b].size())
                .then(b.cmp(&a))
        })
        .unwrap_or(qualifying[0]);

    let mut effective: Vec<EffectiveClass> = qualifying
        .iter()
        .map(|&i| EffectiveClass {
            symbol: partition.classes[i].symbol,
            members: partition.classes[i].members.clone(),
        })
        .collect();

    let absorber_pos = qualifying
        .iter()
        .position(|&i| i == absorber)
        .unwrap_or(0);
    for (i, class) in partition.classes.iter().enumerate() {
        if !qualifying.contains(&i) {
            effective[absorber_pos].members.extend(&class.members);
        }
    }

    for class in &mut effective {
        class.members.sort_unstable();
    }
    effective.sort_by_key(|class| class.members[0]);
    effective
}

/// Compact an alignment into nodes.
///
/// Returns the finalized nodes in ID order and, per sequence, the ordered
/// list of node IDs that sequence participates in. The caller guarantees a
/// validated, non-empty alignment and `min_count >= 1`.
pub fn compact(alignment: &Alignment, min_count: usize) -> (Vec<CompactedNode>, Vec<Vec<u64>>) {
    let mut nodes: Vec<CompactedNode> = Vec::new();
    let mut participation: Vec<Vec<u64>> = vec![Vec::new(); alignment.len()];
    let mut next_id: u64 = 1;

    let mut open: Vec<OpenNode> = Vec::new();
    // Member sets of the open nodes, used for partition comparison.
    let mut open_family: Vec<Vec<SeqIndex>> = Vec::new();

    for col in 0..alignment.column_count() {
        let partition = classify(alignment, col);
        // An all-gap column contributes nothing and does not interrupt
        // open runs on either side of it.
        if partition.is_all_gap() {
            continue;
        }

        let effective = apply_threshold(&partition, min_count);
        let family: Vec<Vec<SeqIndex>> = effective
            .iter()
            .map(|class| class.members.clone())
            .collect();

        if !open.is_empty() && family == open_family {
            for (node, class) in open.iter_mut().zip(&effective) {
                node.sequence.push(class.symbol);
                node.end_col = col;
            }
        } else {
            finalize(&mut open, &mut nodes, &mut participation, &mut next_id);
            for class in effective {
                open.push(OpenNode {
                    sequence: vec![class.symbol],
                    members: class.members,
                    start_col: col,
                    end_col: col,
                });
            }
            open_family = family;
        }
    }
    finalize(&mut open, &mut nodes, &mut participation, &mut next_id);

    debug!(
        "compacted {} columns x {} sequences into {} nodes (min_count {})",
        alignment.column_count(),
        alignment.len(),
        nodes.len(),
        min_count
    );
    (nodes, participation)
}

/// Close every open node: assign IDs in class order and record the node on
/// each member's participation list. Runs left to right over the alignment,
/// so participation lists come out in traversal order.
fn finalize(
    open: &mut Vec<OpenNode>,
    nodes: &mut Vec<CompactedNode>,
    participation: &mut [Vec<u64>],
    next_id: &mut u64,
) {
    for node in open.drain(..) {
        let id = *next_id;
        *next_id += 1;
        for &member in &node.members {
            participation[member].push(id);
        }
        nodes.push(CompactedNode {
            id,
            sequence: node.sequence,
            members: node.members,
            start_col: node.start_col,
            end_col: node.end_col,
        });
    }
}
