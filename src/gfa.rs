/// GFA v1 writer
use std::io::{self, Write};

use crate::graph::Graph;

/// Write the graph as GFA v1. All orientations are forward: an MSA graph is
/// a DAG over forward strands only.
pub fn write_gfa<W: Write>(graph: &Graph, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "H\tVN:Z:1.0")?;

    for node in &graph.nodes {
        writeln!(writer, "S\t{}\t{}", node.id, node.sequence)?;
    }

    // Edges are already sorted by (from, to).
    for edge in &graph.edges {
        writeln!(writer, "L\t{}\t+\t{}\t+\t0M", edge.from, edge.to)?;
    }

    for path in &graph.paths {
        // An all-gap sequence has an empty path; a P line with no segment
        // names is invalid GFA, so such paths are not written.
        if path.nodes.is_empty() {
            continue;
        }
        let steps: Vec<String> = path.nodes.iter().map(|id| format!("{}+", id)).collect();
        let overlaps = vec!["0M"; path.nodes.len().saturating_sub(1)].join(",");
        writeln!(writer, "P\t{}\t{}\t{}", path.name, steps.join(","), overlaps)?;
    }

    Ok(())
}

/// Render the graph as a GFA v1 string.
pub fn to_gfa_string(graph: &Graph) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec<u8> cannot fail.
    write_gfa(graph, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_graph;
    use crate::fasta;

    #[test]
    fn gfa_lines() {
        let aln = fasta::parse_str(
            ">a\nACG-T\n>b\nACGGT\n>c\nACGGT\n",
            fasta::DEFAULT_MAX_SEQUENCES,
        )
        .unwrap();
        let (graph, _) = extract_graph(&aln, 2).unwrap();
        let gfa = to_gfa_string(&graph);
        let lines: Vec<&str> = gfa.lines().collect();

        assert_eq!(lines[0], "H\tVN:Z:1.0");
        assert!(lines.contains(&"S\t1\tACG"));
        assert!(lines.contains(&"S\t2\tG"));
        assert!(lines.contains(&"S\t3\tT"));
        assert!(lines.contains(&"L\t1\t+\t2\t+\t0M"));
        assert!(lines.contains(&"L\t1\t+\t3\t+\t0M"));
        assert!(lines.contains(&"L\t2\t+\t3\t+\t0M"));
        assert!(lines.contains(&"P\ta\t1+,3+\t0M"));
        assert!(lines.contains(&"P\tb\t1+,2+,3+\t0M,0M"));
    }

    #[test]
    fn empty_path_emits_no_p_line() {
        let aln = fasta::parse_str(">a\nACGT\n>b\n----\n", fasta::DEFAULT_MAX_SEQUENCES).unwrap();
        let (graph, _) = extract_graph(&aln, 1).unwrap();
        assert!(graph.paths[1].nodes.is_empty());

        let gfa = to_gfa_string(&graph);
        assert!(gfa.lines().any(|l| l == "P\ta\t1+\t"));
        assert!(
            !gfa.lines().any(|l| l.starts_with("P\tb")),
            "all-gap sequence must not produce a P line"
        );
    }

    #[test]
    fn empty_graph_is_header_only() {
        let gfa = to_gfa_string(&crate::graph::Graph::default());
        assert_eq!(gfa, "H\tVN:Z:1.0\n");
    }
}
