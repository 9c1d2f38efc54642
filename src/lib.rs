//! # msa2gfa
//!
//! A Rust library for converting a multiple sequence alignment (MSA) into a
//! compact variation-graph representation (nodes, edges, per-sequence paths),
//! suitable for tube-map style visualization or GFA export.
//!
//! ## Features
//!
//! - **FASTA parsing**: Read an aligned FASTA from a string, reader, or file,
//!   with an explicit (configurable) cap on the number of sequences
//! - **Column classification**: Partition sequences by residue at each column
//! - **Node compaction**: Merge runs of columns with identical partitions into
//!   single nodes, with a `min_count` threshold that folds rare variants into
//!   the dominant class
//! - **Deterministic**: Same alignment and threshold always produce the same
//!   graph; node IDs are scoped to a single extraction call
//! - **Serialization**: vg-style JSON for the tube map front end, or GFA v1
//!
//! ## Quick Start
//!
//! ```rust
//! use msa2gfa::{fasta, extract_graph};
//!
//! let alignment = fasta::parse_str(">a\nACG-T\n>b\nACGGT\n>c\nACGGT\n",
//!                                  fasta::DEFAULT_MAX_SEQUENCES).unwrap();
//! let (graph, _spans) = extract_graph(&alignment, 1).unwrap();
//! assert_eq!(graph.paths.len(), 3);
//! ```

// Core modules
pub mod alignment;
pub mod columns;
pub mod compact;
pub mod extract;
pub mod graph;

// I/O and serialization
pub mod fasta;
pub mod gfa;
pub mod vg;

// Public API - data structures
pub use alignment::{Alignment, AlignmentError};
pub use graph::{Edge, Graph, GraphPath, Node};

// Public API - extraction
pub use extract::{extract_graph, ExtractError, NodeSpan};
