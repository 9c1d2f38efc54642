/// msa2gfa - MSA to variation graph conversion tool
///
/// Reads an aligned FASTA and writes the extracted graph as vg-style JSON
/// (for the tube map front end) or GFA v1.
///
/// Examples:
///   msa2gfa -i msa.fa                          # JSON to stdout
///   msa2gfa -i msa.fa -f gfa -o out.gfa        # GFA to a file
///   msa2gfa -i - --min-count 2 < msa.fa        # read from stdin
use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use msa2gfa::{extract_graph, fasta, gfa, vg};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// vg-style JSON consumed by the tube map visualizer
    Json,
    /// GFA v1 text
    Gfa,
}

#[derive(Parser)]
#[command(name = "msa2gfa")]
#[command(about = "Convert an aligned FASTA into a variation graph")]
#[command(long_about = "Convert an aligned FASTA into a variation graph.\n\n\
Sequences sharing a residue at a column are merged into common nodes; runs of\n\
columns with the same sequence grouping collapse into single nodes. Classes\n\
with fewer than --min-count members are folded into the dominant class.\n\n\
Examples:\n  \
  msa2gfa -i msa.fa                       # JSON to stdout\n  \
  msa2gfa -i msa.fa -f gfa -o out.gfa     # GFA to a file\n  \
  msa2gfa -i - --min-count 2 < msa.fa     # read from stdin")]
struct Args {
    /// Input aligned FASTA file, or '-' for stdin
    #[arg(short = 'i', long)]
    input: String,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    format: Format,

    /// Minimum members for a residue class to form its own node
    #[arg(long, default_value_t = 1)]
    min_count: usize,

    /// Maximum number of sequences accepted before the input is rejected
    #[arg(long, default_value_t = fasta::DEFAULT_MAX_SEQUENCES)]
    max_seqs: usize,

    /// Print node/edge/path counts to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.min_count < 1 {
        bail!("--min-count must be at least 1");
    }

    let alignment = if args.input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        fasta::parse_str(&text, args.max_seqs)
    } else {
        fasta::parse_file(&args.input, args.max_seqs)
    }
    .with_context(|| format!("failed to parse alignment from '{}'", args.input))?;

    let (graph, _spans) = extract_graph(&alignment, args.min_count)
        .context("graph extraction failed")?;

    if args.verbose {
        eprintln!(
            "{} sequences, {} columns -> {} nodes, {} edges",
            alignment.len(),
            alignment.column_count(),
            graph.node_count(),
            graph.edge_count()
        );
    }

    let rendered = match args.format {
        Format::Json => vg::to_json(&graph).context("failed to serialize graph")?,
        Format::Gfa => gfa::to_gfa_string(&graph),
    };

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path))?;
            file.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                file.write_all(b"\n")?;
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                handle.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
