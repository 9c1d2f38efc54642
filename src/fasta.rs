/// FASTA alignment parsing
///
/// Reads an aligned FASTA (pasted text, any reader, or a file) into an
/// [`Alignment`]. The header's first whitespace-delimited token, minus the
/// leading `>`, is the sequence ID; sequence lines are concatenated per
/// record. Oversized inputs are rejected outright rather than silently
/// truncated, so the resulting graph never misrepresents its input.
use std::fs::File;
use std::io;
use std::path::Path;

use bio::io::fasta;
use log::debug;

use crate::alignment::{Alignment, AlignmentError};

/// Default cap on the number of sequences accepted from one input. Callers
/// bound input size to keep column x sequence work interactive.
pub const DEFAULT_MAX_SEQUENCES: usize = 100;

/// Parse an aligned FASTA from any reader.
pub fn parse_reader<R: io::Read>(
    reader: R,
    max_sequences: usize,
) -> Result<Alignment, AlignmentError> {
    let mut alignment = Alignment::new();

    for result in fasta::Reader::new(reader).records() {
        let record = result.map_err(|err| {
            // The reader reports format violations (e.g. a sequence line
            // before any header) as InvalidData or Other, depending on
            // version; genuine read failures keep their concrete kind.
            match err.kind() {
                io::ErrorKind::InvalidData | io::ErrorKind::Other => {
                    AlignmentError::Fasta(err.to_string())
                }
                _ => AlignmentError::Io(err),
            }
        })?;

        if alignment.len() >= max_sequences {
            return Err(AlignmentError::TooManySequences { max: max_sequences });
        }
        alignment.push(record.id().to_string(), record.seq().to_vec())?;
    }

    alignment.validate_lengths()?;
    debug!(
        "parsed alignment: {} sequences x {} columns",
        alignment.len(),
        alignment.column_count()
    );
    Ok(alignment)
}

/// Parse an aligned FASTA from a string (e.g. pasted input).
pub fn parse_str(text: &str, max_sequences: usize) -> Result<Alignment, AlignmentError> {
    parse_reader(text.as_bytes(), max_sequences)
}

/// Parse an aligned FASTA file.
pub fn parse_file<P: AsRef<Path>>(
    path: P,
    max_sequences: usize,
) -> Result<Alignment, AlignmentError> {
    let file = File::open(path)?;
    parse_reader(file, max_sequences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_parse() {
        let aln = parse_str(">a desc text\nACGT\n>b\nAC-T\n", DEFAULT_MAX_SEQUENCES).unwrap();
        assert_eq!(aln.ids(), &["a".to_string(), "b".to_string()]);
        assert_eq!(aln.seq(0), b"ACGT");
        assert_eq!(aln.seq(1), b"AC-T");
    }

    #[test]
    fn multi_line_sequences_are_concatenated() {
        let aln = parse_str(">a\nAC\nGT\n>b\nACG\nT\n", DEFAULT_MAX_SEQUENCES).unwrap();
        assert_eq!(aln.seq(0), b"ACGT");
        assert_eq!(aln.seq(1), b"ACGT");
    }

    #[test]
    fn header_takes_first_token_only() {
        let aln = parse_str(">spp.1 some extra fields\nACGT\n", DEFAULT_MAX_SEQUENCES).unwrap();
        assert_eq!(aln.ids(), &["spp.1".to_string()]);
    }

    #[test]
    fn empty_input_is_empty_alignment() {
        let aln = parse_str("", DEFAULT_MAX_SEQUENCES).unwrap();
        assert!(aln.is_empty());
    }

    #[test]
    fn sequence_before_header_rejected() {
        let err = parse_str("ACGT\n>a\nACGT\n", DEFAULT_MAX_SEQUENCES).unwrap_err();
        assert!(matches!(err, AlignmentError::Fasta(_)));
    }

    #[test]
    fn unequal_lengths_rejected() {
        let err = parse_str(">a\nACGT\n>b\nACG\n", DEFAULT_MAX_SEQUENCES).unwrap_err();
        assert!(matches!(err, AlignmentError::LengthMismatch { .. }));
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = parse_str(">a\nACGT\n>a\nACGT\n", DEFAULT_MAX_SEQUENCES).unwrap_err();
        assert!(matches!(err, AlignmentError::DuplicateId(_)));
    }

    #[test]
    fn cap_is_an_explicit_error() {
        let text = ">a\nAC\n>b\nAC\n>c\nAC\n";
        let err = parse_str(text, 2).unwrap_err();
        assert!(matches!(err, AlignmentError::TooManySequences { max: 2 }));
        // At the cap itself the input is accepted.
        assert_eq!(parse_str(text, 3).unwrap().len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_file("tests/data/no_such_file.fa", DEFAULT_MAX_SEQUENCES).unwrap_err();
        assert!(matches!(err, AlignmentError::Io(_)));
    }
}
