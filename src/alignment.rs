/// Alignment data model
///
/// An [`Alignment`] is an ordered mapping from sequence ID to aligned residue
/// bytes. Input order is preserved: it drives the deterministic ordering of
/// residue classes during extraction, so two alignments with the same records
/// in a different order are different inputs.
use thiserror::Error;

/// Errors raised while building or validating an alignment.
#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("sequence '{id}' has length {len}, expected {expected}")]
    LengthMismatch {
        id: String,
        len: usize,
        expected: usize,
    },
    #[error("duplicate sequence ID '{0}'")]
    DuplicateId(String),
    #[error("record {index} has an empty sequence ID")]
    EmptyId { index: usize },
    #[error("alignment has more than {max} sequences")]
    TooManySequences { max: usize },
    #[error("malformed FASTA: {0}")]
    Fasta(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A validated multiple sequence alignment.
///
/// All sequences share one length; IDs are unique. An empty alignment (zero
/// sequences) is valid and extracts to an empty graph.
#[derive(Clone, Debug, Default)]
pub struct Alignment {
    ids: Vec<String>,
    seqs: Vec<Vec<u8>>,
}

impl Alignment {
    pub fn new() -> Self {
        Alignment::default()
    }

    /// Append a record. Rejects duplicate IDs; length agreement is checked
    /// separately by [`Alignment::validate_lengths`] once all records are in,
    /// so multi-line FASTA sequences can be accumulated first.
    pub fn push(&mut self, id: String, seq: Vec<u8>) -> Result<(), AlignmentError> {
        if id.is_empty() {
            return Err(AlignmentError::EmptyId {
                index: self.ids.len(),
            });
        }
        if self.ids.iter().any(|existing| *existing == id) {
            return Err(AlignmentError::DuplicateId(id));
        }
        self.ids.push(id);
        self.seqs.push(seq);
        Ok(())
    }

    /// Check that every sequence has the same length as the first.
    pub fn validate_lengths(&self) -> Result<(), AlignmentError> {
        let expected = match self.seqs.first() {
            Some(seq) => seq.len(),
            None => return Ok(()),
        };
        for (id, seq) in self.ids.iter().zip(&self.seqs) {
            if seq.len() != expected {
                return Err(AlignmentError::LengthMismatch {
                    id: id.clone(),
                    len: seq.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Alignment length L (0 for an empty alignment).
    pub fn column_count(&self) -> usize {
        self.seqs.first().map_or(0, |seq| seq.len())
    }

    /// Sequence IDs in input order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Aligned residues of the i-th sequence.
    pub fn seq(&self, index: usize) -> &[u8] {
        &self.seqs[index]
    }

    /// Residue of sequence `index` at `col`.
    #[inline]
    pub fn symbol(&self, index: usize, col: usize) -> u8 {
        self.seqs[index][col]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.ids
            .iter()
            .map(|id| id.as_str())
            .zip(self.seqs.iter().map(|seq| seq.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut aln = Alignment::new();
        aln.push("a".to_string(), b"ACGT".to_vec()).unwrap();
        aln.push("b".to_string(), b"AC-T".to_vec()).unwrap();

        assert_eq!(aln.len(), 2);
        assert_eq!(aln.column_count(), 4);
        assert_eq!(aln.ids(), &["a".to_string(), "b".to_string()]);
        assert_eq!(aln.seq(1), b"AC-T");
        assert_eq!(aln.symbol(1, 2), b'-');
        aln.validate_lengths().unwrap();
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut aln = Alignment::new();
        aln.push("a".to_string(), b"ACGT".to_vec()).unwrap();
        let err = aln.push("a".to_string(), b"ACGT".to_vec()).unwrap_err();
        assert!(matches!(err, AlignmentError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn empty_id_rejected() {
        let mut aln = Alignment::new();
        let err = aln.push(String::new(), b"ACGT".to_vec()).unwrap_err();
        assert!(matches!(err, AlignmentError::EmptyId { index: 0 }));
    }

    #[test]
    fn unequal_lengths_rejected() {
        let mut aln = Alignment::new();
        aln.push("a".to_string(), b"ACGT".to_vec()).unwrap();
        aln.push("b".to_string(), b"ACG".to_vec()).unwrap();
        let err = aln.validate_lengths().unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::LengthMismatch {
                len: 3,
                expected: 4,
                ..
            }
        ));
    }

    #[test]
    fn empty_alignment_is_valid() {
        let aln = Alignment::new();
        assert!(aln.is_empty());
        assert_eq!(aln.column_count(), 0);
        aln.validate_lengths().unwrap();
    }
}
