/// Column classification
///
/// For one alignment column, partition the sequences by the residue symbol
/// they carry there. Gap characters form a distinguished gap set rather than
/// a residue class: gapped sequences never contribute content at a column.
///
/// Class order is deterministic: classes appear in first-appearance order,
/// i.e. sorted by the lowest input index among their members. Reproducible
/// for a fixed alignment and input order.
use crate::alignment::Alignment;

/// Index of a sequence within the alignment's input order.
pub type SeqIndex = usize;

/// Gap characters. `.` appears in Stockholm-derived alignments (e.g. Dfam),
/// `-` everywhere else.
#[inline]
pub fn is_gap(symbol: u8) -> bool {
    symbol == b'-' || symbol == b'.'
}

/// One residue class at a column: the symbol and the (ascending) member
/// indices that carry it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidueClass {
    pub symbol: u8,
    pub members: Vec<SeqIndex>,
}

impl ResidueClass {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// The partition of sequences at one column.
#[derive(Clone, Debug, Default)]
pub struct ColumnPartition {
    /// Residue classes in first-appearance order.
    pub classes: Vec<ResidueClass>,
    /// Sequences that are gapped at this column.
    pub gapped: Vec<SeqIndex>,
}

impl ColumnPartition {
    /// True when every sequence is gapped at this column.
    pub fn is_all_gap(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Classify one column of the alignment.
pub fn classify(alignment: &Alignment, col: usize) -> ColumnPartition {
    let mut partition = ColumnPartition::default();

    for index in 0..alignment.len() {
        let symbol = alignment.symbol(index, col);
        if is_gap(symbol) {
            partition.gapped.push(index);
            continue;
        }
        // Scanning sequences in input order keeps classes in
        // first-appearance order without a separate sort.
        match partition
            .classes
            .iter_mut()
            .find(|class| class.symbol == symbol)
        {
            Some(class) => class.members.push(index),
            None => partition.classes.push(ResidueClass {
                symbol,
                members: vec![index],
            }),
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(seqs: &[(&str, &str)]) -> Alignment {
        let mut aln = Alignment::new();
        for (id, seq) in seqs {
            aln.push(id.to_string(), seq.as_bytes().to_vec()).unwrap();
        }
        aln
    }

    #[test]
    fn shared_column_is_one_class() {
        let aln = alignment(&[("a", "A"), ("b", "A"), ("c", "A")]);
        let partition = classify(&aln, 0);
        assert_eq!(partition.classes.len(), 1);
        assert_eq!(partition.classes[0].symbol, b'A');
        assert_eq!(partition.classes[0].members, vec![0, 1, 2]);
        assert!(partition.gapped.is_empty());
    }

    #[test]
    fn classes_in_first_appearance_order() {
        // 'T' is carried by the majority but first seen after 'G'.
        let aln = alignment(&[("a", "G"), ("b", "T"), ("c", "T"), ("d", "G")]);
        let partition = classify(&aln, 0);
        assert_eq!(partition.classes[0].symbol, b'G');
        assert_eq!(partition.classes[0].members, vec![0, 3]);
        assert_eq!(partition.classes[1].symbol, b'T');
        assert_eq!(partition.classes[1].members, vec![1, 2]);
    }

    #[test]
    fn gaps_form_no_class() {
        let aln = alignment(&[("a", "-"), ("b", "A"), ("c", ".")]);
        let partition = classify(&aln, 0);
        assert_eq!(partition.classes.len(), 1);
        assert_eq!(partition.classes[0].members, vec![1]);
        assert_eq!(partition.gapped, vec![0, 2]);
    }

    #[test]
    fn all_gap_column() {
        let aln = alignment(&[("a", "-"), ("b", "-")]);
        let partition = classify(&aln, 0);
        assert!(partition.is_all_gap());
        assert_eq!(partition.gapped, vec![0, 1]);
    }

    #[test]
    fn case_is_significant() {
        let aln = alignment(&[("a", "a"), ("b", "A")]);
        let partition = classify(&aln, 0);
        assert_eq!(partition.classes.len(), 2);
    }
}
