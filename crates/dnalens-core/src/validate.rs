//! Normalization and validation of user-supplied nucleotide text.
//!
//! Every outcome, including empty or oversized input, is reported as data in
//! [`SequenceValidation`]; nothing here returns an error or panics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::operations::{gc_content, round_to_tenth};

pub const MIN_SEQUENCE_LENGTH: usize = 50;
pub const MAX_SEQUENCE_LENGTH: usize = 10_000;

const HEADER_MARKER: char = '>';
const URACIL: char = 'U';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Why a cleaned sequence cannot be submitted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("No valid DNA sequence found. Please use only A, T, G, C nucleotides.")]
    NoValidSequence,
    #[error("Sequence too short ({length} bp). Minimum 50 base pairs required.")]
    TooShort { length: usize },
    #[error("Sequence too long ({length} bp). Maximum 10,000 base pairs allowed.")]
    TooLong { length: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceValidation {
    pub is_valid: bool,
    /// Uppercase A/T/G/C only. Truncated to [`MAX_SEQUENCE_LENGTH`] when too long.
    pub cleaned_sequence: String,
    /// Length of the full cleaned sequence, even when `cleaned_sequence` is truncated
    pub length: usize,
    /// GC percentage over the full cleaned sequence, one decimal place
    pub gc_content: f64,
    pub invalid_characters: Vec<char>,
    pub error: Option<ValidationError>,
    /// RNA input: every U was replaced with T
    pub was_converted: bool,
    /// FASTA header lines were present and dropped
    pub was_fasta: bool,
}

impl SequenceValidation {
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// The display sequence was cut to the maximum length
    pub fn is_truncated(&self) -> bool {
        self.cleaned_sequence.len() < self.length
    }
}

/// Result of the cleaning pipeline, without bounds checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedSequence {
    pub cleaned: String,
    pub was_converted: bool,
    pub was_fasta: bool,
}

struct Normalized {
    /// Header-free, whitespace-free, uppercased text before RNA conversion
    residues: String,
    cleaned: CleanedSequence,
}

/// Whitespace, plus the byte-order mark editors prepend to text files
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

fn normalize(input: &str) -> Normalized {
    let was_fasta = input.contains(HEADER_MARKER);

    let body: String = input
        .lines()
        .filter(|line| !line.trim_matches(is_blank).starts_with(HEADER_MARKER))
        .collect();

    let residues: String = body
        .chars()
        .filter(|c| !is_blank(*c))
        .flat_map(char::to_uppercase)
        .collect();

    let was_converted = residues.contains(URACIL);

    let cleaned: String = residues
        .chars()
        .map(|c| if c == URACIL { 'T' } else { c })
        .filter(|c| is_dna_base(*c))
        .collect();

    Normalized {
        residues,
        cleaned: CleanedSequence {
            cleaned,
            was_converted,
            was_fasta,
        },
    }
}

pub fn is_dna_base(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'G' | 'C')
}

/// Strip FASTA headers and whitespace, uppercase, convert RNA to DNA and drop
/// everything outside A/T/G/C.
pub fn clean_sequence(input: &str) -> CleanedSequence {
    normalize(input).cleaned
}

/// Characters that were dropped by the alphabet filter, in first-seen order
fn rejected_characters(residues: &str) -> Vec<char> {
    let mut rejected = Vec::new();
    for c in residues.chars() {
        if is_dna_base(c) || c == URACIL || c == HEADER_MARKER {
            continue;
        }
        if !rejected.contains(&c) {
            rejected.push(c);
        }
    }
    rejected
}

/// Normalize raw input and check it against the analysis length bounds.
///
/// A too-short sequence is still returned with its stats. A too-long one is
/// returned truncated to [`MAX_SEQUENCE_LENGTH`] while `length` and
/// `gc_content` describe the full cleaned sequence.
pub fn validate_sequence(input: &str) -> SequenceValidation {
    let Normalized { residues, cleaned } = normalize(input);
    let invalid_characters = rejected_characters(&residues);

    let CleanedSequence {
        cleaned: mut sequence,
        was_converted,
        was_fasta,
    } = cleaned;

    let length = sequence.len();
    let gc = round_to_tenth(gc_content(&sequence));

    let error = if length == 0 {
        Some(ValidationError::NoValidSequence)
    } else if length < MIN_SEQUENCE_LENGTH {
        Some(ValidationError::TooShort { length })
    } else if length > MAX_SEQUENCE_LENGTH {
        // ASCII only past the alphabet filter, so byte truncation is safe
        sequence.truncate(MAX_SEQUENCE_LENGTH);
        Some(ValidationError::TooLong { length })
    } else {
        None
    };

    SequenceValidation {
        is_valid: error.is_none(),
        cleaned_sequence: sequence,
        length,
        gc_content: gc,
        invalid_characters,
        error,
        was_converted,
        was_fasta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(unit: &str, total: usize) -> String {
        unit.chars().cycle().take(total).collect()
    }

    #[test]
    fn test_clean_plain_dna() {
        let out = clean_sequence("atgc ATGC\n\tatgc");
        assert_eq!(out.cleaned, "ATGCATGCATGC");
        assert!(!out.was_converted);
        assert!(!out.was_fasta);
    }

    #[test]
    fn test_fasta_headers_dropped() {
        let out = clean_sequence(">seq1 GATTACA\nAAAA\n  >seq2\nCCCC\n");
        assert_eq!(out.cleaned, "AAAACCCC");
        assert!(out.was_fasta);
    }

    #[test]
    fn test_rna_converted() {
        let out = clean_sequence("AUGC uuaa");
        assert_eq!(out.cleaned, "ATGCTTAA");
        assert!(out.was_converted);
    }

    #[test]
    fn test_crlf_input() {
        let out = clean_sequence(">hdr\r\nACGT\r\nACGT\r\n");
        assert_eq!(out.cleaned, "ACGTACGT");
    }

    #[test]
    fn test_valid_sequence() {
        let seq = repeat("ATGC", 100);
        let v = validate_sequence(&seq);
        assert!(v.is_valid);
        assert_eq!(v.error, None);
        assert_eq!(v.length, 100);
        assert_eq!(v.gc_content, 50.0);
        assert_eq!(v.cleaned_sequence, seq);
        assert!(v.invalid_characters.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let v = validate_sequence("");
        assert!(!v.is_valid);
        assert_eq!(v.error, Some(ValidationError::NoValidSequence));
        assert_eq!(v.length, 0);
        assert_eq!(v.gc_content, 0.0);
    }

    #[test]
    fn test_only_invalid_characters() {
        let v = validate_sequence("xyz 123");
        assert_eq!(v.error, Some(ValidationError::NoValidSequence));
        assert_eq!(v.invalid_characters, vec!['X', 'Y', 'Z', '1', '2', '3']);
    }

    #[test]
    fn test_length_49_too_short_keeps_stats() {
        let seq = format!("{}{}", "G".repeat(10), "A".repeat(39));
        let v = validate_sequence(&seq);
        assert!(!v.is_valid);
        assert_eq!(v.error, Some(ValidationError::TooShort { length: 49 }));
        assert_eq!(v.length, 49);
        assert_eq!(v.cleaned_sequence, seq);
        assert_eq!(v.gc_content, 20.4);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(validate_sequence(&"A".repeat(MIN_SEQUENCE_LENGTH)).is_valid);
        assert!(validate_sequence(&"A".repeat(MAX_SEQUENCE_LENGTH)).is_valid);
    }

    #[test]
    fn test_too_long_truncates_but_reports_full_stats() {
        // 10,000 A followed by 50 G: the truncated prefix has no G at all
        let seq = format!("{}{}", "A".repeat(10_000), "G".repeat(50));
        let v = validate_sequence(&seq);
        assert!(!v.is_valid);
        assert_eq!(v.error, Some(ValidationError::TooLong { length: 10_050 }));
        assert_eq!(v.cleaned_sequence.len(), 10_000);
        assert!(v.cleaned_sequence.chars().all(|c| c == 'A'));
        assert_eq!(v.length, 10_050);
        assert_eq!(v.gc_content, 0.5);
        assert!(v.is_truncated());
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let seq = repeat("GATTACA", 140);
        let first = validate_sequence(&seq);
        let second = validate_sequence(&first.cleaned_sequence);
        assert_eq!(first, second);
        assert_eq!(second.cleaned_sequence, seq);
        assert!(!second.was_converted);
        assert!(!second.was_fasta);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let v = validate_sequence(">seq1\nATGC atgc NNNN UuUu\n");
        assert_eq!(v.cleaned_sequence, "ATGCATGCTTTT");
        assert_eq!(v.length, 12);
        assert!(!v.is_valid);
        assert_eq!(v.error, Some(ValidationError::TooShort { length: 12 }));
        assert!(v.was_fasta);
        assert!(v.was_converted);
        assert_eq!(v.invalid_characters, vec!['N']);
        assert_eq!(v.gc_content, 33.3);
    }

    #[test]
    fn test_header_text_not_reported_invalid() {
        let v = validate_sequence(">chr1 some_header XYZ\nACGTN");
        assert_eq!(v.invalid_characters, vec!['N']);
    }

    #[test]
    fn test_byte_order_mark_before_header() {
        let v = validate_sequence("\u{FEFF}>GATTACA chr1\nCCCC\n");
        assert_eq!(v.cleaned_sequence, "CCCC");
        assert!(v.was_fasta);
        assert!(v.invalid_characters.is_empty());

        let v = validate_sequence("\u{FEFF}ACGT\u{FEFF}ACGT");
        assert_eq!(v.cleaned_sequence, "ACGTACGT");
        assert!(v.invalid_characters.is_empty());
    }

    #[test]
    fn test_error_messages() {
        let v = validate_sequence("ACGT");
        assert_eq!(
            v.error_message().as_deref(),
            Some("Sequence too short (4 bp). Minimum 50 base pairs required.")
        );
    }
}
