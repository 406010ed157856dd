use serde::{Deserialize, Serialize};

/// Base composition summary for a cleaned sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SequenceStats {
    pub length: usize,
    /// Percent, rounded to one decimal place
    pub gc_content: f64,
    /// Percent, rounded to one decimal place
    pub at_content: f64,
    pub a_count: usize,
    pub t_count: usize,
    pub g_count: usize,
    pub c_count: usize,
}

/// Round a percentage to one decimal place, half away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count G and C bases (case-insensitive)
pub fn gc_count(seq: &str) -> usize {
    seq.chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
        .count()
}

/// Calculate GC content as a percentage (0.0 to 100.0), unrounded
pub fn gc_content(seq: &str) -> f64 {
    let len = seq.chars().count();
    if len == 0 {
        return 0.0;
    }
    gc_count(seq) as f64 / len as f64 * 100.0
}

/// Per-base counts and rounded GC/AT percentages.
///
/// Characters outside A/T/G/C still count toward the length, so the two
/// percentages only sum to 100 for a cleaned sequence.
pub fn sequence_stats(seq: &str) -> SequenceStats {
    let mut stats = SequenceStats::default();

    for base in seq.chars() {
        stats.length += 1;
        match base.to_ascii_uppercase() {
            'A' => stats.a_count += 1,
            'T' => stats.t_count += 1,
            'G' => stats.g_count += 1,
            'C' => stats.c_count += 1,
            _ => {}
        }
    }

    if stats.length > 0 {
        let total = stats.length as f64;
        stats.gc_content = round_to_tenth((stats.g_count + stats.c_count) as f64 / total * 100.0);
        stats.at_content = round_to_tenth((stats.a_count + stats.t_count) as f64 / total * 100.0);
    }

    stats
}
