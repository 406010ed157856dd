use dnalens_core::operations::sequence_stats;
use dnalens_core::presets::EXAMPLE_SEQUENCES;
use dnalens_core::validate_sequence;
use dnalens_formats::fasta::{self, FastaRecord, LINE_WIDTH};

use crate::dto::{ExampleDto, StatsDto, ValidationDto};

pub fn validate(raw: &str) -> ValidationDto {
    ValidationDto::from(&validate_sequence(raw))
}

/// Base composition of the cleaned sequence, regardless of length bounds
pub fn stats(raw: &str) -> StatsDto {
    let cleaned = dnalens_core::clean_sequence(raw).cleaned;
    StatsDto::from(&sequence_stats(&cleaned))
}

/// The cleaned sequence as a single FASTA record
pub fn cleaned_fasta(v: &ValidationDto) -> String {
    fasta::serialize(&[FastaRecord {
        header: format!("cleaned length={} gc={:.1}", v.length, v.gc_content),
        sequence: v.cleaned_sequence.clone(),
    }])
}

pub fn examples() -> Vec<ExampleDto> {
    EXAMPLE_SEQUENCES.iter().map(ExampleDto::from).collect()
}

/// Human-readable validation summary
pub fn describe_validation(v: &ValidationDto) -> Vec<String> {
    let mut lines = vec![
        format!("Status:  {}", if v.is_valid { "valid" } else { "invalid" }),
        format!("Length:  {} bp", v.length),
        format!("GC:      {:.1}%", v.gc_content),
    ];
    if let Some(error) = &v.error {
        lines.push(format!("Error:   {}", error));
    }
    if v.was_fasta {
        lines.push("Note:    FASTA header removed".to_string());
    }
    if v.was_converted {
        lines.push("Note:    RNA converted to DNA (U -> T)".to_string());
    }
    if v.was_truncated {
        lines.push(format!(
            "Note:    display sequence cut to {} bp",
            v.cleaned_sequence.len()
        ));
    }
    if !v.invalid_characters.is_empty() {
        lines.push(format!("Removed: {}", v.invalid_characters.join(" ")));
    }
    if !v.cleaned_sequence.is_empty() {
        lines.push(String::new());
        lines.extend(
            fasta::wrap(&v.cleaned_sequence, LINE_WIDTH)
                .lines()
                .map(str::to_string),
        );
    }
    lines
}
