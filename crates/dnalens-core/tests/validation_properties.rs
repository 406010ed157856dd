use dnalens_core::validate::{validate_sequence, ValidationError, MAX_SEQUENCE_LENGTH};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DNA_AND_SPACE: &[char] = &['A', 'C', 'G', 'T', 'a', 'c', 'g', 't', ' ', '\n', '\t'];

fn random_text(rng: &mut StdRng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

#[test]
fn test_plain_dna_is_uppercased_and_stripped() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [0, 1, 30, 120, 900] {
        let input = random_text(&mut rng, DNA_AND_SPACE, len);
        let expected: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let v = validate_sequence(&input);
        assert_eq!(v.cleaned_sequence, expected);
        assert!(!v.was_converted);
        assert!(!v.was_fasta);
        assert!(v.invalid_characters.is_empty());
    }
}

#[test]
fn test_header_lines_never_leak_into_sequence() {
    let input = ">GATTACA header with ACGT letters\nTTTT\n>another ACGT\nCCCC";
    let v = validate_sequence(input);
    assert_eq!(v.cleaned_sequence, "TTTTCCCC");
    assert!(v.was_fasta);
}

#[test]
fn test_every_uracil_becomes_thymine() {
    let input = "uUaUgUcU".repeat(10);
    let v = validate_sequence(&input);
    assert!(v.was_converted);
    assert!(!v.cleaned_sequence.contains('U'));
    assert_eq!(v.cleaned_sequence, "TTATGTCT".repeat(10));
}

#[test]
fn test_gc_content_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [1, 10, 50, 333, 1999] {
        let input = random_text(&mut rng, &['A', 'C', 'G', 'T'], len);
        let v = validate_sequence(&input);
        assert!((0.0..=100.0).contains(&v.gc_content));
    }
    assert_eq!(validate_sequence(&"AT".repeat(60)).gc_content, 0.0);
    assert_eq!(validate_sequence(&"GC".repeat(60)).gc_content, 100.0);
    assert_eq!(validate_sequence("").gc_content, 0.0);
}

#[test]
fn test_gc_content_nonzero_with_any_gc_in_short_sequence() {
    let v = validate_sequence(&format!("G{}", "A".repeat(99)));
    assert_eq!(v.gc_content, 1.0);
}

#[test]
fn test_oversized_input_keeps_full_length_stats() {
    let input = "GGCCAATT".repeat(1257); // 10,056 bp
    let v = validate_sequence(&input);
    assert_eq!(v.error, Some(ValidationError::TooLong { length: 10_056 }));
    assert_eq!(v.cleaned_sequence.len(), MAX_SEQUENCE_LENGTH);
    assert_eq!(v.cleaned_sequence, &input[..MAX_SEQUENCE_LENGTH]);
    assert_eq!(v.length, 10_056);
    assert_eq!(v.gc_content, 50.0);
}
