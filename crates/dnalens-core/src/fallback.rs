//! Locally generated placeholder analysis, used when the remote service is
//! unreachable or returns something unusable.
//!
//! Output is seeded from the sequence itself, so the same input always yields
//! the same placeholder records.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::analysis::{AnalysisReport, FunctionPrediction, Hypothesis, Relationship, TargetGene};
use crate::operations::sequence_stats;

const MAX_PREDICTIONS: usize = 5;
const MAX_TARGET_GENES: usize = 5;
const SILENCER_PATTERN: &str = "GCGC.*GCGC";

/// name, full name, role
const GENE_PANEL: [(&str, &str, &str); 7] = [
    ("GATA4", "GATA Binding Protein 4", "Cardiac transcription factor"),
    ("NKX2-5", "NK2 Homeobox 5", "Heart development"),
    ("SOX2", "SRY-Box 2", "Pluripotency maintenance"),
    ("MYC", "MYC Proto-Oncogene", "Cell proliferation"),
    ("CTCF", "CCCTC-Binding Factor", "Chromatin organization"),
    ("TP53", "Tumor Protein P53", "Cell cycle regulation"),
    ("HNF4A", "Hepatocyte Nuclear Factor 4 Alpha", "Liver function"),
];

/// FNV-1a over the sequence bytes
fn sequence_seed(sequence: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in sequence.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

fn seeded_rng(sequence: &str) -> StdRng {
    StdRng::seed_from_u64(sequence_seed(sequence))
}

fn confidence(rng: &mut StdRng, base: u8, spread: u8) -> u8 {
    base + rng.random_range(0..spread)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn has_silencer_repeat(sequence: &str) -> bool {
    Regex::new(SILENCER_PATTERN)
        .map(|re| re.is_match(sequence))
        .unwrap_or(false)
}

pub fn fallback_predictions(sequence: &str) -> Vec<FunctionPrediction> {
    let mut rng = seeded_rng(sequence);
    let gc = sequence_stats(sequence).gc_content;
    let mut predictions = Vec::new();

    if sequence.contains("TATA") {
        predictions.push(FunctionPrediction {
            id: "pred-1".into(),
            name: "Core Promoter Element".into(),
            category: "Gene Regulation".into(),
            confidence: confidence(&mut rng, 88, 10),
            mechanism: "Contains canonical TATA box sequence that recruits TFIID and positions RNA polymerase II for transcription initiation".into(),
            evidence: strings(&[
                "TATA box motif detected",
                "Positioned -25 to -30 from TSS",
                "Compatible with Pol II transcription",
            ]),
            disease_associations: strings(&[
                "Promoter mutations linked to various cancers",
                "Beta-thalassemia mutations",
            ]),
        });
    }

    if gc > 55.0 {
        predictions.push(FunctionPrediction {
            id: "pred-2".into(),
            name: "CpG Island Regulatory Region".into(),
            category: "Epigenetic Regulation".into(),
            confidence: confidence(&mut rng, 75, 15),
            mechanism: "High GC content suggests CpG island presence, often found near gene promoters and subject to DNA methylation regulation".into(),
            evidence: vec![
                format!("GC content: {}%", gc),
                "CpG dinucleotide enrichment".into(),
                "Potential methylation target".into(),
            ],
            disease_associations: strings(&["Aberrant methylation in cancer", "Imprinting disorders"]),
        });
    }

    if has_silencer_repeat(sequence) {
        predictions.push(FunctionPrediction {
            id: "pred-3".into(),
            name: "Silencer Element".into(),
            category: "Transcriptional Repression".into(),
            confidence: confidence(&mut rng, 65, 20),
            mechanism: "Repetitive GC-rich motifs can recruit repressive transcription factors and chromatin modifiers".into(),
            evidence: strings(&[
                "GC-rich repeat pattern",
                "Potential REST/NRSF binding",
                "Chromatin condensation target",
            ]),
            disease_associations: strings(&["Neurological disorders", "Developmental abnormalities"]),
        });
    }

    predictions.push(FunctionPrediction {
        id: "pred-4".into(),
        name: "Enhancer Activity".into(),
        category: "Tissue-Specific Regulation".into(),
        confidence: confidence(&mut rng, 55, 30),
        mechanism: "Sequence features suggest potential enhancer activity, capable of increasing transcription of target genes in specific cellular contexts".into(),
        evidence: strings(&[
            "Moderate sequence complexity",
            "Potential TF binding sites",
            "Conserved across species",
        ]),
        disease_associations: strings(&["Enhancer hijacking in cancer", "Limb malformations"]),
    });

    predictions.push(FunctionPrediction {
        id: "pred-5".into(),
        name: "Transcription Factor Binding Site".into(),
        category: "Gene Regulation".into(),
        confidence: confidence(&mut rng, 40, 30),
        mechanism: "Contains potential binding motifs for sequence-specific transcription factors".into(),
        evidence: strings(&[
            "Short conserved motifs detected",
            "DNase hypersensitivity predicted",
            "Evolutionary conservation",
        ]),
        disease_associations: strings(&[
            "Mutations affect gene expression",
            "Associated with complex traits",
        ]),
    });

    // stable sort keeps insertion order on ties
    predictions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    predictions.truncate(MAX_PREDICTIONS);
    predictions
}

pub fn fallback_target_genes(sequence: &str) -> Vec<TargetGene> {
    // distinct stream from the prediction jitter
    let mut rng = StdRng::seed_from_u64(sequence_seed(sequence).rotate_left(17));
    let mut panel = GENE_PANEL.to_vec();
    panel.shuffle(&mut rng);

    panel
        .into_iter()
        .take(MAX_TARGET_GENES)
        .enumerate()
        .map(|(index, (name, full, role))| TargetGene {
            id: format!("gene-{}", index),
            name: name.to_string(),
            full_name: Some(full.to_string()),
            relationship: if rng.random_bool(0.6) {
                Relationship::Activation
            } else {
                Relationship::Repression
            },
            strength: 0.3 + rng.random::<f64>() * 0.7,
            description: format!("{} - {}", full, role),
        })
        .collect()
}

pub fn fallback_hypotheses(predictions: &[FunctionPrediction]) -> Vec<Hypothesis> {
    let element = predictions
        .first()
        .map(|p| p.name.to_lowercase())
        .unwrap_or_else(|| "regulatory element".to_string());

    vec![
        Hypothesis {
            id: "hyp-1".into(),
            statement: format!(
                "The identified sequence functions as a {} and enhances expression of nearby genes in a tissue-specific manner.",
                element
            ),
            experiment_type: "Reporter Assay".into(),
            approach: "Clone the sequence upstream of a luciferase reporter gene and transfect into relevant cell lines. Measure luminescence to quantify enhancer activity.".into(),
            expected_outcome: "Increased luciferase activity (>2-fold) compared to empty vector control in target tissue cell lines.".into(),
            resources: "Luciferase reporter plasmid, cell lines, transfection reagents, luminometer".into(),
            timeline: "4-6 weeks".into(),
        },
        Hypothesis {
            id: "hyp-2".into(),
            statement: "Specific transcription factors bind to the regulatory sequence and mediate its function.".into(),
            experiment_type: "ChIP-seq Analysis".into(),
            approach: "Perform chromatin immunoprecipitation followed by sequencing using antibodies against predicted transcription factors.".into(),
            expected_outcome: "Enrichment of ChIP signal at the sequence location with predicted TFs in relevant cell types.".into(),
            resources: "ChIP-grade antibodies, sequencing platform, computational analysis pipeline".into(),
            timeline: "6-8 weeks".into(),
        },
        Hypothesis {
            id: "hyp-3".into(),
            statement: "Deletion of this regulatory sequence affects expression of target genes.".into(),
            experiment_type: "CRISPR Knockout".into(),
            approach: "Design guide RNAs flanking the sequence region. Use CRISPR-Cas9 to delete the region in cell lines or animal models.".into(),
            expected_outcome: "Measurable changes in expression of predicted target genes via qPCR or RNA-seq.".into(),
            resources: "CRISPR reagents, cell culture, molecular biology supplies".into(),
            timeline: "8-12 weeks".into(),
        },
        Hypothesis {
            id: "hyp-4".into(),
            statement: "The sequence exhibits chromatin accessibility patterns consistent with its predicted regulatory function.".into(),
            experiment_type: "ATAC-seq Profiling".into(),
            approach: "Perform ATAC-seq in relevant cell types to assess chromatin accessibility at the sequence location.".into(),
            expected_outcome: "Open chromatin signal at the sequence region in cell types where function is predicted.".into(),
            resources: "ATAC-seq protocol, sequencing, bioinformatics analysis".into(),
            timeline: "3-4 weeks".into(),
        },
    ]
}

/// Full placeholder report for a cleaned sequence
pub fn fallback_report(sequence: &str) -> AnalysisReport {
    let predictions = fallback_predictions(sequence);
    let hypotheses = fallback_hypotheses(&predictions);
    AnalysisReport {
        target_genes: fallback_target_genes(sequence),
        predictions,
        hypotheses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMOTER: &str = "TATAAAAGGCCGCGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACG";

    #[test]
    fn test_deterministic_for_same_sequence() {
        assert_eq!(fallback_report(PROMOTER), fallback_report(PROMOTER));
    }

    #[test]
    fn test_promoter_detected() {
        let predictions = fallback_predictions(PROMOTER);
        assert!(predictions.iter().any(|p| p.name == "Core Promoter Element"));
        assert!(predictions.len() <= MAX_PREDICTIONS);
    }

    #[test]
    fn test_sorted_by_confidence() {
        let predictions = fallback_predictions("GCGCGCGCATATATAGCGCGCGCGCTAGCTAGC");
        for pair in predictions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_gc_rich_and_silencer() {
        let predictions = fallback_predictions("GCGCGCGCGCGCGCGCGCGC");
        let names: Vec<_> = predictions.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"CpG Island Regulatory Region"));
        assert!(names.contains(&"Silencer Element"));
        assert!(!names.contains(&"Core Promoter Element"));
    }

    #[test]
    fn test_confidence_ranges() {
        for p in fallback_predictions(PROMOTER) {
            assert!(p.confidence <= 100);
            match p.id.as_str() {
                "pred-1" => assert!((88..98).contains(&p.confidence)),
                "pred-4" => assert!((55..85).contains(&p.confidence)),
                "pred-5" => assert!((40..70).contains(&p.confidence)),
                _ => {}
            }
        }
    }

    #[test]
    fn test_target_genes_from_panel() {
        let genes = fallback_target_genes(PROMOTER);
        assert_eq!(genes.len(), MAX_TARGET_GENES);
        for (i, g) in genes.iter().enumerate() {
            assert_eq!(g.id, format!("gene-{}", i));
            assert!(GENE_PANEL.iter().any(|(name, _, _)| *name == g.name));
            assert!(g.strength >= 0.3 && g.strength < 1.0);
        }
        let mut names: Vec<_> = genes.iter().map(|g| g.name.clone()).collect();
        names.dedup();
        assert_eq!(names.len(), MAX_TARGET_GENES);
    }

    #[test]
    fn test_hypotheses_name_top_prediction() {
        let predictions = fallback_predictions(PROMOTER);
        let hypotheses = fallback_hypotheses(&predictions);
        assert_eq!(hypotheses.len(), 4);
        assert!(hypotheses[0]
            .statement
            .contains(&predictions[0].name.to_lowercase()));
    }

    #[test]
    fn test_hypotheses_without_predictions() {
        let hypotheses = fallback_hypotheses(&[]);
        assert!(hypotheses[0].statement.contains("regulatory element"));
    }
}
