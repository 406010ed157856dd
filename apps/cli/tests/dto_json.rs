use dnalens_cli::commands::sequence;
use dnalens_cli::dto::AnalysisDto;
use dnalens_core::fallback::fallback_report;
use dnalens_core::{AnalysisResult, ResultSource};
use pretty_assertions::assert_eq;

#[test]
fn test_validation_dto_uses_camel_case() {
    let dto = sequence::validate(&"AUGC".repeat(15));
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["isValid"], true);
    assert_eq!(json["wasConverted"], true);
    assert_eq!(json["wasFasta"], false);
    assert_eq!(json["gcContent"], 50.0);
    assert!(json.get("cleaned_sequence").is_none());
}

#[test]
fn test_analysis_dto_from_fallback_result() {
    let seq = "TATAAAAGGCCGCG".repeat(5);
    let result = AnalysisResult::new(seq.clone(), fallback_report(&seq), ResultSource::Fallback);
    let dto = AnalysisDto::from(&result);

    assert_eq!(dto.source, "fallback");
    assert_eq!(dto.length, 70);
    assert_eq!(dto.predictions.len(), result.predictions.len());
    assert_eq!(dto.sequence_type, result.sequence_type);

    let json = serde_json::to_value(&dto).unwrap();
    assert!(json.get("targetGenes").is_some());
    assert!(json.get("voiceNotes").is_some());
}

#[test]
fn test_gene_dto_keys_match_other_records() {
    let seq = "GATTACA".repeat(10);
    let result = AnalysisResult::new(seq.clone(), fallback_report(&seq), ResultSource::Fallback);
    let json = serde_json::to_value(AnalysisDto::from(&result)).unwrap();

    let gene = &json["targetGenes"][0];
    let mut keys: Vec<&str> = gene.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["description", "name", "relationship", "strength"]);
    assert!(json["hypotheses"][0].get("experimentType").is_some());
}
