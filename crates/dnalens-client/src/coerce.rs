//! Turn an untrusted model reply into typed records.
//!
//! Nothing about the reply shape is guaranteed: arrays default to empty,
//! missing scalars get neutral values and malformed entries are skipped.

use dnalens_core::{AnalysisReport, FunctionPrediction, Hypothesis, Relationship, TargetGene};
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use crate::ClientError;

pub const DEFAULT_CONFIDENCE: u8 = 50;
pub const DEFAULT_STRENGTH: f64 = 0.5;
const PERCENT_FLOOR: f64 = 2.0;
const DEFAULT_PREDICTION_NAME: &str = "Unknown function";
const DEFAULT_CATEGORY: &str = "Gene Regulation";
const FENCE_PATTERN: &str = r"```(?:json)?\n?";

/// Strip markdown code fences the model sometimes wraps its JSON in
pub fn strip_code_fences(text: &str) -> String {
    match Regex::new(FENCE_PATTERN) {
        Ok(re) => re.replace_all(text, "").trim().to_string(),
        Err(_) => text.trim().to_string(),
    }
}

/// Parse the text of a model reply as JSON, tolerating code fences
pub fn parse_reply_text(text: &str) -> Result<Value, ClientError> {
    Ok(serde_json::from_str(&strip_code_fences(text))?)
}

fn local_id() -> String {
    Uuid::new_v4().to_string()
}

fn text(obj: &Value, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or(obj: &Value, key: &str, default: &str) -> String {
    text(obj, key)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// A list of strings; a lone string becomes a one-element list
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    let parsed: Option<f64> = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|x| x.is_finite())
}

/// Percent 0..=100; values strictly between 0 and 1 are read as fractions
fn confidence(value: Option<&Value>) -> u8 {
    match number(value) {
        Some(x) if x > 0.0 && x < 1.0 => (x * 100.0).round() as u8,
        Some(x) => x.clamp(0.0, 100.0).round() as u8,
        None => DEFAULT_CONFIDENCE,
    }
}

/// Fraction 0..=1. Values from 2 to 100 are read as percentages; anything
/// else out of range is an overshoot and clamped.
fn strength(value: Option<&Value>) -> f64 {
    match number(value) {
        Some(x) if (PERCENT_FLOOR..=100.0).contains(&x) => x / 100.0,
        Some(x) => x.clamp(0.0, 1.0),
        None => DEFAULT_STRENGTH,
    }
}

fn objects<'a>(value: Option<&'a Value>) -> impl Iterator<Item = &'a Value> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|v| v.is_object())
}

pub fn prediction_from_value(obj: &Value) -> FunctionPrediction {
    FunctionPrediction {
        id: local_id(),
        name: text_or(obj, "name", DEFAULT_PREDICTION_NAME),
        category: text_or(obj, "category", DEFAULT_CATEGORY),
        confidence: confidence(obj.get("confidence")),
        mechanism: text(obj, "mechanism").unwrap_or_default(),
        evidence: string_list(obj.get("evidence")),
        disease_associations: string_list(
            obj.get("diseases").or_else(|| obj.get("disease_associations")),
        ),
    }
}

fn gene_from_relationship(obj: &Value) -> Option<TargetGene> {
    let name = text(obj, "to")
        .or_else(|| text(obj, "gene"))
        .filter(|s| !s.is_empty())?;

    Some(TargetGene {
        id: local_id(),
        name,
        full_name: text(obj, "full_name").filter(|s| !s.is_empty()),
        relationship: text(obj, "type")
            .map(|t| Relationship::from_label(&t))
            .unwrap_or_default(),
        strength: strength(obj.get("strength")),
        description: text(obj, "description").unwrap_or_default(),
    })
}

fn gene_from_name(name: String) -> TargetGene {
    TargetGene {
        id: local_id(),
        name,
        full_name: None,
        relationship: Relationship::Activation,
        strength: DEFAULT_STRENGTH,
        description: String::new(),
    }
}

/// Target genes from `regulatory_network`. Falls back to the bare `genes`
/// list when no relationships are given.
pub fn genes_from_network(network: Option<&Value>) -> Vec<TargetGene> {
    let Some(network) = network else {
        return Vec::new();
    };

    let genes: Vec<TargetGene> = objects(network.get("relationships"))
        .filter_map(gene_from_relationship)
        .collect();
    if !genes.is_empty() {
        return genes;
    }

    string_list(network.get("genes"))
        .into_iter()
        .map(gene_from_name)
        .collect()
}

pub fn hypothesis_from_value(obj: &Value) -> Hypothesis {
    let method = text(obj, "method").unwrap_or_default();
    Hypothesis {
        id: local_id(),
        statement: text(obj, "statement").unwrap_or_default(),
        experiment_type: text(obj, "experiment_type")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| method.clone()),
        approach: text(obj, "approach")
            .filter(|s| !s.is_empty())
            .unwrap_or(method),
        expected_outcome: text(obj, "expected_outcome").unwrap_or_default(),
        resources: text(obj, "resources").unwrap_or_default(),
        timeline: text(obj, "timeline").unwrap_or_default(),
    }
}

/// Coerce a whole reply document. Never fails; a non-object yields an empty report.
pub fn report_from_value(value: &Value) -> AnalysisReport {
    AnalysisReport {
        predictions: objects(value.get("predictions"))
            .map(prediction_from_value)
            .collect(),
        target_genes: genes_from_network(value.get("regulatory_network")),
        hypotheses: objects(value.get("hypotheses"))
            .map(hypothesis_from_value)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_object_yields_empty_report() {
        assert!(report_from_value(&json!({})).is_empty());
        assert!(report_from_value(&json!([1, 2, 3])).is_empty());
        assert!(report_from_value(&Value::Null).is_empty());
    }

    #[test]
    fn test_full_reply() {
        let reply = json!({
            "sequence_stats": {"length": 120, "gc_content": 52.5},
            "predictions": [{
                "name": "Enhancer",
                "confidence": 87,
                "category": "Gene Regulation",
                "mechanism": "Binds GATA factors.",
                "evidence": ["motif A", "motif B"],
                "diseases": ["Cardiomyopathy"]
            }],
            "regulatory_network": {
                "genes": ["GATA4"],
                "relationships": [
                    {"from": "DNA_SEQUENCE", "to": "GATA4", "type": "repression", "strength": 0.8}
                ]
            },
            "hypotheses": [{
                "statement": "It is an enhancer.",
                "method": "Luciferase reporter assay",
                "expected_outcome": "2-fold increase",
                "resources": "Plasmids",
                "timeline": "4 weeks"
            }]
        });

        let report = report_from_value(&reply);
        let p = &report.predictions[0];
        assert_eq!(p.name, "Enhancer");
        assert_eq!(p.confidence, 87);
        assert_eq!(p.evidence, vec!["motif A", "motif B"]);
        assert_eq!(p.disease_associations, vec!["Cardiomyopathy"]);

        let g = &report.target_genes[0];
        assert_eq!(g.name, "GATA4");
        assert_eq!(g.relationship, Relationship::Repression);
        assert_eq!(g.strength, 0.8);

        let h = &report.hypotheses[0];
        assert_eq!(h.experiment_type, "Luciferase reporter assay");
        assert_eq!(h.approach, "Luciferase reporter assay");
        assert_eq!(h.timeline, "4 weeks");
    }

    #[test]
    fn test_relationship_defaults() {
        let genes = genes_from_network(Some(&json!({"relationships": [{"to": "MYC"}]})));
        assert_eq!(genes.len(), 1);
        assert_eq!(genes[0].relationship, Relationship::Activation);
        assert_eq!(genes[0].strength, DEFAULT_STRENGTH);
    }

    #[test]
    fn test_relationship_without_target_skipped() {
        let genes = genes_from_network(Some(&json!({
            "relationships": [{"type": "activation"}, {"to": ""}, "junk", {"to": "SOX2"}]
        })));
        let names: Vec<_> = genes.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["SOX2"]);
    }

    #[test]
    fn test_genes_list_without_relationships() {
        let genes = genes_from_network(Some(&json!({"genes": ["TP53", "CTCF"]})));
        assert_eq!(genes.len(), 2);
        assert!(genes.iter().all(|g| g.strength == DEFAULT_STRENGTH));
    }

    #[test]
    fn test_prediction_defaults_and_single_evidence() {
        let p = prediction_from_value(&json!({"evidence": "one line"}));
        assert_eq!(p.name, DEFAULT_PREDICTION_NAME);
        assert_eq!(p.category, DEFAULT_CATEGORY);
        assert_eq!(p.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(p.evidence, vec!["one line"]);
        assert!(p.disease_associations.is_empty());
    }

    #[test]
    fn test_confidence_normalization() {
        assert_eq!(confidence(Some(&json!(0.85))), 85);
        assert_eq!(confidence(Some(&json!(140))), 100);
        assert_eq!(confidence(Some(&json!(-3))), 0);
        assert_eq!(confidence(Some(&json!("72%"))), 72);
        assert_eq!(confidence(Some(&json!("high"))), DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_strength_normalization() {
        assert_eq!(strength(Some(&json!(75))), 0.75);
        assert_eq!(strength(Some(&json!(1.5))), 1.0);
        assert_eq!(strength(Some(&json!("40%"))), 0.4);
        assert_eq!(strength(Some(&json!(250))), 1.0);
        assert_eq!(strength(Some(&json!(1))), 1.0);
        assert_eq!(strength(Some(&json!(-1))), 0.0);
        assert_eq!(strength(Some(&json!(null))), DEFAULT_STRENGTH);
    }

    #[test]
    fn test_ids_are_unique() {
        let report = report_from_value(&json!({"predictions": [{}, {}]}));
        assert_ne!(report.predictions[0].id, report.predictions[1].id);
    }

    #[test]
    fn test_strip_code_fences() {
        let text = "```json\n{\"predictions\": []}\n```\n";
        assert_eq!(strip_code_fences(text), "{\"predictions\": []}");
        assert!(parse_reply_text(text).is_ok());
        assert!(matches!(
            parse_reply_text("Sorry, I cannot help."),
            Err(ClientError::MalformedResponse(_))
        ));
    }
}
