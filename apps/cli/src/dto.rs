//! Flat, JSON-friendly DTOs for command output.

use dnalens_core::presets::ExampleSequence;
use dnalens_core::{
    AnalysisResult, FunctionPrediction, Hypothesis, SequenceStats, SequenceValidation, TargetGene,
};
use dnalens_session::AnalysisOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDto {
    pub is_valid: bool,
    pub cleaned_sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub invalid_characters: Vec<String>,
    pub error: Option<String>,
    pub was_converted: bool,
    pub was_fasta: bool,
    pub was_truncated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub length: usize,
    pub gc_content: f64,
    pub at_content: f64,
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    pub name: String,
    pub category: String,
    pub confidence: u8,
    pub tier: String,
    pub mechanism: String,
    pub evidence: Vec<String>,
    pub diseases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneDto {
    pub name: String,
    pub relationship: String,
    pub strength: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisDto {
    pub statement: String,
    pub experiment_type: String,
    pub expected_outcome: String,
    pub timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
    pub id: String,
    pub timestamp: String,
    pub source: String,
    pub fallback_reason: Option<String>,
    pub sequence_type: String,
    pub length: usize,
    pub predictions: Vec<PredictionDto>,
    pub target_genes: Vec<GeneDto>,
    pub hypotheses: Vec<HypothesisDto>,
    pub voice_notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDto {
    pub name: String,
    pub element_type: String,
    pub description: String,
    pub length: usize,
}

impl From<&SequenceValidation> for ValidationDto {
    fn from(v: &SequenceValidation) -> Self {
        ValidationDto {
            is_valid: v.is_valid,
            cleaned_sequence: v.cleaned_sequence.clone(),
            length: v.length,
            gc_content: v.gc_content,
            invalid_characters: v.invalid_characters.iter().map(|c| c.to_string()).collect(),
            error: v.error_message(),
            was_converted: v.was_converted,
            was_fasta: v.was_fasta,
            was_truncated: v.is_truncated(),
        }
    }
}

impl From<&SequenceStats> for StatsDto {
    fn from(s: &SequenceStats) -> Self {
        StatsDto {
            length: s.length,
            gc_content: s.gc_content,
            at_content: s.at_content,
            a: s.a_count,
            t: s.t_count,
            g: s.g_count,
            c: s.c_count,
        }
    }
}

impl From<&FunctionPrediction> for PredictionDto {
    fn from(p: &FunctionPrediction) -> Self {
        PredictionDto {
            name: p.name.clone(),
            category: p.category.clone(),
            confidence: p.confidence,
            tier: p.tier().label().to_string(),
            mechanism: p.mechanism.clone(),
            evidence: p.evidence.clone(),
            diseases: p.disease_associations.clone(),
        }
    }
}

impl From<&TargetGene> for GeneDto {
    fn from(g: &TargetGene) -> Self {
        GeneDto {
            name: g.name.clone(),
            relationship: g.relationship.to_string(),
            strength: g.strength,
            description: g.description.clone(),
        }
    }
}

impl From<&Hypothesis> for HypothesisDto {
    fn from(h: &Hypothesis) -> Self {
        HypothesisDto {
            statement: h.statement.clone(),
            experiment_type: h.experiment_type.clone(),
            expected_outcome: h.expected_outcome.clone(),
            timeline: h.timeline.clone(),
        }
    }
}

impl From<&AnalysisResult> for AnalysisDto {
    fn from(r: &AnalysisResult) -> Self {
        AnalysisDto {
            id: r.id.to_string(),
            timestamp: r.timestamp.to_rfc3339(),
            source: r.source.to_string(),
            fallback_reason: None,
            sequence_type: r.sequence_type.clone(),
            length: r.sequence.len(),
            predictions: r.predictions.iter().map(PredictionDto::from).collect(),
            target_genes: r.target_genes.iter().map(GeneDto::from).collect(),
            hypotheses: r.hypotheses.iter().map(HypothesisDto::from).collect(),
            voice_notes: r.voice_notes.clone(),
        }
    }
}

impl From<&AnalysisOutcome> for AnalysisDto {
    fn from(outcome: &AnalysisOutcome) -> Self {
        AnalysisDto {
            fallback_reason: outcome.fallback_reason().map(str::to_string),
            ..AnalysisDto::from(outcome.result())
        }
    }
}

impl From<&ExampleSequence> for ExampleDto {
    fn from(e: &ExampleSequence) -> Self {
        ExampleDto {
            name: e.name.to_string(),
            element_type: e.element_type.to_string(),
            description: e.description.to_string(),
            length: e.sequence.len(),
        }
    }
}
