use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Activation,
    Repression,
}

impl Relationship {
    /// Anything other than an explicit repression is treated as activation
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("repression") {
            Relationship::Repression
        } else {
            Relationship::Activation
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::Activation => write!(f, "activation"),
            Relationship::Repression => write!(f, "repression"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
    Speculative,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            80.. => ConfidenceTier::High,
            60..=79 => ConfidenceTier::Moderate,
            40..=59 => ConfidenceTier::Low,
            _ => ConfidenceTier::Speculative,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Moderate => "Moderate",
            ConfidenceTier::Low => "Low",
            ConfidenceTier::Speculative => "Speculative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionPrediction {
    pub id: String,
    pub name: String,
    pub category: String,
    /// 0 to 100
    pub confidence: u8,
    pub mechanism: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub disease_associations: Vec<String>,
}

impl FunctionPrediction {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetGene {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub relationship: Relationship,
    /// 0.0 to 1.0
    pub strength: f64,
    #[serde(default)]
    pub description: String,
}

impl TargetGene {
    pub fn strength_percent(&self) -> u32 {
        (self.strength.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: String,
    pub statement: String,
    pub experiment_type: String,
    pub approach: String,
    pub expected_outcome: String,
    pub resources: String,
    pub timeline: String,
}

/// The interpreted output of one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisReport {
    #[serde(default)]
    pub predictions: Vec<FunctionPrediction>,
    #[serde(default)]
    pub target_genes: Vec<TargetGene>,
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty() && self.target_genes.is_empty() && self.hypotheses.is_empty()
    }

    /// Category of the leading prediction, used to label the sequence
    pub fn sequence_type(&self) -> String {
        self.predictions
            .first()
            .map(|p| p.category.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Where the records in an analysis came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Live,
    Fallback,
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSource::Live => write!(f, "live"),
            ResultSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A snapshot in the session history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub sequence: String,
    pub sequence_type: String,
    pub source: ResultSource,
    pub predictions: Vec<FunctionPrediction>,
    pub target_genes: Vec<TargetGene>,
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub voice_notes: Vec<String>,
}

impl AnalysisResult {
    pub fn new(sequence: impl Into<String>, report: AnalysisReport, source: ResultSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sequence: sequence.into(),
            sequence_type: report.sequence_type(),
            source,
            predictions: report.predictions,
            target_genes: report.target_genes,
            hypotheses: report.hypotheses,
            voice_notes: Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::Fallback
    }

    pub fn push_note(&mut self, note: impl Into<String>) {
        self.voice_notes.push(note.into());
    }

    /// Copy of the records as a report, e.g. for export
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            predictions: self.predictions.clone(),
            target_genes: self.target_genes.clone(),
            hypotheses: self.hypotheses.clone(),
        }
    }
}
