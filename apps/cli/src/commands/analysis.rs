use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use dnalens_client::AnalysisBackend;
use dnalens_core::layout::{circular_layout, LayoutConfig};
use dnalens_core::{validate_sequence, AnalysisResult};
use dnalens_formats::export::write_history_json;
use dnalens_formats::network_svg::render_network_svg;
use dnalens_formats::report::{Report, ReportInput};
use dnalens_session::{AnalysisOutcome, CredentialStore, Session};

use crate::dto::AnalysisDto;

const CENTER_LABEL: &str = "DNA";

/// Optional files to write after an analysis
#[derive(Debug, Clone, Default)]
pub struct ExportPaths {
    pub report: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub svg: Option<PathBuf>,
}

/// Validate raw input and run it through the session. Invalid input is an error
/// and never reaches the backend.
pub fn analyze<B: AnalysisBackend, C: CredentialStore>(
    session: &mut Session<B, C>,
    raw: &str,
) -> Result<AnalysisOutcome> {
    let validation = validate_sequence(raw);
    if let Some(message) = validation.error_message() {
        bail!("{}", message);
    }
    Ok(session.analyze(&validation)?)
}

pub fn write_report(result: &AnalysisResult, path: &Path) -> Result<()> {
    let input = ReportInput {
        predictions: &result.predictions,
        target_genes: &result.target_genes,
        hypotheses: &result.hypotheses,
        generated_at: Utc::now(),
        source: result.source,
    };
    let report = Report::build(&input)?;
    report
        .write_to(path)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    log::info!("Wrote {}-page report to {}", report.page_count(), path.display());
    Ok(())
}

pub fn write_network_svg(result: &AnalysisResult, path: &Path) -> Result<()> {
    let layout = circular_layout(CENTER_LABEL, &result.target_genes, &LayoutConfig::default());
    std::fs::write(path, render_network_svg(&layout))
        .with_context(|| format!("Failed to write network diagram {}", path.display()))?;
    Ok(())
}

/// Write whichever exports were requested; returns the paths written.
pub fn write_exports(
    result: &AnalysisResult,
    history: &[AnalysisResult],
    paths: &ExportPaths,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if let Some(path) = &paths.report {
        write_report(result, path)?;
        written.push(path.clone());
    }
    if let Some(path) = &paths.json {
        write_history_json(path, history)
            .with_context(|| format!("Failed to export history to {}", path.display()))?;
        written.push(path.clone());
    }
    if let Some(path) = &paths.svg {
        write_network_svg(result, path)?;
        written.push(path.clone());
    }

    Ok(written)
}

/// Terminal summary. Fallback output is flagged on the first line.
pub fn summary_lines(dto: &AnalysisDto) -> Vec<String> {
    let mut lines = Vec::new();

    match &dto.fallback_reason {
        Some(reason) => {
            lines.push(format!(
                "FALLBACK: analysis service unavailable ({}). Showing placeholder data, not model output.",
                reason
            ));
        }
        None => lines.push(format!("Analysis {} ({} bp)", dto.id, dto.length)),
    }
    lines.push(format!("Sequence type: {}", dto.sequence_type));
    lines.push(format!(
        "{} Function Predictions | {} Target Genes | {} Hypotheses",
        dto.predictions.len(),
        dto.target_genes.len(),
        dto.hypotheses.len()
    ));

    if !dto.predictions.is_empty() {
        lines.push(String::new());
        lines.push("Predictions:".to_string());
        for (i, p) in dto.predictions.iter().enumerate() {
            lines.push(format!(
                "  {}. {} [{}] {}% ({})",
                i + 1,
                p.name,
                p.category,
                p.confidence,
                p.tier
            ));
        }
    }

    if !dto.target_genes.is_empty() {
        lines.push(String::new());
        lines.push("Target genes:".to_string());
        for g in &dto.target_genes {
            lines.push(format!(
                "  {:<10} {:<11} {:>3}%",
                g.name,
                g.relationship,
                (g.strength * 100.0).round() as u32
            ));
        }
    }

    if !dto.hypotheses.is_empty() {
        lines.push(String::new());
        lines.push("Hypotheses:".to_string());
        for h in &dto.hypotheses {
            lines.push(format!("  - {} [{}]", h.statement, h.experiment_type));
        }
    }

    lines
}
