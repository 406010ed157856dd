//! Paginated plain-text analysis report.
//!
//! Layout works on fixed-height pages: a block that would not fit in the
//! remaining space starts a new page, the same way a printed report is laid
//! out. Pages are separated by form feeds when rendered.

use chrono::{DateTime, Utc};
use dnalens_core::{FunctionPrediction, Hypothesis, ResultSource, TargetGene};

use crate::ExportError;

/// Lines per page, footer included
pub const PAGE_HEIGHT: usize = 56;
pub const PAGE_WIDTH: usize = 90;
const FOOTER_LINES: usize = 2;
const INDENT: &str = "   ";
const DESCRIPTION_WIDTH: usize = 40;

pub struct ReportInput<'a> {
    pub predictions: &'a [FunctionPrediction],
    pub target_genes: &'a [TargetGene],
    pub hypotheses: &'a [Hypothesis],
    pub generated_at: DateTime<Utc>,
    pub source: ResultSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub pages: Vec<Page>,
}

struct PageWriter {
    pages: Vec<Page>,
    current: Vec<String>,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn body_height() -> usize {
        PAGE_HEIGHT - FOOTER_LINES
    }

    fn break_page(&mut self) {
        let lines = std::mem::take(&mut self.current);
        self.pages.push(Page { lines });
    }

    /// Start a new page unless `required` lines still fit on this one
    fn ensure_space(&mut self, required: usize) {
        if !self.current.is_empty() && self.current.len() + required > Self::body_height() {
            self.break_page();
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.ensure_space(1);
        self.current.push(text.into());
    }

    fn blank(&mut self) {
        // no leading blanks at the top of a page
        if !self.current.is_empty() && self.current.len() < Self::body_height() {
            self.current.push(String::new());
        }
    }

    /// Keep the block on one page when it can fit on any page at all
    fn block(&mut self, lines: Vec<String>) {
        if lines.len() <= Self::body_height() {
            self.ensure_space(lines.len());
        }
        for l in lines {
            self.line(l);
        }
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        self.pages
    }
}

fn wrapped(text: &str, indent: &str) -> Vec<String> {
    let width = PAGE_WIDTH.saturating_sub(indent.len()).max(10);
    textwrap::wrap(text, width)
        .into_iter()
        .map(|l| format!("{}{}", indent, l))
        .collect()
}

fn section_header(title: &str) -> Vec<String> {
    vec![title.to_uppercase(), "-".repeat(PAGE_WIDTH)]
}

fn badge_line(title: &str, badge: &str) -> String {
    let used = title.chars().count() + badge.chars().count();
    if used + 2 > PAGE_WIDTH {
        format!("{}  {}", title, badge)
    } else {
        format!("{}{}{}", title, " ".repeat(PAGE_WIDTH - used), badge)
    }
}

fn prediction_card(index: usize, pred: &FunctionPrediction) -> Vec<String> {
    let mut lines = vec![badge_line(
        &format!("{}. {}", index + 1, pred.name),
        &format!("[{}% {}]", pred.confidence, pred.tier().label()),
    )];
    lines.push(format!("{}Category: {}", INDENT, pred.category));
    lines.extend(wrapped(&format!("Mechanism: {}", pred.mechanism), INDENT));

    let evidence: Vec<&String> = pred.evidence.iter().filter(|e| !e.is_empty()).collect();
    if !evidence.is_empty() {
        lines.push(format!("{}Evidence:", INDENT));
        for ev in evidence {
            lines.extend(wrapped(&format!("- {}", ev), "      "));
        }
    }

    if !pred.disease_associations.is_empty() {
        lines.push(format!("{}Disease Associations:", INDENT));
        lines.extend(wrapped(&pred.disease_associations.join(", "), "      "));
    }

    lines
}

fn gene_row(gene: &TargetGene) -> String {
    let description = textwrap::wrap(&gene.description, DESCRIPTION_WIDTH)
        .into_iter()
        .next()
        .map(|l| l.into_owned())
        .unwrap_or_default();
    format!(
        "{:<12}{:<14}{:<10}{}",
        gene.name,
        gene.relationship.to_string(),
        format!("{}%", gene.strength_percent()),
        description
    )
}

fn hypothesis_card(index: usize, hyp: &Hypothesis) -> Vec<String> {
    let mut lines = vec![format!("Hypothesis {}: {}", index + 1, hyp.experiment_type)];
    lines.extend(wrapped(&hyp.statement, INDENT));
    lines.push(format!("{}Experimental Approach:", INDENT));
    lines.extend(wrapped(&hyp.approach, "      "));
    lines.push(format!("{}Expected Outcome:", INDENT));
    lines.extend(wrapped(&hyp.expected_outcome, "      "));
    lines.extend(wrapped(&format!("Resources: {}", hyp.resources), INDENT));
    lines.push(format!("{}Timeline: {}", INDENT, hyp.timeline));
    lines
}

impl Report {
    /// Lay out a report. Refuses to build one without any predictions.
    pub fn build(input: &ReportInput<'_>) -> Result<Report, ExportError> {
        if input.predictions.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let mut w = PageWriter::new();

        let rule = "=".repeat(PAGE_WIDTH);
        let mut title = vec![
            rule.clone(),
            "DNA Sequence Analysis Report".to_string(),
            format!(
                "Generated: {} at {} UTC",
                input.generated_at.format("%Y-%m-%d"),
                input.generated_at.format("%H:%M:%S")
            ),
        ];
        if input.source == ResultSource::Fallback {
            title.push(
                "Source: locally generated placeholder data, not model output".to_string(),
            );
        }
        title.push(rule);
        w.block(title);
        w.blank();

        w.block(vec![
            "Analysis Summary".to_string(),
            format!(
                "{}{} Function Predictions  |  {} Target Genes  |  {} Hypotheses",
                INDENT,
                input.predictions.len(),
                input.target_genes.len(),
                input.hypotheses.len()
            ),
        ]);
        w.blank();

        let header = section_header("Function Predictions");
        for (i, pred) in input.predictions.iter().enumerate() {
            let mut card = if i == 0 { header.clone() } else { Vec::new() };
            card.extend(prediction_card(i, pred));
            w.block(card);
            w.blank();
        }

        let mut table = section_header("Regulatory Network - Target Genes");
        table.push(format!(
            "{:<12}{:<14}{:<10}{}",
            "Gene", "Relationship", "Strength", "Description"
        ));
        w.block(table);
        if input.target_genes.is_empty() {
            w.line(format!("{}(no target genes reported)", INDENT));
        }
        for gene in input.target_genes {
            w.line(gene_row(gene));
        }
        w.blank();

        let header = section_header("Research Hypotheses");
        if input.hypotheses.is_empty() {
            w.block(header.clone());
            w.line(format!("{}(no hypotheses generated)", INDENT));
        }
        for (i, hyp) in input.hypotheses.iter().enumerate() {
            let mut card = if i == 0 { header.clone() } else { Vec::new() };
            card.extend(hypothesis_card(i, hyp));
            w.block(card);
            w.blank();
        }

        Ok(Report { pages: w.finish() })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Plain text with a footer on each page and form feeds between pages
    pub fn render(&self) -> String {
        let total = self.pages.len();
        let mut out = String::new();

        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push('\u{000C}');
            }
            for line in &page.lines {
                out.push_str(line.trim_end());
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&format!("Page {} of {}\n", i + 1, total));
        }

        out
    }

    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> Result<(), ExportError> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}
