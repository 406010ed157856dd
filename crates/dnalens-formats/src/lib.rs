pub mod detect;
pub mod export;
pub mod fasta;
pub mod import;
pub mod network_svg;
pub mod report;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Unsupported input: {0}")]
    Unsupported(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export. Run an analysis first to generate a report.")]
    NothingToExport,
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Fasta,
    PlainText,
    Image,
    Unknown,
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Fasta => write!(f, "fasta"),
            FileFormat::PlainText => write!(f, "text"),
            FileFormat::Image => write!(f, "image"),
            FileFormat::Unknown => write!(f, "unknown"),
        }
    }
}
