use std::path::Path;

use crate::detect::{detect_format, detect_format_from_extension};
use crate::fasta::{self, FastaRecord};
use crate::{FileFormat, ParseError};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// File contents to be used as raw validator input
#[derive(Debug, Clone)]
pub struct ImportedText {
    pub content: String,
    pub format: FileFormat,
    /// Parsed records when the file is FASTA. The validator joins them all.
    pub records: Vec<FastaRecord>,
}

impl ImportedText {
    pub fn is_multi_record(&self) -> bool {
        self.records.len() > 1
    }
}

/// Read a local text file so its contents can replace the raw input.
///
/// No format is enforced beyond what the validator tolerates. Images are
/// refused since there is no sequence extraction for them.
pub fn read_sequence_file(path: impl AsRef<Path>) -> Result<ImportedText, ParseError> {
    let path = path.as_ref();

    if detect_format_from_extension(path) == FileFormat::Image {
        return Err(ParseError::Unsupported(format!(
            "image input is not supported: {}",
            path.display()
        )));
    }

    let raw = std::fs::read_to_string(path)?;
    let content = match raw.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => rest.to_string(),
        None => raw,
    };

    let format = match detect_format(&content) {
        FileFormat::Unknown => detect_format_from_extension(path),
        detected => detected,
    };
    let records = if format == FileFormat::Fasta {
        fasta::parse(&content).unwrap_or_default()
    } else {
        Vec::new()
    };

    Ok(ImportedText {
        content,
        format,
        records,
    })
}
