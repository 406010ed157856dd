use std::path::Path;

use crate::FileFormat;

/// Auto-detect input format from content
pub fn detect_format(content: &str) -> FileFormat {
    let trimmed = content.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    if trimmed.starts_with('>') {
        FileFormat::Fasta
    } else if !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        FileFormat::PlainText
    } else {
        FileFormat::Unknown
    }
}

/// Detect format from file extension
pub fn detect_format_from_extension(path: impl AsRef<Path>) -> FileFormat {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("fa" | "fasta" | "fna" | "fsa") => FileFormat::Fasta,
        Some("txt" | "seq") => FileFormat::PlainText,
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff") => {
            FileFormat::Image
        }
        _ => FileFormat::Unknown,
    }
}
