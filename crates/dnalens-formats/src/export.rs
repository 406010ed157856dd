use std::path::Path;

use chrono::NaiveDate;
use dnalens_core::AnalysisResult;

use crate::ExportError;

/// Pretty-printed JSON array of the session history.
///
/// Timestamps serialize as RFC 3339 strings.
pub fn history_to_json(analyses: &[AnalysisResult]) -> Result<String, ExportError> {
    if analyses.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    Ok(serde_json::to_string_pretty(analyses)?)
}

pub fn write_history_json(
    path: impl AsRef<Path>,
    analyses: &[AnalysisResult],
) -> Result<(), ExportError> {
    let json = history_to_json(analyses)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn default_history_filename(date: NaiveDate) -> String {
    format!("dnalens-research-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnalens_core::fallback::fallback_report;
    use dnalens_core::ResultSource;

    #[test]
    fn test_empty_history_refused() {
        assert!(matches!(
            history_to_json(&[]),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn test_history_json_shape() {
        let seq = "TATA".repeat(20);
        let mut result = AnalysisResult::new(&seq, fallback_report(&seq), ResultSource::Fallback);
        result.push_note("observed in HepG2");

        let json = history_to_json(&[result]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &parsed[0];
        assert_eq!(first["sequence"], seq.as_str());
        assert_eq!(first["source"], "fallback");
        assert_eq!(first["voice_notes"][0], "observed in HepG2");
        assert!(first["timestamp"].as_str().unwrap().contains('T'));
        assert_eq!(first["predictions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_default_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(default_history_filename(date), "dnalens-research-2026-10-18.json");
    }

    #[test]
    fn test_write_history_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let seq = "ACGT".repeat(20);
        let result = AnalysisResult::new(&seq, fallback_report(&seq), ResultSource::Live);
        write_history_json(&path, &[result]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.trim_start().starts_with('['));
    }
}
