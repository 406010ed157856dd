use crate::ParseError;

/// Default residues per line when writing sequences
pub const LINE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header text without the leading `>`
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    /// First whitespace-delimited token of the header
    pub fn name(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.header
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .unwrap_or("")
    }
}

/// Parse FASTA text into records.
///
/// Residue lines are trimmed and concatenated as-is; cleaning is left to the
/// validator so that stray symbols can still be reported.
pub fn parse(input: &str) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current_header: Option<String> = None;
    let mut current_seq = String::new();

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            // Save previous record if it has residues
            if !current_seq.is_empty() {
                records.push(FastaRecord {
                    header: current_header.take().unwrap_or_default(),
                    sequence: std::mem::take(&mut current_seq),
                });
            }
            current_header = Some(header.trim().to_string());
        } else if trimmed.starts_with(';') {
            // Comment line, skip
            continue;
        } else {
            current_seq.push_str(trimmed);
        }
    }

    if !current_seq.is_empty() {
        records.push(FastaRecord {
            header: current_header.unwrap_or_default(),
            sequence: current_seq,
        });
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(records)
}

/// Break a sequence into lines of `line_width` residues
pub fn wrap(sequence: &str, line_width: usize) -> String {
    if line_width == 0 {
        return sequence.to_string();
    }
    sequence
        .as_bytes()
        .chunks(line_width)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize records to FASTA format
pub fn serialize(records: &[FastaRecord]) -> String {
    let mut out = String::new();

    for record in records {
        out.push('>');
        out.push_str(&record.header);
        out.push('\n');
        if !record.sequence.is_empty() {
            out.push_str(&wrap(&record.sequence, LINE_WIDTH));
            out.push('\n');
        }
    }

    out
}
