use dnalens_core::AnalysisResult;

/// Analyses from this run, newest first. Not persisted.
#[derive(Debug, Default, Clone)]
pub struct History {
    analyses: Vec<AnalysisResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a completed analysis.
    pub fn push(&mut self, result: AnalysisResult) {
        self.analyses.insert(0, result);
    }

    /// The most recent analysis, if any
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.analyses.first()
    }

    /// Attach a note to the most recent analysis. Returns false when there is none.
    pub fn add_note(&mut self, note: &str) -> bool {
        let note = note.trim();
        if note.is_empty() {
            return false;
        }
        match self.analyses.first_mut() {
            Some(latest) => {
                latest.push_note(note);
                true
            }
            None => false,
        }
    }

    /// Returns how many analyses were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.analyses.len();
        self.analyses.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.analyses.iter()
    }

    pub fn as_slice(&self) -> &[AnalysisResult] {
        &self.analyses
    }
}
