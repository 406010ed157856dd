use dnalens_client::{AnalysisBackend, AnalysisRequest, ClientError};
use dnalens_core::fallback::fallback_report;
use dnalens_core::operations::sequence_stats;
use dnalens_core::{AnalysisReport, AnalysisResult, ResultSource, SequenceStats, SequenceValidation};
use log::{info, warn};
use thiserror::Error;

use crate::credentials::{CredentialError, CredentialStore};
use crate::history::History;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Sequence is not ready for analysis: {0}")]
    InvalidSequence(String),
    #[error("An analysis is already in progress")]
    Busy,
    #[error(transparent)]
    Credentials(#[from] CredentialError),
}

/// How an analysis finished. Fallback data is never presented as model output.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Live(AnalysisResult),
    Fallback { result: AnalysisResult, reason: String },
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Live(result) => result,
            AnalysisOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Live(result) => result,
            AnalysisOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback { .. })
    }

    /// Why the live service was not used
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Live(_) => None,
            AnalysisOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// A request that has been admitted and marked the session busy
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    pub sequence: String,
    pub stats: SequenceStats,
}

/// One user session: a backend, a credential store and the run's history.
pub struct Session<B, C> {
    backend: B,
    credentials: C,
    history: History,
    api_key_override: Option<String>,
    busy: bool,
}

impl<B: AnalysisBackend, C: CredentialStore> Session<B, C> {
    pub fn new(backend: B, credentials: C) -> Self {
        Self {
            backend,
            credentials,
            history: History::new(),
            api_key_override: None,
            busy: false,
        }
    }

    /// Use this key instead of the stored one, e.g. from the environment
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        self.api_key_override = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    pub fn credentials_mut(&mut self) -> &mut C {
        &mut self.credentials
    }

    pub fn is_analyzing(&self) -> bool {
        self.busy
    }

    /// Override first, then the store. A store read failure counts as no key.
    pub fn api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key_override {
            return Some(key.clone());
        }
        match self.credentials.get() {
            Ok(key) => key,
            Err(e) => {
                warn!("Could not read stored API key: {}", e);
                None
            }
        }
    }

    pub fn save_api_key(&mut self, key: &str) -> Result<(), SessionError> {
        self.credentials.set(key)?;
        Ok(())
    }

    pub fn clear_api_key(&mut self) -> Result<bool, SessionError> {
        Ok(self.credentials.clear()?)
    }

    /// Admit a validated sequence and mark the session busy.
    pub fn begin_analysis(
        &mut self,
        validation: &SequenceValidation,
    ) -> Result<PendingAnalysis, SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        if !validation.is_valid {
            let message = validation
                .error_message()
                .unwrap_or_else(|| "no valid sequence".to_string());
            return Err(SessionError::InvalidSequence(message));
        }

        self.busy = true;
        Ok(PendingAnalysis {
            stats: sequence_stats(&validation.cleaned_sequence),
            sequence: validation.cleaned_sequence.clone(),
        })
    }

    /// Record the backend's answer, substituting local placeholder data on
    /// failure, and clear the busy flag.
    pub fn finish_analysis(
        &mut self,
        pending: PendingAnalysis,
        reply: Result<AnalysisReport, ClientError>,
    ) -> AnalysisOutcome {
        self.busy = false;

        let outcome = match reply {
            Ok(report) => {
                AnalysisOutcome::Live(AnalysisResult::new(pending.sequence, report, ResultSource::Live))
            }
            Err(e) => {
                warn!("Analysis service failed, using local fallback: {}", e);
                let report = fallback_report(&pending.sequence);
                AnalysisOutcome::Fallback {
                    result: AnalysisResult::new(pending.sequence, report, ResultSource::Fallback),
                    reason: e.to_string(),
                }
            }
        };

        info!(
            "Analysis {} finished ({}) as {}",
            outcome.result().id,
            outcome.result().source,
            outcome.result().sequence_type
        );
        self.history.push(outcome.result().clone());
        outcome
    }

    /// Validate-gated, blocking analysis of one sequence.
    pub fn analyze(&mut self, validation: &SequenceValidation) -> Result<AnalysisOutcome, SessionError> {
        let pending = self.begin_analysis(validation)?;
        let api_key = self.api_key();
        let request = AnalysisRequest {
            sequence: &pending.sequence,
            stats: pending.stats,
            api_key: api_key.as_deref(),
        };
        let reply = self.backend.analyze(&request);
        Ok(self.finish_analysis(pending, reply))
    }

    /// Attach a note to the newest analysis.
    pub fn add_note(&mut self, note: &str) -> bool {
        self.history.add_note(note)
    }
}
