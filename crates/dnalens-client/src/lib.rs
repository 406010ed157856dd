//! Remote sequence interpretation: prompt construction, HTTP transport and
//! defensive coercion of the loosely-shaped model reply.

pub mod coerce;
pub mod config;
pub mod http;
pub mod prompt;

use dnalens_core::{AnalysisReport, SequenceStats};
use thiserror::Error;

pub use config::{BackendKind, ClientConfig};
pub use http::HttpAnalysisClient;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("No API key configured")]
    MissingApiKey,
    #[error("No analysis endpoint configured")]
    MissingEndpoint,
    #[error("Invalid API key or request. Please check your API key.")]
    InvalidRequest,
    #[error("API key does not have access. Please check your API key permissions.")]
    Forbidden,
    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,
    #[error("API error: {status} {body}")]
    Status { status: u16, body: String },
    #[error("Analysis service error: {0}")]
    Remote(String),
    #[error("Unexpected response format from API")]
    UnexpectedShape,
    #[error("The AI response was not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Request URLs can carry credentials, so they are dropped from transport errors
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.without_url())
    }
}

/// Everything a backend needs to interpret one sequence
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    /// Cleaned, validated sequence
    pub sequence: &'a str,
    pub stats: SequenceStats,
    pub api_key: Option<&'a str>,
}

/// A service that turns a cleaned sequence into predictions, target genes
/// and hypotheses.
pub trait AnalysisBackend {
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<AnalysisReport, ClientError>;
}
