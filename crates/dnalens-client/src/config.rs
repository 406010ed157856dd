use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Call the model's generateContent API directly with the stored key
    #[default]
    Gemini,
    /// POST the sequence to a relay function that fronts the model
    Relay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend: BackendKind,
    /// Relay URL, or an override of the Gemini API base URL
    pub endpoint: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Gemini,
            endpoint: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_output_tokens: 4096,
            timeout_secs: 60,
        }
    }
}

impl ClientConfig {
    pub fn relay(endpoint: impl Into<String>) -> Self {
        Self {
            backend: BackendKind::Relay,
            endpoint: Some(endpoint.into()),
            ..Default::default()
        }
    }

    pub fn gemini_base_url(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_BASE_URL)
            .trim_end_matches('/')
    }
}
