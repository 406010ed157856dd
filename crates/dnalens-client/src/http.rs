use std::time::Duration;

use dnalens_core::AnalysisReport;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::{json, Value};

use crate::coerce::{parse_reply_text, report_from_value};
use crate::config::{BackendKind, ClientConfig};
use crate::prompt::build_prompt;
use crate::{AnalysisBackend, AnalysisRequest, ClientError};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Blocking HTTP client for either the relay function or the Gemini API
pub struct HttpAnalysisClient {
    config: ClientConfig,
    http: Client,
}

impl HttpAnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn analyze_via_relay(&self, request: &AnalysisRequest<'_>) -> Result<Value, ClientError> {
        let url = self
            .config
            .endpoint
            .as_deref()
            .ok_or(ClientError::MissingEndpoint)?;

        let body = relay_body(request);
        let mut builder = self.http.post(url).json(&body);
        if let Some(key) = request.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;
        debug!("Relay replied {} with {} bytes", status, text.len());

        if !(200..300).contains(&status) {
            return Err(relay_error(status, &text));
        }
        parse_reply_text(&text)
    }

    fn analyze_via_gemini(&self, request: &AnalysisRequest<'_>) -> Result<Value, ClientError> {
        let key = request
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let url = generate_content_url(&self.config);
        let body = gemini_body(&self.config, &build_prompt(request.sequence));

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, key.trim())
            .json(&body)
            .send()?;
        let status = response.status().as_u16();
        let text = response.text()?;
        debug!("Gemini replied {} with {} bytes", status, text.len());

        if !(200..300).contains(&status) {
            return Err(error_for_status(status, &text));
        }

        let envelope: Value = serde_json::from_str(&text)?;
        let candidate = extract_candidate_text(&envelope).ok_or(ClientError::UnexpectedShape)?;
        parse_reply_text(candidate)
    }
}

impl AnalysisBackend for HttpAnalysisClient {
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<AnalysisReport, ClientError> {
        info!(
            "Requesting {:?} analysis for {} bp",
            self.config.backend,
            request.sequence.len()
        );

        let reply = match self.config.backend {
            BackendKind::Relay => self.analyze_via_relay(request)?,
            BackendKind::Gemini => self.analyze_via_gemini(request)?,
        };

        let report = report_from_value(&reply);
        info!(
            "Received {} predictions, {} target genes, {} hypotheses",
            report.predictions.len(),
            report.target_genes.len(),
            report.hypotheses.len()
        );
        Ok(report)
    }
}

pub fn generate_content_url(config: &ClientConfig) -> String {
    format!(
        "{}/models/{}:generateContent",
        config.gemini_base_url(),
        config.model
    )
}

pub fn gemini_body(config: &ClientConfig, prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": config.temperature,
            "maxOutputTokens": config.max_output_tokens,
        }
    })
}

pub fn relay_body(request: &AnalysisRequest<'_>) -> Value {
    json!({
        "sequence": request.sequence,
        "stats": {
            "length": request.stats.length,
            "gc_content": request.stats.gc_content,
        }
    })
}

/// `candidates[0].content.parts[0].text` of a generateContent reply
pub fn extract_candidate_text(envelope: &Value) -> Option<&str> {
    envelope
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

pub fn error_for_status(status: u16, body: &str) -> ClientError {
    match status {
        400 => ClientError::InvalidRequest,
        401 | 403 => ClientError::Forbidden,
        429 => ClientError::RateLimited,
        _ => ClientError::Status {
            status,
            body: body.trim().to_string(),
        },
    }
}

/// The relay reports failures as `{"error": "..."}`
fn relay_error(status: u16, body: &str) -> ClientError {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .map(ClientError::Remote)
        .unwrap_or_else(|| error_for_status(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnalens_core::operations::sequence_stats;

    fn request<'a>(sequence: &'a str, api_key: Option<&'a str>) -> AnalysisRequest<'a> {
        AnalysisRequest {
            sequence,
            stats: sequence_stats(sequence),
            api_key,
        }
    }

    #[test]
    fn test_generate_content_url() {
        assert_eq!(
            generate_content_url(&ClientConfig::default()),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_gemini_body_shape() {
        let body = gemini_body(&ClientConfig::default(), "hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn test_relay_body_carries_stats() {
        let body = relay_body(&request("GGCCAATT", None));
        assert_eq!(body["sequence"], "GGCCAATT");
        assert_eq!(body["stats"]["length"], 8);
        assert_eq!(body["stats"]["gc_content"], 50.0);
    }

    #[test]
    fn test_extract_candidate_text() {
        let envelope = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"predictions\": []}" }] } }]
        });
        assert_eq!(extract_candidate_text(&envelope), Some("{\"predictions\": []}"));
        assert_eq!(extract_candidate_text(&json!({"candidates": []})), None);
    }

    #[test]
    fn test_error_for_status() {
        assert!(matches!(error_for_status(400, ""), ClientError::InvalidRequest));
        assert!(matches!(error_for_status(403, ""), ClientError::Forbidden));
        assert!(matches!(error_for_status(429, ""), ClientError::RateLimited));
        assert!(matches!(
            error_for_status(503, " busy "),
            ClientError::Status { status: 503, ref body } if body == "busy"
        ));
    }

    #[test]
    fn test_relay_error_message() {
        let err = relay_error(500, r#"{"error": "Failed to parse AI response"}"#);
        assert_eq!(err.to_string(), "Analysis service error: Failed to parse AI response");
        assert!(matches!(relay_error(429, "<html>"), ClientError::RateLimited));
    }

    #[test]
    fn test_gemini_requires_key_before_any_request() {
        let client = HttpAnalysisClient::new(ClientConfig::default()).unwrap();
        let err = client.analyze(&request("ACGT", None)).unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey));
        let err = client.analyze(&request("ACGT", Some("  "))).unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey));
    }

    #[test]
    fn test_transport_error_does_not_expose_key() {
        let config = ClientConfig {
            endpoint: Some("http://127.0.0.1:1".into()),
            timeout_secs: 5,
            ..Default::default()
        };
        let client = HttpAnalysisClient::new(config).unwrap();
        let err = client
            .analyze(&request("ACGT", Some("SECRET-KEY-123")))
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        let text = format!("{} {:?}", err, err);
        assert!(!text.contains("SECRET-KEY-123"), "{}", text);
        assert!(!text.contains("127.0.0.1:1/models"), "{}", text);
    }

    #[test]
    fn test_relay_requires_endpoint() {
        let config = ClientConfig {
            backend: BackendKind::Relay,
            ..Default::default()
        };
        let client = HttpAnalysisClient::new(config).unwrap();
        let err = client.analyze(&request("ACGT", None)).unwrap_err();
        assert!(matches!(err, ClientError::MissingEndpoint));
    }
}
