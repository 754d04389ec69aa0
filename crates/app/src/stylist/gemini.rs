//! Gemini `generateContent` client.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gateway::{AdviceGateway, StylistError};

/// Configuration for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API base URL, e.g. `"https://generativelanguage.googleapis.com"`.
    pub endpoint: String,

    /// Model name, e.g. `"gemini-2.5-flash"`.
    pub model: String,

    /// API key; requests are not sent without one.
    pub api_key: Option<String>,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl AdviceGateway for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        query: &str,
    ) -> Result<String, StylistError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(StylistError::MissingApiKey);
        };

        let url = self.url();
        let body = GenerateContentRequest::new(system_instruction, query);

        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StylistError::UnexpectedResponse(format!(
                "generateContent failed with status {status}: {text}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;

        Ok(parsed.into_text())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
}

impl<'a> GenerateContentRequest<'a> {
    fn new(system_instruction: &'a str, query: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: [Part {
                    text: system_instruction,
                }],
            },
            contents: [Content {
                role: Some("user"),
                parts: [Part { text: query }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its parts joined.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
