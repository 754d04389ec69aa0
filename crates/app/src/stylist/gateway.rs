//! Advice gateway trait.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Errors that can occur when asking the text-generation backend.
#[derive(Debug, Error)]
pub enum StylistError {
    /// No API key is configured, so no request was sent.
    #[error("no Gemini API key configured")]
    MissingApiKey,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("unexpected response from Gemini: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
/// Text-generation backend used by the stylist.
pub trait AdviceGateway: Send + Sync {
    /// Generate a completion for `query` under the given system instruction.
    ///
    /// An empty string means the backend produced no text.
    async fn generate(&self, system_instruction: &str, query: &str)
    -> Result<String, StylistError>;
}
