//! Stylist Config

use clap::Args;

use crate::stylist::GeminiConfig;

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// AI stylist settings.
#[derive(Clone, Args)]
pub struct StylistConfig {
    /// Gemini API key; without one the stylist always answers with its busy message
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub gemini_model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub gemini_endpoint: String,
}

impl std::fmt::Debug for StylistConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StylistConfig")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_endpoint", &self.gemini_endpoint)
            .finish()
    }
}

impl StylistConfig {
    /// Gemini client settings.
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            endpoint: self.gemini_endpoint.clone(),
            model: self.gemini_model.clone(),
            api_key: self
                .gemini_api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        }
    }
}
