//! Stylist service.

use std::{fmt, sync::Arc};

use carrystation::i18n::Language;
use tracing::{info, warn};

use super::{AdviceGateway, prompts};

/// Asks the backend for bag advice and always produces a reply.
#[derive(Clone)]
pub struct Stylist {
    gateway: Arc<dyn AdviceGateway>,
}

impl fmt::Debug for Stylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stylist").finish_non_exhaustive()
    }
}

impl Stylist {
    /// Create a stylist backed by the given gateway.
    pub fn new(gateway: Arc<dyn AdviceGateway>) -> Self {
        Self { gateway }
    }

    /// Ask for advice on an outfit or occasion.
    ///
    /// Gateway failures resolve to the localized "stylist busy" message and an
    /// empty completion resolves to the localized "no advice" message.
    pub async fn request_advice(&self, query: &str, language: Language) -> String {
        let instruction = prompts::system_instruction(language);

        match self.gateway.generate(instruction, query).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                info!(%language, "stylist returned no text");
                prompts::no_advice(language).to_string()
            }
            Err(error) => {
                warn!(%language, %error, "stylist request failed");
                prompts::stylist_busy(language).to_string()
            }
        }
    }
}
