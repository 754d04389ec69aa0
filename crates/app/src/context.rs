//! App Context

use std::sync::Arc;

use carrystation::{
    catalog::Catalog,
    fixtures::FixtureError,
    i18n::{TranslationError, TranslationSet},
};
use thiserror::Error;

use crate::{
    config::StylistConfig,
    stylist::{GeminiClient, Stylist},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The bundled catalog is invalid.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] FixtureError),

    /// The bundled translations are invalid.
    #[error("failed to load translations: {0}")]
    Translations(#[from] TranslationError),
}

/// Shared, read-only application services.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Product catalog
    pub catalog: Arc<Catalog>,

    /// Storefront copy in every language
    pub translations: Arc<TranslationSet>,

    /// AI stylist
    pub stylist: Stylist,
}

impl AppContext {
    /// Build the context from bundled data and stylist settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the bundled catalog or translations fail validation.
    pub fn from_config(stylist: &StylistConfig) -> Result<Self, AppInitError> {
        let gateway = GeminiClient::new(stylist.gemini());

        Ok(Self {
            catalog: Arc::new(Catalog::bundled()?),
            translations: Arc::new(TranslationSet::bundled()?),
            stylist: Stylist::new(Arc::new(gateway)),
        })
    }
}
