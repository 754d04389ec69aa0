//! Fixtures
//!
//! Static storefront data bundled into the crate at build time.

use thiserror::Error;

use crate::{catalog::CatalogError, pricing::PricingError};

pub mod products;

/// Bundled product catalog.
pub const CATALOG_YAML: &str = include_str!("../../../../fixtures/products/catalog.yml");

/// Bundled translation tables.
pub const TRANSLATIONS_YAML: &str =
    include_str!("../../../../fixtures/translations/storefront.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price or currency
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products in the fixture, so the currency is unknown
    #[error("No products in fixture; currency unknown")]
    NoProducts,

    /// The products could not form a catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
