//! Catalog
//!
//! Read-only product store. Products are kept in declaration order and can be
//! looked up by id or category; nothing here mutates after construction.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::{
    fixtures::{CATALOG_YAML, FixtureError, products::load_catalog},
    products::{Category, Product, ProductId},
};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Product ids must be positive.
    #[error("Product ids must be positive, got {0}")]
    InvalidProductId(ProductId),
}

/// Catalog
#[derive(Debug)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    keys_by_id: FxHashMap<ProductId, ProductKey>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create a catalog from products in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if an id is zero or repeated.
    pub fn new(
        products: impl IntoIterator<Item = Product>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog {
            products: SlotMap::with_key(),
            order: Vec::new(),
            keys_by_id: FxHashMap::default(),
            currency,
        };

        for product in products {
            let id = product.id;

            if id.get() == 0 {
                return Err(CatalogError::InvalidProductId(id));
            }

            if catalog.keys_by_id.contains_key(&id) {
                return Err(CatalogError::DuplicateProductId(id));
            }

            let key = catalog.products.insert(product);

            catalog.order.push(key);
            catalog.keys_by_id.insert(id, key);
        }

        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` if the bundled fixture is invalid.
    pub fn bundled() -> Result<Self, FixtureError> {
        load_catalog(CATALOG_YAML)
    }

    /// Load a catalog from products fixture YAML.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` if the fixture cannot be parsed or validated.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        load_catalog(yaml)
    }

    /// All products, in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.keys_by_id
            .get(&id)
            .and_then(|key| self.products.get(*key))
    }

    /// All products in a category, in declaration order.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.all()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Products to suggest alongside `product`: same category, excluding the
    /// product itself, at most `limit` of them.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.all()
            .filter(|other| other.category == product.category && other.id != product.id)
            .take(limit)
            .collect()
    }

    /// The first `limit` products, for the home page.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.all().take(limit).collect()
    }

    /// Categories that have at least one product, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();

        for product in self.all() {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        categories
    }

    /// Every color offered, in first-appearance order.
    pub fn colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = Vec::new();

        for color in self.all().flat_map(|product| product.colors.iter()) {
            if !colors.contains(&color.as_str()) {
                colors.push(color);
            }
        }

        colors
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Currency every price is in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
