//! Product Fixtures

use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::FixtureError,
    pricing::parse_price,
    products::{Category, Localized, Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductsFixture {
    /// Products, in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductFixture {
    /// Product identifier
    pub id: u32,

    /// Product name
    pub name: Localized,

    /// Product description
    pub description: Localized,

    /// Product price (e.g., "1299 EGP")
    pub price: String,

    /// Product category
    pub category: Category,

    /// Primary image URL
    pub image: String,

    /// Gallery image URLs
    #[serde(default)]
    pub images: Vec<String>,

    /// Colors in swatch order
    #[serde(default)]
    pub colors: Vec<String>,
}

impl ProductFixture {
    /// Convert the fixture into a product and the currency its price is in.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed.
    pub fn into_product(self) -> Result<(Product, &'static Currency), FixtureError> {
        let (price, currency) = parse_price(&self.price)?;

        let product = Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price,
            category: self.category,
            image: self.image,
            images: self.images,
            colors: self.colors.into_iter().collect(),
        };

        Ok((product, currency))
    }
}

/// Load a catalog from products fixture YAML.
///
/// # Errors
///
/// Returns an error when the YAML cannot be parsed, a price is invalid,
/// currencies are inconsistent across products, the fixture has no products,
/// or the products break a catalog invariant.
pub fn load_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    let mut currency: Option<&'static Currency> = None;
    let mut products = Vec::with_capacity(fixture.products.len());

    for product_fixture in fixture.products {
        let (product, product_currency) = product_fixture.into_product()?;

        if let Some(existing_currency) = currency
            && existing_currency != product_currency
        {
            return Err(FixtureError::CurrencyMismatch(
                existing_currency.iso_alpha_code.to_string(),
                product_currency.iso_alpha_code.to_string(),
            ));
        }

        currency = Some(product_currency);
        products.push(product);
    }

    let currency = currency.ok_or(FixtureError::NoProducts)?;

    Ok(Catalog::new(products, currency)?)
}
