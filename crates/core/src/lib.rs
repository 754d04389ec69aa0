//! CarryStation
//!
//! CarryStation is the storefront engine behind the CarryStation handbag shop: catalog lookups,
//! cart arithmetic, the shop filter pipeline, localized copy and the UI state store.

pub mod cart;
pub mod catalog;
pub mod colors;
pub mod filter;
pub mod fixtures;
pub mod i18n;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod store;

#[cfg(test)]
mod test_support;
