//! CarryStation prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        Cart, CartEvent, CartLine, CheckoutError, FREE_SHIPPING_THRESHOLD, Order,
        ShippingProgress,
    },
    catalog::{Catalog, CatalogError, ProductKey},
    colors::ColorSet,
    filter::{
        CategoryFilter, DEFAULT_PRICE_CEILING, FilterConfig, SortOrder, UnknownSortOrder,
        filter_products,
    },
    fixtures::FixtureError,
    i18n::{Direction, Language, TranslationError, TranslationSet, Translations},
    pricing::{PricingError, format_amount, to_money},
    products::{Category, Localized, Product, ProductId, UnknownCategory},
    store::{Action, AppState, AppStore, StoreError, SubscriptionKey, Theme},
};
