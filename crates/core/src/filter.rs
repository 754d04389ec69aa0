//! Filtering & Sorting
//!
//! The shop listing runs products through a fixed pipeline: category, price
//! ceiling, colors, then sort. Every stage is pure and the input order is the
//! tie-breaker for equal prices.

use std::{cmp::Reverse, fmt, str::FromStr};

use thiserror::Error;

use crate::{
    colors::ColorSet,
    products::{Category, Product, UnknownCategory},
};

/// Price ceiling the shop page starts with.
pub const DEFAULT_PRICE_CEILING: u64 = 5_000;

/// A sort order name was not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort order: {0} (expected newest, price-asc or price-desc)")]
pub struct UnknownSortOrder(pub String);

/// Category stage of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Keep every category
    #[default]
    All,

    /// Keep one category
    Only(Category),
}

impl CategoryFilter {
    /// Check if a product passes this stage.
    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }

        s.parse().map(CategoryFilter::Only)
    }
}

/// Order of the shop listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Highest product id first
    #[default]
    Newest,

    /// Cheapest first
    PriceAsc,

    /// Most expensive first
    PriceDesc,
}

impl SortOrder {
    /// Every sort order, in menu order.
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::PriceAsc, SortOrder::PriceDesc];

    /// The name used on the command line and in URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    /// Sort products in place. The sort is stable.
    pub fn sort(self, products: &mut [&Product]) {
        match self {
            SortOrder::Newest => products.sort_by_key(|product| Reverse(product.id)),
            SortOrder::PriceAsc => products.sort_by_key(|product| product.price),
            SortOrder::PriceDesc => products.sort_by_key(|product| Reverse(product.price)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_string()))
    }
}

/// Shop filter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Category stage
    pub category: CategoryFilter,

    /// Inclusive price ceiling; `None` keeps every price
    pub max_price: Option<u64>,

    /// Selected colors; empty keeps every product
    pub colors: ColorSet,

    /// Sort stage
    pub sort: SortOrder,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            category: CategoryFilter::All,
            max_price: Some(DEFAULT_PRICE_CEILING),
            colors: ColorSet::default(),
            sort: SortOrder::Newest,
        }
    }
}

impl FilterConfig {
    /// A config that keeps every product, sorted newest first.
    pub fn unbounded() -> Self {
        FilterConfig {
            max_price: None,
            ..FilterConfig::default()
        }
    }

    /// Select or deselect a color. Returns whether it is selected afterwards.
    pub fn toggle_color(&mut self, color: &str) -> bool {
        self.colors.toggle(color)
    }

    /// Clear the category, price and color filters. The sort order is kept.
    pub fn reset(&mut self) {
        *self = FilterConfig {
            sort: self.sort,
            ..FilterConfig::default()
        };
    }

    /// Whether any filter differs from the shop defaults.
    ///
    /// An unbounded ceiling does not count as a filter.
    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::All
            || !self.colors.is_empty()
            || self
                .max_price
                .is_some_and(|max_price| max_price < DEFAULT_PRICE_CEILING)
    }

    /// Check if a product passes every filter stage.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && self.within_ceiling(product)
            && self.has_selected_color(product)
    }

    /// Run products through the pipeline.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
        filter_products(products, self)
    }

    fn within_ceiling(&self, product: &Product) -> bool {
        self.max_price
            .is_none_or(|max_price| product.price <= max_price)
    }

    fn has_selected_color(&self, product: &Product) -> bool {
        self.colors.is_empty()
            || self
                .colors
                .intersects(product.colors.iter().map(String::as_str))
    }
}

/// Filter and sort products with the given config.
///
/// Products are never copied; the result borrows from the input.
pub fn filter_products<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    config: &FilterConfig,
) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = products
        .into_iter()
        .filter(|product| config.category.matches(product))
        .filter(|product| config.within_ceiling(product))
        .filter(|product| config.has_selected_color(product))
        .collect();

    config.sort.sort(&mut results);

    results
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test_support::product;

    use super::*;

    fn test_products() -> Vec<Product> {
        vec![
            product(1, 1299, Category::Tote, &["Brown", "Black"]),
            product(2, 899, Category::Clutch, &["Pink", "Gold"]),
            product(3, 1299, Category::Crossbody, &["Pink", "Tan"]),
            product(4, 6000, Category::Tote, &["Black"]),
            product(5, 750, Category::Tote, &["Beige"]),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|product| product.id.get()).collect()
    }

    #[test]
    fn unbounded_config_sorts_newest_first() {
        let products = test_products();

        let results = filter_products(&products, &FilterConfig::unbounded());

        assert_eq!(ids(&results), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn default_config_applies_price_ceiling() {
        let products = test_products();

        let results = FilterConfig::default().apply(&products);

        assert_eq!(ids(&results), [5, 3, 2, 1]);
    }

    #[test]
    fn category_filter_is_exact() {
        let products = test_products();
        let config = FilterConfig {
            category: CategoryFilter::Only(Category::Tote),
            ..FilterConfig::unbounded()
        };

        assert_eq!(ids(&filter_products(&products, &config)), [5, 4, 1]);
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let products = test_products();
        let config = FilterConfig {
            max_price: Some(899),
            ..FilterConfig::unbounded()
        };

        assert_eq!(ids(&filter_products(&products, &config)), [5, 2]);
    }

    #[test]
    fn zero_ceiling_keeps_only_free_products() {
        let mut products = test_products();
        products.push(product(6, 0, Category::Mini, &[]));
        let config = FilterConfig {
            max_price: Some(0),
            ..FilterConfig::unbounded()
        };

        assert_eq!(ids(&filter_products(&products, &config)), [6]);
    }

    #[test]
    fn colors_match_any_selected() {
        let products = test_products();
        let config = FilterConfig {
            colors: ColorSet::from_strs(&["Pink", "Beige"]),
            ..FilterConfig::unbounded()
        };

        assert_eq!(ids(&filter_products(&products, &config)), [5, 3, 2]);
    }

    #[test]
    fn price_sorts_are_stable_on_ties() {
        let products = test_products();
        let ascending = FilterConfig {
            sort: SortOrder::PriceAsc,
            ..FilterConfig::unbounded()
        };
        let descending = FilterConfig {
            sort: SortOrder::PriceDesc,
            ..FilterConfig::unbounded()
        };

        assert_eq!(ids(&filter_products(&products, &ascending)), [5, 2, 1, 3, 4]);
        assert_eq!(ids(&filter_products(&products, &descending)), [4, 1, 3, 2, 5]);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let products = test_products();
        let config = FilterConfig {
            colors: ColorSet::from_strs(&["Black", "Pink"]),
            sort: SortOrder::PriceAsc,
            ..FilterConfig::default()
        };

        let once = filter_products(&products, &config);
        let twice = filter_products(once.iter().copied(), &config);

        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_products([], &FilterConfig::default()).is_empty());
    }

    #[test]
    fn matches_agrees_with_pipeline() {
        let products = test_products();
        let config = FilterConfig {
            category: CategoryFilter::Only(Category::Tote),
            colors: ColorSet::from_strs(&["Black"]),
            ..FilterConfig::default()
        };

        let matching: Vec<u32> = products
            .iter()
            .filter(|product| config.matches(product))
            .map(|product| product.id.get())
            .collect();

        assert_eq!(matching, [1]);
    }

    #[test]
    fn reset_keeps_sort() {
        let mut config = FilterConfig {
            category: CategoryFilter::Only(Category::Mini),
            max_price: Some(1000),
            colors: ColorSet::from_strs(&["Red"]),
            sort: SortOrder::PriceDesc,
        };

        config.reset();

        assert_eq!(
            config,
            FilterConfig {
                sort: SortOrder::PriceDesc,
                ..FilterConfig::default()
            }
        );
    }

    #[test]
    fn active_filters() {
        let mut config = FilterConfig::default();
        assert!(!config.has_active_filters());
        assert!(!FilterConfig::unbounded().has_active_filters());

        config.toggle_color("Tan");
        assert!(config.has_active_filters());
        config.toggle_color("Tan");
        assert!(!config.has_active_filters());

        config.max_price = Some(4999);
        assert!(config.has_active_filters());

        config.reset();
        config.category = CategoryFilter::Only(Category::Hobo);
        assert!(config.has_active_filters());
    }

    #[test]
    fn parse_sort_orders() -> TestResult {
        assert_eq!("newest".parse::<SortOrder>()?, SortOrder::Newest);
        assert_eq!("price-asc".parse::<SortOrder>()?, SortOrder::PriceAsc);
        assert_eq!("price-desc".parse::<SortOrder>()?, SortOrder::PriceDesc);
        assert_eq!(
            "cheapest".parse::<SortOrder>(),
            Err(UnknownSortOrder("cheapest".to_string()))
        );

        Ok(())
    }

    #[test]
    fn parse_category_filters() -> TestResult {
        assert_eq!("All".parse::<CategoryFilter>()?, CategoryFilter::All);
        assert_eq!(
            "Bucket".parse::<CategoryFilter>()?,
            CategoryFilter::Only(Category::Bucket)
        );
        assert!("all".parse::<CategoryFilter>().is_err());

        Ok(())
    }
}
