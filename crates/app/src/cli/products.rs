use std::io;

use carrystation::{
    filter::{CategoryFilter, DEFAULT_PRICE_CEILING, FilterConfig, SortOrder},
    i18n::{Language, Translations},
    pricing::format_amount,
    products::Product,
};
use carrystation_app::context::AppContext;
use clap::Args;
use rusty_money::iso::Currency;
use tracing::debug;

use super::{output_error, render_table};

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Category to show ("All" or a category such as "Tote")
    #[arg(long, default_value_t = CategoryFilter::All)]
    category: CategoryFilter,

    /// Highest price to include
    #[arg(long, default_value_t = DEFAULT_PRICE_CEILING, conflicts_with = "any_price")]
    max_price: u64,

    /// Include every price
    #[arg(long)]
    any_price: bool,

    /// Color to match; repeat to match any of several
    #[arg(long = "color")]
    colors: Vec<String>,

    /// Sort order (newest, price-asc, price-desc)
    #[arg(long, default_value_t = SortOrder::Newest)]
    sort: SortOrder,
}

impl ProductsArgs {
    fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            category: self.category,
            max_price: (!self.any_price).then_some(self.max_price),
            colors: self.colors.iter().collect(),
            sort: self.sort,
        }
    }
}

pub(crate) fn run(
    context: &AppContext,
    language: Language,
    args: &ProductsArgs,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let config = args.filter_config();
    let products = config.apply(context.catalog.all());

    debug!(?config, results = products.len(), "filtered products");

    write_listing(
        out,
        &products,
        &config,
        context.catalog.currency(),
        context.translations.get(language),
        language,
    )
    .map_err(output_error)
}

fn write_listing(
    out: &mut impl io::Write,
    products: &[&Product],
    config: &FilterConfig,
    currency: &Currency,
    text: &Translations,
    language: Language,
) -> io::Result<()> {
    writeln!(out, "{}", text.shop.title)?;

    if config.has_active_filters() {
        writeln!(
            out,
            "{} {}",
            text.shop.active_filters,
            describe_filters(config, currency, text)
        )?;
    }

    if products.is_empty() {
        return writeln!(out, "{}", text.shop.no_results);
    }

    let rows = products
        .iter()
        .map(|product| product_row(product, currency, text, language));

    writeln!(out, "{}", render_table(rows, 3))
}

/// One listing row: id, name, category, price and colors.
pub(super) fn product_row(
    product: &Product,
    currency: &Currency,
    text: &Translations,
    language: Language,
) -> [String; 5] {
    let colors: Vec<&str> = product
        .colors
        .iter()
        .map(|color| text.color(color))
        .collect();

    [
        product.id.to_string(),
        product.name.get(language).to_string(),
        text.category(product.category).to_string(),
        format_amount(product.price, currency),
        colors.join(", "),
    ]
}

fn describe_filters(config: &FilterConfig, currency: &Currency, text: &Translations) -> String {
    let mut chips = Vec::new();

    if let CategoryFilter::Only(category) = config.category {
        chips.push(text.category(category).to_string());
    }

    if let Some(max_price) = config.max_price
        && max_price < DEFAULT_PRICE_CEILING
    {
        chips.push(format!(
            "{} {}",
            text.shop.max_price,
            format_amount(max_price, currency)
        ));
    }

    chips.extend(config.colors.iter().map(|color| text.color(color).to_string()));

    chips.join(" · ")
}
