use std::io;

use carrystation::{
    catalog::Catalog,
    i18n::{Language, Translations},
    pricing::format_amount,
    products::{Product, ProductId},
};
use carrystation_app::context::AppContext;
use clap::Args;

use super::{output_error, products::product_row, render_table};

/// Number of related bags shown under a product.
const RELATED_LIMIT: usize = 3;

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    id: u32,
}

pub(crate) fn run(
    context: &AppContext,
    language: Language,
    args: &ProductArgs,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let text = context.translations.get(language);

    let Some(product) = context.catalog.get(ProductId::new(args.id)) else {
        return Err(format!("{} ({})", text.product.not_found, args.id));
    };

    write_details(out, &context.catalog, product, text, language).map_err(output_error)
}

fn write_details(
    out: &mut impl io::Write,
    catalog: &Catalog,
    product: &Product,
    text: &Translations,
    language: Language,
) -> io::Result<()> {
    let currency = catalog.currency();

    writeln!(
        out,
        "{} ({})",
        product.name.get(language),
        text.category(product.category)
    )?;
    writeln!(out, "{}", format_amount(product.price, currency))?;
    writeln!(out)?;
    writeln!(out, "{}", text.product.description)?;
    writeln!(out, "{}", product.description.get(language))?;

    if !product.colors.is_empty() {
        let swatches: Vec<String> = product
            .colors
            .iter()
            .map(|color| {
                let name = text.color(color);

                if product.default_color() == Some(color.as_str()) {
                    format!("[{name}]")
                } else {
                    name.to_string()
                }
            })
            .collect();

        writeln!(out)?;
        writeln!(out, "{}: {}", text.product.color, swatches.join(" "))?;
    }

    writeln!(out)?;

    for image in product.gallery() {
        writeln!(out, "{image}")?;
    }

    let related = catalog.related(product, RELATED_LIMIT);

    if !related.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", text.product.related)?;

        let rows = related
            .iter()
            .map(|other| product_row(other, currency, text, language));

        writeln!(out, "{}", render_table(rows, 3))?;
    }

    Ok(())
}
