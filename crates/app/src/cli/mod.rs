use std::io;

use carrystation::i18n::Language;
use carrystation_app::{
    config::{LoggingConfig, StylistConfig},
    context::AppContext,
};
use clap::{Parser, Subcommand};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

mod cart;
mod product;
mod products;
mod stylist;

#[derive(Debug, Parser)]
#[command(name = "carrystation", about = "CarryStation storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Display language (en, ar)
    #[arg(long, env = "CARRYSTATION_LANGUAGE", default_value_t = Language::En, global = true)]
    language: Language,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// AI stylist settings.
    #[command(flatten)]
    stylist: StylistConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products through the shop filters
    Products(products::ProductsArgs),

    /// Show a product with its gallery and related bags
    Product(product::ProductArgs),

    /// Fill a cart with products and show the totals
    Cart(cart::CartArgs),

    /// Ask the AI stylist for bag advice
    Stylist(stylist::StylistArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(&self.stylist).map_err(|error| error.to_string())?;
        let mut out = io::stdout().lock();

        match self.command {
            Commands::Products(args) => products::run(&context, self.language, &args, &mut out),
            Commands::Product(args) => product::run(&context, self.language, &args, &mut out),
            Commands::Cart(args) => cart::run(&context, self.language, &args, &mut out),
            Commands::Stylist(args) => {
                stylist::run(&context, self.language, &args, &mut out).await
            }
        }
    }
}

fn output_error(error: io::Error) -> String {
    format!("failed to write output: {error}")
}

/// Render rows as a rounded table, right-aligning the given column.
fn render_table<R>(rows: impl IntoIterator<Item = R>, numeric_column: usize) -> String
where
    R: IntoIterator<Item = String>,
{
    let mut builder = Builder::default();

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(
        Columns::new(numeric_column..=numeric_column),
        Alignment::right(),
    );

    table.to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use carrystation::{catalog::Catalog, i18n::TranslationSet};
    use carrystation_app::{
        context::AppContext,
        stylist::{MockAdviceGateway, Stylist},
    };

    pub(crate) fn context(gateway: MockAdviceGateway) -> Result<AppContext, Box<dyn std::error::Error>> {
        Ok(AppContext {
            catalog: Arc::new(Catalog::bundled()?),
            translations: Arc::new(TranslationSet::bundled()?),
            stylist: Stylist::new(Arc::new(gateway)),
        })
    }

    pub(crate) fn utf8(out: Vec<u8>) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(out)
    }
}
