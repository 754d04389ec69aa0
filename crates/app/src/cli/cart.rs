use std::{io, num::NonZeroU32, sync::Arc};

use carrystation::{
    cart::{Cart, CheckoutError},
    i18n::{Language, Translations},
    pricing::format_amount,
    products::ProductId,
    store::{Action, AppStore, StoreError},
};
use carrystation_app::context::AppContext;
use clap::Args;
use tracing::{debug, info};

use super::{output_error, render_table};

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    /// Product ids to add, one unit each; repeat an id to add more
    ids: Vec<u32>,

    /// Check out after filling the cart
    #[arg(long)]
    checkout: bool,
}

pub(crate) fn run(
    context: &AppContext,
    language: Language,
    args: &CartArgs,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let text = context.translations.get(language);
    let mut store = AppStore::new(Arc::clone(&context.catalog), language);

    store.subscribe(|state| {
        debug!(
            lines = state.cart.len(),
            count = state.cart.count(),
            open = state.cart_open,
            "cart updated"
        );
    });

    for &id in &args.ids {
        store
            .dispatch(Action::AddToCart {
                product: ProductId::new(id),
                quantity: NonZeroU32::MIN,
            })
            .map_err(|error| error.to_string())?;
    }

    write_cart(out, &store.state().cart, text, language).map_err(output_error)?;

    if !args.checkout {
        return Ok(());
    }

    match store.checkout() {
        Ok(order) => {
            info!(count = order.count(), total = %order.total(), "checked out");

            writeln!(
                out,
                "{}: {} × {}",
                text.cart.checkout,
                order.count(),
                order.total()
            )
            .map_err(output_error)
        }
        Err(StoreError::Checkout(CheckoutError::EmptyCart)) => Ok(()),
        Err(error) => Err(error.to_string()),
    }
}

fn write_cart(
    out: &mut impl io::Write,
    cart: &Cart,
    text: &Translations,
    language: Language,
) -> io::Result<()> {
    writeln!(out, "{}", text.cart.title)?;

    if cart.is_empty() {
        return writeln!(out, "{}", text.cart.empty);
    }

    let currency = cart.currency();
    let rows = cart.lines().iter().map(|line| {
        [
            line.product().name.get(language).to_string(),
            line.quantity().to_string(),
            format_amount(line.line_total(), currency),
        ]
    });

    writeln!(out, "{}", render_table(rows, 2))?;
    writeln!(
        out,
        "{}: {}",
        text.cart.total,
        format_amount(cart.total(), currency)
    )?;

    let shipping = cart.shipping();

    if shipping.unlocked {
        writeln!(out, "{}", text.cart.free_shipping_unlocked)
    } else {
        writeln!(
            out,
            "{} ({}%)",
            text.free_shipping_remaining(&format_amount(shipping.remaining, currency)),
            shipping.percent
        )
    }
}
