//! Cart
//!
//! Ordered cart lines with at most one line per product. Totals and counts are
//! recomputed from the lines on every read.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{PricingError, to_money},
    products::{Product, ProductId},
};

pub mod checkout;
pub mod shipping;

pub use checkout::{CheckoutError, Order};
pub use shipping::{FREE_SHIPPING_THRESHOLD, ShippingProgress};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: NonZeroU32,
}

impl CartLine {
    /// The product as it was when first added.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Identifier of the line's product.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Units of the product in the cart; always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Price multiplied by quantity, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.product
            .price
            .saturating_mul(u64::from(self.quantity.get()))
    }
}

/// Signals emitted by cart operations for the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// Products were added; the cart drawer should open.
    OpenRequested {
        /// Product that was added
        product: ProductId,

        /// Quantity on the line after the add
        quantity: u32,
    },
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new one. Every call returns
    /// exactly one [`CartEvent::OpenRequested`].
    pub fn add(&mut self, product: &Product) -> CartEvent {
        self.add_quantity(product, NonZeroU32::MIN)
    }

    /// Add `quantity` units of a product as a single operation.
    pub fn add_quantity(&mut self, product: &Product, quantity: NonZeroU32) -> CartEvent {
        let quantity = match self.line_mut(product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity.get());
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
                quantity
            }
        };

        CartEvent::OpenRequested {
            product: product.id,
            quantity: quantity.get(),
        }
    }

    /// Remove a product's line. Returns the removed line, if there was one.
    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.product.id == id)?;

        Some(self.lines.remove(index))
    }

    /// Adjust a line's quantity by `delta`, never going below one.
    ///
    /// Returns the new quantity, or `None` when the product is not in the cart.
    pub fn set_quantity_delta(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        let line = self.line_mut(id)?;

        let target = i64::from(line.quantity.get()).saturating_add(delta);
        let clamped = u32::try_from(target.max(1)).unwrap_or(u32::MAX);

        line.quantity = NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN);

        Some(line.quantity.get())
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |total, line| total.saturating_add(line.line_total()))
    }

    /// Sum of quantities.
    pub fn count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |count, line| count.saturating_add(u64::from(line.quantity())))
    }

    /// The cart total as money in the cart currency.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total cannot be represented.
    pub fn total_money(&self) -> Result<Money<'static, Currency>, PricingError> {
        to_money(self.total(), self.currency)
    }

    /// Progress towards free shipping.
    pub fn shipping(&self) -> ShippingProgress {
        ShippingProgress::for_total(self.total())
    }

    /// Turn the cart into an order and empty it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to buy; the
    /// cart is left unchanged on any error.
    pub fn checkout(&mut self) -> Result<Order, CheckoutError> {
        if self.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = self.total_money()?;
        let count = self.count();

        Ok(Order::new(std::mem::take(&mut self.lines), count, total))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EGP;
    use testresult::TestResult;

    use crate::{products::Category, test_support::product};

    use super::*;

    fn quantity(n: u32) -> Result<NonZeroU32, &'static str> {
        NonZeroU32::new(n).ok_or("quantity must be positive")
    }

    #[test]
    fn add_appends_then_increments() {
        let tote = product(1, 1299, Category::Tote, &["Brown"]);
        let mut cart = Cart::new(EGP);

        let first = cart.add(&tote);
        let second = cart.add(&tote);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
        assert_eq!(
            first,
            CartEvent::OpenRequested {
                product: ProductId::new(1),
                quantity: 1
            }
        );
        assert_eq!(
            second,
            CartEvent::OpenRequested {
                product: ProductId::new(1),
                quantity: 2
            }
        );
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new(EGP);

        cart.add(&product(3, 100, Category::Mini, &[]));
        cart.add(&product(1, 100, Category::Mini, &[]));
        cart.add(&product(3, 100, Category::Mini, &[]));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product_id().get()).collect();

        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn add_quantity_is_one_operation() -> TestResult {
        let clutch = product(2, 899, Category::Clutch, &["Pink"]);
        let mut cart = Cart::new(EGP);

        let event = cart.add_quantity(&clutch, quantity(3)?);

        assert_eq!(
            event,
            CartEvent::OpenRequested {
                product: ProductId::new(2),
                quantity: 3
            }
        );
        assert_eq!(cart.total(), 2697);

        Ok(())
    }

    #[test]
    fn remove_deletes_line_or_noops() {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, 500, Category::Tote, &[]));

        assert!(cart.remove(ProductId::new(9)).is_none());
        assert_eq!(cart.len(), 1);

        let removed = cart.remove(ProductId::new(1));

        assert_eq!(removed.map(|line| line.quantity()), Some(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn quantity_delta_clamps_at_one() {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, 500, Category::Tote, &[]));

        assert_eq!(cart.set_quantity_delta(ProductId::new(1), 4), Some(5));
        assert_eq!(cart.set_quantity_delta(ProductId::new(1), -2), Some(3));
        assert_eq!(cart.set_quantity_delta(ProductId::new(1), -10), Some(1));
        assert_eq!(cart.set_quantity_delta(ProductId::new(1), i64::MIN), Some(1));
        assert_eq!(cart.set_quantity_delta(ProductId::new(2), 1), None);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn quantity_delta_saturates_at_max() {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, 1, Category::Tote, &[]));

        assert_eq!(
            cart.set_quantity_delta(ProductId::new(1), i64::MAX),
            Some(u32::MAX)
        );
    }

    #[test]
    fn totals_follow_every_mutation() {
        let tote = product(1, 1299, Category::Tote, &[]);
        let clutch = product(2, 899, Category::Clutch, &[]);
        let mut cart = Cart::new(EGP);

        cart.add(&tote);
        cart.add(&clutch);
        assert_eq!((cart.total(), cart.count()), (2198, 2));

        cart.set_quantity_delta(tote.id, 1);
        assert_eq!((cart.total(), cart.count()), (3497, 3));

        cart.remove(clutch.id);
        assert_eq!((cart.total(), cart.count()), (2598, 2));

        cart.clear();
        assert_eq!((cart.total(), cart.count()), (0, 0));
    }

    #[test]
    fn line_total_saturates() {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, u64::MAX, Category::Tote, &[]));
        cart.add(&product(1, u64::MAX, Category::Tote, &[]));

        assert_eq!(cart.total(), u64::MAX);
    }

    #[test]
    fn shipping_tracks_total() {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, 1299, Category::Tote, &[]));

        assert_eq!(cart.shipping().remaining, 701);

        cart.add(&product(2, 899, Category::Clutch, &[]));

        assert!(cart.shipping().unlocked);
    }

    #[test]
    fn checkout_empties_the_cart() -> TestResult {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, 1299, Category::Tote, &[]));
        cart.add(&product(1, 1299, Category::Tote, &[]));

        let order = cart.checkout()?;

        assert_eq!(order.count(), 2);
        assert_eq!(order.total(), Money::from_major(2598, EGP));
        assert_eq!(order.lines().len(), 1);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn checkout_of_empty_cart_errors() {
        let mut cart = Cart::new(EGP);

        assert_eq!(cart.checkout(), Err(CheckoutError::EmptyCart));
        assert!(cart.is_empty());
    }

    #[test]
    fn checkout_overflow_leaves_cart_untouched() {
        let mut cart = Cart::new(EGP);
        cart.add(&product(1, u64::MAX, Category::Tote, &[]));

        assert!(matches!(
            cart.checkout(),
            Err(CheckoutError::Pricing(PricingError::AmountOverflow(_)))
        ));
        assert_eq!(cart.len(), 1);
    }
}
