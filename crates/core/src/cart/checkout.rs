//! Checkout

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{cart::CartLine, pricing::PricingError};

/// Errors that can occur when checking out.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing in the cart to check out.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The cart total could not be represented as money.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A checked-out cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    lines: Vec<CartLine>,
    count: u64,
    total: Money<'static, Currency>,
}

impl Order {
    /// Create an order from its lines and totals.
    pub fn new(lines: Vec<CartLine>, count: u64, total: Money<'static, Currency>) -> Self {
        Self {
            lines,
            count,
            total,
        }
    }

    /// Lines that were purchased, in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of units purchased.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Amount to pay.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }
}
