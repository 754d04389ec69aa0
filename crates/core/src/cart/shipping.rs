//! Shipping

/// Cart total at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 2_000;

/// Progress towards free shipping for a cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingProgress {
    /// Total needed for free shipping
    pub threshold: u64,

    /// Amount still to add; zero once unlocked
    pub remaining: u64,

    /// Progress bar fill, 0 to 100
    pub percent: u8,

    /// Whether the total has reached the threshold
    pub unlocked: bool,
}

impl ShippingProgress {
    /// Progress for a total against [`FREE_SHIPPING_THRESHOLD`].
    pub fn for_total(total: u64) -> Self {
        Self::with_threshold(total, FREE_SHIPPING_THRESHOLD)
    }

    /// Progress for a total against a custom threshold.
    ///
    /// A zero threshold is always unlocked.
    pub fn with_threshold(total: u64, threshold: u64) -> Self {
        if threshold == 0 || total >= threshold {
            return ShippingProgress {
                threshold,
                remaining: 0,
                percent: 100,
                unlocked: true,
            };
        }

        // total < threshold here, so the ratio is below 100
        let percent = u128::from(total) * 100 / u128::from(threshold);

        ShippingProgress {
            threshold,
            remaining: threshold - total,
            percent: u8::try_from(percent).unwrap_or(100),
            unlocked: false,
        }
    }
}
