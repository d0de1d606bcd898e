//! Finished order models.
//!
//! `GET /order_items?order_id=:id` returns one entry per purchased line,
//! each wrapping the cart item it was created from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{self, PricingError};

/// Marker for [`crate::ids::OrderId`].
#[derive(Debug)]
pub struct Order;

/// One entry of a finished order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The cart line the order entry was created from.
    pub cart_item: OrderLine,
}

/// Snapshot of a purchased cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product name at purchase time.
    pub product_name: String,

    /// Unit price in cents at purchase time.
    pub product_price_in_cents: u64,

    /// Number of units purchased.
    pub quantity: u32,
}

impl OrderLine {
    /// The line's total in cents.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] when the total does not fit in
    /// `u64`.
    pub fn line_total(&self) -> Result<u64, PricingError> {
        pricing::line_total(self.product_price_in_cents, self.quantity)
    }

    /// The line's total in currency units.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] when the total does not fit in
    /// `u64`.
    pub fn line_money(&self) -> Result<Decimal, PricingError> {
        self.line_total().map(pricing::cents_to_money)
    }
}

/// Sums the quantities across all order entries.
#[must_use]
pub fn total_quantity(items: &[OrderItem]) -> u64 {
    items
        .iter()
        .map(|item| u64::from(item.cart_item.quantity))
        .sum()
}
