//! Product form models.

use serde::Serialize;

/// Fields submitted by the product form, for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductForm {
    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price_in_cents: u64,

    /// Marketplace partner the product is listed under.
    pub market_place_partner_id: i64,
}
