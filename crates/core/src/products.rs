//! Product Models

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// A product as returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend id of the product.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price_in_cents: u64,

    /// Name of the marketplace partner selling the product, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_place_name: Option<String>,
}
