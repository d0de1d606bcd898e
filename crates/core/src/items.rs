//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::{
    ids::{CartItemId, ProductId},
    pricing::{self, PricingError},
    products::Product,
};

/// One line of a cart: a snapshot of a product plus a quantity.
///
/// The name and unit price are copied from the product at add-time and are
/// not re-fetched afterwards. `id` is assigned by the backend once the line
/// item is persisted; a locally-added item has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Remote id of the persisted line item, absent for local-only items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CartItemId>,

    /// Id of the referenced product.
    pub product_id: ProductId,

    /// Product name at add-time.
    pub product_name: String,

    /// Unit price in cents at add-time.
    pub product_price_in_cents: u64,

    /// Number of units; always at least 1 while the item is present.
    pub quantity: u32,
}

impl LineItem {
    /// Snapshots a product into a new local-only line item.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: None,
            product_id: product.id,
            product_name: product.name.clone(),
            product_price_in_cents: product.price_in_cents,
            quantity,
        }
    }

    /// Whether this item is persisted server-side.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.id.is_some()
    }

    /// The item's full contribution to the cart total, in cents.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] when the contribution does not fit
    /// in `u64`.
    pub fn line_total(&self) -> Result<u64, PricingError> {
        pricing::line_total(self.product_price_in_cents, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn coffee() -> Product {
        Product {
            id: ProductId::from_i64(1),
            name: "Coffee".to_string(),
            price_in_cents: 500,
            market_place_name: None,
        }
    }

    #[test]
    fn from_product_snapshots_name_and_price() {
        let item = LineItem::from_product(&coffee(), 2);

        assert_eq!(item.product_id, ProductId::from_i64(1));
        assert_eq!(item.product_name, "Coffee");
        assert_eq!(item.product_price_in_cents, 500);
        assert_eq!(item.quantity, 2);
        assert!(!item.is_remote());
    }

    #[test]
    fn line_total_is_unit_price_times_quantity() -> TestResult {
        let item = LineItem::from_product(&coffee(), 3);

        assert_eq!(item.line_total()?, 1500);

        Ok(())
    }

    #[test]
    fn local_item_serializes_without_id() -> TestResult {
        let json = serde_json::to_value(LineItem::from_product(&coffee(), 1))?;

        assert!(json.get("id").is_none(), "local item must not carry an id");

        Ok(())
    }

    #[test]
    fn remote_item_round_trips_id() -> TestResult {
        let item: LineItem = serde_json::from_str(
            r#"{
                "id": 9,
                "product_id": 1,
                "product_name": "Coffee",
                "product_price_in_cents": 500,
                "quantity": 2
            }"#,
        )?;

        assert_eq!(item.id, Some(CartItemId::from_i64(9)));
        assert!(item.is_remote());

        Ok(())
    }
}
