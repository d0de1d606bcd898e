//! Remote cart synchronization.
//!
//! Translates local cart changes into calls against the persisted cart
//! resources. The store treats a failed call as if the whole operation never
//! started.

use async_trait::async_trait;
use mercado::{
    Cart,
    ids::{CartId, CartItemId},
};
use mockall::automock;
use serde::Serialize;

use crate::rest::{RestClient, RestError};

/// Body of `PATCH /cart_items/:id`.
#[derive(Debug, Serialize)]
struct QuantityPatch {
    quantity: u32,
}

/// Mirror of the server-side cart resources.
#[automock]
#[async_trait]
pub trait CartSync: Send + Sync {
    /// Update the persisted quantity of a line item.
    async fn patch_quantity(&self, item: CartItemId, quantity: u32) -> Result<(), RestError>;

    /// Delete a persisted line item.
    async fn delete_item(&self, item: CartItemId) -> Result<(), RestError>;

    /// Fetch the server-side cart aggregate.
    async fn fetch_cart(&self, cart: CartId) -> Result<Cart, RestError>;

    /// Delete the server-side cart.
    async fn delete_cart(&self, cart: CartId) -> Result<(), RestError>;
}

/// [`CartSync`] over the marketplace REST API.
#[derive(Debug, Clone)]
pub struct HttpCartSync {
    rest: RestClient,
}

impl HttpCartSync {
    /// Create a sync adapter over the given REST client.
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl CartSync for HttpCartSync {
    async fn patch_quantity(&self, item: CartItemId, quantity: u32) -> Result<(), RestError> {
        // The backend echoes the updated item; only success matters here.
        let _updated: serde_json::Value = self
            .rest
            .patch(&format!("cart_items/{item}"), &QuantityPatch { quantity })
            .await?;

        Ok(())
    }

    async fn delete_item(&self, item: CartItemId) -> Result<(), RestError> {
        self.rest.delete(&format!("cart_items/{item}")).await
    }

    async fn fetch_cart(&self, cart: CartId) -> Result<Cart, RestError> {
        self.rest.get(&format!("carts/{cart}")).await
    }

    async fn delete_cart(&self, cart: CartId) -> Result<(), RestError> {
        self.rest.delete(&format!("carts/{cart}")).await
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn quantity_patch_body_matches_the_wire_format() -> TestResult {
        let body = serde_json::to_value(QuantityPatch { quantity: 3 })?;

        assert_eq!(body, serde_json::json!({ "quantity": 3 }));

        Ok(())
    }
}
