//! Checkout: turn the local aggregate into server-side cart and order
//! resources.

use mercado::{
    Cart, LineItem,
    ids::{CartId, CartItemId},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::rest::{RestClient, RestError};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The submission was rejected or could not be delivered. The local
    /// aggregate is left intact; retrying is the caller's decision.
    #[error(transparent)]
    Rest(#[from] RestError),
}

/// Body of `POST /cart_items`.
#[derive(Debug, Serialize)]
struct CartSubmission<'a> {
    items: CartItemsBody<'a>,
}

#[derive(Debug, Serialize)]
struct CartItemsBody<'a> {
    cart_items: &'a [LineItem],
}

#[derive(Debug, Deserialize)]
struct CreatedCart {
    id: CartId,
}

/// Body of `POST /order_items`.
#[derive(Debug, Serialize)]
struct OrderSubmission {
    order_items: OrderItemsBody,
}

#[derive(Debug, Serialize)]
struct OrderItemsBody {
    cart_id: CartId,
    cart_items: Vec<OrderLineSubmission>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct OrderLineSubmission {
    quantity: u32,
    cart_item_id: Option<CartItemId>,
    product_price_in_cents: u64,
}

fn order_lines(cart: &Cart) -> Vec<OrderLineSubmission> {
    cart.items()
        .iter()
        .map(|item| OrderLineSubmission {
            quantity: item.quantity,
            cart_item_id: item.id,
            product_price_in_cents: item.product_price_in_cents,
        })
        .collect()
}

/// Submits carts and orders to the backend.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    rest: RestClient,
}

impl CheckoutService {
    /// Create a checkout service over the given REST client.
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Persist the local line items as a new remote cart and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Rest`] when the submission fails; nothing is
    /// cleared locally in that case.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub async fn create_cart(&self, items: &[LineItem]) -> Result<CartId, CheckoutError> {
        let created: CreatedCart = self
            .rest
            .post(
                "cart_items",
                &CartSubmission {
                    items: CartItemsBody { cart_items: items },
                },
            )
            .await?;

        Ok(created.id)
    }

    /// Submit the cart as an order.
    ///
    /// On success the caller clears its store and leaves the cart context;
    /// on failure the aggregate is left intact and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Rest`] when the submission fails.
    #[instrument(skip(self, cart), fields(cart_id = %cart_id, item_count = cart.len()))]
    pub async fn submit_order(&self, cart_id: CartId, cart: &Cart) -> Result<(), CheckoutError> {
        let _response: serde_json::Value = self
            .rest
            .post(
                "order_items",
                &OrderSubmission {
                    order_items: OrderItemsBody {
                        cart_id,
                        cart_items: order_lines(cart),
                    },
                },
            )
            .await?;

        Ok(())
    }
}
