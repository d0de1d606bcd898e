//! Orders service.

use async_trait::async_trait;
use mercado::{ids::OrderId, orders::OrderItem};
use mockall::automock;

use crate::rest::{RestClient, RestError};

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Fetch the purchased lines of a finished order.
    async fn list_order_items(&self, order: OrderId) -> Result<Vec<OrderItem>, RestError>;
}

/// [`OrdersService`] over the marketplace REST API.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    rest: RestClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn list_order_items(&self, order: OrderId) -> Result<Vec<OrderItem>, RestError> {
        self.rest
            .get(&format!("order_items?order_id={order}"))
            .await
    }
}
