//! Products service.

use async_trait::async_trait;
use mercado::{Product, ids::ProductId};
use mockall::automock;

use crate::{
    domain::products::{errors::ProductsError, models::ProductForm},
    rest::RestClient,
};

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List all products available for purchase.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsError>;

    /// Fetch a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsError>;

    /// Create a product from the form fields.
    async fn create_product(&self, form: ProductForm) -> Result<Product, ProductsError>;

    /// Update an existing product with the form fields.
    async fn update_product(
        &self,
        id: ProductId,
        form: ProductForm,
    ) -> Result<Product, ProductsError>;
}

/// [`ProductsService`] over the marketplace REST API.
#[derive(Debug, Clone)]
pub struct HttpProductsService {
    rest: RestClient,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsError> {
        self.rest.get("products").await.map_err(Into::into)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsError> {
        self.rest
            .get(&format!("products/{id}"))
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, form), fields(product_name = %form.name))]
    async fn create_product(&self, form: ProductForm) -> Result<Product, ProductsError> {
        self.rest
            .post("products", &form)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, form), fields(product_id = %id))]
    async fn update_product(
        &self,
        id: ProductId,
        form: ProductForm,
    ) -> Result<Product, ProductsError> {
        self.rest
            .put(&format!("products/{id}"), &form)
            .await
            .map_err(Into::into)
    }
}
