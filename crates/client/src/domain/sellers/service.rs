//! Sellers service.

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use tracing::warn;

use crate::{
    domain::sellers::{errors::SellersError, models::SellerProfile},
    rest::RestClient,
};

/// Body of `PUT /market_place_partners/:id`.
#[derive(Debug, Serialize)]
struct SellerUpdateBody<'a> {
    market_place_partner: &'a SellerProfile,
}

/// Body of `POST /market_place_partners`.
#[derive(Debug, Serialize)]
struct SellerCreateBody {
    market_place_partner: NewSellerFields,
}

#[derive(Debug, Serialize)]
struct NewSellerFields {
    #[serde(flatten)]
    profile: SellerProfile,
    status: u8,
    user_id: i64,
}

#[automock]
#[async_trait]
pub trait SellersService: Send + Sync {
    /// Update an existing seller profile.
    async fn update_seller(
        &self,
        id: i64,
        profile: SellerProfile,
    ) -> Result<SellerProfile, SellersError>;

    /// Register a new seller profile for the given user.
    async fn create_seller(
        &self,
        profile: SellerProfile,
        user_id: i64,
    ) -> Result<SellerProfile, SellersError>;
}

/// [`SellersService`] over the marketplace REST API.
#[derive(Debug, Clone)]
pub struct HttpSellersService {
    rest: RestClient,
}

impl HttpSellersService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl SellersService for HttpSellersService {
    async fn update_seller(
        &self,
        id: i64,
        profile: SellerProfile,
    ) -> Result<SellerProfile, SellersError> {
        let result = self
            .rest
            .put(
                &format!("market_place_partners/{id}"),
                &SellerUpdateBody {
                    market_place_partner: &profile,
                },
            )
            .await;

        if let Err(error) = &result {
            warn!(seller_id = id, %error, "seller update failed");
        }

        result.map_err(Into::into)
    }

    async fn create_seller(
        &self,
        profile: SellerProfile,
        user_id: i64,
    ) -> Result<SellerProfile, SellersError> {
        self.rest
            .post(
                "market_place_partners",
                &SellerCreateBody {
                    // New sellers start in the active status.
                    market_place_partner: NewSellerFields {
                        profile,
                        status: 1,
                        user_id,
                    },
                },
            )
            .await
            .map_err(Into::into)
    }
}
