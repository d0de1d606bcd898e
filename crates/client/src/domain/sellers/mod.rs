//! Sellers

pub mod errors;
pub mod models;
pub mod service;

pub use errors::SellersError;
pub use models::SellerProfile;
pub use service::{HttpSellersService, SellersService};
