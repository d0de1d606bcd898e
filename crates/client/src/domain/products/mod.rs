//! Products

pub mod errors;
pub mod models;
pub mod service;

pub use errors::{FieldErrors, ProductsError};
pub use models::ProductForm;
pub use service::{HttpProductsService, ProductsService};
