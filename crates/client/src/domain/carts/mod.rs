//! Carts

pub mod checkout;
pub mod errors;
pub mod store;
pub mod sync;

pub use checkout::{CheckoutError, CheckoutService};
pub use errors::CartStoreError;
pub use store::CartStore;
pub use sync::{CartSync, HttpCartSync};
