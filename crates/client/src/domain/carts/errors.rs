//! Cart store errors.

use mercado::CartError;
use thiserror::Error;

use crate::rest::RestError;

/// Errors surfaced by [`crate::domain::carts::CartStore`] operations.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The local aggregate rejected the mutation; nothing was sent remotely.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The remote mirror call failed; local state was left unchanged.
    #[error("cart sync failed")]
    Sync(#[source] RestError),

    /// The operation needs a remote cart context but none is attached.
    #[error("no remote cart to operate on")]
    NoRemoteCart,
}
