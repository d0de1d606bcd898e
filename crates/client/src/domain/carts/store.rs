//! Cart store: one local aggregate plus its remote mirror.
//!
//! Quantity changes on remote-backed items are mirrored to the backend
//! first; the local aggregate is only mutated once the remote call has
//! succeeded, so a partial failure can never leave the totals inconsistent
//! with the line items.
//!
//! Every operation takes `&mut self`, so two mutations on the same store
//! cannot interleave across a network await; callers that share a store wrap
//! it in their own exclusive handle.

use mercado::{Cart, LineItem, Product, ids::CartId};

use crate::domain::carts::{errors::CartStoreError, sync::CartSync};

/// Owns the session's [`Cart`] and applies all mutations to it.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    cart_id: Option<CartId>,
    sync: S,
}

impl<S: CartSync> CartStore<S> {
    /// Create an empty store with no remote cart context.
    #[must_use]
    pub fn new(sync: S) -> Self {
        Self {
            cart: Cart::new(),
            cart_id: None,
            sync,
        }
    }

    /// Create an empty store attached to an existing remote cart.
    #[must_use]
    pub fn with_remote(sync: S, cart_id: CartId) -> Self {
        Self {
            cart: Cart::new(),
            cart_id: Some(cart_id),
            sync,
        }
    }

    /// Read access to the aggregate.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The attached remote cart, if any.
    #[must_use]
    pub fn cart_id(&self) -> Option<CartId> {
        self.cart_id
    }

    /// Attach the store to a remote cart, e.g. after checkout created one.
    pub fn attach_remote(&mut self, cart_id: CartId) {
        self.cart_id = Some(cart_id);
    }

    /// Replace the aggregate wholesale, e.g. with a server response.
    pub fn replace(&mut self, cart: Cart) {
        self.cart = cart;
    }

    /// Add one unit of a product as a new local line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Cart`] when the product is already in the
    /// cart.
    pub fn add(&mut self, product: &Product) -> Result<(), CartStoreError> {
        self.cart.add_product(product).map_err(Into::into)
    }

    /// Remove the line item at `index` locally, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Cart`] when the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, CartStoreError> {
        self.cart.remove_item(index).map_err(Into::into)
    }

    /// Reset the aggregate to empty, keeping any remote cart context.
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Add one unit to the line item at `index`.
    ///
    /// For a remote-backed item the persisted quantity is patched first;
    /// the local mutation is applied only on success.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Sync`] when the remote patch fails, in
    /// which case the aggregate is unchanged, or [`CartStoreError::Cart`]
    /// when the index is out of bounds.
    pub async fn increment(&mut self, index: usize) -> Result<(), CartStoreError> {
        let item = self.cart.item(index)?;

        if let Some(remote) = item.id {
            let quantity = item.quantity.saturating_add(1);

            self.sync
                .patch_quantity(remote, quantity)
                .await
                .map_err(CartStoreError::Sync)?;
        }

        self.cart.apply_increment(index)?;

        Ok(())
    }

    /// Remove one unit from the line item at `index`.
    ///
    /// At quantity 1 the item is removed locally instead of patching the
    /// persisted quantity to zero; the removed item is returned in that
    /// case. Otherwise a remote-backed item is patched first, with the same
    /// failure contract as [`CartStore::increment`].
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Sync`] when the remote patch fails, in
    /// which case the aggregate is unchanged, or [`CartStoreError::Cart`]
    /// when the index is out of bounds.
    pub async fn decrement(&mut self, index: usize) -> Result<Option<LineItem>, CartStoreError> {
        let item = self.cart.item(index)?;

        if item.quantity == 1 {
            return self.cart.remove_item(index).map(Some).map_err(Into::into);
        }

        if let Some(remote) = item.id {
            self.sync
                .patch_quantity(remote, item.quantity.saturating_sub(1))
                .await
                .map_err(CartStoreError::Sync)?;
        }

        self.cart.apply_decrement(index).map_err(Into::into)
    }

    /// Delete the line item at `index` remotely and locally. Deleting the
    /// last item deletes the remote cart as well and empties the store.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Sync`] when a remote delete fails, in which
    /// case the aggregate is unchanged, or [`CartStoreError::Cart`] when the
    /// index is out of bounds.
    pub async fn delete_item(&mut self, index: usize) -> Result<(), CartStoreError> {
        let item = self.cart.item(index)?;

        if let Some(remote) = item.id {
            self.sync
                .delete_item(remote)
                .await
                .map_err(CartStoreError::Sync)?;
        }

        if self.cart.len() == 1 && self.cart_id.is_some() {
            return self.delete_cart().await;
        }

        self.cart.remove_item(index)?;

        Ok(())
    }

    /// Replace the aggregate with the server-side cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::NoRemoteCart`] when no remote cart is
    /// attached, or [`CartStoreError::Sync`] when the fetch fails.
    pub async fn refresh(&mut self) -> Result<(), CartStoreError> {
        let cart_id = self.cart_id.ok_or(CartStoreError::NoRemoteCart)?;

        let cart = self
            .sync
            .fetch_cart(cart_id)
            .await
            .map_err(CartStoreError::Sync)?;

        self.cart = cart;

        Ok(())
    }

    /// Delete the remote cart and empty the store, dropping the context.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::NoRemoteCart`] when no remote cart is
    /// attached, or [`CartStoreError::Sync`] when the delete fails.
    pub async fn delete_cart(&mut self) -> Result<(), CartStoreError> {
        let cart_id = self.cart_id.ok_or(CartStoreError::NoRemoteCart)?;

        self.sync
            .delete_cart(cart_id)
            .await
            .map_err(CartStoreError::Sync)?;

        self.cart_id = None;
        self.cart.clear();

        Ok(())
    }
}
