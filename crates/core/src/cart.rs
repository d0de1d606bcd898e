//! Cart aggregate and its mutation engine.
//!
//! The aggregate carries its derived totals denormalized, exactly as the
//! `GET /carts/:id` wire format does. Every mutation keeps them in step with
//! the line items: checks and arithmetic happen first, and the aggregate is
//! only touched once nothing can fail, so a rejected mutation leaves it
//! byte-for-byte unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ids::ProductId,
    items::LineItem,
    pricing::{self, PricingError},
    products::Product,
};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The cart already holds a line item for this product.
    #[error("cart already contains product {0}")]
    DuplicateProduct(ProductId),

    /// No line item exists at the given index.
    #[error("no line item at index {0}")]
    ItemNotFound(usize),

    /// A line item cannot be added with a quantity of zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// Wrapped arithmetic error.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// The cart aggregate: line items plus their derived totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    total: Decimal,
    price_in_cents: u64,
    total_items: u32,
    cart_items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total in currency units (`price_in_cents / 100`, exact).
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Total in cents.
    #[must_use]
    pub fn price_in_cents(&self) -> u64 {
        self.price_in_cents
    }

    /// Sum of all line item quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// The line items, in insertion (display) order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.cart_items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cart_items.len()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Index of the line item for the given product, if any.
    #[must_use]
    pub fn find_index(&self, product: ProductId) -> Option<usize> {
        self.cart_items
            .iter()
            .position(|item| item.product_id == product)
    }

    /// The line item for the given product, if any.
    #[must_use]
    pub fn find_item(&self, product: ProductId) -> Option<&LineItem> {
        self.cart_items
            .iter()
            .find(|item| item.product_id == product)
    }

    /// The line item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when the index is out of bounds.
    pub fn item(&self, index: usize) -> Result<&LineItem, CartError> {
        self.cart_items
            .get(index)
            .ok_or(CartError::ItemNotFound(index))
    }

    /// Appends one unit of a product as a new line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateProduct`] when the product is already in
    /// the cart, or a wrapped [`PricingError`] on arithmetic overflow.
    pub fn add_product(&mut self, product: &Product) -> Result<(), CartError> {
        self.add_product_with_quantity(product, 1)
    }

    /// Appends a product as a new line item with the given quantity,
    /// snapshotting its current name and unit price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateProduct`] when the product is already in
    /// the cart, [`CartError::ZeroQuantity`] for a zero quantity, or a
    /// wrapped [`PricingError`] on arithmetic overflow.
    pub fn add_product_with_quantity(
        &mut self,
        product: &Product,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if self.find_index(product.id).is_some() {
            return Err(CartError::DuplicateProduct(product.id));
        }

        let line_total = pricing::line_total(product.price_in_cents, quantity)?;
        let price_in_cents = pricing::add_cents(self.price_in_cents, line_total)?;
        let total_items = pricing::add_quantity(self.total_items, quantity)?;

        self.cart_items.push(LineItem::from_product(product, quantity));
        self.set_totals(price_in_cents, total_items);

        Ok(())
    }

    /// Removes the line item at `index`, subtracting its full contribution
    /// from the totals, and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when the index is out of bounds,
    /// or a wrapped [`PricingError`] when the totals were already
    /// inconsistent with the item.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, CartError> {
        let item = self.item(index)?;

        let line_total = item.line_total()?;
        let price_in_cents = pricing::sub_cents(self.price_in_cents, line_total)?;
        let total_items = pricing::sub_quantity(self.total_items, item.quantity)?;

        let removed = self.cart_items.remove(index);
        self.set_totals(price_in_cents, total_items);

        Ok(removed)
    }

    /// Adds one unit to the line item at `index`, growing the totals by one
    /// unit's price.
    ///
    /// This is the local half of an increment; callers that mirror the cart
    /// to the backend must patch the remote quantity first and only apply
    /// this on success.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when the index is out of bounds,
    /// or a wrapped [`PricingError`] on arithmetic overflow.
    pub fn apply_increment(&mut self, index: usize) -> Result<(), CartError> {
        let item = self.item(index)?;

        let quantity = pricing::add_quantity(item.quantity, 1)?;
        let price_in_cents = pricing::add_cents(self.price_in_cents, item.product_price_in_cents)?;
        let total_items = pricing::add_quantity(self.total_items, 1)?;

        if let Some(item) = self.cart_items.get_mut(index) {
            item.quantity = quantity;
        }
        self.set_totals(price_in_cents, total_items);

        Ok(())
    }

    /// Removes one unit from the line item at `index`, shrinking the totals
    /// by one unit's price. A line item at quantity 1 is removed outright
    /// rather than kept at zero; the removed item is returned in that case.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when the index is out of bounds,
    /// or a wrapped [`PricingError`] when the totals were already
    /// inconsistent with the item.
    pub fn apply_decrement(&mut self, index: usize) -> Result<Option<LineItem>, CartError> {
        let item = self.item(index)?;

        if item.quantity == 1 {
            return self.remove_item(index).map(Some);
        }

        let quantity = pricing::sub_quantity(item.quantity, 1)?;
        let price_in_cents = pricing::sub_cents(self.price_in_cents, item.product_price_in_cents)?;
        let total_items = pricing::sub_quantity(self.total_items, 1)?;

        if let Some(item) = self.cart_items.get_mut(index) {
            item.quantity = quantity;
        }
        self.set_totals(price_in_cents, total_items);

        Ok(None)
    }

    /// Resets the cart to the empty aggregate.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Verifies the derived totals against the line items: the cents total
    /// is the sum of every item's contribution, the item count is the sum of
    /// quantities, the currency-unit total matches the cents total, no
    /// quantity is zero, and no product appears twice.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut cents: u64 = 0;
        let mut count: u32 = 0;

        for item in &self.cart_items {
            if item.quantity == 0 {
                return false;
            }

            let Ok(line_total) = item.line_total() else {
                return false;
            };
            let Ok(next_cents) = pricing::add_cents(cents, line_total) else {
                return false;
            };
            let Ok(next_count) = pricing::add_quantity(count, item.quantity) else {
                return false;
            };

            cents = next_cents;
            count = next_count;
        }

        let unique = self.cart_items.iter().enumerate().all(|(i, item)| {
            self.cart_items
                .iter()
                .skip(i + 1)
                .all(|other| other.product_id != item.product_id)
        });

        unique
            && cents == self.price_in_cents
            && count == self.total_items
            && self.total == pricing::cents_to_money(cents)
    }

    fn set_totals(&mut self, price_in_cents: u64, total_items: u32) {
        self.price_in_cents = price_in_cents;
        self.total_items = total_items;
        // Recomputed from cents rather than adjusted incrementally, so the
        // currency-unit total can never drift.
        self.total = pricing::cents_to_money(price_in_cents);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::ids::ProductId;

    use super::*;

    fn product(id: i64, price_in_cents: u64) -> Product {
        Product {
            id: ProductId::from_i64(id),
            name: format!("Product {id}"),
            price_in_cents,
            market_place_name: None,
        }
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.price_in_cents(), 0);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn adding_a_product_sets_all_totals() -> TestResult {
        let mut cart = Cart::new();

        cart.add_product(&product(1, 500))?;

        assert_eq!(cart.total(), Decimal::new(5, 0));
        assert_eq!(cart.price_in_cents(), 500);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.len(), 1);
        assert!(cart.is_consistent());

        Ok(())
    }

    #[test]
    fn adding_same_product_twice_is_rejected() -> TestResult {
        let mut cart = Cart::new();
        let coffee = product(1, 500);

        cart.add_product(&coffee)?;
        let before = cart.clone();

        let result = cart.add_product(&coffee);

        assert_eq!(
            result,
            Err(CartError::DuplicateProduct(ProductId::from_i64(1)))
        );
        assert_eq!(cart, before, "rejected add must not change the cart");

        Ok(())
    }

    #[test]
    fn adding_with_zero_quantity_is_rejected() {
        let mut cart = Cart::new();

        let result = cart.add_product_with_quantity(&product(1, 500), 0);

        assert_eq!(result, Err(CartError::ZeroQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn add_then_remove_restores_prior_state() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 500))?;
        let before = cart.clone();

        let snack = product(2, 125);
        cart.add_product(&snack)?;
        let index = cart.find_index(snack.id).expect("item should exist");
        cart.remove_item(index)?;

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn remove_subtracts_full_contribution() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product_with_quantity(&product(1, 500), 3)?;
        cart.add_product(&product(2, 125))?;

        let removed = cart.remove_item(0)?;

        assert_eq!(removed.quantity, 3);
        assert_eq!(cart.price_in_cents(), 125);
        assert_eq!(cart.total_items(), 1);
        assert!(cart.is_consistent());

        Ok(())
    }

    #[test]
    fn remove_out_of_bounds_is_rejected() {
        let mut cart = Cart::new();

        assert_eq!(cart.remove_item(0), Err(CartError::ItemNotFound(0)));
    }

    #[test]
    fn increment_grows_totals_by_one_unit() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 500))?;

        cart.apply_increment(0)?;

        assert_eq!(cart.total(), Decimal::new(10, 0));
        assert_eq!(cart.price_in_cents(), 1000);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.item(0)?.quantity, 2);
        assert!(cart.is_consistent());

        Ok(())
    }

    #[test]
    fn decrement_shrinks_totals_by_one_unit() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product_with_quantity(&product(1, 500), 3)?;

        let removed = cart.apply_decrement(0)?;

        assert_eq!(removed, None);
        assert_eq!(cart.price_in_cents(), 1000);
        assert_eq!(cart.total_items(), 2);
        assert!(cart.is_consistent());

        Ok(())
    }

    #[test]
    fn decrement_at_quantity_one_removes_the_item() -> TestResult {
        let mut cart = Cart::new();
        let coffee = product(1, 500);
        cart.add_product(&coffee)?;
        cart.add_product(&product(2, 125))?;

        let removed = cart.apply_decrement(0)?;

        assert_eq!(removed.map(|item| item.product_id), Some(coffee.id));
        assert_eq!(cart.find_index(coffee.id), None);
        assert_eq!(cart.price_in_cents(), 125);
        assert_eq!(cart.total_items(), 1);
        assert!(cart.is_consistent());

        Ok(())
    }

    #[test]
    fn clear_yields_the_empty_aggregate() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product_with_quantity(&product(1, 500), 4)?;
        cart.add_product(&product(2, 125))?;

        cart.clear();

        assert_eq!(cart, Cart::new());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.price_in_cents(), 0);
        assert_eq!(cart.total_items(), 0);
        assert!(cart.items().is_empty());

        Ok(())
    }

    #[test]
    fn find_helpers_locate_items_by_product() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 500))?;
        cart.add_product(&product(2, 125))?;

        assert_eq!(cart.find_index(ProductId::from_i64(2)), Some(1));
        assert_eq!(
            cart.find_item(ProductId::from_i64(2)).map(|i| i.quantity),
            Some(1)
        );
        assert_eq!(cart.find_index(ProductId::from_i64(3)), None);
        assert!(cart.find_item(ProductId::from_i64(3)).is_none());

        Ok(())
    }

    #[test]
    fn deserializes_the_wire_aggregate() -> TestResult {
        let cart: Cart = serde_json::from_str(
            r#"{
                "total": 10,
                "price_in_cents": 1000,
                "total_items": 2,
                "cart_items": [
                    {
                        "id": 7,
                        "product_id": 1,
                        "product_name": "Coffee",
                        "product_price_in_cents": 500,
                        "quantity": 2
                    }
                ]
            }"#,
        )?;

        assert_eq!(cart.price_in_cents(), 1000);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.len(), 1);
        assert!(cart.is_consistent());

        Ok(())
    }

    #[test]
    fn consistency_check_catches_drifted_totals() -> TestResult {
        let cart: Cart = serde_json::from_str(
            r#"{
                "total": 9,
                "price_in_cents": 900,
                "total_items": 2,
                "cart_items": [
                    {
                        "product_id": 1,
                        "product_name": "Coffee",
                        "product_price_in_cents": 500,
                        "quantity": 2
                    }
                ]
            }"#,
        )?;

        assert!(!cart.is_consistent());

        Ok(())
    }
}
