//! Integration test driving the cart engine through mixed operation
//! sequences and checking the aggregate invariants after every single call:
//!
//! - `price_in_cents == sum(unit_price_in_cents * quantity)` over all items
//! - `total_items == sum(quantity)`
//! - `total == price_in_cents / 100`, exactly
//! - every present line item has `quantity >= 1`
//! - no two line items share a product id

use rust_decimal::Decimal;
use testresult::TestResult;

use mercado::{
    Cart, Product,
    ids::ProductId,
};

fn product(id: i64, price_in_cents: u64) -> Product {
    Product {
        id: ProductId::from_i64(id),
        name: format!("Product {id}"),
        price_in_cents,
        market_place_name: None,
    }
}

#[test]
fn invariants_hold_after_every_operation() -> TestResult {
    let catalog = [
        product(1, 500),
        product(2, 125),
        product(3, 999),
        product(4, 1),
    ];
    let mut cart = Cart::new();

    for p in &catalog {
        cart.add_product(p)?;
        assert!(cart.is_consistent(), "inconsistent after add of {}", p.id);
    }

    for _ in 0..3 {
        cart.apply_increment(2)?;
        assert!(cart.is_consistent(), "inconsistent after increment");
    }

    cart.remove_item(1)?;
    assert!(cart.is_consistent(), "inconsistent after remove");

    while !cart.is_empty() {
        cart.apply_decrement(0)?;
        assert!(cart.is_consistent(), "inconsistent after decrement");
    }

    assert_eq!(cart, Cart::new());

    Ok(())
}

#[test]
fn totals_match_the_documented_scenario() -> TestResult {
    // add {id: 1, price_in_cents: 500} -> total 5, cents 500, one item
    let mut cart = Cart::new();
    cart.add_product(&product(1, 500))?;

    assert_eq!(cart.total(), Decimal::new(5, 0));
    assert_eq!(cart.price_in_cents(), 500);
    assert_eq!(cart.total_items(), 1);
    assert_eq!(
        cart.items().first().map(|item| (item.product_id, item.quantity)),
        Some((ProductId::from_i64(1), 1))
    );

    // increment it -> total 10, cents 1000, two units
    cart.apply_increment(0)?;

    assert_eq!(cart.total(), Decimal::new(10, 0));
    assert_eq!(cart.price_in_cents(), 1000);
    assert_eq!(cart.total_items(), 2);

    Ok(())
}

#[test]
fn no_rounding_drift_across_awkward_prices() -> TestResult {
    // Prices that do not divide evenly into currency units.
    let mut cart = Cart::new();
    cart.add_product_with_quantity(&product(1, 333), 3)?;
    cart.add_product_with_quantity(&product(2, 101), 7)?;

    assert_eq!(cart.price_in_cents(), 999 + 707);
    assert_eq!(cart.total().to_string(), "17.06");

    cart.remove_item(0)?;
    cart.remove_item(0)?;

    assert_eq!(cart.price_in_cents(), 0);
    assert_eq!(cart.total(), Decimal::ZERO);
    assert!(cart.is_consistent(), "drift left in emptied cart");

    Ok(())
}

#[test]
fn failed_mutations_leave_the_aggregate_untouched() -> TestResult {
    let mut cart = Cart::new();
    cart.add_product(&product(1, 500))?;
    let before = cart.clone();

    assert!(cart.add_product(&product(1, 500)).is_err());
    assert!(cart.remove_item(5).is_err());
    assert!(cart.apply_increment(5).is_err());
    assert!(cart.apply_decrement(5).is_err());
    assert!(
        cart.add_product_with_quantity(&product(9, u64::MAX), 3).is_err(),
        "overflowing add should be rejected"
    );

    assert_eq!(cart, before);

    Ok(())
}
