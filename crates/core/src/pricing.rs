//! Price arithmetic over integer cents.
//!
//! Every total in the cart is derived from `unit_price_in_cents * quantity`
//! sums. All arithmetic here is checked; an overflow is an error, never a
//! wrap or a panic. Currency-unit amounts are produced exactly with
//! [`Decimal`], never floating point.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while computing prices and counts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A total exceeded the representable range.
    #[error("arithmetic overflowed while computing a total")]
    Overflow,

    /// A subtraction went below zero, which would mean the aggregate was
    /// already inconsistent.
    #[error("arithmetic underflowed while computing a total")]
    Underflow,
}

/// Calculates `unit_cents * quantity` for one line item.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the product does not fit in `u64`.
pub fn line_total(unit_cents: u64, quantity: u32) -> Result<u64, PricingError> {
    unit_cents
        .checked_mul(u64::from(quantity))
        .ok_or(PricingError::Overflow)
}

/// Adds an amount of cents to a running total.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the sum does not fit in `u64`.
pub fn add_cents(total: u64, amount: u64) -> Result<u64, PricingError> {
    total.checked_add(amount).ok_or(PricingError::Overflow)
}

/// Subtracts an amount of cents from a running total.
///
/// # Errors
///
/// Returns [`PricingError::Underflow`] when the amount exceeds the total.
pub fn sub_cents(total: u64, amount: u64) -> Result<u64, PricingError> {
    total.checked_sub(amount).ok_or(PricingError::Underflow)
}

/// Adds to a running item count.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the count does not fit in `u32`.
pub fn add_quantity(count: u32, quantity: u32) -> Result<u32, PricingError> {
    count.checked_add(quantity).ok_or(PricingError::Overflow)
}

/// Subtracts from a running item count.
///
/// # Errors
///
/// Returns [`PricingError::Underflow`] when the quantity exceeds the count.
pub fn sub_quantity(count: u32, quantity: u32) -> Result<u32, PricingError> {
    count.checked_sub(quantity).ok_or(PricingError::Underflow)
}

/// Converts cents to an exact currency-unit amount (`500` -> `5.00`).
#[must_use]
pub fn cents_to_money(cents: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(cents), 2)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_total_multiplies_unit_price_by_quantity() -> TestResult {
        assert_eq!(line_total(500, 3)?, 1500);

        Ok(())
    }

    #[test]
    fn line_total_detects_overflow() {
        assert_eq!(line_total(u64::MAX, 2), Err(PricingError::Overflow));
    }

    #[test]
    fn sub_cents_detects_underflow() {
        assert_eq!(sub_cents(100, 101), Err(PricingError::Underflow));
    }

    #[test]
    fn cents_convert_exactly_to_money() {
        assert_eq!(cents_to_money(500).to_string(), "5.00");
        assert_eq!(cents_to_money(1).to_string(), "0.01");
        assert_eq!(cents_to_money(0).to_string(), "0.00");
    }
}
