//! Money arithmetic using rust_decimal for precision
//!
//! Line and order totals are computed in `Decimal` internally, then converted
//! to `f64` for storage and the wire. Item validation lives here too so the
//! place and edit paths share one rule set.

use rust_decimal::prelude::*;
use shared::models::LineItem;
use shared::{AppError, AppResult};

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per line
const MAX_UNIT_PRICE: f64 = 999_999.99;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9_999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_order(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a single line item before it enters an order
pub fn validate_line_item(item: &LineItem) -> AppResult<()> {
    require_finite(item.unit_price, "unit_price")?;
    if item.unit_price < 0.0 {
        return Err(AppError::invalid_order(format!(
            "unit_price must be non-negative, got {}",
            item.unit_price
        )));
    }
    if item.unit_price > MAX_UNIT_PRICE {
        return Err(AppError::invalid_order(format!(
            "unit_price exceeds maximum allowed ({}), got {}",
            MAX_UNIT_PRICE, item.unit_price
        )));
    }

    if item.quantity <= 0 {
        return Err(AppError::invalid_order(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(AppError::invalid_order(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    Ok(())
}

/// Validate an order's item list (used by both place and edit)
pub fn validate_items(items: &[LineItem]) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::invalid_order("order contains no items"));
    }
    for item in items {
        validate_line_item(item)?;
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: unit price times quantity
pub fn line_total(item: &LineItem) -> Decimal {
    to_decimal(item.unit_price) * Decimal::from(item.quantity)
}

/// Order total over all lines, rounded for storage
pub fn order_total(items: &[LineItem]) -> f64 {
    to_f64(items.iter().map(line_total).sum())
}
