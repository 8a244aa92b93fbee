//! Result normalization for JSON-safe numbers
//!
//! Aggregates accumulate in wide integers and are divided in `rust_decimal`
//! so that rounding is deterministic. This module is the single place where
//! internal numeric types are narrowed to `u64` / `f64` for callers.
//! All rounding is half-to-even at a fixed number of decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::QueryError;

/// Largest integer a JSON number (IEEE-754 double) represents exactly.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Decimal places for averages and medians.
pub const AVERAGE_DP: u32 = 2;

/// Decimal places for raw proportions.
pub const PROPORTION_DP: u32 = 4;

/// Decimal places for percentages.
pub const PERCENTAGE_DP: u32 = 1;

/// Narrow a wide accumulator to a portable integer.
pub fn exact_integer(value: u128) -> Result<u64, QueryError> {
    if value > u128::from(MAX_SAFE_INTEGER) {
        return Err(QueryError::NumericOverflow {
            value: value.to_string(),
        });
    }
    Ok(value as u64)
}

/// Round a decimal to `dp` places and convert it to `f64`.
pub fn round_fixed(value: Decimal, dp: u32) -> Result<f64, QueryError> {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
        .to_f64()
        .ok_or_else(|| QueryError::NumericOverflow {
            value: value.to_string(),
        })
}

/// `numerator / denominator` rounded to `dp` places.
///
/// `operation` names the computation in the `EmptyDataset` error raised for
/// a zero denominator.
pub fn ratio(numerator: u64, denominator: u64, dp: u32, operation: &str) -> Result<f64, QueryError> {
    round_fixed(quotient(numerator, denominator, operation)?, dp)
}

/// `numerator / denominator × 100` rounded to `dp` places.
pub fn percentage(numerator: u64, denominator: u64, dp: u32, operation: &str) -> Result<f64, QueryError> {
    let q = quotient(numerator, denominator, operation)?;
    round_fixed(q * Decimal::ONE_HUNDRED, dp)
}

/// Arithmetic mean of two integers, exact before rounding.
pub fn midpoint(a: u64, b: u64, dp: u32) -> Result<f64, QueryError> {
    let sum = Decimal::from(a) + Decimal::from(b);
    round_fixed(sum / Decimal::TWO, dp)
}

fn quotient(numerator: u64, denominator: u64, operation: &str) -> Result<Decimal, QueryError> {
    if denominator == 0 {
        return Err(QueryError::empty_dataset(operation));
    }
    Decimal::from(numerator)
        .checked_div(Decimal::from(denominator))
        .ok_or_else(|| QueryError::NumericOverflow {
            value: numerator.to_string(),
        })
}
