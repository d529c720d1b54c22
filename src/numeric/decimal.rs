// ============================================================================
// Decimal Utilities
// Half-up rounding and unit conversion for monetary calculations
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, Error, RoundingStrategy};

/// Decimal places for monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Decimal places for billable quantities derived from geometry.
pub const QUANTITY_SCALE: u32 = 2;

/// Decimal places for explicit quantity overrides on fixed services.
pub const FIXED_OVERRIDE_SCALE: u32 = 4;

/// Round to `scale` decimal places, ties away from zero.
///
/// `0.005` rounds to `0.01` and `-0.005` to `-0.01` (not banker's rounding).
/// Already-rounded values pass through unchanged.
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a monetary amount to cents.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_SCALE)
}

/// Convert millimeters to meters with exact decimal division.
#[inline]
pub fn mm_to_meters(value_mm: Decimal) -> Decimal {
    value_mm / Decimal::ONE_THOUSAND
}

/// Parse a decimal from a string at the request boundary.
///
/// # Errors
/// - `InvalidInput` if the string is not a decimal number
/// - `PrecisionLoss` if it carries more fractional digits than representable
/// - `OutOfRange` if it exceeds the representable range
pub fn parse_decimal(s: &str) -> NumericResult<Decimal> {
    match Decimal::from_str_exact(s.trim()) {
        Ok(value) => Ok(value),
        Err(Error::Underflow) | Err(Error::ScaleExceedsMaximumPrecision(_)) => {
            Err(NumericError::PrecisionLoss)
        },
        Err(Error::ExceedsMaximumPossibleValue) | Err(Error::LessThanMinimumPossibleValue) => {
            Err(NumericError::OutOfRange)
        },
        Err(_) => Err(NumericError::InvalidInput),
    }
}

// ============================================================================
// Input Conversions
// ============================================================================

/// Conversion into the engine's exact decimal representation.
///
/// Pricing data arrives from several sources (catalog rows, request
/// payloads, test literals); everything funnels through this trait before
/// any arithmetic happens. Absent optionals default to zero.
pub trait ToDecimal {
    fn to_decimal(&self) -> Decimal;
}

impl ToDecimal for Decimal {
    #[inline]
    fn to_decimal(&self) -> Decimal {
        *self
    }
}

impl ToDecimal for i32 {
    #[inline]
    fn to_decimal(&self) -> Decimal {
        Decimal::from(*self)
    }
}

impl ToDecimal for i64 {
    #[inline]
    fn to_decimal(&self) -> Decimal {
        Decimal::from(*self)
    }
}

impl ToDecimal for u32 {
    #[inline]
    fn to_decimal(&self) -> Decimal {
        Decimal::from(*self)
    }
}

impl ToDecimal for u64 {
    #[inline]
    fn to_decimal(&self) -> Decimal {
        Decimal::from(*self)
    }
}

impl ToDecimal for f64 {
    /// Non-finite values cannot reach the engine through a validated
    /// boundary; they collapse to zero instead of panicking.
    #[inline]
    fn to_decimal(&self) -> Decimal {
        Decimal::from_f64(*self).unwrap_or_default()
    }
}

impl<T: ToDecimal> ToDecimal for Option<T> {
    #[inline]
    fn to_decimal(&self) -> Decimal {
        self.as_ref().map_or(Decimal::ZERO, ToDecimal::to_decimal)
    }
}

// ============================================================================
// Tests
// ============================================================================
