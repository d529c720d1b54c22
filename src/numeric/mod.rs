// ============================================================================
// Numeric Module
// Exact decimal arithmetic helpers for monetary calculations
// ============================================================================
//
// This module provides:
// - Half-up rounding at the documented scales (money, quantity, override)
// - Millimeter to meter conversion with exact decimal division
// - ToDecimal: conversions from caller-side value representations
//
// Design principles:
// - No floating-point money math anywhere
// - Rounding happens only at documented boundaries, never mid-formula
// - The calculation path is infallible; errors exist only at the parse boundary

mod decimal;
mod errors;

pub use decimal::{
    mm_to_meters, parse_decimal, round_half_up, round_money, ToDecimal, FIXED_OVERRIDE_SCALE,
    MONEY_SCALE, QUANTITY_SCALE,
};
pub use errors::{NumericError, NumericResult};
