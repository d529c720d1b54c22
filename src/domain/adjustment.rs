// ============================================================================
// Ad-Hoc Adjustments
// Signed price modifiers tied to a named business concept
// ============================================================================

use crate::numeric::ToDecimal;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry unit an adjustment bills by.
///
/// Adjustments are always sized by the item's geometry; there is no flat
/// variant, that is what a fixed service is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdjustmentUnit {
    /// Square meters
    Sqm,
    /// Linear meters
    Ml,
}

/// Direction of an adjustment: a surcharge adds, a discount subtracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdjustmentSign {
    Positive,
    Negative,
}

impl AdjustmentSign {
    /// Apply the direction to a computed amount.
    pub fn apply(&self, amount: Decimal) -> Decimal {
        match self {
            AdjustmentSign::Positive => amount,
            AdjustmentSign::Negative => -amount,
        }
    }
}

/// One ad-hoc price modifier, independent of the services catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Adjustment {
    /// Free-text label shown on the quote (e.g. "difficult access")
    pub concept: String,
    pub unit: AdjustmentUnit,
    pub sign: AdjustmentSign,
    /// Rate per unit; always non-negative, the sign carries the direction
    pub value: Decimal,
}

impl Adjustment {
    pub fn new(
        concept: impl Into<String>,
        unit: AdjustmentUnit,
        sign: AdjustmentSign,
        value: impl ToDecimal,
    ) -> Self {
        Self {
            concept: concept.into(),
            unit,
            sign,
            value: value.to_decimal(),
        }
    }

    /// An adjustment that increases the item price
    pub fn surcharge(concept: impl Into<String>, unit: AdjustmentUnit, value: impl ToDecimal) -> Self {
        Self::new(concept, unit, AdjustmentSign::Positive, value)
    }

    /// An adjustment that reduces the item price
    pub fn discount(concept: impl Into<String>, unit: AdjustmentUnit, value: impl ToDecimal) -> Self {
        Self::new(concept, unit, AdjustmentSign::Negative, value)
    }
}
