// ============================================================================
// Item Dimensions
// Width/height value object and the geometry derived from it
// ============================================================================

use crate::numeric::{mm_to_meters, ToDecimal};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height of a quote item, in millimeters.
///
/// Dimensions come straight from the cart payload and may be negative there;
/// the engine clamps them once, up front, via [`Dimensions::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width_mm: Decimal,
    pub height_mm: Decimal,
}

impl Dimensions {
    pub fn new(width_mm: impl ToDecimal, height_mm: impl ToDecimal) -> Self {
        Self {
            width_mm: width_mm.to_decimal(),
            height_mm: height_mm.to_decimal(),
        }
    }

    /// Floor negative sides at zero.
    ///
    /// Negative measurements never reach the cost formulas; a clamped zero
    /// side prices like a zero-sized item rather than failing.
    pub fn clamped(&self) -> Self {
        Self {
            width_mm: self.width_mm.max(Decimal::ZERO),
            height_mm: self.height_mm.max(Decimal::ZERO),
        }
    }

    /// Subtract a per-side allowance from each dimension, flooring at zero.
    pub fn less_discount(
        &self,
        discount_width_mm: Option<Decimal>,
        discount_height_mm: Option<Decimal>,
    ) -> Self {
        Self {
            width_mm: (self.width_mm - discount_width_mm.to_decimal()).max(Decimal::ZERO),
            height_mm: (self.height_mm - discount_height_mm.to_decimal()).max(Decimal::ZERO),
        }
    }

    pub fn width_m(&self) -> Decimal {
        mm_to_meters(self.width_mm)
    }

    pub fn height_m(&self) -> Decimal {
        mm_to_meters(self.height_mm)
    }

    /// Area in square meters, unrounded.
    pub fn area_sqm(&self) -> Decimal {
        self.width_m() * self.height_m()
    }

    /// Perimeter in linear meters, unrounded.
    pub fn perimeter_m(&self) -> Decimal {
        (self.width_m() + self.height_m()) * Decimal::TWO
    }
}
