// ============================================================================
// Catalog Pricing Inputs
// Immutable pricing data resolved from the profile and glass catalogs
// ============================================================================

use super::Dimensions;
use crate::numeric::ToDecimal;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-model pricing for a profile line, as resolved from the catalog at
/// calculation time.
///
/// The engine treats catalog data as immutable: repricing after a catalog
/// change means resolving a fresh snapshot and calling the engine again.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileModelPricing {
    /// Flat base price of the model, independent of size
    pub base_price: Decimal,

    /// Cost added per millimeter of width
    pub cost_per_mm_width: Decimal,

    /// Cost added per millimeter of height
    pub cost_per_mm_height: Decimal,

    /// Flat price of the model's accessory kit, when the model has one
    pub accessory_price: Option<Decimal>,
}

impl ProfileModelPricing {
    pub fn new(
        base_price: impl ToDecimal,
        cost_per_mm_width: impl ToDecimal,
        cost_per_mm_height: impl ToDecimal,
    ) -> Self {
        Self {
            base_price: base_price.to_decimal(),
            cost_per_mm_width: cost_per_mm_width.to_decimal(),
            cost_per_mm_height: cost_per_mm_height.to_decimal(),
            accessory_price: None,
        }
    }

    /// Builder method: set the accessory kit price
    pub fn with_accessory_price(mut self, price: impl ToDecimal) -> Self {
        self.accessory_price = Some(price.to_decimal());
        self
    }

    /// Base plus per-millimeter costs for the given dimensions, unrounded.
    pub fn cost_for(&self, dims: &Dimensions) -> Decimal {
        self.base_price
            + self.cost_per_mm_width * dims.width_mm
            + self.cost_per_mm_height * dims.height_mm
    }
}

/// Glass pricing with optional per-side discount allowances.
///
/// The allowances model the pane being smaller than the opening (frame
/// rebate); each side is reduced by its allowance before the billable area
/// is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlassPricing {
    pub price_per_sqm: Decimal,
    pub discount_width_mm: Option<Decimal>,
    pub discount_height_mm: Option<Decimal>,
}

impl GlassPricing {
    pub fn new(price_per_sqm: impl ToDecimal) -> Self {
        Self {
            price_per_sqm: price_per_sqm.to_decimal(),
            discount_width_mm: None,
            discount_height_mm: None,
        }
    }

    /// Builder method: set both per-side allowances
    pub fn with_discounts(mut self, width_mm: impl ToDecimal, height_mm: impl ToDecimal) -> Self {
        self.discount_width_mm = Some(width_mm.to_decimal());
        self.discount_height_mm = Some(height_mm.to_decimal());
        self
    }

    /// Dimensions actually billed for glass: each side less its allowance,
    /// floored at zero.
    pub fn billable_dimensions(&self, dims: &Dimensions) -> Dimensions {
        dims.less_discount(self.discount_width_mm, self.discount_height_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_cost_for() {
        let profile = ProfileModelPricing::new(10_000, 5, 5);
        let dims = Dimensions::new(1000, 1000);
        assert_eq!(profile.cost_for(&dims), Decimal::from(20_000));

        let dims = Dimensions::new(100, 100);
        assert_eq!(profile.cost_for(&dims), Decimal::from(11_000));
    }

    #[test]
    fn test_profile_cost_zero_dimensions() {
        let profile = ProfileModelPricing::new(10_000, 5, 5);
        let dims = Dimensions::new(0, 0);
        assert_eq!(profile.cost_for(&dims), Decimal::from(10_000));
    }

    #[test]
    fn test_accessory_price_builder() {
        let profile = ProfileModelPricing::new(1000, 1, 1).with_accessory_price(500);
        assert_eq!(profile.accessory_price, Some(Decimal::from(500)));
    }

    #[test]
    fn test_glass_billable_dimensions() {
        let glass = GlassPricing::new(100_000).with_discounts(50, 50);
        let dims = Dimensions::new(1000, 1000);
        let billable = glass.billable_dimensions(&dims);
        assert_eq!(billable.width_mm, Decimal::from(950));
        assert_eq!(billable.area_sqm(), Decimal::new(9025, 4));
    }

    #[test]
    fn test_glass_without_discounts() {
        let glass = GlassPricing::new(100_000);
        let dims = Dimensions::new(1000, 1000);
        assert_eq!(glass.billable_dimensions(&dims), dims);
    }
}
