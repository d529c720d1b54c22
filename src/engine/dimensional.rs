// ============================================================================
// Dimensional Price
// Profile cost, color surcharge and glass cost for one item
// ============================================================================

use crate::domain::{Dimensions, GlassPricing, ProfileModelPricing};
use crate::numeric::round_money;
use rust_decimal::Decimal;

/// Cost components making up the dimensional price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionalCost {
    /// Profile cost before the color surcharge, unrounded
    pub profile_cost: Decimal,

    /// Surcharge amount on the profile portion, money-rounded
    pub color_surcharge_amount: Decimal,

    /// Glass cost, money-rounded; zero when no glass is billed
    pub glass_cost: Decimal,

    /// The dimensional price: profile with color plus glass, money-rounded
    pub total: Decimal,
}

/// Multiplier applied to surcharge-eligible costs: `1 + pct/100`.
pub fn surcharge_multiplier(percentage: Decimal) -> Decimal {
    Decimal::ONE + percentage / Decimal::ONE_HUNDRED
}

/// Glass cost for the discounted billable area.
///
/// Absent glass and a non-positive square-meter price both mean no glass is
/// billed, indistinguishable from a zero amount on purpose. The billable
/// area itself stays unrounded; only the resulting cost is rounded.
fn glass_cost(dims: &Dimensions, glass: Option<&GlassPricing>) -> Decimal {
    match glass {
        Some(glass) if glass.price_per_sqm > Decimal::ZERO => {
            let billable = glass.billable_dimensions(dims);
            round_money(billable.area_sqm() * glass.price_per_sqm)
        },
        _ => Decimal::ZERO,
    }
}

/// Profile, color and glass costs for one item.
///
/// The surcharge multiplies the profile cost only; the glass portion is
/// exempt and enters after the multiplier.
pub fn dimensional_cost(
    dims: &Dimensions,
    profile: &ProfileModelPricing,
    glass: Option<&GlassPricing>,
    color_surcharge_pct: Decimal,
) -> DimensionalCost {
    let profile_cost = profile.cost_for(dims);
    let profile_with_color = profile_cost * surcharge_multiplier(color_surcharge_pct);
    let glass_cost = glass_cost(dims, glass);

    DimensionalCost {
        profile_cost,
        color_surcharge_amount: round_money(profile_with_color - profile_cost),
        glass_cost,
        total: round_money(profile_with_color + glass_cost),
    }
}
