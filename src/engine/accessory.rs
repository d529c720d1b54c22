// ============================================================================
// Accessory Price
// Conditional flat accessory cost under the color surcharge
// ============================================================================

use crate::numeric::round_money;
use rust_decimal::Decimal;

/// Accessory kit cost for one item.
///
/// The hardware is color-matched to the profile, so it carries the same
/// surcharge multiplier as the profile cost. Excluded or unpriced kits cost
/// nothing.
pub fn accessory_price(
    include_accessory: bool,
    catalog_price: Option<Decimal>,
    surcharge_multiplier: Decimal,
) -> Decimal {
    match catalog_price {
        Some(price) if include_accessory => round_money(price * surcharge_multiplier),
        _ => Decimal::ZERO,
    }
}
