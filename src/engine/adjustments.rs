// ============================================================================
// Adjustment Billing
// Signed quantity-times-rate lines for ad-hoc adjustments
// ============================================================================

use crate::domain::{Adjustment, AdjustmentLine, AdjustmentUnit, Dimensions};
use crate::numeric::{round_half_up, round_money, QUANTITY_SCALE};
use rust_decimal::Decimal;

/// Billable quantity for an adjustment, by the same area/perimeter formulas
/// as services. Adjustments have no fixed variant.
fn adjustment_quantity(unit: AdjustmentUnit, dims: &Dimensions) -> Decimal {
    match unit {
        AdjustmentUnit::Sqm => round_half_up(dims.area_sqm(), QUANTITY_SCALE),
        AdjustmentUnit::Ml => round_half_up(dims.perimeter_m(), QUANTITY_SCALE),
    }
}

/// One signed adjustment line.
pub fn adjustment_line(adjustment: &Adjustment, dims: &Dimensions) -> AdjustmentLine {
    let quantity = adjustment_quantity(adjustment.unit, dims);
    let amount = adjustment.sign.apply(quantity * adjustment.value);

    AdjustmentLine {
        concept: adjustment.concept.clone(),
        amount: round_money(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_surcharge() {
        let adjustment = Adjustment::surcharge("difficult access", AdjustmentUnit::Sqm, 500);
        let dims = Dimensions::new(1000, 1000);

        let line = adjustment_line(&adjustment, &dims);
        assert_eq!(line.concept, "difficult access");
        assert_eq!(line.amount, Decimal::from(500));
    }

    #[test]
    fn test_perimeter_discount_is_negative() {
        let adjustment = Adjustment::discount("showroom batch", AdjustmentUnit::Ml, 250);
        let dims = Dimensions::new(1000, 1000); // perimeter 4 ml

        let line = adjustment_line(&adjustment, &dims);
        assert_eq!(line.amount, Decimal::from(-1000));
    }

    #[test]
    fn test_amount_is_rounded() {
        // 0.11 sqm * 33.33 = 3.6663 -> 3.67
        let adjustment = Adjustment::surcharge("waste", AdjustmentUnit::Sqm, Decimal::new(3333, 2));
        let dims = Dimensions::new(333, 333);

        let line = adjustment_line(&adjustment, &dims);
        assert_eq!(line.amount, Decimal::new(367, 2));
    }

    #[test]
    fn test_zero_dimensions() {
        let adjustment = Adjustment::discount("anything", AdjustmentUnit::Sqm, 999);
        let dims = Dimensions::new(0, 0);

        let line = adjustment_line(&adjustment, &dims);
        assert_eq!(line.amount, Decimal::ZERO);
    }
}
