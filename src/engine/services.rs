// ============================================================================
// Service Billing
// Billable quantity and amount for each attached service
// ============================================================================

use crate::domain::{BillingUnit, Dimensions, ServiceCharge, ServiceLine};
use crate::numeric::{round_half_up, round_money, FIXED_OVERRIDE_SCALE, QUANTITY_SCALE};
use rust_decimal::Decimal;

/// Geometry-derived base quantity for a billing unit.
fn base_quantity(unit: BillingUnit, dims: &Dimensions) -> Decimal {
    match unit {
        BillingUnit::Unit => Decimal::ONE,
        BillingUnit::Sqm => round_half_up(dims.area_sqm(), QUANTITY_SCALE),
        BillingUnit::Ml => round_half_up(dims.perimeter_m(), QUANTITY_SCALE),
    }
}

/// Final billable quantity: geometry, then override, then minimum floor.
///
/// The floor never applies to fixed services; a minimum supplied on one is
/// silently ignored so callers can attach it unconditionally. Overrides on
/// fixed services keep four decimal places, everything else two.
pub fn billable_quantity(service: &ServiceCharge, dims: &Dimensions) -> Decimal {
    let mut quantity = base_quantity(service.unit, dims);

    if let Some(override_quantity) = service.quantity_override {
        let scale = if service.is_fixed() {
            FIXED_OVERRIDE_SCALE
        } else {
            QUANTITY_SCALE
        };
        quantity = round_half_up(override_quantity, scale);
    }

    if !service.is_fixed() {
        if let Some(minimum) = service.minimum_billing_unit {
            quantity = quantity.max(minimum);
        }
    }

    quantity
}

/// One priced service line.
pub fn service_line(service: &ServiceCharge, dims: &Dimensions) -> ServiceLine {
    let quantity = billable_quantity(service, dims);

    ServiceLine {
        service_id: service.service_id,
        unit: service.unit,
        quantity,
        amount: round_money(service.rate * quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceId;

    #[test]
    fn test_area_quantity_below_minimum_is_floored() {
        // 0.25 sqm computed, floored to the 1.0 minimum
        let service = ServiceCharge::area(ServiceId::new(), 50_000).with_minimum(1);
        let dims = Dimensions::new(500, 500);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::ONE);
        assert_eq!(line.amount, Decimal::from(50_000));
    }

    #[test]
    fn test_area_quantity_above_minimum_bills_geometry() {
        let service = ServiceCharge::area(ServiceId::new(), 50_000).with_minimum(1);
        let dims = Dimensions::new(2000, 2000);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::from(4));
        assert_eq!(line.amount, Decimal::from(200_000));
    }

    #[test]
    fn test_fixed_service_ignores_minimum() {
        // Callers may pass a minimum unconditionally; fixed services drop it
        let service = ServiceCharge::fixed(ServiceId::new(), 3000).with_minimum(5);

        for dims in [Dimensions::new(100, 100), Dimensions::new(5000, 5000)] {
            let line = service_line(&service, &dims);
            assert_eq!(line.quantity, Decimal::ONE);
            assert_eq!(line.amount, Decimal::from(3000));
        }
    }

    #[test]
    fn test_perimeter_quantity() {
        let service = ServiceCharge::perimeter(ServiceId::new(), 25);
        let dims = Dimensions::new(1200, 800);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::from(4));
        assert_eq!(line.amount, Decimal::from(100));
    }

    #[test]
    fn test_area_quantity_is_rounded() {
        // 0.333 * 0.333 = 0.110889 -> 0.11
        let service = ServiceCharge::area(ServiceId::new(), 100);
        let dims = Dimensions::new(333, 333);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::new(11, 2));
        assert_eq!(line.amount, Decimal::from(11));
    }

    #[test]
    fn test_fixed_override_keeps_four_decimals() {
        let service = ServiceCharge::fixed(ServiceId::new(), 10)
            .with_quantity_override(Decimal::new(212345, 5)); // 2.12345
        let dims = Dimensions::new(1000, 1000);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::new(21235, 4)); // 2.1235
        assert_eq!(line.amount, Decimal::new(2124, 2)); // 21.235 -> 21.24
    }

    #[test]
    fn test_area_override_rounds_to_two_decimals() {
        let service = ServiceCharge::area(ServiceId::new(), 1000)
            .with_quantity_override(Decimal::new(34567, 4)); // 3.4567
        let dims = Dimensions::new(1000, 1000);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::new(346, 2)); // 3.46
        assert_eq!(line.amount, Decimal::from(3460));
    }

    #[test]
    fn test_minimum_floor_applies_after_override() {
        let service = ServiceCharge::area(ServiceId::new(), 50_000)
            .with_minimum(1)
            .with_quantity_override(Decimal::new(5, 1)); // 0.5 overridden, still under minimum
        let dims = Dimensions::new(2000, 2000);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::ONE);
        assert_eq!(line.amount, Decimal::from(50_000));
    }

    #[test]
    fn test_zero_dimensions_bill_zero_geometry() {
        let service = ServiceCharge::area(ServiceId::new(), 50_000);
        let dims = Dimensions::new(0, 0);

        let line = service_line(&service, &dims);
        assert_eq!(line.quantity, Decimal::ZERO);
        assert_eq!(line.amount, Decimal::ZERO);
    }
}
