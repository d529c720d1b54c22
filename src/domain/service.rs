// ============================================================================
// Service Charges
// Billable operations (cutting, tempering, installation) attached to an item
// ============================================================================

use crate::numeric::ToDecimal;
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceId(Uuid);

impl ServiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ServiceId {
    fn default() -> Self {
        Self::new()
    }
}

/// How a service bills against the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServiceKind {
    /// One flat charge per item, regardless of size
    Fixed,
    /// Billed by glass/item area
    Area,
    /// Billed by item perimeter
    Perimeter,
}

/// The unit the billable quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BillingUnit {
    /// A single unit (fixed services)
    Unit,
    /// Square meters
    Sqm,
    /// Linear meters
    Ml,
}

// ============================================================================
// Service Charge
// ============================================================================

/// One billable operation attached to a quote item, with its rate and
/// quantity rules resolved from the services catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceCharge {
    pub service_id: ServiceId,
    pub kind: ServiceKind,
    pub unit: BillingUnit,

    /// Price per billing unit
    pub rate: Decimal,

    /// Floor quantity for area/perimeter services. Ignored for fixed ones,
    /// so callers can attach it unconditionally.
    pub minimum_billing_unit: Option<Decimal>,

    /// Explicit quantity replacing the geometry-derived one
    pub quantity_override: Option<Decimal>,
}

impl ServiceCharge {
    pub fn new(
        service_id: ServiceId,
        kind: ServiceKind,
        unit: BillingUnit,
        rate: impl ToDecimal,
    ) -> Self {
        Self {
            service_id,
            kind,
            unit,
            rate: rate.to_decimal(),
            minimum_billing_unit: None,
            quantity_override: None,
        }
    }

    /// A flat-rate service billed once per item
    pub fn fixed(service_id: ServiceId, rate: impl ToDecimal) -> Self {
        Self::new(service_id, ServiceKind::Fixed, BillingUnit::Unit, rate)
    }

    /// A service billed by square meter
    pub fn area(service_id: ServiceId, rate: impl ToDecimal) -> Self {
        Self::new(service_id, ServiceKind::Area, BillingUnit::Sqm, rate)
    }

    /// A service billed by linear meter of perimeter
    pub fn perimeter(service_id: ServiceId, rate: impl ToDecimal) -> Self {
        Self::new(service_id, ServiceKind::Perimeter, BillingUnit::Ml, rate)
    }

    /// Builder method: set the minimum billable quantity
    pub fn with_minimum(mut self, minimum: impl ToDecimal) -> Self {
        self.minimum_billing_unit = Some(minimum.to_decimal());
        self
    }

    /// Builder method: replace the computed quantity outright
    pub fn with_quantity_override(mut self, quantity: impl ToDecimal) -> Self {
        self.quantity_override = Some(quantity.to_decimal());
        self
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, ServiceKind::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_id_roundtrip() {
        let uuid = Uuid::new_v4();
        let id = ServiceId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_ne!(ServiceId::new(), ServiceId::new());
    }

    #[test]
    fn test_preset_constructors() {
        let id = ServiceId::new();

        let cutting = ServiceCharge::area(id, 50_000);
        assert_eq!(cutting.kind, ServiceKind::Area);
        assert_eq!(cutting.unit, BillingUnit::Sqm);
        assert!(!cutting.is_fixed());

        let sealing = ServiceCharge::perimeter(id, 1200);
        assert_eq!(sealing.unit, BillingUnit::Ml);

        let handling = ServiceCharge::fixed(id, 3000);
        assert_eq!(handling.unit, BillingUnit::Unit);
        assert!(handling.is_fixed());
    }

    #[test]
    fn test_builder_methods() {
        let service = ServiceCharge::area(ServiceId::new(), 50_000)
            .with_minimum(1)
            .with_quantity_override(Decimal::new(25, 2));

        assert_eq!(service.minimum_billing_unit, Some(Decimal::ONE));
        assert_eq!(service.quantity_override, Some(Decimal::new(25, 2)));
    }
}
