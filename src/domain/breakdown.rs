// ============================================================================
// Price Breakdown
// The itemized result of one quote-item calculation
// ============================================================================

use super::{BillingUnit, ServiceId};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One priced service on the breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceLine {
    pub service_id: ServiceId,
    pub unit: BillingUnit,
    /// Final billable quantity after overrides and minimum floors
    pub quantity: Decimal,
    pub amount: Decimal,
}

/// One signed adjustment on the breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdjustmentLine {
    pub concept: String,
    /// Already signed: discounts are negative
    pub amount: Decimal,
}

/// Fully-rounded price breakdown for one quote item.
///
/// Every amount is rounded half-up to two decimal places; callers persist
/// and display it without rounding again. Constructed fresh per calculation,
/// it carries no identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceBreakdown {
    /// Profile cost (with color surcharge) plus glass cost
    pub dimensional_price: Decimal,

    /// Accessory kit cost (with color surcharge); zero when not included
    pub accessory_price: Decimal,

    /// Present only when a non-default color was priced
    pub color_surcharge_percentage: Option<Decimal>,

    /// Surcharge amount on the profile portion; present only alongside the
    /// percentage
    pub color_surcharge_amount: Option<Decimal>,

    pub services: Vec<ServiceLine>,
    pub adjustments: Vec<AdjustmentLine>,

    /// Sum of all components above
    pub subtotal: Decimal,
}

impl PriceBreakdown {
    /// Sum of all service amounts.
    pub fn services_total(&self) -> Decimal {
        self.services.iter().map(|line| line.amount).sum()
    }

    /// Sum of all signed adjustment amounts. Negative when discounts
    /// outweigh surcharges.
    pub fn adjustments_total(&self) -> Decimal {
        self.adjustments.iter().map(|line| line.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let breakdown = PriceBreakdown {
            dimensional_price: Decimal::from(1000),
            accessory_price: Decimal::ZERO,
            color_surcharge_percentage: None,
            color_surcharge_amount: None,
            services: vec![
                ServiceLine {
                    service_id: ServiceId::new(),
                    unit: BillingUnit::Sqm,
                    quantity: Decimal::ONE,
                    amount: Decimal::from(500),
                },
                ServiceLine {
                    service_id: ServiceId::new(),
                    unit: BillingUnit::Unit,
                    quantity: Decimal::ONE,
                    amount: Decimal::from(30),
                },
            ],
            adjustments: vec![
                AdjustmentLine {
                    concept: "transport".to_string(),
                    amount: Decimal::from(120),
                },
                AdjustmentLine {
                    concept: "showroom batch".to_string(),
                    amount: Decimal::from(-200),
                },
            ],
            subtotal: Decimal::from(1450),
        };

        assert_eq!(breakdown.services_total(), Decimal::from(530));
        assert_eq!(breakdown.adjustments_total(), Decimal::from(-80));
    }

    #[test]
    fn test_empty_totals() {
        let breakdown = PriceBreakdown {
            dimensional_price: Decimal::from(1000),
            accessory_price: Decimal::ZERO,
            color_surcharge_percentage: None,
            color_surcharge_amount: None,
            services: Vec::new(),
            adjustments: Vec::new(),
            subtotal: Decimal::from(1000),
        };

        assert_eq!(breakdown.services_total(), Decimal::ZERO);
        assert_eq!(breakdown.adjustments_total(), Decimal::ZERO);
    }
}
