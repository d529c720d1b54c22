// ============================================================================
// Quote Item Specification
// The fully-resolved input for one price calculation
// ============================================================================

use super::{Adjustment, Dimensions, GlassPricing, ProfileModelPricing, ServiceCharge};
use crate::numeric::ToDecimal;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the engine needs to price one window or door position.
///
/// All pricing fields arrive fully resolved: the catalog lookups, the
/// model-color assignment and the service definitions are the caller's
/// concern. The engine only computes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteItemSpec {
    pub dimensions: Dimensions,
    pub profile: ProfileModelPricing,
    pub glass: Option<GlassPricing>,

    /// Color surcharge percentage (0-100). Zero means the default color.
    pub color_surcharge_pct: Decimal,

    /// Whether the model's accessory kit is included in the position
    pub include_accessory: bool,

    pub services: Vec<ServiceCharge>,
    pub adjustments: Vec<Adjustment>,
}

impl QuoteItemSpec {
    pub fn new(dimensions: Dimensions, profile: ProfileModelPricing) -> Self {
        Self {
            dimensions,
            profile,
            glass: None,
            color_surcharge_pct: Decimal::ZERO,
            include_accessory: false,
            services: Vec::new(),
            adjustments: Vec::new(),
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Builder method: attach a glass choice
    pub fn with_glass(mut self, glass: GlassPricing) -> Self {
        self.glass = Some(glass);
        self
    }

    /// Builder method: set the color surcharge percentage
    pub fn with_color_surcharge(mut self, percentage: impl ToDecimal) -> Self {
        self.color_surcharge_pct = percentage.to_decimal();
        self
    }

    /// Builder method: include the model's accessory kit
    pub fn with_accessory(mut self) -> Self {
        self.include_accessory = true;
        self
    }

    /// Builder method: attach a billable service
    pub fn with_service(mut self, service: ServiceCharge) -> Self {
        self.services.push(service);
        self
    }

    /// Builder method: attach an ad-hoc adjustment
    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Pre-flight validation for the request boundary.
    ///
    /// The calculation itself never rejects numerically weird input (negative
    /// dimensions clamp, excessive discounts floor to zero); this exists so
    /// the surrounding service can surface catalog or payload mistakes before
    /// a quote is persisted. The engine never calls it.
    pub fn validate(&self) -> Result<(), String> {
        if self.color_surcharge_pct < Decimal::ZERO
            || self.color_surcharge_pct > Decimal::ONE_HUNDRED
        {
            return Err("Color surcharge percentage must be between 0 and 100".to_string());
        }

        if self.profile.base_price < Decimal::ZERO {
            return Err("Base price cannot be negative".to_string());
        }

        if self.profile.cost_per_mm_width < Decimal::ZERO
            || self.profile.cost_per_mm_height < Decimal::ZERO
        {
            return Err("Per-millimeter costs cannot be negative".to_string());
        }

        if let Some(accessory_price) = self.profile.accessory_price {
            if accessory_price < Decimal::ZERO {
                return Err("Accessory price cannot be negative".to_string());
            }
        }

        if let Some(glass) = &self.glass {
            if glass.price_per_sqm < Decimal::ZERO {
                return Err("Glass price per square meter cannot be negative".to_string());
            }
            if glass.discount_width_mm.unwrap_or_default() < Decimal::ZERO
                || glass.discount_height_mm.unwrap_or_default() < Decimal::ZERO
            {
                return Err("Glass discounts cannot be negative".to_string());
            }
        }

        for service in &self.services {
            if service.rate < Decimal::ZERO {
                return Err("Service rate cannot be negative".to_string());
            }
            if let Some(minimum) = service.minimum_billing_unit {
                if minimum < Decimal::ZERO {
                    return Err("Minimum billing unit cannot be negative".to_string());
                }
            }
            if let Some(quantity) = service.quantity_override {
                if quantity < Decimal::ZERO {
                    return Err("Quantity override cannot be negative".to_string());
                }
            }
        }

        for adjustment in &self.adjustments {
            if adjustment.concept.is_empty() {
                return Err("Adjustment concept cannot be empty".to_string());
            }
            if adjustment.value < Decimal::ZERO {
                return Err(
                    "Adjustment value cannot be negative; the sign carries the direction"
                        .to_string(),
                );
            }
        }

        Ok(())
    }
}
