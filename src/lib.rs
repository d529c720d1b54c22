// ============================================================================
// Pricing Engine Library
// Deterministic quote-item pricing for made-to-measure windows and doors
// ============================================================================

//! # Pricing Engine
//!
//! A deterministic price calculation engine for custom window and door quote
//! items: dimensions, profile model, glass choice, color, accessory kit,
//! catalog services and ad-hoc adjustments in; an itemized, fully-rounded
//! breakdown out.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** throughout, with half-up rounding only at
//!   documented boundaries (per-line amounts, never mid-formula)
//! - **Per-unit service billing** by area, perimeter or fixed quantity, with
//!   minimum-billing floors and explicit quantity overrides
//! - **Color surcharge scoping**: the percentage applies to profile and
//!   accessory costs, never to glass, services or adjustments
//! - **Pure and stateless**: no I/O, no shared state, safe to call
//!   concurrently from any number of pricing requests
//!
//! ## Example
//!
//! ```rust
//! use pricing_engine::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let item = QuoteItemSpec::new(
//!     Dimensions::new(1000, 1000),
//!     ProfileModelPricing::new(10_000, 5, 5),
//! )
//! .with_glass(GlassPricing::new(100_000).with_discounts(50, 50));
//!
//! let breakdown = calculate_price_item(&item);
//! assert_eq!(breakdown.dimensional_price, Decimal::from(110_250));
//! assert_eq!(breakdown.subtotal, Decimal::from(110_250));
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Adjustment, AdjustmentLine, AdjustmentSign, AdjustmentUnit, BillingUnit, Dimensions,
        GlassPricing, PriceBreakdown, ProfileModelPricing, QuoteItemSpec, ServiceCharge,
        ServiceId, ServiceKind, ServiceLine,
    };
    pub use crate::engine::calculate_price_item;
}
