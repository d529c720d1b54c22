// ============================================================================
// Price Calculator
// Aggregates the per-component costs into one itemized breakdown
// ============================================================================

use crate::domain::{PriceBreakdown, QuoteItemSpec};
use crate::engine::accessory::accessory_price;
use crate::engine::adjustments::adjustment_line;
use crate::engine::dimensional::{dimensional_cost, surcharge_multiplier};
use crate::engine::services::service_line;
use crate::numeric::round_money;
use rust_decimal::Decimal;

/// Price one quote item.
///
/// Pure and synchronous: the result is fully determined by the input, every
/// returned amount is already rounded, and numerically weird but well-typed
/// input (negative dimensions, discounts larger than the pane) degrades to
/// zero instead of failing. Safe to call concurrently from any number of
/// pricing requests.
pub fn calculate_price_item(item: &QuoteItemSpec) -> PriceBreakdown {
    let dims = item.dimensions.clamped();
    let multiplier = surcharge_multiplier(item.color_surcharge_pct);

    // Surcharge-eligible bucket: profile and accessory.
    let dimensional = dimensional_cost(
        &dims,
        &item.profile,
        item.glass.as_ref(),
        item.color_surcharge_pct,
    );
    let accessory = accessory_price(
        item.include_accessory,
        item.profile.accessory_price,
        multiplier,
    );

    // Surcharge-exempt bucket: services and adjustments. Glass is already
    // exempt inside the dimensional cost.
    let services: Vec<_> = item
        .services
        .iter()
        .map(|service| service_line(service, &dims))
        .collect();
    let adjustments: Vec<_> = item
        .adjustments
        .iter()
        .map(|adjustment| adjustment_line(adjustment, &dims))
        .collect();

    let services_total: Decimal = services.iter().map(|line| line.amount).sum();
    let adjustments_total: Decimal = adjustments.iter().map(|line| line.amount).sum();

    let subtotal = round_money(dimensional.total + accessory + services_total + adjustments_total);

    tracing::debug!(
        dimensional = %dimensional.total,
        accessory = %accessory,
        services = %services_total,
        adjustments = %adjustments_total,
        subtotal = %subtotal,
        "priced quote item"
    );

    let has_surcharge = item.color_surcharge_pct > Decimal::ZERO;

    PriceBreakdown {
        dimensional_price: dimensional.total,
        accessory_price: accessory,
        color_surcharge_percentage: has_surcharge.then_some(item.color_surcharge_pct),
        color_surcharge_amount: has_surcharge.then_some(dimensional.color_surcharge_amount),
        services,
        adjustments,
        subtotal,
    }
}
