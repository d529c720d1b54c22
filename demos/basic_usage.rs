// ============================================================================
// Basic Usage Example
// ============================================================================

use pricing_engine::numeric::parse_decimal;
use pricing_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Pricing Engine Example ===\n");

    // Pricing data as it would arrive from the catalog service
    let glass_price = parse_decimal("100000").expect("valid catalog price");

    let item = QuoteItemSpec::new(
        Dimensions::new(1000, 1000),
        ProfileModelPricing::new(10_000, 5, 5).with_accessory_price(4500),
    )
    .with_glass(GlassPricing::new(glass_price).with_discounts(50, 50))
    .with_color_surcharge(15)
    .with_accessory()
    .with_service(ServiceCharge::area(ServiceId::new(), 50_000).with_minimum(1))
    .with_service(ServiceCharge::fixed(ServiceId::new(), 12_000))
    .with_adjustment(Adjustment::discount("winter campaign", AdjustmentUnit::Sqm, 5000));

    // The boundary layer validates before pricing; the engine itself never
    // rejects numerically weird input
    item.validate().expect("catalog data is well-formed");

    let breakdown = calculate_price_item(&item);

    println!("Dimensional price: {}", breakdown.dimensional_price);
    println!("Accessory price:   {}", breakdown.accessory_price);

    if let (Some(pct), Some(amount)) = (
        breakdown.color_surcharge_percentage,
        breakdown.color_surcharge_amount,
    ) {
        println!("Color surcharge:   {} ({}%)", amount, pct);
    }

    println!("\nServices:");
    for line in &breakdown.services {
        println!("  {} {:?} = {}", line.quantity, line.unit, line.amount);
    }

    println!("\nAdjustments:");
    for line in &breakdown.adjustments {
        println!("  {}: {}", line.concept, line.amount);
    }

    println!("\nSubtotal: {}", breakdown.subtotal);
}
