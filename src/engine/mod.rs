// ============================================================================
// Engine Module
// Per-component calculators and the aggregating price calculation
// ============================================================================

mod accessory;
mod adjustments;
mod calculator;
mod dimensional;
mod services;

pub use accessory::accessory_price;
pub use adjustments::adjustment_line;
pub use calculator::calculate_price_item;
pub use dimensional::{dimensional_cost, surcharge_multiplier, DimensionalCost};
pub use services::{billable_quantity, service_line};
