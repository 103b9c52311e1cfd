// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging

use std::sync::Arc;
use trade_calculator::prelude::*;

fn print_values(label: &str, values: &FieldValues) {
    println!(
        "  {:<28} metal: {:>10} | keys: {:>8} | currency: {:>10}",
        label, values.metal, values.keys, values.currency
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Trade Calculator Example ===\n");

    let mut calculator = CalculatorBuilder::new()
        .with_rates(RateConfig::standard())
        .build(Arc::new(LoggingEventHandler))
        .expect("standard rates are valid");

    let summary = calculator.rate_summary();
    println!(
        "Rates: 1 key = {} currency = {} metal, 1 metal = {} currency\n",
        summary.price_per_key_display(),
        summary.units_per_key_display(),
        summary.price_per_unit_display()
    );

    println!("Editing fields...");
    print_values("metal = 56", &calculator.on_field_edit(Field::Metal, "56"));
    print_values("keys = 2", &calculator.on_field_edit(Field::Keys, "2"));
    print_values(
        "currency = 1,650",
        &calculator.on_field_edit(Field::Currency, "1,650"),
    );
    print_values(
        "currency = abc",
        &calculator.on_field_edit(Field::Currency, "abc"),
    );

    println!("\nQuick-fill presets...");
    for preset in calculator.presets() {
        let values = calculator
            .apply_preset(&preset.label)
            .expect("preset comes from the calculator");
        print_values(&preset.label, &values);
    }

    println!("\nChanging rates with metal active...");
    print_values(
        "1 key = 2,800 / 60 metal",
        &calculator.on_rate_config_change(RateConfig::new(2800.0, 60.0)),
    );
    print_values(
        "units per key = 0",
        &calculator.on_rate_config_change(RateConfig::new(2800.0, 0.0)),
    );

    println!("\nClearing...");
    print_values("clear", &calculator.on_clear());
    println!("  active field: {:?}", calculator.active_field());
}
