//! Temperature conversion rules.
//!
//! Temperature conversions are affine rather than multiplicative, so each
//! direction is its own formula. Only the six directed pairs below are
//! defined; same-unit conversions are handled by the identity short-circuit
//! in the dispatch layer and have no table entries.

use super::table::ConverterFn;
use super::units::Unit;

/// The directed temperature rules registered in the conversion table.
pub(super) const RULES: [(Unit, Unit, ConverterFn); 6] = [
    (Unit::Celsius, Unit::Fahrenheit, celsius_to_fahrenheit),
    (Unit::Celsius, Unit::Kelvin, celsius_to_kelvin),
    (Unit::Fahrenheit, Unit::Celsius, fahrenheit_to_celsius),
    (Unit::Fahrenheit, Unit::Kelvin, fahrenheit_to_kelvin),
    (Unit::Kelvin, Unit::Celsius, kelvin_to_celsius),
    (Unit::Kelvin, Unit::Fahrenheit, kelvin_to_fahrenheit),
];

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f + 459.67) * 5.0 / 9.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    k * 9.0 / 5.0 - 459.67
}
