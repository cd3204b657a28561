//! Length conversion rules.
//!
//! The length graph is fully connected: every ordered pair of the five units
//! has its own entry. Factors are fixed decimal approximations (1 meter =
//! 3.28084 feet), so opposite directions are not exact reciprocals of each
//! other unless they reuse the same constant.

use super::table::ConverterFn;
use super::units::Unit;

/// The directed length rules registered in the conversion table.
pub(super) const RULES: [(Unit, Unit, ConverterFn); 20] = [
    (Unit::Meters, Unit::Kilometers, meters_to_kilometers),
    (Unit::Meters, Unit::Feet, meters_to_feet),
    (Unit::Meters, Unit::Yards, meters_to_yards),
    (Unit::Meters, Unit::Miles, meters_to_miles),
    (Unit::Kilometers, Unit::Meters, kilometers_to_meters),
    (Unit::Kilometers, Unit::Feet, kilometers_to_feet),
    (Unit::Kilometers, Unit::Yards, kilometers_to_yards),
    (Unit::Kilometers, Unit::Miles, kilometers_to_miles),
    (Unit::Feet, Unit::Meters, feet_to_meters),
    (Unit::Feet, Unit::Kilometers, feet_to_kilometers),
    (Unit::Feet, Unit::Yards, feet_to_yards),
    (Unit::Feet, Unit::Miles, feet_to_miles),
    (Unit::Yards, Unit::Meters, yards_to_meters),
    (Unit::Yards, Unit::Kilometers, yards_to_kilometers),
    (Unit::Yards, Unit::Feet, yards_to_feet),
    (Unit::Yards, Unit::Miles, yards_to_miles),
    (Unit::Miles, Unit::Meters, miles_to_meters),
    (Unit::Miles, Unit::Kilometers, miles_to_kilometers),
    (Unit::Miles, Unit::Feet, miles_to_feet),
    (Unit::Miles, Unit::Yards, miles_to_yards),
];

fn meters_to_kilometers(m: f64) -> f64 {
    m / 1000.0
}

fn meters_to_feet(m: f64) -> f64 {
    m * 3.28084
}

fn meters_to_yards(m: f64) -> f64 {
    m * 1.09361
}

fn meters_to_miles(m: f64) -> f64 {
    m * 0.000621371
}

fn kilometers_to_meters(k: f64) -> f64 {
    k * 1000.0
}

fn kilometers_to_feet(k: f64) -> f64 {
    k * 3280.84
}

fn kilometers_to_yards(k: f64) -> f64 {
    k * 1093.61
}

fn kilometers_to_miles(k: f64) -> f64 {
    k * 0.621371
}

fn feet_to_meters(f: f64) -> f64 {
    f / 3.28084
}

fn feet_to_kilometers(f: f64) -> f64 {
    f / 3280.84
}

fn feet_to_yards(f: f64) -> f64 {
    f / 3.0
}

fn feet_to_miles(f: f64) -> f64 {
    f / 5280.0
}

fn yards_to_meters(y: f64) -> f64 {
    y / 1.09361
}

fn yards_to_kilometers(y: f64) -> f64 {
    y / 1093.61
}

fn yards_to_feet(y: f64) -> f64 {
    y * 3.0
}

fn yards_to_miles(y: f64) -> f64 {
    y / 1760.0
}

fn miles_to_meters(m: f64) -> f64 {
    m * 1609.34
}

fn miles_to_kilometers(m: f64) -> f64 {
    m * 1.60934
}

fn miles_to_feet(m: f64) -> f64 {
    m * 5280.0
}

fn miles_to_yards(m: f64) -> f64 {
    m * 1760.0
}
