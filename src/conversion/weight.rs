//! Weight conversion rules.
//!
//! Like length, the weight graph is fully connected with an explicit entry
//! per ordered pair. The metric/imperial factors are truncated decimal
//! constants, so a round trip such as grams -> ounces -> grams is only
//! approximately the identity.

use super::table::ConverterFn;
use super::units::Unit;

/// The directed weight rules registered in the conversion table.
pub(super) const RULES: [(Unit, Unit, ConverterFn); 20] = [
    (Unit::Milligrams, Unit::Grams, milligrams_to_grams),
    (Unit::Milligrams, Unit::Kilograms, milligrams_to_kilograms),
    (Unit::Milligrams, Unit::Ounces, milligrams_to_ounces),
    (Unit::Milligrams, Unit::Pounds, milligrams_to_pounds),
    (Unit::Grams, Unit::Milligrams, grams_to_milligrams),
    (Unit::Grams, Unit::Kilograms, grams_to_kilograms),
    (Unit::Grams, Unit::Ounces, grams_to_ounces),
    (Unit::Grams, Unit::Pounds, grams_to_pounds),
    (Unit::Kilograms, Unit::Milligrams, kilograms_to_milligrams),
    (Unit::Kilograms, Unit::Grams, kilograms_to_grams),
    (Unit::Kilograms, Unit::Ounces, kilograms_to_ounces),
    (Unit::Kilograms, Unit::Pounds, kilograms_to_pounds),
    (Unit::Ounces, Unit::Milligrams, ounces_to_milligrams),
    (Unit::Ounces, Unit::Grams, ounces_to_grams),
    (Unit::Ounces, Unit::Kilograms, ounces_to_kilograms),
    (Unit::Ounces, Unit::Pounds, ounces_to_pounds),
    (Unit::Pounds, Unit::Milligrams, pounds_to_milligrams),
    (Unit::Pounds, Unit::Grams, pounds_to_grams),
    (Unit::Pounds, Unit::Kilograms, pounds_to_kilograms),
    (Unit::Pounds, Unit::Ounces, pounds_to_ounces),
];

fn milligrams_to_grams(mg: f64) -> f64 {
    mg / 1000.0
}

fn milligrams_to_kilograms(mg: f64) -> f64 {
    mg / 1_000_000.0
}

fn milligrams_to_ounces(mg: f64) -> f64 {
    mg * 0.000035274
}

fn milligrams_to_pounds(mg: f64) -> f64 {
    mg * 0.00000220462
}

fn grams_to_milligrams(g: f64) -> f64 {
    g * 1000.0
}

fn grams_to_kilograms(g: f64) -> f64 {
    g / 1000.0
}

fn grams_to_ounces(g: f64) -> f64 {
    g * 0.035274
}

fn grams_to_pounds(g: f64) -> f64 {
    g * 0.00220462
}

fn kilograms_to_milligrams(kg: f64) -> f64 {
    kg * 1_000_000.0
}

fn kilograms_to_grams(kg: f64) -> f64 {
    kg * 1000.0
}

fn kilograms_to_ounces(kg: f64) -> f64 {
    kg * 35.274
}

fn kilograms_to_pounds(kg: f64) -> f64 {
    kg * 2.20462
}

fn ounces_to_milligrams(oz: f64) -> f64 {
    oz * 28349.52
}

fn ounces_to_grams(oz: f64) -> f64 {
    oz * 28.3495
}

fn ounces_to_kilograms(oz: f64) -> f64 {
    oz * 0.02835
}

fn ounces_to_pounds(oz: f64) -> f64 {
    oz * 0.0625
}

fn pounds_to_milligrams(lb: f64) -> f64 {
    lb * 453592.4
}

fn pounds_to_grams(lb: f64) -> f64 {
    lb * 453.5924
}

fn pounds_to_kilograms(lb: f64) -> f64 {
    lb * 0.453592
}

fn pounds_to_ounces(lb: f64) -> f64 {
    lb * 16.0
}
