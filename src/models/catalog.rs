//! Category and unit catalog exposed to front ends.
//!
//! The default from/to pair is the selection a front end should present
//! before the user has picked units. Choosing defaults is calling-layer
//! policy; the engine itself knows nothing about it.

use serde::{Deserialize, Serialize};

use crate::conversion::{Unit, UnitCategory};

/// The units and default selection for a single category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUnits {
    /// The category being described.
    pub category: UnitCategory,
    /// The units belonging to the category, in presentation order.
    pub units: Vec<Unit>,
    /// The source unit selected by default.
    pub default_from: Unit,
    /// The target unit selected by default.
    pub default_to: Unit,
}

/// Returns the default from/to pair for a category.
///
/// # Example
///
/// ```
/// use unit_converter::conversion::{Unit, UnitCategory};
/// use unit_converter::models::default_pair;
///
/// assert_eq!(default_pair(UnitCategory::Length), (Unit::Meters, Unit::Feet));
/// ```
pub fn default_pair(category: UnitCategory) -> (Unit, Unit) {
    match category {
        UnitCategory::Temperature => (Unit::Celsius, Unit::Fahrenheit),
        UnitCategory::Length => (Unit::Meters, Unit::Feet),
        UnitCategory::Weight => (Unit::Grams, Unit::Ounces),
    }
}

/// Builds the full catalog of categories, units and default pairs.
pub fn catalog() -> Vec<CategoryUnits> {
    UnitCategory::ALL
        .into_iter()
        .map(|category| {
            let (default_from, default_to) = default_pair(category);
            CategoryUnits {
                category,
                units: category.units().to_vec(),
                default_from,
                default_to,
            }
        })
        .collect()
}
