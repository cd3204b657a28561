//! Unit categories and the units the engine supports.
//!
//! Both enumerations are closed sets fixed at build time. Their string form
//! is the lowercase token used as a table key and on the wire (for example
//! `"temperature"` or `"celsius"`).

use serde::{Deserialize, Serialize};

/// The category a conversion operates within.
///
/// Every supported [`Unit`] belongs to exactly one category, and conversions
/// are only defined between units of the same category.
///
/// # Example
///
/// ```
/// use unit_converter::conversion::UnitCategory;
///
/// assert_eq!(UnitCategory::Temperature.to_string(), "temperature");
/// assert_eq!(UnitCategory::from_token("length"), Some(UnitCategory::Length));
/// assert_eq!(UnitCategory::from_token("volume"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Temperature scales: celsius, fahrenheit, kelvin.
    Temperature,
    /// Length units: meters, kilometers, feet, yards, miles.
    Length,
    /// Weight units: milligrams, grams, kilograms, ounces, pounds.
    Weight,
}

impl UnitCategory {
    /// All supported categories, in presentation order.
    pub const ALL: [UnitCategory; 3] = [
        UnitCategory::Temperature,
        UnitCategory::Length,
        UnitCategory::Weight,
    ];

    /// Returns the lowercase token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Temperature => "temperature",
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
        }
    }

    /// Parses a lowercase token into a category.
    ///
    /// Returns `None` for anything outside the closed set; the token must
    /// match exactly (no trimming, no case folding).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "temperature" => Some(UnitCategory::Temperature),
            "length" => Some(UnitCategory::Length),
            "weight" => Some(UnitCategory::Weight),
            _ => None,
        }
    }

    /// Returns the units belonging to this category.
    ///
    /// # Example
    ///
    /// ```
    /// use unit_converter::conversion::{Unit, UnitCategory};
    ///
    /// let units = UnitCategory::Temperature.units();
    /// assert_eq!(units, &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin]);
    /// ```
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitCategory::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
            UnitCategory::Length => &[
                Unit::Meters,
                Unit::Kilometers,
                Unit::Feet,
                Unit::Yards,
                Unit::Miles,
            ],
            UnitCategory::Weight => &[
                Unit::Milligrams,
                Unit::Grams,
                Unit::Kilograms,
                Unit::Ounces,
                Unit::Pounds,
            ],
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of measurement, scoped to exactly one [`UnitCategory`].
///
/// # Example
///
/// ```
/// use unit_converter::conversion::{Unit, UnitCategory};
///
/// assert_eq!(Unit::Kelvin.category(), UnitCategory::Temperature);
/// assert_eq!(Unit::Pounds.to_string(), "pounds");
/// assert_eq!(Unit::from_token("miles"), Some(Unit::Miles));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
    /// Meters.
    Meters,
    /// Kilometers.
    Kilometers,
    /// Feet.
    Feet,
    /// Yards.
    Yards,
    /// Miles.
    Miles,
    /// Milligrams.
    Milligrams,
    /// Grams.
    Grams,
    /// Kilograms.
    Kilograms,
    /// Ounces.
    Ounces,
    /// Pounds.
    Pounds,
}

impl Unit {
    /// Returns the lowercase token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Feet => "feet",
            Unit::Yards => "yards",
            Unit::Miles => "miles",
            Unit::Milligrams => "milligrams",
            Unit::Grams => "grams",
            Unit::Kilograms => "kilograms",
            Unit::Ounces => "ounces",
            Unit::Pounds => "pounds",
        }
    }

    /// Parses a lowercase token into a unit.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "celsius" => Some(Unit::Celsius),
            "fahrenheit" => Some(Unit::Fahrenheit),
            "kelvin" => Some(Unit::Kelvin),
            "meters" => Some(Unit::Meters),
            "kilometers" => Some(Unit::Kilometers),
            "feet" => Some(Unit::Feet),
            "yards" => Some(Unit::Yards),
            "miles" => Some(Unit::Miles),
            "milligrams" => Some(Unit::Milligrams),
            "grams" => Some(Unit::Grams),
            "kilograms" => Some(Unit::Kilograms),
            "ounces" => Some(Unit::Ounces),
            "pounds" => Some(Unit::Pounds),
            _ => None,
        }
    }

    /// Returns the category this unit belongs to.
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => UnitCategory::Temperature,
            Unit::Meters | Unit::Kilometers | Unit::Feet | Unit::Yards | Unit::Miles => {
                UnitCategory::Length
            }
            Unit::Milligrams | Unit::Grams | Unit::Kilograms | Unit::Ounces | Unit::Pounds => {
                UnitCategory::Weight
            }
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
