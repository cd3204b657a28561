//! The conversion table and its dispatch logic.
//!
//! The table is a flat, immutable mapping from `(category, from, to)` to a
//! pure rule function. It is fully populated by [`ConversionTable::new`] and
//! never mutated afterwards, so it can be shared across any number of
//! threads without locking.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

use super::units::{Unit, UnitCategory};
use super::{length, temperature, weight};

/// A pure directional conversion rule mapping a value in the source unit to
/// the equivalent value in the target unit.
pub type ConverterFn = fn(f64) -> f64;

/// Rounds a value to 2 decimal places, half away from zero.
///
/// This is the uniform rounding policy applied to every non-identity
/// conversion result.
///
/// # Example
///
/// ```
/// use unit_converter::conversion::round_to_hundredths;
///
/// assert_eq!(round_to_hundredths(3.5274), 3.53);
/// assert_eq!(round_to_hundredths(-3.5274), -3.53);
/// assert_eq!(round_to_hundredths(0.001), 0.0);
/// assert_eq!(round_to_hundredths(2.675), 2.68);
/// ```
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The immutable lookup table of supported conversions.
///
/// Maps `(category, from, to)` triples to rule functions. Absence of an
/// entry means the directed conversion is unsupported, not that it is the
/// identity; opposite directions are independent entries and are never
/// derived from each other.
///
/// # Example
///
/// ```
/// use unit_converter::conversion::{ConversionTable, Unit, UnitCategory};
///
/// let table = ConversionTable::new();
/// let result = table
///     .convert(UnitCategory::Temperature, Unit::Celsius, Unit::Fahrenheit, 0.0)
///     .unwrap();
/// assert_eq!(result, 32.0);
/// ```
pub struct ConversionTable {
    rules: HashMap<(UnitCategory, Unit, Unit), ConverterFn>,
}

impl ConversionTable {
    /// Builds the table with every supported directed conversion.
    pub fn new() -> Self {
        let mut rules: HashMap<(UnitCategory, Unit, Unit), ConverterFn> = HashMap::new();

        let categories: [(UnitCategory, &[(Unit, Unit, ConverterFn)]); 3] = [
            (UnitCategory::Temperature, &temperature::RULES),
            (UnitCategory::Length, &length::RULES),
            (UnitCategory::Weight, &weight::RULES),
        ];

        for (category, entries) in categories {
            for &(from, to, rule) in entries {
                rules.insert((category, from, to), rule);
            }
        }

        Self { rules }
    }

    /// Returns the number of directed conversions in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if the directed conversion has a table entry.
    ///
    /// Identity pairs are not stored, so `supports(cat, u, u)` is false even
    /// though [`convert`](Self::convert) accepts them.
    pub fn supports(&self, category: UnitCategory, from: Unit, to: Unit) -> bool {
        self.rules.contains_key(&(category, from, to))
    }

    /// Converts `value` from one unit to another within a category.
    ///
    /// When `from == to` the input is returned unchanged without touching
    /// the table. Otherwise the rule is looked up, applied, and the result
    /// rounded to 2 decimal places (half away from zero).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedConversion`] when the triple has no
    /// table entry, which includes units that do not belong to `category`.
    pub fn convert(
        &self,
        category: UnitCategory,
        from: Unit,
        to: Unit,
        value: f64,
    ) -> EngineResult<f64> {
        if from == to {
            return Ok(value);
        }

        let rule = self
            .rules
            .get(&(category, from, to))
            .ok_or_else(|| EngineError::unsupported(from.as_str(), to.as_str()))?;

        Ok(round_to_hundredths(rule(value)))
    }

    /// Converts `value` using raw string tokens for the category and units.
    ///
    /// This is the contract exposed to front ends: tokens are the lowercase
    /// literals used as table keys (`"temperature"`, `"celsius"`, ...).
    ///
    /// Token equality of `from` and `to` short-circuits to the identity
    /// before any token is parsed, so an unrecognized category or unit still
    /// succeeds when the two unit tokens are equal. Callers relying on
    /// validation must not depend on that case failing.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedConversion`] identifying the
    /// `(from, to)` pair when any token is unrecognized or the directed
    /// conversion has no entry.
    ///
    /// # Example
    ///
    /// ```
    /// use unit_converter::conversion::ConversionTable;
    ///
    /// let table = ConversionTable::new();
    /// assert_eq!(table.convert_tokens("length", "meters", "feet", 100.0).unwrap(), 328.08);
    /// assert!(table.convert_tokens("length", "meters", "fathoms", 1.0).is_err());
    /// ```
    pub fn convert_tokens(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: f64,
    ) -> EngineResult<f64> {
        if from == to {
            return Ok(value);
        }

        let (Some(category), Some(from_unit), Some(to_unit)) = (
            UnitCategory::from_token(category),
            Unit::from_token(from),
            Unit::from_token(to),
        ) else {
            return Err(EngineError::unsupported(from, to));
        };

        self.convert(category, from_unit, to_unit, value)
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::new()
    }
}
