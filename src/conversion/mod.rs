//! The conversion engine.
//!
//! This module contains the unit enumeration, the immutable conversion
//! table, the dispatch logic that selects a rule for a `(category, from,
//! to)` triple, and the rounding policy applied uniformly to every result.
//! The engine is a stateless pure function over the table: no I/O, no
//! mutation, no blocking.

mod length;
mod table;
mod temperature;
mod units;
mod weight;

pub use table::{ConversionTable, ConverterFn, round_to_hundredths};
pub use units::{Unit, UnitCategory};

use std::sync::OnceLock;

use crate::error::EngineResult;

static SHARED_TABLE: OnceLock<ConversionTable> = OnceLock::new();

/// Returns the process-wide conversion table, built on first use.
///
/// The table lives for the lifetime of the process and is never mutated,
/// so the reference can be used freely from any thread.
pub fn shared_table() -> &'static ConversionTable {
    SHARED_TABLE.get_or_init(ConversionTable::new)
}

/// Converts `value` between two units named by their lowercase tokens.
///
/// This is the in-process entry point for front ends that work with raw
/// strings (an HTTP handler, a CLI). See
/// [`ConversionTable::convert_tokens`] for the exact token semantics,
/// including the identity short-circuit when `from == to`.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedConversion`](crate::error::EngineError::UnsupportedConversion)
/// when the triple has no table entry and the unit tokens differ.
///
/// # Example
///
/// ```
/// use unit_converter::conversion::convert;
///
/// assert_eq!(convert("temperature", "celsius", "fahrenheit", 0.0).unwrap(), 32.0);
/// assert_eq!(convert("weight", "grams", "ounces", 100.0).unwrap(), 3.53);
/// assert!(convert("weight", "grams", "fahrenheit", 1.0).is_err());
/// ```
pub fn convert(category: &str, from: &str, to: &str, value: f64) -> EngineResult<f64> {
    shared_table().convert_tokens(category, from, to, value)
}
