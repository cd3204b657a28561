//! Conversion result model for the unit converter API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The result of a successful conversion, as returned by the API.
///
/// The category and unit fields echo the resolved request tokens as plain
/// strings rather than typed enums: the identity short-circuit in the engine
/// can succeed for tokens outside the closed unit set, and the response must
/// be able to echo those back.
///
/// # Example
///
/// ```
/// use unit_converter::models::ConversionResult;
///
/// let result = ConversionResult::new("length", "meters", "feet", 100.0, 328.08);
/// assert_eq!(result.result, 328.08);
/// assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Unique identifier for this conversion.
    pub conversion_id: Uuid,
    /// When the conversion was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// The category token the conversion ran under.
    pub category: String,
    /// The resolved source unit token.
    pub from: String,
    /// The resolved target unit token.
    pub to: String,
    /// The input value.
    pub value: f64,
    /// The converted value, rounded to 2 decimal places unless the
    /// conversion was an identity.
    pub result: f64,
}

impl ConversionResult {
    /// Builds a result for the given request tokens and engine output.
    pub fn new(
        category: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        value: f64,
        result: f64,
    ) -> Self {
        Self {
            conversion_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            category: category.into(),
            from: from.into(),
            to: to.into(),
            value,
            result,
        }
    }
}
