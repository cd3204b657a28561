//! Request types for the unit converter API.
//!
//! This module defines the JSON request structure for the `/convert`
//! endpoint and the default-unit resolution applied before the engine is
//! invoked.

use serde::{Deserialize, Serialize};

use crate::conversion::UnitCategory;
use crate::models::default_pair;

/// Request body for the `/convert` endpoint.
///
/// The category and unit fields carry raw lowercase tokens; token
/// validation is the engine's closed-world lookup, not the deserializer.
/// `from` and `to` may be omitted (or empty), in which case the category's
/// default pair fills the gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// The unit category token (e.g. `"temperature"`).
    pub category: String,
    /// The source unit token. Defaults per category when omitted.
    #[serde(default)]
    pub from: Option<String>,
    /// The target unit token. Defaults per category when omitted.
    #[serde(default)]
    pub to: Option<String>,
    /// The value to convert.
    pub value: f64,
}

impl ConversionRequest {
    /// Resolves the from/to unit tokens, filling missing or empty sides
    /// from the category's default pair.
    ///
    /// Returns `None` when a side is missing and the category token is
    /// unknown, since no default can be chosen for it.
    pub fn resolved_units(&self) -> Option<(String, String)> {
        let explicit =
            |token: &Option<String>| token.as_deref().filter(|t| !t.is_empty()).map(String::from);

        match (explicit(&self.from), explicit(&self.to)) {
            (Some(from), Some(to)) => Some((from, to)),
            (from, to) => {
                let category = UnitCategory::from_token(&self.category)?;
                let (default_from, default_to) = default_pair(category);
                Some((
                    from.unwrap_or_else(|| default_from.to_string()),
                    to.unwrap_or_else(|| default_to.to_string()),
                ))
            }
        }
    }
}
