//! Core data models for the unit converter.
//!
//! This module contains the API-facing models: the conversion result payload
//! and the category/unit catalog with its default selections.

mod catalog;
mod conversion_result;

pub use catalog::{CategoryUnits, catalog, default_pair};
pub use conversion_result::ConversionResult;
