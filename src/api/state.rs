//! Application state for the unit converter API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::conversion::ConversionTable;

/// Shared application state.
///
/// Holds the conversion table, built once at startup and shared read-only
/// across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The conversion table.
    table: Arc<ConversionTable>,
}

impl AppState {
    /// Creates a new application state with the given conversion table.
    pub fn new(table: ConversionTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the conversion table.
    pub fn table(&self) -> &ConversionTable {
        &self.table
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConversionTable::new())
    }
}
