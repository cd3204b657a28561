//! Unit Conversion Engine
//!
//! This crate provides a pure, table-driven engine for converting numeric
//! values between units of temperature, length and weight, together with a
//! small HTTP API that serves the conversions.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod models;
