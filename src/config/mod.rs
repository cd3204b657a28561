//! Configuration loading for the unit converter server.
//!
//! Only the HTTP server is configurable (bind host and port); the
//! conversion table is fixed at build time.
//!
//! # Example
//!
//! ```no_run
//! use unit_converter::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load_or_default("./config/server.yaml").unwrap();
//! println!("Binding to {}", loader.config().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ServerConfig;
