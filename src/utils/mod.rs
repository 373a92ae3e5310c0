/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing date helpers for query parameters
pub mod dates;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use dates::*;
pub use logger::*;
