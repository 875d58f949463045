//! ACDICE configuration subsystem
//!
//! Typed, validated process configuration with a startup self-check for
//! the ACDICE integration engine. The configuration is built once from
//! layered sources (defaults, optional TOML file, `ACDICE_*` environment
//! variables), validated field by field, and then passed by reference to
//! all dependents for the lifetime of the process.

pub mod config;
pub mod utils;

// Re-export commonly used types
pub use config::{validate_configuration, Settings};
pub use utils::errors::{AcdiceError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
