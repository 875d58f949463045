//! Configuration management module
//!
//! This module handles loading and validation of the ACDICE configuration
//! snapshot from TOML files and environment variables, plus the one-shot
//! startup self-check.

pub mod settings;
pub mod startup;
pub mod validation;

pub use settings::{Settings, CONFIG_FILE, ENV_PREFIX};
pub use startup::validate_configuration;
