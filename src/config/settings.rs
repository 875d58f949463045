//! Application settings management
//!
//! This module defines the configuration snapshot for the ACDICE system and
//! provides methods for loading it from TOML files and environment variables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::errors::{AcdiceError, Result};

/// Environment variable prefix, matched case-insensitively
/// (`ACDICE_LOG_LEVEL` overrides `log_level`).
pub const ENV_PREFIX: &str = "ACDICE";

/// Conventional settings file, probed in the working directory
pub const CONFIG_FILE: &str = "acdice";

/// Immutable configuration snapshot for the ACDICE system
///
/// Built once at process start and passed by reference to all dependents.
/// Construction either fully succeeds with every constraint satisfied or
/// fails with the first violation; no partially valid snapshot escapes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Firebase project ID for state management
    pub firebase_project_id: String,
    /// Prefix for Firestore collections to avoid collisions
    pub firestore_collection_prefix: String,
    /// Path to the trained integration-point prediction model
    pub ml_model_path: String,
    /// Minimum confidence threshold for ML predictions
    pub prediction_confidence_threshold: f64,
    /// Maximum number of concurrent cross-domain integrations
    pub max_concurrent_integrations: u32,
    /// Timeout for integration operations
    pub integration_timeout_seconds: u64,
    /// Rate at which the research module explores new integration opportunities
    pub exploration_rate: f64,
    /// Frequency of knowledge base updates in hours
    pub knowledge_base_refresh_hours: u32,
    /// One of DEBUG, INFO, WARNING, ERROR, CRITICAL (case-insensitive)
    pub log_level: String,
    /// Days to retain log files
    pub log_retention_days: u32,
    /// Seconds between metrics collection cycles
    pub metrics_collection_interval: u64,
}

impl Settings {
    /// Load settings from the conventional `acdice.toml` file (if present)
    /// and `ACDICE_*` environment variables.
    pub fn new() -> Result<Self> {
        Self::load(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Load settings with an explicit settings file path.
    ///
    /// The file is still optional; environment variables keep the highest
    /// precedence.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(config::File::from(path.as_ref()).required(false))
    }

    /// Merge sources in increasing precedence (defaults, file, environment),
    /// validate every field, and perform the model-directory side effect.
    fn load(file: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self> {
        let merged = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let settings: Settings = merged.try_deserialize()?;
        super::validation::validate_settings(&settings)?;
        settings.ensure_model_dir()?;
        Ok(settings)
    }

    /// Create the parent directory of `ml_model_path` if it is missing.
    ///
    /// Idempotent; a second load with the same path touches nothing.
    fn ensure_model_dir(&self) -> Result<()> {
        let parent = match Path::new(&self.ml_model_path).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Ok(()),
        };
        fs::create_dir_all(parent).map_err(|source| AcdiceError::Filesystem {
            path: parent.to_path_buf(),
            source,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            firebase_project_id: "acdice-production".to_string(),
            firestore_collection_prefix: "acdice_".to_string(),
            ml_model_path: "models/integration_predictor.joblib".to_string(),
            prediction_confidence_threshold: 0.75,
            max_concurrent_integrations: 10,
            integration_timeout_seconds: 30,
            exploration_rate: 0.2,
            knowledge_base_refresh_hours: 24,
            log_level: "INFO".to_string(),
            log_retention_days: 30,
            metrics_collection_interval: 300,
        }
    }
}
