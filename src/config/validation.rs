//! Configuration validation module
//!
//! This module provides per-field constraint checks for the ACDICE
//! configuration. Every violation names the field, the offending value,
//! and the violated constraint.

use crate::utils::errors::{AcdiceError, Result};

use super::Settings;

/// Accepted values for `log_level`, matched case-insensitively
pub const LOG_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// Validate all configuration fields
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_firebase(settings)?;
    validate_model(settings)?;
    validate_integration(settings)?;
    validate_research(settings)?;
    validate_logging(settings)?;
    validate_metrics(settings)?;
    Ok(())
}

fn validate_firebase(settings: &Settings) -> Result<()> {
    if settings.firebase_project_id.is_empty() {
        return Err(AcdiceError::config(
            "firebase_project_id",
            "",
            "must not be empty",
        ));
    }

    if settings.firestore_collection_prefix.is_empty() {
        return Err(AcdiceError::config(
            "firestore_collection_prefix",
            "",
            "must not be empty",
        ));
    }

    Ok(())
}

fn validate_model(settings: &Settings) -> Result<()> {
    if settings.ml_model_path.is_empty() {
        return Err(AcdiceError::config("ml_model_path", "", "must not be empty"));
    }

    if !(0.0..=1.0).contains(&settings.prediction_confidence_threshold) {
        return Err(AcdiceError::config(
            "prediction_confidence_threshold",
            settings.prediction_confidence_threshold,
            "must be between 0.0 and 1.0",
        ));
    }

    Ok(())
}

fn validate_integration(settings: &Settings) -> Result<()> {
    if settings.max_concurrent_integrations == 0 {
        return Err(AcdiceError::config(
            "max_concurrent_integrations",
            settings.max_concurrent_integrations,
            "must be greater than 0",
        ));
    }

    if settings.integration_timeout_seconds == 0 {
        return Err(AcdiceError::config(
            "integration_timeout_seconds",
            settings.integration_timeout_seconds,
            "must be greater than 0",
        ));
    }

    Ok(())
}

fn validate_research(settings: &Settings) -> Result<()> {
    if !(0.0..=1.0).contains(&settings.exploration_rate) {
        return Err(AcdiceError::config(
            "exploration_rate",
            settings.exploration_rate,
            "must be between 0.0 and 1.0",
        ));
    }

    if settings.knowledge_base_refresh_hours == 0 {
        return Err(AcdiceError::config(
            "knowledge_base_refresh_hours",
            settings.knowledge_base_refresh_hours,
            "must be greater than 0",
        ));
    }

    Ok(())
}

fn validate_logging(settings: &Settings) -> Result<()> {
    let level = settings.log_level.to_uppercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(AcdiceError::config(
            "log_level",
            &settings.log_level,
            format!("must be one of {:?}", LOG_LEVELS),
        ));
    }

    if settings.log_retention_days == 0 {
        return Err(AcdiceError::config(
            "log_retention_days",
            settings.log_retention_days,
            "must be greater than 0",
        ));
    }

    Ok(())
}

fn validate_metrics(settings: &Settings) -> Result<()> {
    if settings.metrics_collection_interval == 0 {
        return Err(AcdiceError::config(
            "metrics_collection_interval",
            settings.metrics_collection_interval,
            "must be greater than 0",
        ));
    }

    Ok(())
}
