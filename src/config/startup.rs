//! Startup validation
//!
//! One-shot, best-effort sanity check run once after the configuration
//! snapshot is built. Unlike loading, nothing here propagates: startup
//! diagnostics must never take down the host process, so every failure is
//! converted into a logged error and a `false` return.

use std::env;
use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use crate::utils::errors::{AcdiceError, Result};

use super::Settings;

/// Environment variable indicating external Firebase credentials
pub const CREDENTIALS_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Path-valued fields whose parent directory must be usable before the
/// system proceeds
fn critical_paths(settings: &Settings) -> [(&'static str, &str); 1] {
    [("ml_model_path", settings.ml_model_path.as_str())]
}

/// Validate environment-dependent preconditions on startup.
///
/// Returns `true` when all checks pass (missing credentials and repaired
/// directories included), `false` when an unexpected error occurred. The
/// boolean is advisory: callers are expected to halt startup on `false`,
/// but nothing here enforces that.
pub fn validate_configuration(settings: &Settings) -> bool {
    match run_checks(settings) {
        Ok(()) => {
            info!("Configuration validation passed");
            true
        }
        Err(e) => {
            error!(error = %e, "Configuration validation failed");
            false
        }
    }
}

fn run_checks(settings: &Settings) -> Result<()> {
    if env::var_os(CREDENTIALS_VAR).is_some() {
        info!("Firebase credentials found, will validate on initialization");
    } else {
        info!("No Firebase credentials in environment, state management disabled");
    }

    for (field, path) in critical_paths(settings) {
        let parent = match Path::new(path).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => continue,
        };
        if !parent.exists() {
            warn!(field = field, directory = %parent.display(), "Directory does not exist, creating");
            fs::create_dir_all(parent).map_err(|source| AcdiceError::Filesystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_model_path(path: &Path) -> Settings {
        Settings {
            ml_model_path: path.to_string_lossy().into_owned(),
            ..Settings::default()
        }
    }

    #[test]
    fn passes_with_existing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_with_model_path(&dir.path().join("model.joblib"));
        assert!(validate_configuration(&settings));
    }

    #[test]
    fn repairs_missing_model_directory() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("models").join("predictor.joblib");
        let settings = settings_with_model_path(&model);

        assert!(validate_configuration(&settings));
        assert!(model.parent().unwrap().exists());
    }

    #[test]
    fn converts_filesystem_failure_to_false_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        // A file where a directory is needed makes create_dir_all fail.
        let obstruction = dir.path().join("occupied");
        std::fs::write(&obstruction, b"not a directory").unwrap();
        let settings = settings_with_model_path(&obstruction.join("deeper").join("model.joblib"));

        assert!(!validate_configuration(&settings));
    }

    #[test]
    fn bare_relative_path_has_no_parent_to_check() {
        let settings = Settings {
            ml_model_path: "model.joblib".to_string(),
            ..Settings::default()
        };
        assert!(validate_configuration(&settings));
    }
}
