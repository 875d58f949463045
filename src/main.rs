//! ACDICE startup self-check
//!
//! Loads and validates the configuration snapshot, initializes logging,
//! and runs the one-shot startup checks. Exit code 0 means the system is
//! clear to start; anything else should abort startup.

use std::process;

use tracing::{error, info};

use acdice::config::{validate_configuration, Settings};
use acdice::utils::logging;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Logging is not up yet, so load failures go to stderr.
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let _guards = logging::init_logging(&settings)?;

    info!("Starting {}", acdice::info());

    if !validate_configuration(&settings) {
        error!("Startup validation failed, aborting");
        process::exit(1);
    }

    info!(
        project_id = %settings.firebase_project_id,
        model_path = %settings.ml_model_path,
        max_concurrent_integrations = settings.max_concurrent_integrations,
        log_level = %settings.log_level,
        "Configuration loaded and validated"
    );

    Ok(())
}
