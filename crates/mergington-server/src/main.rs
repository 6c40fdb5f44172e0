//! Server binary for the Mergington High School activities API.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `mergington-config.yaml` (or defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Build the seed activity directory
//! 4. Serve the API until `Ctrl-C`

mod error;

use std::sync::Arc;

use mergington_api::{ApiConfig, AppState, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerAppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), ServerAppError> {
    // 1. Load configuration.
    let config = ApiConfig::load()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!(
        service = "Mergington High School API",
        bind = config.server.bind_address(),
        static_dir = %config.server.static_dir.display(),
        log_level = config.logging.level,
        "Configuration loaded"
    );

    // 3. Build the seed directory.
    let directory = mergington_directory::seed_directory()?;
    info!(activities = directory.len(), "Activity directory seeded");

    // 4. Serve.
    let state = Arc::new(AppState::new(directory).with_static_dir(&config.server.static_dir));
    mergington_api::start_server(&config.server, state).await?;

    info!("mergington-server exiting");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(logging: &LoggingConfig) -> Result<(), ServerAppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| ServerAppError::Logging {
            message: format!("invalid log filter {:?}: {e}", logging.level),
        })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ServerAppError::Logging {
        message: format!("{e}"),
    })
}
