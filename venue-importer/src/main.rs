//! Venue Importer Main Entry Point
//!
//! Imports the Boston public schools dataset into the search index as venues.
//! The run ends once every school has been handled.

use dotenv::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use venue_importer::{Dependencies, ImportError, ImporterConfig};

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), ImportError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("venue_importer=info,venue_importer_repository=info"));

    let json_output = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
            .map_err(|e| ImportError::config(format!("Failed to initialize tracing: {}", e)))?;

        info!(
            service_name = "venue-importer",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
            .map_err(|e| ImportError::config(format!("Failed to initialize tracing: {}", e)))?;

        info!(
            service_name = "venue-importer",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ImportError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    info!("Starting venue importer");

    let config = ImporterConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let deps = match Dependencies::new(&config) {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    // Clients are dropped with `deps` on both paths
    match deps.orchestrator.run().await {
        Ok(summary) => {
            info!(
                run_id = %summary.run_id,
                succeeded = summary.succeeded,
                total = summary.total,
                "Venue import completed"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Venue import failed");
            Err(e.into())
        }
    }
}
