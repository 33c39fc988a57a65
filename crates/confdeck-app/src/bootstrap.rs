use std::path::Path;

use confdeck_api::{ApiServer, ServerOptions};
use confdeck_model::Catalog;
use confdeck_telemetry::{GlobalContextGuard, init_logging};
use tracing::info;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Entry point for the Confdeck boot sequence.
///
/// # Errors
///
/// Returns an error if the environment is invalid or application startup fails.
pub async fn run_app() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    run_app_with(config).await
}

/// Boot sequence driven entirely by an injected configuration.
pub(crate) async fn run_app_with(config: AppConfig) -> AppResult<()> {
    init_logging(&config.logging()).map_err(|err| AppError::telemetry("telemetry.init", err))?;
    let _context = GlobalContextGuard::new("bootstrap");

    info!("Confdeck bootstrap starting");

    let catalog = load_catalog(config.seed_path.as_deref())?;
    info!(
        configurations = catalog.len(),
        seed = config.seed_path.as_ref().map_or_else(
            || "builtin".to_string(),
            |path| path.display().to_string()
        ),
        "Configuration catalog loaded"
    );

    let api = ApiServer::new(
        catalog,
        ServerOptions {
            ui_dir: config.ui_dir.clone(),
        },
    )
    .map_err(|err| AppError::api_server("api_server.new", err))?;

    let addr = config.socket_addr();
    info!(addr = %addr, "Launching API listener");
    api.serve(addr)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;

    info!("Confdeck shut down cleanly");
    Ok(())
}

/// Load the catalog from `seed_path`, or the built-in collection when absent.
///
/// # Errors
///
/// Returns [`AppError::SeedIo`] when the file cannot be read and
/// [`AppError::Seed`] when its contents are not a valid catalog.
pub fn load_catalog(seed_path: Option<&Path>) -> AppResult<Catalog> {
    let Some(path) = seed_path else {
        return Ok(Catalog::seeded());
    };
    let document = std::fs::read_to_string(path).map_err(|source| AppError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_json(&document).map_err(|source| AppError::Seed {
        path: path.to_path_buf(),
        source,
    })
}
