//! Serves the taskboard REST API.
//!
//! Configuration comes from the environment (see [`taskboard::config`]);
//! log verbosity follows `RUST_LOG` and defaults to `info`.

use actix_web::{App, HttpServer, middleware, web};
use log::{error, info};
use std::process::ExitCode;
use taskboard::config::{ServerConfig, StorageBackend};
use taskboard::http::{AppState, configure};
use taskboard::local::{LocalStateStore, LocalWorkspace};
use taskboard::persistence::{apply_schema, build_pool};

fn build_state(storage: &StorageBackend) -> Result<AppState, Box<dyn std::error::Error>> {
    match storage {
        StorageBackend::Memory => Ok(AppState::in_memory()),
        StorageBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = build_pool(database_url, *max_connections)?;
            apply_schema(&pool)?;
            Ok(AppState::postgres(pool))
        }
        StorageBackend::Local { state_dir } => {
            let store = LocalStateStore::open(state_dir)?;
            Ok(AppState::local(LocalWorkspace::load(store)?))
        }
    }
}

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let state = match build_state(&config.storage) {
        Ok(state) => state,
        Err(err) => {
            error!("failed to initialise {} storage: {err}", config.storage.name());
            return ExitCode::FAILURE;
        }
    };

    let address = config.bind_address();
    info!(
        "server running at http://{address} with {} storage",
        config.storage.name()
    );

    let data = web::Data::new(state);
    let server = match HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&address)
    {
        Ok(server) => server,
        Err(err) => {
            error!("failed to bind {address}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match server.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("server stopped: {err}");
            ExitCode::FAILURE
        }
    }
}
