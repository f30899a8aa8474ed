//! Salary engine server binary.
//!
//! Wires together environment configuration, first-start seeding, and
//! the axum router over an in-memory store.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::{AppConfig, SeedFile, seed_if_empty};
use salary_engine::error::{EngineError, EngineResult};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!(%err, "server failed");
        std::process::exit(1);
    }
}

async fn run() -> EngineResult<()> {
    let config = AppConfig::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        schema = ?config.schema,
        "starting salary engine"
    );

    let state = AppState::in_memory(config.schema);
    if let Some(path) = &config.seed_path {
        let seed = SeedFile::load(path)?;
        let inserted = seed_if_empty(state.employees(), state.designations(), seed, config.schema)
            .await?;
        info!(seed = %path.display(), inserted, "seed file processed");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| EngineError::Io {
            message: format!("failed to bind {}: {}", config.bind_addr, e),
        })?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| EngineError::Io {
            message: e.to_string(),
        })
}
