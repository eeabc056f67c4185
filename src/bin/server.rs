//! Timetable HTTP Server Binary
//!
//! This is the main entry point for the timetable REST API server.
//! It loads configuration, wires the repository and roster into the engine,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin timetable-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, overrides timetable.toml)
//! - `PORT`: Server port (default: 8080, overrides timetable.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use timetable_engine::config::EngineConfig;
use timetable_engine::db::repositories::LocalRepository;
use timetable_engine::engine::SchedulingEngine;
use timetable_engine::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Timetable HTTP Server");

    let config = EngineConfig::from_default_location()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .apply_env_overrides();

    // Wire collaborators into the engine explicitly; there is no global
    // repository instance.
    let repository = Arc::new(LocalRepository::new());
    let roster = Arc::new(
        config
            .build_roster()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?,
    );
    let engine = Arc::new(SchedulingEngine::new(repository, roster));
    info!("Engine initialized successfully");

    // Create application state
    let state = AppState::new(engine);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
