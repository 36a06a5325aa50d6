//! Process entry point.
//!
//! Owns the lifecycle the core crate stays out of: configuration,
//! logging bootstrap, opening the storage connection, and serving HTTP
//! until the process exits.

use log::info;
use people_core::db::open_db;
use people_core::init_logging;
use people_server::api::{api_router, AppState};
use people_server::config::ServerConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("people_server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let state = AppState::new(conn);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} db={}",
        config.listen_addr,
        config.db_path.display()
    );

    axum::serve(listener, api_router(state)).await?;
    Ok(())
}
