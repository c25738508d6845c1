// ABOUTME: HTTP server binary for the nutrition API
// ABOUTME: Loads configuration, opens the database, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet-To-Discipline Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use diet_to_discipline::{
    config::{environment::DatabaseUrl, ServerConfig},
    constants::routes,
    database::Database,
    logging::LoggingConfig,
    routes::{router, ServerResources},
};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "diet-server")]
#[command(about = "Diet-To-Discipline nutrition target API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override database URL (e.g. sqlite:./data/diet.db or sqlite::memory:)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url);
    }

    LoggingConfig::from_env().init()?;
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    let address = format!("{}:{}", config.host, config.http_port);
    let resources = ServerResources::new(database.clone(), config);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on http://{address}");
    display_available_endpoints();

    axum::serve(listener, router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}

fn display_available_endpoints() {
    info!("Available endpoints:");
    info!("  POST {}", routes::CALCULATE_AND_SAVE);
    info!("  POST {}", routes::TARGETS);
    info!("  GET  {}", routes::PROFILE);
    info!("  GET  {}", routes::HYDRATION);
    info!("  POST {}", routes::HYDRATION);
    info!("  GET  /health, /ready");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
