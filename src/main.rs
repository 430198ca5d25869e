//! HTTP service entry point for the PAYE engine.

use paye_engine::api::{AppState, create_router};
use paye_engine::config::ConfigLoader;
use tracing::{error, info};

const DEFAULT_CONFIG_DIR: &str = "./config/zimra_2025";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config_dir =
        std::env::var("PAYE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let service_port = std::env::var("SERVICE_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load tax tables");
            return Err(err.into());
        }
    };

    let router = create_router(AppState::new(loader.into_registry()));
    let bind_address = format!("0.0.0.0:{}", service_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(address = %bind_address, "PAYE engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
