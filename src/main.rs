//! Extrator Previdenciário server.
//!
//! Serves the upload form and the extraction endpoints. The configuration
//! file path may be given as the first argument; it defaults to
//! `config/extractor.yaml` and the built-in defaults apply when that file
//! does not exist.

use std::process::ExitCode;

use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extrator_previdenciario::api::{AppState, create_router};
use extrator_previdenciario::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "config/extractor.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extrator_previdenciario=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match ConfigLoader::load_or_default(&config_path) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let bind_address = config.server().bind_address.clone();
    let app = create_router(AppState::new(config)).layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %bind_address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        address = %bind_address,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Extrator Previdenciário"
    );

    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server stopped with an error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
