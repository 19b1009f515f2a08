use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mlb_stats_web::{app, config::Config, mlb::MlbClient};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MLB stats server...");

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let client = match MlbClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("Failed to build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(upstream = client.base_url(), "MLB Stats API client ready.");

    let addr = config.addr();
    let app = app(client, &config);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind to {}: {}", addr, err);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
