//! Trip Accord server binary.
//!
//! Loads configuration from the environment, wires the storage and plan
//! generator adapters, and serves the trip API over HTTP.

use std::sync::Arc;
use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_accord::adapters::http::{trip_router, TripAppState};
use trip_accord::adapters::planner::{AnthropicPlanner, AnthropicPlannerConfig, MockPlanGenerator};
use trip_accord::adapters::storage::{InMemoryTripRepository, JsonFileTripRepository};
use trip_accord::config::{AppConfig, PlannerProvider, StorageBackend};
use trip_accord::domain::analysis::ConflictDetector;
use trip_accord::ports::{PlanGenerator, TripRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    info!(environment = ?config.server.environment, "Starting trip-accord");

    let repository: Arc<dyn TripRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryTripRepository::new()),
        StorageBackend::File => Arc::new(JsonFileTripRepository::new(&config.storage.data_dir)),
    };
    info!(backend = ?config.storage.backend, "Trip storage initialized");

    let generator: Arc<dyn PlanGenerator> = match config.planner.provider {
        PlannerProvider::Anthropic => {
            let api_key = config
                .planner
                .anthropic_api_key
                .clone()
                .ok_or("ANTHROPIC_API_KEY is not configured")?;
            let mut planner_config = AnthropicPlannerConfig::new(api_key)
                .with_timeout(config.planner.timeout())
                .with_max_retries(config.planner.max_retries);
            if let Some(model) = &config.planner.model {
                planner_config = planner_config.with_model(model);
            }
            Arc::new(AnthropicPlanner::new(planner_config))
        }
        PlannerProvider::Mock => {
            warn!("Using the mock plan generator; plans will be scripted");
            Arc::new(MockPlanGenerator::new())
        }
    };

    let state = TripAppState {
        repository,
        detector: Arc::new(ConflictDetector::new(config.detection.thresholds)),
        generator,
    };

    let app = trip_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config))
        .with_state(state);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
