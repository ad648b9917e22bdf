//! HTTP server for delivery zone checks.
//!
//! Resolves addresses through the configured geocoder and classifies them
//! against the zone set loaded at startup.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zonecheck::config::Config;
use zonecheck::geocoder::NominatimGeocoder;
use zonecheck::presentation::not_found_message;
use zonecheck::{check_address, classify, Coordinate, Error, Zone};

mod views;
use views::{CheckResponse, View};

#[derive(Parser, Debug)]
#[command(name = "serve")]
#[command(about = "Delivery zone check server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Zone/geocoder config file (TOML); built-in zones when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Application state shared across handlers
struct AppState {
    zones: Vec<Zone>,
    geocoder: NominatimGeocoder,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("zonecheck server");

    let config = Config::load_or_default(args.config.as_deref())?;
    let zones = config.zones()?;
    for zone in &zones {
        info!(
            "Zone '{}' at {} radius {} miles",
            zone.name, zone.center, zone.radius_miles
        );
    }

    info!("Using geocoder at {}", config.geocoder.endpoint);
    let geocoder = NominatimGeocoder::new(&config.geocoder)?;

    let state = Arc::new(AppState { zones, geocoder });

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/zones", get(zones_handler))
        .route("/v1/check", get(check_handler))
        .route("/v1/classify", get(classify_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        zones: state.zones.len(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    zones: usize,
}

/// Configured delivery zones
async fn zones_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Zone>> {
    Json(state.zones.clone())
}

/// Geocode an address and classify it
async fn check_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CheckQueryParams>,
) -> Result<Response, (StatusCode, String)> {
    let address = params.address.unwrap_or_default();

    let result = check_address(&state.geocoder, &state.zones, &address)
        .await
        .map_err(error_response)?;

    match result {
        Some(result) => Ok(Json(CheckResponse::new(result, params.view)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Classify a raw coordinate, skipping the geocoder
async fn classify_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClassifyQueryParams>,
) -> Result<Json<CheckResponse>, (StatusCode, String)> {
    let location = Coordinate::new(params.lat, params.lon).map_err(error_response)?;
    let result = classify(location, &state.zones).map_err(error_response)?;

    Ok(Json(CheckResponse::new(result, params.view)))
}

fn error_response(e: Error) -> (StatusCode, String) {
    match e {
        Error::NotFound { .. } => (StatusCode::NOT_FOUND, not_found_message().to_string()),
        Error::InvalidCoordinate { .. } => (StatusCode::BAD_REQUEST, e.to_string()),
        Error::Configuration(_) => {
            error!("Zone configuration error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct CheckQueryParams {
    /// Free-text address
    address: Option<String>,
    /// Extra view to include: "map" or "steps"
    view: Option<View>,
}

#[derive(Deserialize)]
struct ClassifyQueryParams {
    lat: f64,
    lon: f64,
    view: Option<View>,
}
