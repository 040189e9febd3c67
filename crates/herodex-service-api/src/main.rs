//! Herodex superhero roster HTTP service.
//!
//! This service exposes health probes and a superhero resource backed by an
//! in-memory roster.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness probe (plain text)
//! - `GET /env` - Active environment name (plain text)
//! - `GET {base}/superheroes` - List superheroes sorted by humility score
//! - `POST {base}/superheroes` - Create a superhero
//!
//! # Configuration
//!
//! - `APP_ENV` - Environment name (default: development)
//! - `BASE_PATH` - Prefix for resource routes (default: /api/v1)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use herodex_lib::{creation_schema, NewSuperhero, Superhero};
use herodex_service_shared::{
    environment, health, init_logging, ApiError, ApiSuccess, AppState, LoggingConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    // Load configuration from environment
    let env_name = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
    let base_path = env::var("BASE_PATH").unwrap_or_else(|_| "/api/v1".to_string());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(
        environment = %env_name,
        base_path = %base_path,
        port = port,
        "starting herodex api service"
    );

    let state = AppState::new(env_name);
    let app = app(state, &base_path);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble the router: probes stay unprefixed, resource routes nest under
/// the configured base path.
fn app(state: AppState, base_path: &str) -> Router {
    let superheroes =
        Router::new().route("/superheroes", get(list_superheroes).post(create_superhero));

    Router::new()
        .route("/health", get(health))
        .route("/env", get(environment))
        .nest(base_path, superheroes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Handle GET {base}/superheroes.
async fn list_superheroes(State(state): State<AppState>) -> ApiSuccess<Vec<Superhero>> {
    let heroes = state.roster().by_humility();

    info!(count = heroes.len(), "superheroes fetched");
    ApiSuccess::ok(heroes, "Superheroes fetched successfully")
}

/// Handle POST {base}/superheroes.
///
/// The payload stays untyped until the schema gate has passed; the gate
/// rejects wrong types instead of coercing them. Library errors propagate
/// out of the gate and become the wire envelope through `ApiError`'s
/// `From` impl.
async fn create_superhero(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<ApiSuccess<Superhero>, ApiError> {
    let hero = creation_schema().guard(&payload, |body| {
        let candidate = NewSuperhero::from_value(body)?;
        state.roster().create(candidate)
    })?;

    info!(id = hero.id, name = %hero.name, "superhero created");
    Ok(ApiSuccess::created(hero, "Superhero created successfully"))
}

/// Fallback for unmatched routes.
async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("{} not found", uri.path()) })),
    )
}
