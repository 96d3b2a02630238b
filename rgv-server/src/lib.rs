//! HTTP surface for the rain gauge measurement store.
//!
//! Two read-only endpoints, no auth, no pagination:
//!
//! - `GET /api/rainfall?date=YYYY-MM-DD` - one day's measurements,
//!   ascending by timestamp; omitted or empty `date` yields `[]`
//! - `GET /api/rainfall/daterange` - earliest/latest available dates
//!
//! Store faults surface as `500 { "error": message }` with the message
//! propagated verbatim; the handlers never retry.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use rgv_db::Database;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across handlers.
pub struct AppState {
    pub db: Database,
}

/// Server configuration.
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

/// Build the API router around a populated store.
pub fn router(db: Database) -> Router {
    let state = Arc::new(AppState { db });
    Router::new()
        .route("/api/rainfall", get(rainfall_handler))
        .route("/api/rainfall/daterange", get(daterange_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run_server(db: Database, config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("server running at http://{}", addr);
    axum::serve(listener, router(db)).await?;
    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn fault(err: anyhow::Error) -> Response {
    log::error!("request failed: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

#[derive(Deserialize)]
struct RainfallQuery {
    #[serde(default)]
    date: Option<String>,
}

/// GET /api/rainfall - one calendar date's measurements.
async fn rainfall_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RainfallQuery>,
) -> Response {
    match state.db.query_measurements(query.date.as_deref()) {
        Ok(series) => Json(series).into_response(),
        Err(err) => fault(err),
    }
}

/// GET /api/rainfall/daterange - min/max available dates.
async fn daterange_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.db.query_date_range() {
        Ok(range) => Json(range).into_response(),
        Err(err) => fault(err),
    }
}
