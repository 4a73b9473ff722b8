//! HTTP transport for the query service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/solardata` — all records.
//! - `GET /api/solardata/:date` — the record for one day.
//! - `GET /api/solardata/GetSolarDataByDate?date=2023-01-15` — same as above.
//! - `GET /api/solardata/GetProductionDataByMonth?date=2023-01-01` — one month.
//! - `GET /api/solardata/GetProductionDataByYear?date=2023-01-01` — one year.
//! - `GET /health` — `{ "ok": true, "records": n }`.
//!
//! The controller and action segments match case-insensitively, so
//! `/api/SolarData/GetProductionDataByYear` and
//! `/api/solardata/getproductiondatabyyear` are the same route.
//!
//! `Found` → 200 with JSON, `NotFound` → 404 with an empty body, invalid
//! dates → 400, storage failures → 503. An unknown route is a 404 with an
//! `{ "error": .. }` body.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use solar_share::{query::http, InMemorySolarDataStore, QueryService};
//!
//! let service = Arc::new(QueryService::new(InMemorySolarDataStore::load_json_file("solar.json")?));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::solar_data::SolarDataStore;

use super::error::QueryError;
use super::request::{QueryKind, SolarDataQuery};
use super::service::QueryService;
use super::QueryOutcome;

/// Query string carrying the date for the named lookup routes.
#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: Option<String>,
}

const CONTROLLER: &str = "solardata";

/// Build an axum `Router` that answers solar data lookups via the given service.
pub fn router<S: SolarDataStore + 'static>(service: Arc<QueryService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/:controller", get(all_handler))
        .route("/api/:controller/:segment", get(segment_handler))
        .fallback(unknown_route)
        .with_state(service)
}

/// Resolve a named action segment to its query kind.
fn action(segment: &str) -> Option<QueryKind> {
    match segment.to_ascii_lowercase().as_str() {
        "getsolardatabydate" => Some(QueryKind::ByDate),
        "getproductiondatabymonth" => Some(QueryKind::ByMonth),
        "getproductiondatabyyear" => Some(QueryKind::ByYear),
        _ => None,
    }
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: SolarDataStore + 'static>(
    service: Arc<QueryService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving solar data");
    axum::serve(listener, app).await
}

/// `GET /health` — 200 with the record count, 503 when the store is down.
async fn health_handler<S: SolarDataStore + 'static>(
    State(service): State<Arc<QueryService<S>>>,
) -> Response {
    match service.store().count() {
        Ok(records) => Json(json!({ "ok": true, "records": records })).into_response(),
        Err(e) => error_response(QueryError::from(e)),
    }
}

/// `GET /api/solardata` — every record.
async fn all_handler<S: SolarDataStore + 'static>(
    State(service): State<Arc<QueryService<S>>>,
    Path(controller): Path<String>,
    uri: Uri,
) -> Response {
    if !controller.eq_ignore_ascii_case(CONTROLLER) {
        return unknown_route(uri).await;
    }
    respond(service.all())
}

/// `GET /api/solardata/:segment` — a named action with `?date=`, or a date.
async fn segment_handler<S: SolarDataStore + 'static>(
    State(service): State<Arc<QueryService<S>>>,
    Path((controller, segment)): Path<(String, String)>,
    Query(params): Query<DateParams>,
    uri: Uri,
) -> Response {
    if !controller.eq_ignore_ascii_case(CONTROLLER) {
        return unknown_route(uri).await;
    }
    let result = match action(&segment) {
        Some(kind) => SolarDataQuery::new(kind, params.date.as_deref()),
        None => SolarDataQuery::new(QueryKind::ByDate, Some(&segment)),
    }
    .and_then(|query| service.execute(&query));
    respond(result)
}

async fn unknown_route(uri: Uri) -> Response {
    let body = json!({ "error": format!("no route for {}", uri.path()) });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

fn respond<T: Serialize>(result: Result<QueryOutcome<T>, QueryError>) -> Response {
    match result {
        Ok(QueryOutcome::Found(payload)) => (StatusCode::OK, Json(payload)).into_response(),
        Ok(QueryOutcome::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: QueryError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json!({ "error": err.to_string() });
    (status, Json(body)).into_response()
}
