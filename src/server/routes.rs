// src/server/routes.rs

//! JSON API handlers.
//!
//! - `POST /api/v1/jobs/search`  search by title around a point
//! - `GET  /api/v1/jobs/nearby`  available and nearest lists for `?lat=&lng=`
//! - `GET  /api/v1/jobs/{id}`    a single job
//! - `GET  /api/v1/stats`        dataset load report

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, Request, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Coordinates, Job, JobSlot};
use crate::server::AppState;
use crate::server::error::{ApiError, ApiResult, ErrorResponse};
use crate::storage::LoadReport;
use crate::utils::text::normalize_whitespace;

/// Identifier attached to every request for log correlation.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tag the request with a fresh id, log it, and echo the id in `x-request-id`.
pub async fn request_context(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let agent = request
        .headers()
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        url = %request.uri().path(),
        agent = %agent,
        "received request"
    );

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));
    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

/// Body of `POST /jobs/search`.
#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub title: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Serialize)]
pub struct SearchJobsResponse {
    pub request_id: String,
    pub message: String,
    pub jobs: Vec<JobSlot>,
}

#[derive(Debug, Serialize)]
pub struct NearbyJobsResponse {
    pub request_id: String,
    pub message: String,
    pub available_jobs: Vec<JobSlot>,
    pub nearest_jobs: Vec<JobSlot>,
}

#[derive(Debug, Serialize)]
pub struct GetJobResponse {
    pub request_id: String,
    pub message: String,
    pub job: Job,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub request_id: String,
    pub report: LoadReport,
}

/// Query string of `GET /jobs/nearby`.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// POST /api/v1/jobs/search
pub async fn search_jobs(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    payload: Result<Json<JobSearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchJobsResponse>> {
    const BAD_BODY: &str = "invalid request. unexpected request body data format";

    let Json(req) = payload.map_err(|rejection| {
        ApiError::new(
            &request_id,
            BAD_BODY,
            AppError::validation(rejection.body_text()),
        )
    })?;

    let title = normalize_whitespace(&req.title);
    if title.is_empty() {
        return Err(ApiError::new(
            &request_id,
            BAD_BODY,
            AppError::validation("title is required"),
        ));
    }

    let jobs = state
        .service
        .search(&title, req.longitude, req.latitude)
        .map_err(|e| ApiError::new(&request_id, "unable to search for requested jobs", e))?;

    Ok(Json(SearchJobsResponse {
        request_id,
        message: "search successfully".to_string(),
        jobs,
    }))
}

/// GET /api/v1/jobs/nearby?lat=&lng=
pub async fn nearby_jobs(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Query(query): Query<NearbyQuery>,
) -> ApiResult<Json<NearbyJobsResponse>> {
    let center = Coordinates::parse(
        query.lat.as_deref().unwrap_or_default(),
        query.lng.as_deref().unwrap_or_default(),
    )
    .map_err(|e| ApiError::new(&request_id, "geolocation data submitted is invalid", e))?;

    let nearby = state
        .service
        .load(center.longitude, center.latitude)
        .map_err(|e| ApiError::new(&request_id, "unable to load jobs based on location", e))?;

    Ok(Json(NearbyJobsResponse {
        request_id,
        message: "loaded successfully".to_string(),
        available_jobs: nearby.available,
        nearest_jobs: nearby.nearest,
    }))
}

/// GET /api/v1/jobs/{id}
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Path(id): Path<String>,
) -> ApiResult<Json<GetJobResponse>> {
    if let Err(e) = Uuid::parse_str(&id) {
        return Err(ApiError::new(
            &request_id,
            "bad request. malformatted job id",
            AppError::validation(e.to_string()),
        ));
    }

    let job = state
        .service
        .find(&id)
        .map_err(|e| ApiError::new(&request_id, "unable to find requested job", e))?;

    Ok(Json(GetJobResponse {
        request_id,
        message: "found".to_string(),
        job,
    }))
}

/// GET /api/v1/stats
pub async fn stats(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
) -> Json<StatsResponse> {
    Json(StatsResponse {
        request_id,
        report: state.report.clone(),
    })
}

/// GET /ping
pub async fn ping() -> &'static str {
    "pong"
}

/// Fallback for unknown routes.
pub async fn not_found(Extension(RequestId(request_id)): Extension<RequestId>) -> Response {
    tracing::warn!(request_id = %request_id, "route does not exist");
    let body = ErrorResponse {
        request_id,
        message: "invalid request. make sure to use the exact endpoint.".to_string(),
        developer_message: "endpoint called with that method does not exist.".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Create the `/api/v1` routes router.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/jobs/search", post(search_jobs))
        .route("/jobs/nearby", get(nearby_jobs))
        .route("/jobs/{id}", get(get_job))
        .route("/stats", get(stats))
}
