//! HTTP JSON API.
//!
//! Wraps [`JobService`](crate::services::JobService) in an Axum router with
//! CORS, request tracing and a per-request id.

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;

/// Create the Axum application with all routes and middleware.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers(Any)
        .max_age(Duration::from_secs(12 * 60 * 60));

    Router::new()
        .nest("/api/v1", routes::api_routes().layer(cors))
        .route("/ping", get(routes::ping))
        .fallback(routes::not_found)
        .layer(middleware::from_fn(routes::request_context))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl+C or SIGTERM.
pub async fn serve(address: &str, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Received exit signal, shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::models::SearchParams;
    use crate::services::JobService;
    use crate::storage::{JobStore, LoadReport};

    fn empty_app() -> Router {
        let report = LoadReport {
            source: "memory".to_string(),
            job_count: 0,
            skipped_rows: 0,
            loaded_at: Utc::now(),
        };
        let service = JobService::new(Arc::new(JobStore::default()), SearchParams::default());
        create_app(Arc::new(AppState::new(service, report)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String, bool) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let has_request_id = response.headers().contains_key("x-request-id");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), has_request_id)
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body, has_request_id) = get(empty_app(), "/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "pong");
        assert!(has_request_id);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body, _) = get(empty_app(), "/api/v2/nothing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("\"developer_message\""));
    }

    #[tokio::test]
    async fn test_empty_store_nearby_all_placeholders() {
        let (status, body, _) = get(empty_app(), "/api/v1/jobs/nearby?lat=0&lng=0").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let available = json["available_jobs"].as_array().unwrap();
        let nearest = json["nearest_jobs"].as_array().unwrap();
        assert_eq!(available.len(), 5);
        assert_eq!(nearest.len(), 3);
        assert!(available.iter().chain(nearest).all(|j| j["id"] == "#"));
    }
}
