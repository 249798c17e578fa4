pub mod subject;

use axum::{
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::service::SubjectService;

/// Shared handler state: the fully composed service chain.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn SubjectService>,
}

/// Builds the application router over a composed service chain.
pub fn router(service: Arc<dyn SubjectService>) -> Router {
    Router::new()
        .route("/subjects", get(subject::get_subjects))
        .route(
            "/subject",
            post(subject::post_subject).put(subject::put_subject),
        )
        .route("/subject/:id", delete(subject::delete_subject))
        .route("/metrics", get(metrics))
        .layer(axum::middleware::from_fn(middleware::access_control))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

/// Prometheus scrape endpoint, unauthenticated.
async fn metrics() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather(),
    )
}
