use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn index() -> impl IntoResponse {
    (StatusCode::OK, "headwall")
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse { status: "healthy", version: env!("CARGO_PKG_VERSION") }),
    )
}
