use crate::response::ApiResponse;
use axum::{Router, response::IntoResponse, routing::get};
use util::state::AppState;

/// Builds the `/health` route group.
///
/// A single public `GET /health` used by deployment probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": 200, "data": "OK" }
/// ```
async fn health_check() -> impl IntoResponse {
    ApiResponse::success("OK")
}
