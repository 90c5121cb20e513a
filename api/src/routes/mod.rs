//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/sections` → Section picking (signed-in users) and section management (admins).
//!   Each route carries its own guard; see [`sections`].

use crate::routes::{health::health_routes, sections::section_routes};
use axum::Router;
use util::state::AppState;

pub mod health;
pub mod sections;

/// Builds the complete application router.
///
/// The returned router still expects `AppState`; the caller supplies it with
/// `with_state` after adding outer layers.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/sections", section_routes(app_state))
}
