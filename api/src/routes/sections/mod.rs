//! `/sections` route group.
//!
//! | Route | Guard |
//! |---|---|
//! | `GET /pick` | any session |
//! | `POST /pick` | authcode session of an existing user, CSRF |
//! | `GET /manage` | admin session |
//! | `POST /change` | admin session, CSRF |
//! | `POST /delete` | admin session, CSRF |

use crate::auth::guards::{allow_admin, allow_authcode_user, allow_user};
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::{list_pickable_sections, manage_sections};
use post::{change_section, delete_section, record_picks};

pub fn section_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/pick",
            get(list_pickable_sections).route_layer(from_fn(allow_user)),
        )
        .route(
            "/pick",
            post(record_picks).route_layer(from_fn_with_state(app_state, allow_authcode_user)),
        )
        .route(
            "/manage",
            get(manage_sections).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/change",
            post(change_section).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/delete",
            post(delete_section).route_layer(from_fn(allow_admin)),
        )
}
