use crate::{
    auth::AuthUser,
    views::{self, PageContext},
};
use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
use services::section_service::SectionService;
use util::state::AppState;

/// GET /sections/pick
///
/// Renders the pick form: every section, grouped by weekday (Sunday first)
/// and ordered by time within each day.
///
/// ### Responses
/// - `200 OK` HTML page
/// - `500 Internal Server Error` HTML error page
pub async fn list_pickable_sections(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match SectionService::list_by_weekday(app_state.db()).await {
        Ok(days) => views::pick_sections(&PageContext::for_session(&claims), &days).into_response(),
        Err(err) => views::error_page(&err),
    }
}

/// GET /sections/manage
///
/// Admin listing of every section with the change and delete forms.
pub async fn manage_sections(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match SectionService::list_by_weekday(app_state.db()).await {
        Ok(days) => {
            views::manage_sections(&PageContext::for_session(&claims), &days).into_response()
        }
        Err(err) => views::error_page(&err),
    }
}
