use crate::{
    auth::AuthUser,
    response::ApiResponse,
    routes::sections::common::{DeleteParams, SectionParams},
    views::{self, PageContext},
};
use axum::{
    Extension, Form,
    extract::{Query, State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use services::{pick_service::PickService, section_service::SectionService};
use std::collections::HashMap;
use util::state::AppState;

/// POST /sections/pick
///
/// Replaces the caller's ratings with one rating per existing section.
/// The submitted `rating<section_id>` fields are accepted but their values
/// are not stored.
///
/// ### Responses
/// - `200 OK` thank-you page
/// - `410 Gone` the session's user no longer exists
/// - `500 Internal Server Error`
pub async fn record_picks(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let submitted = form.map(|Form(fields)| fields).unwrap_or_default();

    match PickService::record_picks(app_state.db(), claims.sub, &submitted).await {
        Ok(ratings) => {
            views::pick_thanks(&PageContext::for_session(&claims), ratings.len()).into_response()
        }
        Err(err) => views::error_page(&err),
    }
}

/// POST /sections/change
///
/// Creates a section, or updates it when `id` is given.
///
/// ### Fields (query string or URL-encoded body, body wins)
/// - `weekday` (required, any casing of a day name)
/// - `time` (required)
/// - `id` (optional; empty means create)
///
/// ### Responses
/// - `200 OK` `{ "status": 200, "data": <section_id> }`
/// - `400 Bad Request` missing field or unknown weekday
/// - `410 Gone` `id` does not name a section
pub async fn change_section(
    State(app_state): State<AppState>,
    Query(query): Query<SectionParams>,
    body: Result<Form<SectionParams>, FormRejection>,
) -> ApiResponse<i64> {
    let body = body.map(|Form(params)| params).unwrap_or_default();
    let params = SectionParams::merge(query, body);

    match SectionService::save(app_state.db(), params.into()).await {
        Ok(section) => ApiResponse::success(section.id),
        Err(err) => err.into(),
    }
}

/// POST /sections/delete
///
/// Deletes one section and every rating pointing at it.
///
/// ### Responses
/// - `200 OK` `{ "status": 200, "data": null }`
/// - `400 Bad Request` `id` missing
/// - `410 Gone` no section with that id
pub async fn delete_section(
    State(app_state): State<AppState>,
    Query(query): Query<DeleteParams>,
    body: Result<Form<DeleteParams>, FormRejection>,
) -> ApiResponse<()> {
    let body = body.map(|Form(params)| params).unwrap_or_default();
    let params = DeleteParams::merge(query, body);

    match SectionService::delete(app_state.db(), params.id).await {
        Ok(()) => ApiResponse::success(()),
        Err(err) => err.into(),
    }
}
