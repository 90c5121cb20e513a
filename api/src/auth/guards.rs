//! Authorization gate for the section routes.
//!
//! Each guard runs the same ordered checks and stops at the first failure:
//! 1. the request carries a valid session,
//! 2. the session is of the required kind (authcode user or password admin),
//! 3. the CSRF token matches the session (state-changing methods only).
//!
//! The checks are plain `Result`-returning functions; the `allow_*`
//! middleware compose them for use with `route_layer`.

use crate::auth::claims::{AuthUser, SessionKind};
use crate::auth::csrf::{CSRF_FIELD, CSRF_HEADER, verify_csrf_token};
use crate::response::ApiResponse;
use axum::{
    body::{Body, to_bytes},
    extract::{FromRequestParts, State},
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use db::models::authcode_user::Model as AuthcodeUserModel;
use util::state::AppState;

/// Largest form body buffered while looking for the CSRF field.
const MAX_FORM_BYTES: usize = 64 * 1024;

type Rejection = ApiResponse<()>;

/// Extracts the session, validates it and stores it in the request extensions
/// for handlers to pick up through `Extension<AuthUser>`.
pub async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), Rejection> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| ApiResponse::error(StatusCode::UNAUTHORIZED, "Authentication required"))?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Fails unless the session was issued by the given login flow.
pub fn require_kind(user: &AuthUser, kind: SessionKind) -> Result<(), Rejection> {
    if user.0.kind == kind {
        return Ok(());
    }
    let message = match kind {
        SessionKind::Authcode => "Authcode login required",
        SessionKind::Password => "Admin access required",
    };
    Err(ApiResponse::error(StatusCode::FORBIDDEN, message))
}

/// Fails unless the authcode user behind the session still exists.
pub async fn require_known_user(app_state: &AppState, user: &AuthUser) -> Result<(), Rejection> {
    match AuthcodeUserModel::find(app_state.db(), user.0.sub).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ApiResponse::error(StatusCode::FORBIDDEN, "Unknown user")),
        Err(e) => {
            tracing::warn!(error = %e, user_id = user.0.sub, "DB error while loading session user; denying access");
            Err(ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.",
            ))
        }
    }
}

fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

/// Checks the CSRF token of a state-changing request.
///
/// The `X-CSRF-Token` header wins; otherwise a URL-encoded body is buffered,
/// searched for `csrf_token` and handed on intact.
pub async fn require_csrf(req: Request<Body>, user: &AuthUser) -> Result<Request<Body>, Rejection> {
    let invalid = || ApiResponse::error(StatusCode::FORBIDDEN, "Invalid CSRF token");

    if is_safe_method(req.method()) {
        return Ok(req);
    }

    if let Some(token) = req.headers().get(CSRF_HEADER) {
        let valid = token
            .to_str()
            .is_ok_and(|token| verify_csrf_token(&user.0, token));
        return if valid { Ok(req) } else { Err(invalid()) };
    }

    if !is_form(req.headers()) {
        return Err(invalid());
    }

    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|_| ApiResponse::error(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"))?;

    let valid = url::form_urlencoded::parse(&bytes)
        .find(|(key, _)| key == CSRF_FIELD)
        .is_some_and(|(_, token)| verify_csrf_token(&user.0, &token));

    if valid {
        Ok(Request::from_parts(parts, Body::from(bytes)))
    } else {
        Err(invalid())
    }
}

/// Any signed-in user.
pub async fn allow_user(req: Request<Body>, next: Next) -> Result<Response, Rejection> {
    let (req, user) = extract_and_insert_authuser(req).await?;
    let req = require_csrf(req, &user).await?;

    Ok(next.run(req).await)
}

/// Users signed in through the authcode flow whose account still exists.
pub async fn allow_authcode_user(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Rejection> {
    let (req, user) = extract_and_insert_authuser(req).await?;
    require_kind(&user, SessionKind::Authcode)?;
    require_known_user(&app_state, &user).await?;
    let req = require_csrf(req, &user).await?;

    Ok(next.run(req).await)
}

/// Admin-only guard: password sessions.
pub async fn allow_admin(req: Request<Body>, next: Next) -> Result<Response, Rejection> {
    let (req, user) = extract_and_insert_authuser(req).await?;
    require_kind(&user, SessionKind::Password)?;
    let req = require_csrf(req, &user).await?;

    Ok(next.run(req).await)
}
