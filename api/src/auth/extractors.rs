use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::{TypedHeader, extract::CookieJar};
use headers::{Authorization, authorization::Bearer};

use crate::auth::{claims::AuthUser, decode_session};

/// Cookie carrying the session token for browser requests.
pub const SESSION_COOKIE: &str = "session";

/// Implements extraction of `AuthUser` from request headers.
///
/// The session token is read from an `Authorization: Bearer` header, or from
/// the `session` cookie when no header is present, and verified against
/// `JWT_SECRET`.
///
/// # Errors
/// - Returns `401 Unauthorized` if no token is present, or it is invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned());

        let token = match bearer {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_owned())
                .ok_or((StatusCode::UNAUTHORIZED, "Missing session token"))?,
        };

        let claims = decode_session(&token)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

        Ok(AuthUser(claims))
    }
}
