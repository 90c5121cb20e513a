#[cfg(test)]
mod tests {
    use crate::helpers::{TestSession, app::TEST_JWT_SECRET};
    use api::auth::{AuthUser, Claims, SessionKind};
    use axum::{extract::FromRequestParts, http::{Request, StatusCode}};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serial_test::serial;
    use util::config::AppConfig;

    fn parts_with(header: (&str, String)) -> axum::http::request::Parts {
        Request::builder()
            .header(header.0, header.1)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    #[serial]
    async fn test_valid_bearer_token() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let session = TestSession::admin(5);

        let mut parts = parts_with(("Authorization", session.bearer()));
        let AuthUser(claims) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(claims.sub, 5);
        assert_eq!(claims.kind, SessionKind::Password);
    }

    #[tokio::test]
    #[serial]
    async fn test_session_cookie() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let session = TestSession::authcode(8);

        let mut parts = parts_with(("Cookie", format!("theme=dark; session={}", session.token)));
        let AuthUser(claims) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(claims.sub, 8);
        assert_eq!(claims.kind, SessionKind::Authcode);
    }

    #[tokio::test]
    #[serial]
    async fn test_wrong_secret_is_rejected() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let claims = Claims {
            sub: 1,
            exp: 4_000_000_000,
            kind: SessionKind::Password,
        };
        let forged = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"not-the-secret")).unwrap();

        let mut parts = parts_with(("Authorization", format!("Bearer {forged}")));
        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();

        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_expired_token_is_rejected() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let claims = Claims {
            sub: 1,
            exp: 1_000,
            kind: SessionKind::Authcode,
        };
        let stale = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap();

        let mut parts = parts_with(("Authorization", format!("Bearer {stale}")));
        assert!(AuthUser::from_request_parts(&mut parts, &()).await.is_err());
    }
}
