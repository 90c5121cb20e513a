//! Session-bound CSRF tokens.
//!
//! A token is the hex HMAC-SHA256 of the session's identity under the server
//! secret, so it needs no storage and dies with the session it belongs to.

use super::claims::Claims;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use util::config;

type HmacSha256 = Hmac<Sha256>;

/// Header checked first on state-changing requests.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// URL-encoded form field checked when the header is absent.
pub const CSRF_FIELD: &str = "csrf_token";

fn session_mac(claims: &Claims) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(config::jwt_secret().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(format!("csrf:{}:{}:{}", claims.sub, claims.kind, claims.exp).as_bytes());
    mac
}

/// The token a client must echo back for the session described by `claims`.
pub fn csrf_token_for(claims: &Claims) -> String {
    hex::encode(session_mac(claims).finalize().into_bytes())
}

/// Constant-time check of a submitted token against the session.
pub fn verify_csrf_token(claims: &Claims, token: &str) -> bool {
    match hex::decode(token.trim()) {
        Ok(bytes) => session_mac(claims).verify_slice(&bytes).is_ok(),
        Err(_) => false,
    }
}
