use serde::{Deserialize, Serialize};
use std::fmt;

/// How the session holder signed in.
///
/// `Authcode` sessions come from the external code-based login used by
/// students; `Password` sessions belong to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Authcode,
    Password,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Authcode => f.write_str("authcode"),
            SessionKind::Password => f.write_str("password"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Session user id.
    pub sub: i64,
    pub exp: usize,
    pub kind: SessionKind,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
