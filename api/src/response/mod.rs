use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::ServiceError;

/// Standardized JSON body for the AJAX endpoints.
///
/// The `status` field always equals the HTTP status code of the response:
///
/// ```json
/// { "status": 200, "data": 17 }
/// ```
///
/// ```json
/// { "status": 410, "message": "Invalid section id." }
/// ```
///
/// Successful responses always carry `data`, even when it is `null`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T>
where
    T: Serialize,
{
    Success { status: u16, data: T },
    Error { status: u16, message: String },
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// `200` with the given payload.
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            status: StatusCode::OK.as_u16(),
            data,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse::Error {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        let code = match self {
            ApiResponse::Success { status, .. } | ApiResponse::Error { status, .. } => *status,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl<T> From<ServiceError> for ApiResponse<T>
where
    T: Serialize,
{
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database failure while handling request")
            }
            other => tracing::warn!(error = %other, "Request rejected"),
        }
        ApiResponse::Error {
            status: err.status_code(),
            message: err.public_message(),
        }
    }
}
