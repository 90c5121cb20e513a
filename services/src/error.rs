use sea_orm::DbErr;

/// Failures surfaced by the section and pick services.
///
/// Every variant maps onto an HTTP-equivalent status through [`ServiceError::status_code`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required form field was absent. Carries the user-facing message.
    #[error("{0}")]
    MissingField(&'static str),

    #[error("Invalid weekday name.")]
    InvalidWeekday,

    /// The referenced section does not exist (or the id was not a number).
    #[error("Invalid section id.")]
    SectionNotFound,

    #[error("Invalid user id.")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::MissingField(_) | ServiceError::InvalidWeekday => 400,
            ServiceError::SectionNotFound | ServiceError::UserNotFound => 410,
            ServiceError::Database(_) => 500,
        }
    }

    /// Message safe to show to the client; database details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Database(_) => "Internal server error.".to_owned(),
            other => other.to_string(),
        }
    }
}
