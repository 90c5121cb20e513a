pub mod error;
pub mod pick_service;
pub mod section_days;
pub mod section_service;

pub use error::ServiceError;
