use thiserror::Error;

/// Failures surfaced by store operations. The Display strings are the exact
/// messages the HTTP layer puts on the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Request body is empty")]
    EmptyBody,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Missing course ID or title")]
    Validation,
    #[error("Course not found")]
    NotFound,
}
