use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;

/// Wire form of a failed store operation: the error's display string under an
/// `error` key, with the status implied by the variant.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::EmptyBody | ServiceError::InvalidJson | ServiceError::Validation => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(serde_json::json!({"error": self.0.to_string()}))).into_response()
    }
}
