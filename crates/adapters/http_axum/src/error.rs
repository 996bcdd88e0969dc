//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use filpilote_domain::error::{FilPiloteError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`FilPiloteError`] to an HTTP response with appropriate status code.
pub struct ApiError(FilPiloteError);

impl From<FilPiloteError> for ApiError {
    fn from(err: FilPiloteError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FilPiloteError::Validation(err @ ValidationError::DuplicateName(_)) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            FilPiloteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            FilPiloteError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            FilPiloteError::LineReservation { source, .. } => {
                tracing::warn!(error = %source, "line reservation refused");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            FilPiloteError::Line(err) => {
                tracing::error!(error = %err, "line controller error");
                (
                    StatusCode::BAD_GATEWAY,
                    "line controller unavailable".to_string(),
                )
            }
            FilPiloteError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filpilote_domain::error::NotFoundError;

    fn status(err: FilPiloteError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn should_map_duplicate_name_to_conflict() {
        let err = ValidationError::DuplicateName("firstfloor".to_string()).into();
        assert_eq!(status(err), StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_invalid_mode_to_bad_request() {
        let err = ValidationError::InvalidMode("amode".to_string()).into();
        assert_eq!(status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found() {
        let err = NotFoundError {
            entity: "Area",
            id: "x".to_string(),
        }
        .into();
        assert_eq!(status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_reservation_failure_to_bad_gateway() {
        let err = FilPiloteError::LineReservation {
            line: "GPIO1".to_string(),
            source: "busy".into(),
        };
        assert_eq!(status(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn should_hide_storage_details() {
        let err = FilPiloteError::Storage("disk unavailable".into());
        assert_eq!(status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
