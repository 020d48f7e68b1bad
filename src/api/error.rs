use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::api::types::{ErrorResponse, FieldErrorResponse};
use crate::error::SportEventsError;

const VALIDATION_FAILED_MESSAGE: &str = "Validation Failed!";
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred!";
const UNEXPECTED_ERROR_DETAIL: &str = "An unexpected error occurred while processing your request!";

/// Problem response returned by every API handler
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: String,
    pub errors: Vec<FieldErrorResponse>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            detail: detail.into(),
            errors: Vec::new(),
        }
    }

    /// A query or path parameter that could not be converted
    pub fn invalid_parameter(name: &str, detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid value for parameter: {}", name),
            detail,
        )
    }
}

impl From<SportEventsError> for ApiError {
    fn from(err: SportEventsError) -> Self {
        match err {
            SportEventsError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "No record found!", err.to_string())
            }
            SportEventsError::InvalidTransition { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                "Invalid status change",
                err.to_string(),
            ),
            SportEventsError::Conflict(detail) => {
                Self::new(StatusCode::CONFLICT, "Conflicting update", detail)
            }
            SportEventsError::Validation(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                title: VALIDATION_FAILED_MESSAGE.to_string(),
                detail: "One or more fields are invalid!".to_string(),
                errors: errors.into_iter().map(Into::into).collect(),
            },
            other => {
                error!("Request failed: {}", other);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNEXPECTED_ERROR_MESSAGE,
                    UNEXPECTED_ERROR_DETAIL,
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid Request Body",
            format!("Invalid request body. {}", rejection.body_text()),
        )
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_parameter("id", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let detail = rejection.body_text();
        let name = rejected_parameter(&detail).unwrap_or("query").to_string();
        Self::invalid_parameter(&name, detail)
    }
}

/// serde names the offending field in backticks, e.g. "duplicate field `type`".
fn rejected_parameter(detail: &str) -> Option<&str> {
    let (_, rest) = detail.split_once('`')?;
    let (name, _) = rest.split_once('`')?;
    Some(name).filter(|n| !n.is_empty())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            title: self.title,
            status: self.status.as_u16(),
            detail: self.detail,
            errors: self.errors,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RejectionReason, SportEventStatus};
    use crate::error::FieldError;

    #[test]
    fn test_not_found_maps_to_404() {
        let api: ApiError = SportEventsError::event_not_found(999).into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.title, "No record found!");
        assert_eq!(api.detail, "No Sport Event was found by id with value '999'");
    }

    #[test]
    fn test_invalid_transition_maps_to_400_with_reason() {
        let api: ApiError = SportEventsError::InvalidTransition {
            current: SportEventStatus::Active,
            requested: Some(SportEventStatus::Active),
            reason: RejectionReason::AlreadyInStatus(SportEventStatus::Active),
        }
        .into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.detail, "Event is already ACTIVE");
    }

    #[test]
    fn test_validation_carries_field_errors() {
        let api: ApiError =
            SportEventsError::Validation(vec![FieldError::new("name", "Name must not be blank")])
                .into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.title, "Validation Failed!");
        assert_eq!(api.errors.len(), 1);
        assert_eq!(api.errors[0].field, "name");
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let api: ApiError =
            SportEventsError::Conflict("Sport event 4 changed status concurrently".into()).into();
        assert_eq!(api.status, StatusCode::CONFLICT);
        assert_eq!(api.detail, "Sport event 4 changed status concurrently");
        assert_eq!(api.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_rejected_parameter_is_read_from_serde_message() {
        assert_eq!(
            rejected_parameter("Failed to deserialize query string: duplicate field `type`"),
            Some("type")
        );
        assert_eq!(rejected_parameter("Failed to deserialize query string"), None);
        assert_eq!(rejected_parameter("empty ``"), None);
    }

    #[test]
    fn test_internal_errors_are_not_echoed() {
        let api: ApiError = SportEventsError::Internal("db password is hunter2".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.detail.contains("hunter2"));
    }
}
