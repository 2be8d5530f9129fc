use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body returned by every handler: `{"error": <title>, "detail": <context>: <message>}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: impl Into<String>) -> Self {
        Self { status, title, detail: detail.into() }
    }

    /// Map a service failure onto its HTTP status, prefixing the message with `context`.
    pub fn from_service(err: ServiceError, context: &str) -> Self {
        let (status, title) = match &err {
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not found"),
            ServiceError::ColorNotOfferedByModel { .. } => (StatusCode::BAD_REQUEST, "Referential constraint violated"),
            ServiceError::AlreadyTaken { .. } => (StatusCode::BAD_REQUEST, "Already taken"),
            ServiceError::PurchaseDeadlinePassed { .. } => (StatusCode::BAD_REQUEST, "Purchase deadline passed"),
            ServiceError::Model(ModelError::Range(_)) => (StatusCode::UNPROCESSABLE_ENTITY, "Out of range"),
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Validation error")
            }
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Database error")
            }
            ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        Self::new(status, title, format!("{context}: {err}"))
    }

    pub fn context(context: &'static str) -> impl Fn(ServiceError) -> Self {
        move |err| Self::from_service(err, context)
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        Self::from_service(err, "Request failed")
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation error", rejection.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation error", rejection.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = %self.detail, "request failed");
        }
        let body = ErrorBody { error: self.title.to_string(), detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn maps_service_errors_to_statuses() {
        let cases = [
            (ServiceError::not_found("Car", Uuid::nil()), StatusCode::NOT_FOUND),
            (ServiceError::already_taken("Brand", "name", "Tesla"), StatusCode::BAD_REQUEST),
            (
                ServiceError::ColorNotOfferedByModel { model: "Model 3".into(), color: "Green".into(), offered: vec![] },
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::PurchaseDeadlinePassed { car_id: Uuid::nil(), deadline: NaiveDate::MIN },
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::Model(ModelError::Range("late".into())), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Db("fk".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ServiceError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from_service(err, "ctx").status, status);
        }
        let converted: JsonApiError = ServiceError::Unauthorized.into();
        assert_eq!(converted.detail, "Request failed: invalid credentials");
    }

    #[test]
    fn detail_carries_context_prefix() {
        let id = Uuid::nil();
        let err = JsonApiError::from_service(ServiceError::not_found("Model", id), "Failed to create car");
        assert_eq!(err.title, "Not found");
        assert_eq!(err.detail, format!("Failed to create car: Model with ID: {id} does not exist."));
    }
}
