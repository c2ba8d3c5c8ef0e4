//! Mapping of turn failures onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tides_error::{ErrorClass, TidesError};

/// HTTP status for an error class.
pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::InvalidBody => StatusCode::BAD_REQUEST,
        ErrorClass::MissingConfig => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorClass::UpstreamFailure => StatusCode::BAD_GATEWAY,
        ErrorClass::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorClass::Busy => StatusCode::CONFLICT,
    }
}

/// Failure body of the play endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable description
    pub error: String,
    /// Stable failure class, e.g. `upstream-failure`
    pub class: String,
}

/// An error ready to be sent to the caller.
#[derive(Debug)]
pub struct ApiError {
    class: ErrorClass,
    message: String,
}

impl ApiError {
    /// The failure class.
    pub fn class(&self) -> ErrorClass {
        self.class
    }

    /// The message sent to the caller.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TidesError> for ApiError {
    fn from(err: TidesError) -> Self {
        Self {
            class: err.class(),
            message: err.public_message(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "Invalid JSON body.".to_string(),
            JsonRejection::JsonDataError(e) => format!(
                "Request body must include history[] and playerInput. {}",
                e.body_text()
            ),
            other => format!("Invalid JSON body. {}", other.body_text()),
        };
        Self {
            class: ErrorClass::InvalidBody,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.class);
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), class = %self.class, "{}", self.message);
        } else {
            tracing::warn!(status = status.as_u16(), class = %self.class, "{}", self.message);
        }
        let body = ErrorBody {
            error: self.message,
            class: self.class.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
