//! # REST API Errors
//!
//! Every handler failure ends up here: it is logged once with its full
//! detail, then answered with a status code and a short message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::IdError;
use crate::observability::{Event, Logger};
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed JSON request body
    #[error("invalid request body")]
    InvalidPayload(String),

    /// Malformed path identifier
    #[error("invalid id")]
    InvalidIdentifier(String),

    /// Malformed query parameter
    #[error("invalid value for '{name}'")]
    InvalidParameter { name: &'static str, reason: String },

    /// No document with the requested id
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A list query matched nothing
    #[error("{0} not found")]
    NoMatch(&'static str),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Database failure while performing `action`
    #[error("failed to {action}")]
    Store {
        action: &'static str,
        source: StoreError,
    },
}

impl RestError {
    /// Wrap a store failure with the action that was attempted
    pub fn store(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| RestError::Store { action, source }
    }

    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        RestError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidPayload(_)
            | RestError::InvalidIdentifier(_)
            | RestError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) | RestError::NoMatch(_) => StatusCode::NOT_FOUND,
            RestError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side detail, never sent to clients
    pub fn detail(&self) -> String {
        match self {
            RestError::InvalidPayload(reason) => reason.clone(),
            RestError::InvalidIdentifier(id) => format!("{:?} is not a valid ObjectId", id),
            RestError::InvalidParameter { reason, .. } => reason.clone(),
            RestError::NotFound(resource) => format!("no {} with that id", resource),
            RestError::NoMatch(resource) => format!("no {}s matched the query", resource),
            RestError::Store { source, .. } => source.to_string(),
        }
    }

    fn log(&self) {
        let status = self.status_code();
        let code = status.as_u16().to_string();
        let message = self.to_string();
        let detail = self.detail();
        let fields = [
            ("status", code.as_str()),
            ("message", message.as_str()),
            ("detail", detail.as_str()),
        ];

        if status.is_server_error() {
            Logger::error(Event::RequestFailed.as_str(), &fields);
        } else {
            Logger::warn(Event::RequestFailed.as_str(), &fields);
        }
    }
}

impl From<IdError> for RestError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::InvalidIdentifier(text) => RestError::InvalidIdentifier(text),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::InvalidPayload(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
