//! # Response Formatting
//!
//! Successful replies carry the bare entity or list as JSON; deletes reply
//! with an empty 204.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Successful API reply
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// 200 with body
    Ok(T),
    /// 201 with the created entity
    Created(T),
    /// 204, no body
    NoContent,
}

impl<T> ApiResponse<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiResponse::Ok(_) => StatusCode::OK,
            ApiResponse::Created(_) => StatusCode::CREATED,
            ApiResponse::NoContent => StatusCode::NO_CONTENT,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiResponse::Ok(body) | ApiResponse::Created(body) => {
                (status, Json(body)).into_response()
            }
            ApiResponse::NoContent => status.into_response(),
        }
    }
}
