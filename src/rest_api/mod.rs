//! # quizdb REST API Module
//!
//! CRUD endpoints for the `questions` and `categories` collections. Handlers
//! share a [`StoreContext`] through router state and never see the driver.

pub mod categories;
pub mod errors;
pub mod parser;
pub mod questions;
pub mod response;

use axum::Router;
use serde::de::DeserializeOwned;

use crate::store::StoreContext;

pub use categories::category_routes;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use parser::parse_question_query;
pub use questions::question_routes;
pub use response::ApiResponse;

/// All resource routes, bound to the given store
pub fn api_routes(store: StoreContext) -> Router {
    Router::new()
        .merge(question_routes())
        .merge(category_routes())
        .with_state(store)
}

/// Decode a JSON request body
///
/// The body is read regardless of `Content-Type`; only its contents decide
/// whether the payload is valid.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> RestResult<T> {
    Ok(serde_json::from_slice(body)?)
}
