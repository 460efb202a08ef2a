//! # Question Handlers
//!
//! `POST /questions`, `GET /questions`, and `GET|PUT|DELETE /questions/{id}`.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::get,
    Router,
};

use crate::model::{DocumentId, Question, QuestionDetails};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{StoreContext, StoreError};

use super::decode_json;
use super::errors::{RestError, RestResult};
use super::parser::parse_question_query;
use super::response::ApiResponse;

/// Create question routes
pub fn question_routes() -> Router<StoreContext> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route(
            "/questions/:id",
            get(get_question).put(update_question).delete(delete_question),
        )
}

async fn create_question(
    State(store): State<StoreContext>,
    body: Bytes,
) -> RestResult<ApiResponse<Question>> {
    let details: QuestionDetails = decode_json(&body)?;
    let question = Question::new(details);

    store
        .questions
        .insert(&question)
        .await
        .map_err(RestError::store("insert question"))?;

    let id = question.id.to_hex();
    log_event_with_fields(Event::QuestionCreated, &[("id", id.as_str())]);
    Ok(ApiResponse::Created(question))
}

async fn list_questions(
    State(store): State<StoreContext>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<ApiResponse<Vec<Question>>> {
    let query = parse_question_query(&params)?;

    let questions = store
        .questions
        .find(&query)
        .await
        .map_err(RestError::store("list questions"))?;

    if questions.is_empty() {
        return Err(RestError::NoMatch("question"));
    }

    Ok(ApiResponse::Ok(questions))
}

async fn get_question(
    State(store): State<StoreContext>,
    Path(id): Path<String>,
) -> RestResult<ApiResponse<Question>> {
    let id = DocumentId::parse(&id)?;
    let question = find_question(&store, id).await?;
    Ok(ApiResponse::Ok(question))
}

async fn update_question(
    State(store): State<StoreContext>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<ApiResponse<Question>> {
    let id = DocumentId::parse(&id)?;
    let details: QuestionDetails = decode_json(&body)?;

    let question = store
        .questions
        .replace_details(id, &details)
        .await
        .map_err(RestError::store("update question"))?
        .ok_or(RestError::NotFound("question"))?;

    let id = question.id.to_hex();
    log_event_with_fields(Event::QuestionUpdated, &[("id", id.as_str())]);
    Ok(ApiResponse::Ok(question))
}

async fn delete_question(
    State(store): State<StoreContext>,
    Path(id): Path<String>,
) -> RestResult<ApiResponse<()>> {
    let id = DocumentId::parse(&id)?;

    // Look up first so a missing document is a 404, not a failed delete
    find_question(&store, id).await?;

    let deleted = store
        .questions
        .delete(id)
        .await
        .map_err(RestError::store("delete question"))?;
    if !deleted {
        return Err(RestError::store("delete question")(StoreError::NotDeleted(
            id.to_hex(),
        )));
    }

    let id = id.to_hex();
    log_event_with_fields(Event::QuestionDeleted, &[("id", id.as_str())]);
    Ok(ApiResponse::NoContent)
}

async fn find_question(store: &StoreContext, id: DocumentId) -> RestResult<Question> {
    store
        .questions
        .find_by_id(id)
        .await
        .map_err(RestError::store("fetch question"))?
        .ok_or(RestError::NotFound("question"))
}
