//! # Category Handlers
//!
//! `POST /categories`, `GET /categories`, and `GET|PUT|DELETE /categories/{id}`.
//! The list is always a full scan; an empty collection is an empty array.

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::model::{Category, CategoryDetails, DocumentId};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{StoreContext, StoreError};

use super::decode_json;
use super::errors::{RestError, RestResult};
use super::response::ApiResponse;

/// Create category routes
pub fn category_routes() -> Router<StoreContext> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

async fn create_category(
    State(store): State<StoreContext>,
    body: Bytes,
) -> RestResult<ApiResponse<Category>> {
    let details: CategoryDetails = decode_json(&body)?;
    let category = Category::new(details);

    store
        .categories
        .insert(&category)
        .await
        .map_err(RestError::store("insert category"))?;

    let id = category.id.to_hex();
    log_event_with_fields(Event::CategoryCreated, &[("id", id.as_str())]);
    Ok(ApiResponse::Created(category))
}

async fn list_categories(State(store): State<StoreContext>) -> RestResult<ApiResponse<Vec<Category>>> {
    let categories = store
        .categories
        .find_all()
        .await
        .map_err(RestError::store("list categories"))?;

    Ok(ApiResponse::Ok(categories))
}

async fn get_category(
    State(store): State<StoreContext>,
    Path(id): Path<String>,
) -> RestResult<ApiResponse<Category>> {
    let id = DocumentId::parse(&id)?;
    Ok(ApiResponse::Ok(find_category(&store, id).await?))
}

async fn update_category(
    State(store): State<StoreContext>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<ApiResponse<Category>> {
    let id = DocumentId::parse(&id)?;
    let details: CategoryDetails = decode_json(&body)?;

    let category = store
        .categories
        .rename(id, &details.name)
        .await
        .map_err(RestError::store("update category"))?
        .ok_or(RestError::NotFound("category"))?;

    let id = category.id.to_hex();
    log_event_with_fields(Event::CategoryUpdated, &[("id", id.as_str())]);
    Ok(ApiResponse::Ok(category))
}

async fn delete_category(
    State(store): State<StoreContext>,
    Path(id): Path<String>,
) -> RestResult<ApiResponse<()>> {
    let id = DocumentId::parse(&id)?;
    find_category(&store, id).await?;

    let deleted = store
        .categories
        .delete(id)
        .await
        .map_err(RestError::store("delete category"))?;
    if !deleted {
        return Err(RestError::store("delete category")(StoreError::NotDeleted(
            id.to_hex(),
        )));
    }

    let id = id.to_hex();
    log_event_with_fields(Event::CategoryDeleted, &[("id", id.as_str())]);
    Ok(ApiResponse::NoContent)
}

async fn find_category(store: &StoreContext, id: DocumentId) -> RestResult<Category> {
    store
        .categories
        .find_by_id(id)
        .await
        .map_err(RestError::store("fetch category"))?
        .ok_or(RestError::NotFound("category"))
}
