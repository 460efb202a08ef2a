//! Question API Tests
//!
//! Exercises `/questions` end to end through the router against the
//! in-memory store: creation, lookup, replacement, deletion, and the
//! category/limit/random listing parameters.

mod common;

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{create_question, get, question_body, send, send_raw, test_app};

const MISSING_ID: &str = "5f1d7b3e9c1e4b2a3c4d5e6f";

// =============================================================================
// Create / Read
// =============================================================================

#[tokio::test]
async fn test_create_echoes_fields_and_assigns_id() {
    let app = test_app();
    let body = question_body("2 + 2 = 4?", &["math"]);

    let (status, created) = send(&app, Method::POST, "/questions", Some(body.clone())).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["_id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(created["question"], body);
}

#[tokio::test]
async fn test_get_returns_created_question() {
    let app = test_app();
    let id = create_question(&app, "Is water wet?", &["science"]).await;

    let (status, fetched) = get(&app, &format!("/questions/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["_id"], id.as_str());
    assert_eq!(fetched["question"]["description"], "Is water wet?");
    assert_eq!(fetched["question"]["options"][1]["explanation"], "it is not");
}

#[tokio::test]
async fn test_create_fills_missing_fields_with_defaults() {
    let app = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"description": "bare"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["question"]["categories"], json!([]));
    assert_eq!(created["question"]["allow_multiple"], false);
    assert_eq!(created["question"]["options"], json!([]));
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = test_app();

    let (status, body) = send_raw(&app, Method::POST, "/questions", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["error"], "invalid request body");
}

#[tokio::test]
async fn test_create_rejects_wrong_field_type() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"allow_multiple": "sometimes"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_invalid_id_is_bad_request() {
    let app = test_app();

    for bad in ["abc", "zzzzzzzzzzzzzzzzzzzzzzzz", "5f1d7b3e9c1e4b2a3c4d5e6f00"] {
        let (status, body) = get(&app, &format!("/questions/{}", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {:?}", bad);
        assert_eq!(body["error"], "invalid id");
    }
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let app = test_app();

    let (status, body) = get(&app, &format!("/questions/{}", MISSING_ID)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "question not found");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_replaces_only_target() {
    let app = test_app();
    let first = create_question(&app, "first", &["math"]).await;
    let second = create_question(&app, "second", &["math"]).await;

    let replacement = json!({
        "description": "first, revised",
        "difficulty": "hard",
        "categories": ["history"],
        "options": [{"option_text": "maybe"}]
    });
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/questions/{}", first),
        Some(replacement),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["_id"], first.as_str());
    assert_eq!(updated["question"]["description"], "first, revised");
    assert_eq!(updated["question"]["categories"], json!(["history"]));
    assert_eq!(updated["question"]["options"][0]["is_correct"], false);
    // Full replacement: fields absent from the body are reset
    assert_eq!(updated["question"]["explanation"], "");

    let (_, untouched) = get(&app, &format!("/questions/{}", second)).await;
    assert_eq!(untouched["question"]["description"], "second");
    assert_eq!(untouched["question"]["categories"], json!(["math"]));
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/questions/{}", MISSING_ID),
        Some(question_body("ghost", &[])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid_id_and_body() {
    let app = test_app();
    let id = create_question(&app, "q", &[]).await;

    let (status, _) = send(&app, Method::PUT, "/questions/nope", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_raw(&app, Method::PUT, &format!("/questions/{}", id), Some("[")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = test_app();
    let id = create_question(&app, "short-lived", &[]).await;
    let uri = format!("/questions/{}", id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_invalid_id_is_bad_request() {
    let app = test_app();

    let (status, _) = send(&app, Method::DELETE, "/questions/123", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_empty_collection_is_not_found() {
    let app = test_app();

    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_list_returns_all_in_insertion_order() {
    let app = test_app();
    let ids = [
        create_question(&app, "a", &["math"]).await,
        create_question(&app, "b", &["science"]).await,
        create_question(&app, "c", &[]).await,
    ];

    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::OK);
    let listed: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["_id"].as_str().unwrap())
        .collect();
    assert_eq!(listed, ids.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_filters_by_category() {
    let app = test_app();
    create_question(&app, "sum", &["math"]).await;
    create_question(&app, "atoms", &["science"]).await;
    create_question(&app, "physics", &["science", "math"]).await;

    let (status, body) = get(&app, "/questions?category=math").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        let categories = item["question"]["categories"].as_array().unwrap();
        assert!(categories.iter().any(|c| c == "math"));
    }
}

#[tokio::test]
async fn test_list_unknown_category_is_not_found() {
    let app = test_app();
    create_question(&app, "sum", &["math"]).await;

    let (status, _) = get(&app, "/questions?category=art").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_empty_category_means_no_filter() {
    let app = test_app();
    create_question(&app, "sum", &["math"]).await;
    create_question(&app, "untagged", &[]).await;

    let (status, body) = get(&app, "/questions?category=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_limit_caps_results() {
    let app = test_app();
    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(create_question(&app, &format!("q{}", n), &[]).await);
    }

    let (status, body) = get(&app, "/questions?limit=3").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["_id"], ids[0].as_str());

    let (status, body) = get(&app, "/questions?limit=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_invalid_limit_is_bad_request() {
    let app = test_app();
    create_question(&app, "q", &[]).await;

    for bad in ["0", "-1", "abc", "2.5"] {
        let (status, body) = get(&app, &format!("/questions?limit={}", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "limit {:?}", bad);
        assert_eq!(body["error"], "invalid value for 'limit'");
    }
}

#[tokio::test]
async fn test_list_random_sample_is_distinct() {
    let app = test_app();
    for n in 0..6 {
        create_question(&app, &format!("q{}", n), &["quiz"]).await;
    }

    let (status, body) = get(&app, "/questions?random=true&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let ids: HashSet<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
}

#[tokio::test]
async fn test_list_random_respects_category() {
    let app = test_app();
    create_question(&app, "m1", &["math"]).await;
    create_question(&app, "m2", &["math"]).await;
    create_question(&app, "s1", &["science"]).await;

    let (status, body) = get(&app, "/questions?category=science&random=true&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["question"]["description"], "s1");
}

#[tokio::test]
async fn test_list_random_without_limit_is_bad_request() {
    let app = test_app();
    create_question(&app, "q", &[]).await;

    let (status, body) = get(&app, "/questions?random=true").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid value for 'limit'");
}

#[tokio::test]
async fn test_list_random_other_values_are_ignored() {
    let app = test_app();
    let first = create_question(&app, "first", &[]).await;
    create_question(&app, "second", &[]).await;

    let (status, body) = get(&app, "/questions?random=yes&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["_id"], first.as_str());
}
