//! Handler tests for the Statuses domain
//!
//! These tests verify the HTTP surface end to end against the in-memory
//! repository: request deserialization, validation rejection, status codes
//! and response bodies. They exercise ONLY the statuses router, not the
//! full application with docs, middleware, etc.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_statuses::{
    InMemoryStatusRepository, Status, StatusDto, StatusError, StatusRepository, StatusResult,
    StatusService, UpdateStatus, handlers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = StatusService::new(InMemoryStatusRepository::new());
    handlers::router(service)
}

/// A store handle whose every operation fails, for the persistence-failure path
struct FailingRepository;

#[async_trait]
impl StatusRepository for FailingRepository {
    async fn find_all(&self) -> StatusResult<Vec<Status>> {
        Err(StatusError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: i32) -> StatusResult<Option<Status>> {
        Err(StatusError::Database("connection refused".to_string()))
    }

    async fn insert(&self, _status: Status) -> StatusResult<Status> {
        Err(StatusError::Database("connection refused".to_string()))
    }

    async fn update(&self, _id: i32, _input: UpdateStatus) -> StatusResult<Option<Status>> {
        Err(StatusError::Database("connection refused".to_string()))
    }

    async fn delete(&self, _id: i32) -> StatusResult<bool> {
        Err(StatusError::Database("connection refused".to_string()))
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_status(name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "name": name })).unwrap(),
        ))
        .unwrap()
}

fn put_status(id: i32, body_id: i32, name: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "id": body_id, "name": name })).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn list_statuses_on_empty_store_returns_200_and_empty_array() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let statuses: Vec<StatusDto> = json_body(response.into_body()).await;
    assert!(statuses.is_empty());
}

#[tokio::test]
async fn create_status_returns_201_with_location_and_assigned_id() {
    let app = app();

    let response = app.oneshot(post_status("Active")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/api/statuses/1");

    let created: StatusDto = json_body(response.into_body()).await;
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Active");
}

#[tokio::test]
async fn create_then_get_returns_equal_dto() {
    let app = app();

    let response = app.clone().oneshot(post_status("Active")).await.unwrap();
    let created: StatusDto = json_body(response.into_body()).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: StatusDto = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_status_rejects_blank_name_with_error_map() {
    let app = app();

    let response = app.oneshot(post_status("   ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");

    let name_errors = body["errors"]["name"].as_array().unwrap();
    assert_eq!(name_errors.len(), 1);
    assert_eq!(name_errors[0], "Status name cannot be empty.");
}

#[tokio::test]
async fn create_status_rejects_out_of_range_name_lengths() {
    let too_long = "x".repeat(51);
    for name in ["a", too_long.as_str()] {
        let response = app().oneshot(post_status(name)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = json_body(response.into_body()).await;
        let name_errors = body["errors"]["name"].as_array().unwrap();
        assert_eq!(name_errors.len(), 1);
        assert_eq!(
            name_errors[0],
            "Status name must be between 2 and 50 characters long."
        );
    }
}

#[tokio::test]
async fn create_status_rejects_malformed_json() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_status_returns_404_with_message_for_missing_id() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Status with id 42 not found.");
}

#[tokio::test]
async fn update_status_returns_204_and_persists_the_new_name() {
    let app = app();

    let response = app.clone().oneshot(post_status("Old")).await.unwrap();
    let created: StatusDto = json_body(response.into_body()).await;

    let response = app
        .clone()
        .oneshot(put_status(created.id, created.id, "Updated"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let fetched: StatusDto = json_body(response.into_body()).await;
    assert_eq!(fetched.name, "Updated");
}

#[tokio::test]
async fn update_status_with_mismatched_ids_returns_400_and_leaves_store_untouched() {
    let app = app();

    let response = app.clone().oneshot(post_status("Old")).await.unwrap();
    let created: StatusDto = json_body(response.into_body()).await;

    let response = app
        .clone()
        .oneshot(put_status(created.id, created.id + 1, "New"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Route id does not match status id.");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let fetched: StatusDto = json_body(response.into_body()).await;
    assert_eq!(fetched.name, "Old");
}

#[tokio::test]
async fn update_status_returns_404_for_missing_id() {
    let app = app();

    let response = app.oneshot(put_status(7, 7, "Anything")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Status with id 7 does not exist.");
}

#[tokio::test]
async fn update_status_rejects_invalid_body_before_the_id_check() {
    let app = app();

    let response = app.oneshot(put_status(1, 2, "")).await.unwrap();

    // Validation runs in the extractor, so the invalid name wins over the
    // id mismatch
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");
}

#[tokio::test]
async fn delete_status_returns_204_then_404() {
    let app = app();

    let response = app.clone().oneshot(post_status("Temp")).await.unwrap();
    let created: StatusDto = json_body(response.into_body()).await;

    let delete = |id: i32| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting the same id again is a plain negative, not an error
    let response = app.clone().oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_failure_surfaces_as_500_with_generic_message() {
    let app = handlers::router(StatusService::new(FailingRepository));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The store detail must not leak to the client
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "An unexpected error occurred.");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn created_statuses_are_listed_in_insertion_order() {
    let app = app();

    for name in ["Backlog", "Todo", "Done"] {
        let response = app.clone().oneshot(post_status(name)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let statuses: Vec<StatusDto> = json_body(response.into_body()).await;
    let names: Vec<_> = statuses.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Backlog", "Todo", "Done"]);
    assert_eq!(statuses[0].id, 1);
}
