//! Handler tests for the Tasks domain
//!
//! Exercises the HTTP surface against the in-memory repository: request
//! deserialization, validation rejection, status codes and bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use domain_tasks::{InMemoryTaskRepository, TaskDto, TaskService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = TaskService::new(InMemoryTaskRepository::new());
    handlers::router(service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Book an appointment and gather documents",
        "due_date": (Utc::now() + Duration::days(7)).to_rfc3339(),
        "assigned_user_id": 1,
        "category_id": 3
    })
}

fn post_task(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn create_task_returns_201_with_location_and_defaults() {
    let app = app();

    let response = app.oneshot(post_task(&create_body("Renew passport"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/api/tasks/1");

    let created: TaskDto = json_body(response.into_body()).await;
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Renew passport");
    // Backlog is the default workflow status
    assert_eq!(created.status_id, 1);
    assert!(created.completed_at.is_none());
}

#[tokio::test]
async fn create_task_rejects_invalid_fields_with_itemized_errors() {
    let app = app();

    let body = json!({
        "title": "",
        "description": "x".repeat(201),
        "due_date": (Utc::now() - Duration::days(1)).to_rfc3339(),
        "assigned_user_id": 1,
        "category_id": 0
    });

    let response = app.oneshot(post_task(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");

    let errors = body["errors"].as_object().unwrap();
    for field in ["title", "description", "due_date", "category_id"] {
        assert!(errors.contains_key(field), "expected errors on '{}'", field);
    }
    assert_eq!(errors["title"][0], "Title must not be empty.");
    assert_eq!(errors["due_date"][0], "Due date must be in the future (UTC).");
    assert_eq!(errors["category_id"][0], "Category must be selected.");
}

#[tokio::test]
async fn create_task_rejects_title_longer_than_twenty() {
    let app = app();

    let response = app
        .oneshot(post_task(&create_body(&"x".repeat(21))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"]["title"][0],
        "Title must be at most 20 characters."
    );
}

#[tokio::test]
async fn list_tasks_on_empty_store_returns_200_and_empty_array() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<TaskDto> = json_body(response.into_body()).await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn get_task_returns_404_with_message_for_missing_id() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/9").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Task with id 9 not found.");
}

#[tokio::test]
async fn update_task_roundtrip_returns_204_and_persists() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_task(&create_body("Draft")))
        .await
        .unwrap();
    let created: TaskDto = json_body(response.into_body()).await;

    let mut dto = created.clone();
    dto.title = "Final".to_string();
    dto.status_id = 5;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&dto).unwrap()))
                .unwrap(),
        )
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
    let fetched: TaskDto = json_body(response.into_body()).await;
    assert_eq!(fetched.title, "Final");
    assert_eq!(fetched.status_id, 5);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_task_with_mismatched_ids_returns_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_task(&create_body("Stable")))
        .await
        .unwrap();
    let created: TaskDto = json_body(response.into_body()).await;

    let mut dto = created.clone();
    dto.id = created.id + 1;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&dto).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Route id does not match task id.");
}

#[tokio::test]
async fn delete_task_returns_204_then_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_task(&create_body("Ephemeral")))
        .await
        .unwrap();
    let created: TaskDto = json_body(response.into_body()).await;

    let delete = |id: i32| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
