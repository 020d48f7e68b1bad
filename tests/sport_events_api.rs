use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use sport_events::{create_router, AppState, Clock, FixedClock, InMemoryStore};
use std::sync::Arc;
use tower::ServiceExt;

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-11-16T15:30:45Z")
        .unwrap()
        .with_timezone(&Utc)
}

struct TestApp {
    router: Router,
    clock: Arc<FixedClock>,
}

impl TestApp {
    fn new() -> Self {
        let clock = Arc::new(FixedClock::new(base_time()));
        let state = AppState::new(
            Arc::new(InMemoryStore::new()),
            "memory",
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        Self {
            router: create_router(state),
            clock,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(&self, name: &str, sport_type: &str, start: DateTime<Utc>) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/sport-events",
                Some(json!({
                    "name": name,
                    "sportType": sport_type,
                    "startTime": start.to_rfc3339(),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }

    async fn change_status(&self, id: i64, status: Value) -> (StatusCode, Value) {
        self.send(
            Method::PATCH,
            &format!("/sport-events/{id}/status"),
            Some(json!({ "status": status })),
        )
        .await
    }
}

#[tokio::test]
async fn create_returns_201_with_inactive_default() {
    let app = TestApp::new();
    let body = app
        .create("Derby", "FOOTBALL", base_time() + Duration::days(1))
        .await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Derby");
    assert_eq!(body["sportType"], "FOOTBALL");
    assert_eq!(body["eventStatus"], "INACTIVE");
    assert_eq!(body["startTime"], "2024-11-17T15:30:45Z");
}

#[tokio::test]
async fn create_reports_every_invalid_field() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/sport-events",
            Some(json!({ "id": 3, "name": "", "sportType": "FOOTBALL" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Failed!");
    assert_eq!(body["status"], 400);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["id", "name", "startTime"]);
}

#[tokio::test]
async fn create_rejects_unknown_enum_value() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/sport-events",
            Some(json!({
                "name": "Bonspiel",
                "sportType": "CURLING",
                "startTime": "2024-12-01T10:00:00",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Invalid Request Body");
    assert!(body["detail"].as_str().unwrap().contains("CURLING"));
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/sport-events/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "No record found!");
    assert_eq!(
        body["detail"],
        "No Sport Event was found by id with value '999'"
    );
}

#[tokio::test]
async fn get_non_numeric_id_is_400() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/sport-events/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Invalid value for parameter: id");
}

#[tokio::test]
async fn list_applies_most_specific_filter() {
    let app = TestApp::new();
    let future = base_time() + Duration::hours(2);
    app.create("A", "FOOTBALL", future).await;
    app.create("B", "FOOTBALL", future).await;
    app.create("C", "HOCKEY", future).await;
    let (status, _) = app.change_status(2, json!("ACTIVE")).await;
    assert_eq!(status, StatusCode::OK);

    let names = |body: &Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, all) = app.send(Method::GET, "/sport-events", None).await;
    assert_eq!(names(&all), ["A", "B", "C"]);

    let (_, by_type) = app
        .send(Method::GET, "/sport-events?type=FOOTBALL", None)
        .await;
    assert_eq!(names(&by_type), ["A", "B"]);

    let (_, by_status) = app
        .send(Method::GET, "/sport-events?status=inactive", None)
        .await;
    assert_eq!(names(&by_status), ["A", "C"]);

    let (_, both) = app
        .send(Method::GET, "/sport-events?type=FOOTBALL&status=ACTIVE", None)
        .await;
    assert_eq!(names(&both), ["B"]);

    let (_, blank) = app
        .send(Method::GET, "/sport-events?type=&status=", None)
        .await;
    assert_eq!(names(&blank), ["A", "B", "C"]);
}

#[tokio::test]
async fn list_with_invalid_type_is_400() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::GET, "/sport-events?type=INVALID_TYPE", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Invalid value for parameter: type");
}

#[tokio::test]
async fn list_with_repeated_type_names_the_parameter() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::GET, "/sport-events?type=FOOTBALL&type=HOCKEY", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Invalid value for parameter: type");
}

#[tokio::test]
async fn full_lifecycle_inactive_active_finished() {
    let app = TestApp::new();
    let created = app
        .create("Final", "TENNIS", base_time() + Duration::hours(1))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.change_status(id, json!("ACTIVE")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventStatus"], "ACTIVE");

    let (status, body) = app.change_status(id, json!("FINISHED")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventStatus"], "FINISHED");

    for target in ["INACTIVE", "ACTIVE", "FINISHED"] {
        let (status, _) = app.change_status(id, json!(target)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "FINISHED -> {target}");
    }

    let (_, fetched) = app
        .send(Method::GET, &format!("/sport-events/{id}"), None)
        .await;
    assert_eq!(fetched["eventStatus"], "FINISHED");
}

#[tokio::test]
async fn activation_depends_on_evaluation_time() {
    let app = TestApp::new();
    let created = app
        .create("Night game", "BASKETBALL", base_time() + Duration::minutes(30))
        .await;
    let id = created["id"].as_i64().unwrap();

    app.clock.advance(Duration::hours(1));

    let (status, body) = app.change_status(id, json!("ACTIVE")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Cannot activate an event that has already started"
    );

    let (_, fetched) = app
        .send(Method::GET, &format!("/sport-events/{id}"), None)
        .await;
    assert_eq!(fetched["eventStatus"], "INACTIVE");
}

#[tokio::test]
async fn inactive_cannot_jump_to_finished() {
    let app = TestApp::new();
    let created = app
        .create("Bout", "MMA", base_time() + Duration::hours(1))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.change_status(id, json!("FINISHED")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Invalid status change from 'INACTIVE' to 'FINISHED'"
    );
}

#[tokio::test]
async fn null_target_status_is_rejected() {
    let app = TestApp::new();
    let created = app
        .create("Opener", "BASEBALL", base_time() + Duration::hours(1))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.change_status(id, Value::Null).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Invalid status change from 'INACTIVE' to unspecified status"
    );
}

#[tokio::test]
async fn change_status_of_unknown_event_is_404() {
    let app = TestApp::new();
    let (status, _) = app.change_status(42, json!("ACTIVE")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoints_report_store() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.send(Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "memory");
}
