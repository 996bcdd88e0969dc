//! End-to-end tests for the full filpiloted stack.
//!
//! Each test wires in-memory `SQLite`, the real repository, a virtual line
//! controller, the real services and the axum router, then exercises the HTTP
//! layer via `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use filpilote_adapter_http_axum::router;
use filpilote_adapter_http_axum::state::AppState;
use filpilote_adapter_storage_sqlite_sqlx::{Config, SqliteAreaRepository};
use filpilote_adapter_virtual::VirtualLineController;
use filpilote_app::services::area_service::AreaService;
use filpilote_domain::area::Area;
use filpilote_domain::mode::Mode;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

struct TestApp {
    router: axum::Router,
    lines: Arc<VirtualLineController>,
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let resp = self.router.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create(&self, name: &str, line_a: &str, line_b: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/api/areas",
            Some(serde_json::json!({ "name": name, "line_a": line_a, "line_b": line_b })),
        )
        .await
    }

    async fn create_ok(&self, name: &str, line_a: &str, line_b: &str) -> Area {
        let (status, body) = self.create(name, line_a, line_b).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        serde_json::from_value(body).unwrap()
    }

    async fn set_mode(&self, area: &Area, mode: &str) -> (StatusCode, Value) {
        self.send(
            "PUT",
            &format!("/api/areas/{}/mode", area.id),
            Some(serde_json::json!({ "mode": mode })),
        )
        .await
    }

    async fn fetch(&self, area: &Area) -> Area {
        let (status, body) = self.send("GET", &format!("/api/areas/{}", area.id), None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(body).unwrap()
    }

    fn line_states(&self, area: &Area) -> (Option<bool>, Option<bool>) {
        (
            self.lines.state(&area.line_a.line),
            self.lines.state(&area.line_b.line),
        )
    }
}

/// Build a fully-wired application restricted to four GPIO lines.
async fn app() -> TestApp {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let lines = Arc::new(VirtualLineController::with_lines([
        "GPIO17", "GPIO27", "GPIO22", "GPIO23",
    ]));
    let service = AreaService::new(SqliteAreaRepository::new(db.pool().clone()), Arc::clone(&lines));

    TestApp {
        router: router::build(AppState::new(service)),
        lines,
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Area creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_area_and_reserve_both_lines() {
    let app = app().await;

    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    assert_eq!(area.mode, Mode::Stop);
    assert_eq!(area.line_a.name, "filpilote_firstfloor_line1");
    assert_eq!(area.line_b.name, "filpilote_firstfloor_line2");
    assert_eq!(app.lines.reserved_lines(), vec!["GPIO17", "GPIO27"]);
    assert_eq!(app.fetch(&area).await, area);
}

#[tokio::test]
async fn should_reject_duplicate_name_without_reserving_lines() {
    let app = app().await;
    app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, _) = app.create("firstfloor", "GPIO22", "GPIO23").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(app.lines.reserved_lines(), vec!["GPIO17", "GPIO27"]);
}

#[tokio::test]
async fn should_reject_invalid_creation_requests() {
    let app = app().await;

    let (empty_name, _) = app.create("", "GPIO17", "GPIO27").await;
    let (same_lines, _) = app.create("firstfloor", "GPIO17", "GPIO17").await;
    let (empty_line, _) = app.create("firstfloor", "GPIO17", "").await;

    assert_eq!(empty_name, StatusCode::BAD_REQUEST);
    assert_eq!(same_lines, StatusCode::BAD_REQUEST);
    assert_eq!(empty_line, StatusCode::BAD_REQUEST);
    assert!(app.lines.reserved_lines().is_empty());
}

#[tokio::test]
async fn should_release_first_line_when_second_cannot_be_reserved() {
    let app = app().await;

    let (status, body) = app.create("firstfloor", "GPIO17", "GPIO99").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("GPIO99"));
    assert!(app.lines.reserved_lines().is_empty());

    let (_, list) = app.send("GET", "/api/areas", None).await;
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn should_refuse_line_owned_by_another_area() {
    let app = app().await;
    let first = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, _) = app.create("groundfloor", "GPIO22", "GPIO27").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(app.lines.reserved_lines(), vec!["GPIO17", "GPIO27"]);
    assert_eq!(app.fetch(&first).await, first);
}

#[tokio::test]
async fn should_list_areas_sorted_by_name() {
    let app = app().await;
    app.create_ok("groundfloor", "GPIO22", "GPIO23").await;
    app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, body) = app.send("GET", "/api/areas", None).await;

    assert_eq!(status, StatusCode::OK);
    let areas: Vec<Area> = serde_json::from_value(body).unwrap();
    let names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["firstfloor", "groundfloor"]);
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_drive_lines_according_to_mode_table() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let expectations = [
        ("ANTIFROST", (Some(true), Some(false))),
        ("ECO", (Some(true), Some(true))),
        ("COMFORT", (Some(false), Some(false))),
        ("STOP", (Some(false), Some(true))),
    ];
    for (mode, states) in expectations {
        let (status, body) = app.set_mode(&area, mode).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "applied": true }));
        assert_eq!(app.line_states(&area), states, "mode {mode}");
        assert_eq!(app.fetch(&area).await.mode.as_str(), mode);
    }
}

#[tokio::test]
async fn should_reject_unknown_mode_and_keep_current_one() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, _) = app.set_mode(&area, "amode").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.fetch(&area).await.mode, Mode::Stop);
    assert_eq!(app.line_states(&area), (Some(false), Some(false)));
}

#[tokio::test]
async fn should_return_not_found_when_setting_mode_of_missing_area() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;
    app.send("DELETE", &format!("/api/areas/{}", area.id), None).await;

    let (status, _) = app.set_mode(&area, "ECO").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_delete_area_and_free_its_lines() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;
    let uri = format!("/api/areas/{}", area.id);

    let (deleted, _) = app.send("DELETE", &uri, None).await;
    let (fetched, _) = app.send("GET", &uri, None).await;

    assert_eq!(deleted, StatusCode::NO_CONTENT);
    assert_eq!(fetched, StatusCode::NOT_FOUND);
    assert!(app.lines.reserved_lines().is_empty());

    // freed lines and name can be reused
    app.create_ok("firstfloor", "GPIO27", "GPIO17").await;
}

#[tokio::test]
async fn should_return_not_found_when_deleting_twice() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;
    let uri = format!("/api/areas/{}", area.id);

    app.send("DELETE", &uri, None).await;
    let (status, _) = app.send("DELETE", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Thermostat events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_apply_thermostat_mode_to_area() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, _) = app
        .send(
            "POST",
            "/api/thermostat/events",
            Some(serde_json::json!({ "device_id": area.id.to_string(), "mode": "eco" })),
        )
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(app.fetch(&area).await.mode, Mode::Eco);
    assert_eq!(app.line_states(&area), (Some(true), Some(true)));
}

#[tokio::test]
async fn should_ignore_thermostat_event_for_unknown_device() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, _) = app
        .send(
            "POST",
            "/api/thermostat/events",
            Some(serde_json::json!({ "device_id": "unknown-device-id", "mode": "comfort" })),
        )
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(app.fetch(&area).await.mode, Mode::Stop);
    assert_eq!(app.line_states(&area), (Some(false), Some(false)));
}

#[tokio::test]
async fn should_ignore_unknown_thermostat_mode() {
    let app = app().await;
    let area = app.create_ok("firstfloor", "GPIO17", "GPIO27").await;

    let (status, _) = app
        .send(
            "POST",
            "/api/thermostat/events",
            Some(serde_json::json!({ "device_id": area.id.to_string(), "mode": "boost" })),
        )
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(app.fetch(&area).await.mode, Mode::Stop);
}
