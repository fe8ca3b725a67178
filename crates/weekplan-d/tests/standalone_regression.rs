//! Standalone regression tests.
//!
//! Drives the assembled router end to end: creates projects, validates
//! input, generates the week, and checks that concurrent readers only
//! ever see a fully committed week.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use weekplan_api::build_router;
use weekplan_state::*;

fn test_store() -> StateStore {
    StateStore::open_in_memory().unwrap()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(router: &Router, title: &str, deadline_days: i64, revenue: i64) -> Value {
    let (status, body) = send(
        router,
        "POST",
        "/api/projects",
        Some(json!({ "title": title, "deadlineDays": deadline_days, "revenue": revenue })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

async fn create_sample_pipeline(router: &Router) {
    create(router, "UI Redesign for TechCorp", 2, 150_000).await;
    create(router, "Backend API for ShopApp", 4, 250_000).await;
    create(router, "Testing Suite for FinTech", 3, 95_000).await;
    create(router, "Cloud Migration", 5, 300_000).await;
    create(router, "Mobile App MVP", 2, 200_000).await;
    create(router, "SEO Optimization", 1, 50_000).await;
    create(router, "Database Architecture", 3, 120_000).await;
}

fn scheduled_days(projects: &Value) -> Vec<Value> {
    projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["scheduledDay"].clone())
        .collect()
}

#[tokio::test]
async fn standalone_list_projects_empty() {
    let router = build_router(test_store());
    let (status, body) = send(&router, "GET", "/api/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn standalone_healthz() {
    let router = build_router(test_store());
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn standalone_create_get_delete_project() {
    let router = build_router(test_store());

    let created = create(&router, "Cloud Migration", 5, 300_000).await;
    assert_eq!(
        created,
        json!({
            "id": 1,
            "title": "Cloud Migration",
            "deadlineDays": 5,
            "revenue": 300000,
            "scheduledDay": null
        })
    );

    let (status, body) = send(&router, "GET", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, _) = send(&router, "DELETE", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&router, "DELETE", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found");
}

#[tokio::test]
async fn standalone_create_validation_errors() {
    let router = build_router(test_store());

    let cases = [
        (json!({ "title": "", "deadlineDays": 2, "revenue": 1 }), "title"),
        (json!({ "title": "x", "deadlineDays": 0, "revenue": 1 }), "deadlineDays"),
        (json!({ "title": "x", "deadlineDays": 6, "revenue": 1 }), "deadlineDays"),
        (json!({ "title": "x", "deadlineDays": 2, "revenue": -1 }), "revenue"),
    ];
    for (body, field) in cases {
        let (status, resp) = send(&router, "POST", "/api/projects", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["field"], field);
    }

    // Malformed bodies are rejected with the same status.
    let (status, resp) = send(&router, "POST", "/api/projects", Some(json!({ "title": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].is_string());

    let (_, all) = send(&router, "GET", "/api/projects", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn standalone_generate_schedule_for_sample_pipeline() {
    let router = build_router(test_store());
    create_sample_pipeline(&router).await;

    let (status, body) = send(&router, "POST", "/api/projects/schedule", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        scheduled_days(&body),
        vec![
            json!(1),    // UI Redesign
            json!(4),    // Backend API
            Value::Null, // Testing Suite
            json!(5),    // Cloud Migration
            json!(2),    // Mobile App MVP
            Value::Null, // SEO Optimization
            json!(3),    // Database Architecture
        ]
    );

    // The committed week is what later reads return.
    let (_, listed) = send(&router, "GET", "/api/projects", None).await;
    assert_eq!(listed, body);

    let (_, summary) = send(&router, "GET", "/api/summary", None).await;
    assert_eq!(summary["totalProjects"], 7);
    assert_eq!(summary["scheduledProjects"], 5);
    assert_eq!(summary["scheduledRevenue"], 1_020_000);
    assert_eq!(summary["pipelineRevenue"], 1_165_000);
}

#[tokio::test]
async fn standalone_generate_twice_is_stable() {
    let router = build_router(test_store());
    create_sample_pipeline(&router).await;

    let (_, first) = send(&router, "POST", "/api/projects/schedule", None).await;
    let (_, second) = send(&router, "POST", "/api/projects/schedule", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn standalone_generate_on_empty_pipeline() {
    let router = build_router(test_store());
    let (status, body) = send(&router, "POST", "/api/projects/schedule", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn standalone_preview_matches_generate() {
    let router = build_router(test_store());
    create_sample_pipeline(&router).await;

    let (status, preview) = send(&router, "GET", "/api/projects/schedule/preview", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["slots"], json!([1, 5, 7, 2, 4]));
    assert_eq!(preview["totalRevenue"], 1_020_000);

    // Preview committed nothing.
    let (_, listed) = send(&router, "GET", "/api/projects", None).await;
    assert!(scheduled_days(&listed).iter().all(Value::is_null));
}

#[tokio::test]
async fn standalone_new_project_bumps_previous_assignment() {
    let router = build_router(test_store());
    create(&router, "Small job", 1, 10).await;
    send(&router, "POST", "/api/projects/schedule", None).await;

    create(&router, "Big job", 1, 1_000).await;
    let (_, body) = send(&router, "POST", "/api/projects/schedule", None).await;
    assert_eq!(scheduled_days(&body), vec![Value::Null, json!(1)]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn standalone_readers_see_whole_weeks_only() {
    let store = test_store();
    let router = build_router(store.clone());
    create_sample_pipeline(&router).await;

    let unscheduled = vec![Value::Null; 7];
    let week = vec![
        json!(1),
        json!(4),
        Value::Null,
        json!(5),
        json!(2),
        Value::Null,
        json!(3),
    ];

    let writer = {
        let router = router.clone();
        tokio::spawn(async move {
            for _ in 0..25 {
                let (status, _) = send(&router, "POST", "/api/projects/schedule", None).await;
                assert_eq!(status, StatusCode::OK);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let router = router.clone();
            let (unscheduled, week) = (unscheduled.clone(), week.clone());
            tokio::spawn(async move {
                for _ in 0..50 {
                    let (_, listed) = send(&router, "GET", "/api/projects", None).await;
                    let days = scheduled_days(&listed);
                    assert!(days == unscheduled || days == week, "mixed week: {days:?}");
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    let committed: Vec<_> = store
        .list_projects()
        .unwrap()
        .iter()
        .map(|p| p.scheduled_day.map(u8::from))
        .collect();
    assert_eq!(committed, vec![Some(1), Some(4), None, Some(5), Some(2), None, Some(3)]);
}
