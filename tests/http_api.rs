#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use legaldesk::{
    api::build_router,
    config::{database, settings::Settings},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _uploads: TempDir,
}

async fn app() -> TestApp {
    let db = database::create_connection("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    database::create_tables(&db)
        .await
        .expect("schema should be created");

    let uploads = tempfile::tempdir().expect("temp dir should be created");
    let settings = Settings {
        uploads_dir: uploads.path().to_path_buf(),
        ..Settings::default()
    };

    TestApp {
        router: build_router(db, &settings),
        _uploads: uploads,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("response expected");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("response body should be readable")
        .to_bytes();

    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

async fn send_json(app: &TestApp, method: Method, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build");
    send(app, request).await
}

async fn send_empty(app: &TestApp, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

fn client_payload(first: &str, last: &str, email: &str) -> Value {
    json!({
        "first_name": first,
        "last_name": last,
        "email": email,
        "phone": "555-0100",
        "address": "1 Main Street",
        "city": "Springfield",
        "state": "IL",
        "postal_code": "62701"
    })
}

async fn create_client(app: &TestApp, first: &str, last: &str, email: &str) -> String {
    let (status, body) =
        send_json(app, Method::POST, "/api/clients", client_payload(first, last, email)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_str().unwrap().to_string()
}

async fn create_case(app: &TestApp, client_id: &str, title: &str, status: &str) -> String {
    let (code, body) = send_json(
        app,
        Method::POST,
        "/api/cases",
        json!({
            "client_id": client_id,
            "title": title,
            "case_number": "CV-1",
            "case_type": "civil",
            "status": status,
            "start_date": "2030-01-01"
        }),
    )
    .await;
    assert_eq!(code, StatusCode::OK, "{body}");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_and_empty_stats() {
    let app = app().await;

    let (status, body) = send_empty(&app, Method::GET, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ok");

    let (status, body) = send_empty(&app, Method::GET, "/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_clients": 0,
            "active_clients": 0,
            "total_cases": 0,
            "active_cases": 0,
            "pending_cases": 0,
            "closed_cases": 0,
            "upcoming_appointments": 0,
            "total_documents": 0
        })
    );
}

#[tokio::test]
async fn client_crud_round_trip() {
    let app = app().await;
    let id = create_client(&app, "Ada", "Lovelace", "ada@example.com").await;

    let (status, body) = send_empty(&app, Method::GET, &format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");

    let mut update = client_payload("Ada", "King", "ada@example.com");
    update["status"] = json!("inactive");
    let (status, body) = send_json(&app, Method::PUT, &format!("/api/clients/{id}"), update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_name"], "King");

    let (status, body) = send_empty(&app, Method::GET, "/api/clients?search=KING").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send_empty(&app, Method::DELETE, &format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Client deleted successfully");

    let (status, body) = send_empty(&app, Method::GET, &format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Client not found");
}

#[tokio::test]
async fn stats_reflect_created_records() {
    let app = app().await;
    let a = create_client(&app, "A", "One", "a@example.com").await;
    let b = create_client(&app, "B", "Two", "b@example.com").await;

    create_case(&app, &a, "a1", "active").await;
    create_case(&app, &a, "a2", "pending").await;
    create_case(&app, &b, "b1", "on_hold").await;

    let (status, body) = send_empty(&app, Method::GET, "/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_clients"], 2);
    assert_eq!(body["active_clients"], 2);
    assert_eq!(body["total_cases"], 3);
    assert_eq!(body["active_cases"], 1);
    assert_eq!(body["pending_cases"], 1);
    assert_eq!(body["closed_cases"], 0);
}

#[tokio::test]
async fn portal_login_and_dashboard() {
    let app = app().await;
    let id = create_client(&app, "Grace", "Hopper", "grace@example.com").await;
    let case_id = create_case(&app, &id, "Patent dispute", "active").await;

    for (title, visible) in [("Filed", true), ("Internal memo", false)] {
        let (status, _) = send_json(
            &app,
            Method::POST,
            "/api/case-updates",
            json!({
                "case_id": case_id,
                "title": title,
                "description": "details",
                "is_visible_to_client": visible
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/client/login",
        json!({"email": "grace@example.com", "phone": "555-0100"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client_id"], id.as_str());
    assert_eq!(body["client_name"], "Grace Hopper");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/client/login",
        json!({"email": "grace@example.com", "phone": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid credentials");

    let (status, body) =
        send_empty(&app, Method::GET, &format!("/api/client/dashboard/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client_info"]["id"], id.as_str());
    assert_eq!(body["active_cases"].as_array().unwrap().len(), 1);
    let updates = body["recent_updates"].as_array().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0]["title"], "Filed");
    assert_eq!(body["total_documents"], 0);

    let (status, body) = send_empty(&app, Method::GET, "/api/client/dashboard/nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Client not found");
}

#[tokio::test]
async fn timeline_foreign_case_is_indistinguishable_from_missing() {
    let app = app().await;
    let owner = create_client(&app, "Owner", "A", "owner@example.com").await;
    let other = create_client(&app, "Other", "B", "other@example.com").await;
    let case_id = create_case(&app, &owner, "X", "active").await;

    let foreign = send_empty(
        &app,
        Method::GET,
        &format!("/api/client/{other}/case-timeline/{case_id}"),
    )
    .await;
    let missing = send_empty(
        &app,
        Method::GET,
        &format!("/api/client/{other}/case-timeline/no-such-case"),
    )
    .await;

    assert_eq!(foreign.0, StatusCode::NOT_FOUND);
    assert_eq!(foreign, missing);
    assert_eq!(foreign.1["detail"], "Case not found or access denied");

    let (status, body) = send_empty(
        &app,
        Method::GET,
        &format!("/api/client/{owner}/case-timeline/{case_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["case"]["id"], case_id.as_str());
    assert!(body["updates"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn appointment_validation_and_completion() {
    let app = app().await;
    let client_id = create_client(&app, "Ada", "Lovelace", "ada@example.com").await;

    let payload = |date: &str| {
        json!({
            "client_id": client_id,
            "title": "Consultation",
            "appointment_date": date,
            "appointment_time": "10:00"
        })
    };

    let (status, body) =
        send_json(&app, Method::POST, "/api/appointments", payload("next tuesday")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("appointment_date"));

    let (status, body) =
        send_json(&app, Method::POST, "/api/appointments", payload("2999-01-01")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration_minutes"], 60);
    let id = body["id"].as_str().unwrap().to_string();

    let (_, upcoming) = send_empty(&app, Method::GET, "/api/appointments?upcoming=true").await;
    assert_eq!(upcoming.as_array().unwrap().len(), 1);

    let (status, body) = send_empty(
        &app,
        Method::PUT,
        &format!("/api/appointments/{id}/complete?notes=signed"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_completed"], true);
    assert_eq!(body["notes"], "signed");

    let (_, upcoming) = send_empty(&app, Method::GET, "/api/appointments?upcoming=true").await;
    assert!(upcoming.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn multipart_upload_is_stored_and_served() {
    let app = app().await;
    let client_id = create_client(&app, "Ada", "Lovelace", "ada@example.com").await;

    let boundary = "legaldesk-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"client_id\"\r\n\r\n\
         {client_id}\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"category\"\r\n\r\n\
         contracts\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"retainer.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         signed retainer\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/documents/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request should build");

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Document uploaded successfully");
    assert_eq!(body["document"]["original_filename"], "retainer.txt");
    assert_eq!(body["document"]["content_type"], "text/plain");
    assert_eq!(body["document"]["category"], "contracts");
    assert_eq!(body["document"]["file_size"], 15);

    let file_url = body["file_url"].as_str().unwrap().to_string();
    assert!(file_url.starts_with("/uploads/"));
    assert!(file_url.ends_with(".txt"));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(&file_url)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"signed retainer");

    let (_, stats) = send_empty(&app, Method::GET, "/api/dashboard/stats").await;
    assert_eq!(stats["total_documents"], 1);

    let id = body["document"]["id"].as_str().unwrap();
    let (status, body) = send_empty(&app, Method::DELETE, &format!("/api/documents/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Document deleted successfully");
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let app = app().await;
    let client_id = create_client(&app, "Ada", "Lovelace", "ada@example.com").await;

    let boundary = "b";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"client_id\"\r\n\r\n\
         {client_id}\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/documents/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Invalid input: file is required");
}
