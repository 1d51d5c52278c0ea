// In-process stand-in for the Q&A backend, served on an ephemeral port per test.
#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// How the backend answers every request.
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    Healthy,
    // Serves `null` for the question list, as the backend does for an empty table.
    NoQuestions,
    // Every request gets this status and a plain-text body.
    Failing(StatusCode),
    // 200 responses whose body is not JSON.
    MalformedJson,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

struct MockState {
    mode: Mode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().expect("checked above")
    }
}

pub async fn spawn_backend(mode: Mode) -> MockBackend {
    // Bind before spawning so connections queue until the server task runs.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(MockState {
        mode,
        requests: Arc::clone(&requests),
    });
    let app = Router::new().fallback(handle).with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend failed");
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        requests,
    }
}

// Address that refuses connections: bound once, then released.
pub async fn closed_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state
        .requests
        .lock()
        .expect("requests mutex poisoned")
        .push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&body).ok(),
        });

    match state.mode {
        Mode::Failing(status) => return (status, "Invalid token\n").into_response(),
        Mode::MalformedJson => return (StatusCode::OK, "<html>oops</html>").into_response(),
        Mode::Healthy | Mode::NoQuestions => {}
    }

    match (method.as_str(), path.as_str()) {
        ("GET", "/api/questions") => match state.mode {
            Mode::NoQuestions => Json(Value::Null).into_response(),
            _ => Json(sample_questions()).into_response(),
        },
        ("POST", "/api/submit-user-a") => Json(json!({ "token": "abc123" })).into_response(),
        ("POST", "/api/submit-user-b") => Json(json!({ "success": true })).into_response(),
        ("POST", "/api/questions/upload") => {
            Json(json!({ "message": "Questions uploaded successfully" })).into_response()
        }
        ("GET", results) if results.starts_with("/api/results/") => Json(json!({
            "compatibility": 88,
            "summary": "Strong match.",
            "userAShared": true,
            "userBShared": false,
            "userAAnswers": { "1": "morning" },
            "userBAnswers": null
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "404 page not found\n").into_response(),
    }
}

pub fn sample_questions() -> Value {
    json!([
        { "id": 1, "question": "Morning or night?", "isMultipleChoice": true, "options": ["morning", "night"] },
        { "id": 2, "question": "Describe a perfect weekend.", "isMultipleChoice": false, "options": [] }
    ])
}
