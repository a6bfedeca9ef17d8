#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use parking_lot::Mutex;
use parkeasy::{ApiClient, MemoryTokenStore, TokenStore};
use serde_json::{json, Value};

/// One request as the fake backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    pub fn all(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests.lock().last().cloned().expect("no request recorded")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

async fn record(State(recorder): State<Recorder>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    recorder.requests.lock().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

pub fn user_json(id: &str, email: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "full_name": "Asha Rao",
        "phone": "9876543210",
        "role": role,
        "created_at": "2025-01-15T10:30:00"
    })
}

pub fn lot_json(id: &str, name: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "address": "Bandra Kurla Complex, Mumbai",
        "latitude": 19.0660,
        "longitude": 72.8679,
        "total_slots": 50,
        "available_slots": 12,
        "price_per_hour": 60.0,
        "operating_hours": "24/7",
        "amenities": ["CCTV", "EV Charging"],
        "is_active": is_active,
        "rating": 4.5,
        "total_reviews": 8,
        "created_at": "2025-01-10T08:00:00"
    })
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    if body["password"] != "x" {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect email or password");
    }

    let token = if email.starts_with("admin") { "admin-token" } else { "abc" };
    Json(json!({ "access_token": token, "token_type": "bearer" })).into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    if email == "taken@b.com" {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }
    (StatusCode::CREATED, Json(user_json("u-new", email, "user"))).into_response()
}

async fn me(headers: HeaderMap) -> Response {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer abc") => Json(user_json("u1", "a@b.com", "user")).into_response(),
        Some("Bearer admin-token") => Json(user_json("u0", "admin@b.com", "admin")).into_response(),
        _ => detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"),
    }
}

async fn lots() -> Json<Value> {
    Json(json!([
        lot_json("lot-1", "BKC Central", true),
        lot_json("lot-2", "Phoenix Mall", false),
        lot_json("lot-3", "Andheri Metro", true),
    ]))
}

async fn update_booking(Path(_id): Path<String>) -> Response {
    detail(StatusCode::FORBIDDEN, "Not authorized")
}

async fn dashboard() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

async fn bulk_slots(
    Path(_lot_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let count: i64 = params.get("count").and_then(|c| c.parse().ok()).unwrap_or(0);
    Json(json!({
        "message": format!("Created {} parking slots", count),
        "created_count": count,
        "skipped_count": 0
    }))
}

/// Behaves like an endpoint whose JWT expired mid-session.
async fn expired_user_stats() -> Response {
    detail(StatusCode::UNAUTHORIZED, "Token has expired")
}

async fn delete_lot(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// A stand-in for the ParkEasy backend covering the endpoints the tests exercise.
pub fn backend() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(me))
        .route("/api/parking/lots", get(lots))
        .route("/api/parking/lots/{id}", axum::routing::delete(delete_lot))
        .route("/api/bookings", get(|| async { Json(json!([])) }))
        .route("/api/bookings/{id}", put(update_booking))
        .route("/api/analytics/dashboard", get(dashboard))
        .route("/api/analytics/user-stats", get(expired_user_stats))
        .route("/api/admin/parking-lots/{lot_id}/slots/bulk", post(bulk_slots))
}

/// Serves `router` on an ephemeral port and records every request it receives.
pub async fn spawn(router: Router) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = router.layer(middleware::from_fn_with_state(recorder.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorder)
}

/// A client against a fresh fake backend, with the given store.
pub async fn client_with_store(store: Arc<MemoryTokenStore>) -> (Arc<ApiClient>, Recorder) {
    let (base_url, recorder) = spawn(backend()).await;
    let store: Arc<dyn TokenStore> = store;
    (Arc::new(ApiClient::new(&base_url, store)), recorder)
}
