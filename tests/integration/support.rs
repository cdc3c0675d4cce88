//! Fake loan API used by the integration tests

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Clone, Default)]
pub struct Backend {
    pub loan_bodies: Arc<Mutex<Vec<Value>>>,
    pub search_hits: Arc<AtomicUsize>,
}

impl Backend {
    pub fn searches(&self) -> usize {
        self.search_hits.load(Ordering::SeqCst)
    }

    pub fn recorded_loans(&self) -> Vec<Value> {
        self.loan_bodies.lock().unwrap().clone()
    }
}

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
}

fn books() -> Vec<Value> {
    vec![
        json!({"id": 1, "code": "LIB-001", "title": "Ficciones", "author": "Jorge Luis Borges", "available": true}),
        json!({"id": 2, "code": "LIB-002", "title": "Cien años de soledad", "author": "Gabriel García Márquez", "available": false}),
        json!({"id": 3, "code": "LIB-003", "title": "El túnel", "author": "Ernesto Sabato", "available": true}),
    ]
}

async fn health() -> Json<Value> {
    Json(json!({"success": true}))
}

async fn search(State(backend): State<Backend>, Query(params): Query<SearchParams>) -> Response {
    backend.search_hits.fetch_add(1, Ordering::SeqCst);
    let query = params.query.unwrap_or_default().to_lowercase();

    match query.as_str() {
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "reject" => Json(json!({"success": false, "message": "Search unavailable"})).into_response(),
        _ => {
            let data: Vec<Value> = books()
                .into_iter()
                .filter(|b| {
                    query.is_empty()
                        || b["title"].as_str().unwrap().to_lowercase().contains(&query)
                        || b["author"].as_str().unwrap().to_lowercase().contains(&query)
                })
                .collect();
            Json(json!({"success": true, "data": data})).into_response()
        }
    }
}

async fn active_loans() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": [{
            "id": 10,
            "code": "LIB-002",
            "title": "Cien años de soledad",
            "author": "Gabriel García Márquez",
            "reader_first_name": "Ada",
            "reader_last_name": "Lovelace",
            "loan_date": "2024-06-10",
            "return_date": "2024-06-17"
        }]
    }))
}

async fn create_loan(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend.loan_bodies.lock().unwrap().push(body.clone());
    if body["bookId"] == 2 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "El libro ya está prestado"})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({"success": true, "message": "Préstamo registrado"})),
    )
        .into_response()
}

async fn return_loan(Path(id): Path<i32>) -> Response {
    if id == 99 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Loan not found"})),
        )
            .into_response();
    }
    Json(json!({"success": true})).into_response()
}

async fn statistics() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "total_books": 3,
            "available_books": 2,
            "loaned_books": 1,
            "active_loans": 1,
            "overdue_loans": 0
        }
    }))
}

/// Start the fake API on a random port, returning its base URL
pub async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let api = Router::new()
        .route("/health", get(health))
        .route("/books/search", get(search))
        .route("/loans", post(create_loan))
        .route("/loans/active", get(active_loans))
        .route("/loans/statistics", get(statistics))
        .route("/loans/return/:id", post(return_loan))
        .with_state(backend.clone());
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), backend)
}

/// Base URL of a port nothing listens on
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}
