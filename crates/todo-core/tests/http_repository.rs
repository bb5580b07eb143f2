//! HTTP Repository Integration Tests
//!
//! Runs `HttpTodoRepository` against an in-process axum server that reads and
//! answers like the Go backend (`{todo}` bodies, `{id, todo}` records, 404 for
//! unknown ids).

#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use todo_core::{
    ApiConfig, HttpTodoRepository, Item, ListController, ListState, TodoError, TodoRepository, TodoText,
};

#[derive(Default)]
struct Db {
    next_id: u32,
    items: Vec<Item>,
}

type Shared = Arc<Mutex<Db>>;

fn record(item: &Item) -> Value {
    json!({ "id": item.id, "todo": item.text })
}

async fn list(State(db): State<Shared>) -> Json<Value> {
    let db = db.lock().unwrap();
    Json(Value::Array(db.items.iter().map(record).collect()))
}

async fn create(State(db): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut db = db.lock().unwrap();
    db.next_id += 1;
    let item = Item::new(db.next_id, body["todo"].as_str().unwrap_or_default());
    let response = record(&item);
    db.items.push(item);
    Json(response)
}

async fn update(
    State(db): State<Shared>,
    Path(id): Path<u32>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut db = db.lock().unwrap();
    let item = db
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    item.text = body["todo"].as_str().unwrap_or_default().to_string();
    Ok(Json(record(item)))
}

async fn delete(State(db): State<Shared>, Path(id): Path<u32>) -> StatusCode {
    let mut db = db.lock().unwrap();
    let before = db.items.len();
    db.items.retain(|item| item.id != id);
    if db.items.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn broken_list() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "database unavailable" })),
    )
}

async fn broken_create() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn silent_update() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Start the fake backend and return its base URL
async fn serve() -> String {
    let app = Router::new()
        .route("/api/go/todo", get(list).post(create))
        .route("/api/go/todo/{id}", put(update).delete(delete))
        .route("/api/broken/todo", get(broken_list).post(broken_create))
        .route("/api/silent/todo/{id}", put(silent_update))
        .with_state(Shared::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn repository(base_url: &str, backend: &str) -> HttpTodoRepository {
    HttpTodoRepository::new(ApiConfig::new(base_url, backend))
}

#[tokio::test]
async fn test_crud_round_trip() {
    let base = serve().await;
    let repo = repository(&base, "go");

    let created = repo.create("buy milk").await.unwrap();
    assert_eq!(created, Item::new(1, "buy milk"));
    assert_eq!(repo.list().await.unwrap(), vec![Item::new(1, "buy milk")]);

    let updated = repo.update(1, "buy oat milk").await.unwrap();
    assert_eq!(updated, Some(Item::new(1, "buy oat milk")));

    repo.delete(1).await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());
}

async fn echo_body(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

#[tokio::test]
async fn test_request_body_carries_text_under_both_names() {
    let app = Router::new().route("/api/go/todo", axum::routing::post(echo_body));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = reqwest::Client::new();

    let sent: Value = client
        .post(format!("http://{}/api/go/todo", addr))
        .json(&TodoText::new("buy milk"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(sent, json!({ "text": "buy milk", "todo": "buy milk" }));
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let base = serve().await;
    let repo = repository(&base, "go");

    assert_eq!(repo.update(42, "anything").await, Err(TodoError::NotFound(42)));
    assert_eq!(repo.delete(42).await, Err(TodoError::NotFound(42)));
}

#[tokio::test]
async fn test_failure_statuses_carry_server_message() {
    let base = serve().await;
    let repo = repository(&base, "broken");

    assert_eq!(
        repo.list().await,
        Err(TodoError::Remote {
            status: Some(500),
            message: Some("database unavailable".into()),
        })
    );
    assert_eq!(
        repo.create("x").await,
        Err(TodoError::Remote { status: Some(503), message: None })
    );
}

#[tokio::test]
async fn test_missing_collection_is_generic_failure() {
    let base = serve().await;
    let repo = repository(&base, "python");

    assert!(matches!(
        repo.list().await,
        Err(TodoError::Remote { status: Some(404), .. })
    ));
}

#[tokio::test]
async fn test_empty_update_body_is_none() {
    let base = serve().await;
    let repo = repository(&base, "silent");

    assert_eq!(repo.update(3, "quiet").await, Ok(None));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let repo = repository(&format!("http://{}", addr), "go");

    assert!(matches!(repo.list().await, Err(TodoError::Transport(_))));
}

#[tokio::test]
async fn test_controller_against_live_backend() {
    let base = serve().await;
    let repo = Rc::new(repository(&base, "go"));
    repo.create("first").await.unwrap();
    repo.create("second").await.unwrap();

    let state = Rc::new(RefCell::new(ListState::default()));
    let controller = ListController::new(Rc::clone(&repo), Rc::clone(&state));
    controller.load().await.unwrap();
    assert_eq!(
        state.borrow().items,
        vec![Item::new(2, "second"), Item::new(1, "first")]
    );

    controller.create("third").await.unwrap();
    controller.update("1", "first, edited").await.unwrap();
    controller.delete(2, |_| true).await.unwrap();

    assert_eq!(
        state.borrow().items,
        vec![Item::new(3, "third"), Item::new(1, "first, edited")]
    );
    assert_eq!(state.borrow().error, None);

    let fresh = Rc::new(RefCell::new(ListState::default()));
    ListController::new(repo, Rc::clone(&fresh)).load().await.unwrap();
    assert_eq!(fresh.borrow().items, state.borrow().items);
}
