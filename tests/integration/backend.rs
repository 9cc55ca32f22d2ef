//! Fake library backend recording every request it receives

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use library_desk::{config::ApiConfig, ApiClient, Services, Synchronizer};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: &'static str,
    pub body: Option<Value>,
}

#[derive(Default)]
struct LibraryState {
    books: Vec<Value>,
    users: Vec<Value>,
    requests: Vec<Recorded>,
    fail_book_listing: bool,
}

#[derive(Clone, Default)]
pub struct FakeLibrary {
    state: Arc<Mutex<LibraryState>>,
}

fn book(id: &str, title: &str, author: &str, year: i32, available: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": author,
        "isbn": format!("isbn-{}", id),
        "publicationYear": year,
        "isAvailable": available
    })
}

impl FakeLibrary {
    /// Dune and Brave New World on the shelf, 1984 lent to Luis
    pub fn seeded() -> Self {
        let nineteen = book("3", "1984", "George Orwell", 1949, false);
        let state = LibraryState {
            books: vec![
                book("1", "Dune", "Frank Herbert", 1965, true),
                book("2", "Brave New World", "Aldous Huxley", 1932, true),
                nineteen.clone(),
            ],
            users: vec![
                json!({ "id": "u1", "name": "Ana", "books": [] }),
                json!({ "id": "u2", "name": "Luis", "books": [nineteen] }),
            ],
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn fail_book_listing(&self) {
        self.state.lock().unwrap().fail_book_listing = true;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Requests received after the first `skip`
    pub fn requests_since(&self, skip: usize) -> Vec<Recorded> {
        self.requests().into_iter().skip(skip).collect()
    }

    /// Bind on an ephemeral port and return the API base URL
    pub async fn serve(&self) -> String {
        let app = Router::new()
            .route("/api/Books", get(list_books).post(add_book))
            .route("/api/Users", get(list_users).post(add_user))
            .route("/api/users/borrow", post(borrow))
            .route("/api/users/return", post(give_back))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api", addr)
    }

    /// Synchronizer wired to this backend through the real HTTP client
    pub async fn desk(&self) -> Synchronizer<Services> {
        let config = ApiConfig {
            base_url: self.serve().await,
            accept_invalid_certs: false,
        };
        let client = ApiClient::new(&config).unwrap();
        Synchronizer::new(Services::new(client))
    }
}

impl LibraryState {
    fn record(&mut self, method: &'static str, path: &'static str, body: Option<Value>) {
        self.requests.push(Recorded { method, path, body });
    }
}

async fn list_books(State(lib): State<FakeLibrary>) -> Response {
    let mut state = lib.state.lock().unwrap();
    state.record("GET", "/Books", None);
    if state.fail_book_listing {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(Value::Array(state.books.clone())).into_response()
}

async fn list_users(State(lib): State<FakeLibrary>) -> Response {
    let mut state = lib.state.lock().unwrap();
    state.record("GET", "/Users", None);
    Json(Value::Array(state.users.clone())).into_response()
}

async fn add_book(State(lib): State<FakeLibrary>, Json(body): Json<Value>) -> StatusCode {
    let mut state = lib.state.lock().unwrap();
    state.record("POST", "/Books", Some(body.clone()));

    let id = (state.books.len() + 1).to_string();
    let mut created = body;
    created["id"] = json!(id);
    created["isAvailable"] = json!(true);
    state.books.push(created);
    StatusCode::CREATED
}

async fn add_user(State(lib): State<FakeLibrary>, Json(body): Json<Value>) -> StatusCode {
    let mut state = lib.state.lock().unwrap();
    state.record("POST", "/Users", Some(body.clone()));

    if body.get("name").and_then(Value::as_str).is_none() {
        return StatusCode::BAD_REQUEST;
    }
    let id = format!("u{}", state.users.len() + 1);
    state.users.push(json!({ "id": id, "name": body["name"], "books": [] }));
    StatusCode::CREATED
}

fn position(items: &[Value], id: &Value) -> Option<usize> {
    items.iter().position(|item| item["id"] == *id)
}

async fn borrow(State(lib): State<FakeLibrary>, Json(body): Json<Value>) -> StatusCode {
    let mut state = lib.state.lock().unwrap();
    state.record("POST", "/users/borrow", Some(body.clone()));

    let (Some(b), Some(u)) = (
        position(&state.books, &body["bookId"]),
        position(&state.users, &body["userId"]),
    ) else {
        return StatusCode::NOT_FOUND;
    };
    if state.books[b]["isAvailable"] != json!(true) {
        return StatusCode::CONFLICT;
    }

    state.books[b]["isAvailable"] = json!(false);
    let lent = state.books[b].clone();
    if let Some(list) = state.users[u]["books"].as_array_mut() {
        list.push(lent);
    }
    StatusCode::OK
}

async fn give_back(State(lib): State<FakeLibrary>, Json(body): Json<Value>) -> StatusCode {
    let mut state = lib.state.lock().unwrap();
    state.record("POST", "/users/return", Some(body.clone()));

    let (Some(b), Some(u)) = (
        position(&state.books, &body["bookId"]),
        position(&state.users, &body["userId"]),
    ) else {
        return StatusCode::NOT_FOUND;
    };
    let Some(list) = state.users[u]["books"].as_array_mut() else {
        return StatusCode::INTERNAL_SERVER_ERROR;
    };
    let Some(i) = position(list, &body["bookId"]) else {
        return StatusCode::CONFLICT;
    };

    list.remove(i);
    state.books[b]["isAvailable"] = json!(true);
    StatusCode::OK
}
