// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use trivia_api::{
    db::SqliteStore,
    routes,
    state::{AppState, DynStore},
};

/// Spawns the app on a random port over a fresh in-memory database.
/// Returns the base URL including the API prefix (e.g. "http://127.0.0.1:12345/api").
pub async fn spawn_app() -> String {
    let store = SqliteStore::in_memory()
        .await
        .expect("Failed to create in-memory store");

    spawn_app_with(Arc::new(store)).await
}

/// Spawns the app over an already prepared store.
pub async fn spawn_app_with(store: DynStore) -> String {
    let app = routes::create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}{}", port, routes::API_PREFIX)
}

/// Creates a question through the API and returns the stored record.
pub async fn add_question(
    client: &reqwest::Client,
    address: &str,
    text: &str,
    category: i64,
) -> Value {
    let response = client
        .post(format!("{}/questions", address))
        .json(&json!({
            "question": text,
            "answer": "answer",
            "category": category,
            "difficulty": 1,
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    body["result"].clone()
}
