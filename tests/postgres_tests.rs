// tests/postgres_tests.rs
//
// Runs the API over the PostgreSQL backend. Needs a reachable database:
//   DATABASE_URL=postgres://... cargo test --test postgres_tests -- --ignored

mod common;

use std::{collections::HashSet, sync::Arc};

use common::{add_question, spawn_app_with};
use serde_json::{Value, json};
use trivia_api::db::PgStore;

/// Helper function to spawn the app against the Postgres database in `DATABASE_URL`.
async fn spawn_app() -> String {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let store = PgStore::connect(&database_url, 1)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    spawn_app_with(Arc::new(store)).await
}

/// Category id no other test run will use, since the database is shared.
fn unique_category() -> i64 {
    1_000 + (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i64
}

#[tokio::test]
#[ignore = "requires a running Postgres in DATABASE_URL"]
async fn pg_negative_page_is_500() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/questions?page=-1", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], 500);
}

#[tokio::test]
#[ignore = "requires a running Postgres in DATABASE_URL"]
async fn pg_add_then_list_by_category() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let category = unique_category();

    let created = add_question(&client, &address, "pg insert", category).await;

    let body: Value = client
        .get(format!("{}/categories/{}/questions", address, category))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0], created);
}

#[tokio::test]
#[ignore = "requires a running Postgres in DATABASE_URL"]
async fn pg_search_is_case_insensitive() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let marker = uuid::Uuid::new_v4().simple().to_string();
    add_question(&client, &address, &format!("Who sang LaBamba {}?", marker), 5).await;

    let body: Value = client
        .post(format!("{}/questions/search", address))
        .json(&json!({ "searchTerm": format!("labamba {}", marker.to_uppercase()) }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_questions"], 1);
    assert!(
        body["questions"][0]["question"]
            .as_str()
            .unwrap()
            .contains(&marker)
    );
}

#[tokio::test]
#[ignore = "requires a running Postgres in DATABASE_URL"]
async fn pg_quiz_runs_to_exhaustion() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let category = unique_category();
    let mut expected = HashSet::new();
    for i in 0..3 {
        let q = add_question(&client, &address, &format!("pg quiz {}", i), category).await;
        expected.insert(q["id"].as_i64().unwrap());
    }

    let mut previous: Vec<i64> = Vec::new();
    loop {
        let body: Value = client
            .post(format!("{}/quizzes", address))
            .json(&json!({
                "previous_questions": previous,
                "quiz_category": { "type": "Test", "id": category },
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .unwrap();

        if body.get("noquestion").is_some() {
            break;
        }
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {} repeated", id);
        previous.push(id);
        assert!(previous.len() <= expected.len());
    }

    assert_eq!(previous.into_iter().collect::<HashSet<_>>(), expected);

    for id in expected {
        client
            .delete(format!("{}/questions/{}", address, id))
            .send()
            .await
            .expect("Failed to execute request");
    }
}
