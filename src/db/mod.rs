// src/db/mod.rs

//! Persistence for categories and questions.
//!
//! Handlers only see [`TriviaStore`]; the concrete backend is picked from the
//! `DATABASE_URL` scheme at startup.

mod postgres;
mod sqlite;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use sqlx::{Database, Encode, QueryBuilder, Type};

use crate::{
    config::Config,
    error::AppError,
    models::{category::Category, question::{NewQuestion, Question}},
};

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

const CONNECT_RETRIES: u32 = 5;
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Data access used by the HTTP handlers.
///
/// Listings are ordered by id. Every write runs in its own transaction and is
/// rolled back before the error is returned.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    /// One page of questions. A negative `offset` is an error on every backend.
    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, AppError>;

    async fn count_questions(&self) -> Result<i64, AppError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError>;

    async fn questions_by_category(&self, category: i64) -> Result<Vec<Question>, AppError>;

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError>;

    /// Returns the number of deleted rows (0 or 1).
    async fn delete_question(&self, id: i64) -> Result<u64, AppError>;

    /// Uniformly random question outside `exclude`, optionally restricted to one category.
    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Option<Question>, AppError>;
}

/// Connects to the configured database, applies migrations and returns the store.
///
/// The connection is retried a few times so the service can start alongside its database.
pub async fn connect(config: &Config) -> Result<Arc<dyn TriviaStore>, AppError> {
    let url = config.database_url.as_str();
    let max = config.db_max_connections;

    let mut retry_count = 0;
    loop {
        let attempt: Result<Arc<dyn TriviaStore>, AppError> = if url.starts_with("sqlite:") {
            SqliteStore::connect(url, max).await.map(|s| Arc::new(s) as Arc<dyn TriviaStore>)
        } else if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            PgStore::connect(url, max).await.map(|s| Arc::new(s) as Arc<dyn TriviaStore>)
        } else {
            return Err(AppError::InternalServerError(format!(
                "Unsupported DATABASE_URL scheme: {}",
                url.split(':').next().unwrap_or_default()
            )));
        };

        match attempt {
            Ok(store) => return Ok(store),
            Err(e) => {
                retry_count += 1;
                if retry_count > CONNECT_RETRIES {
                    return Err(e);
                }
                tracing::warn!(
                    "Database not ready, retrying in {}s... (Attempt {}): {}",
                    CONNECT_RETRY_DELAY.as_secs(),
                    retry_count,
                    e
                );
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
            }
        }
    }
}

/// `SELECT` for one random question outside `exclude`, optionally within one category.
///
/// Shared by both backends; only the bind placeholder syntax differs, and the
/// builder takes care of that.
pub(crate) fn random_question_query<'args, DB>(
    category: Option<i64>,
    exclude: &[i64],
) -> QueryBuilder<'args, DB>
where
    DB: Database,
    DB::Arguments<'args>: Default,
    i64: Encode<'args, DB> + Type<DB>,
{
    let mut query_builder = QueryBuilder::<DB>::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );

    if let Some(category) = category {
        query_builder.push(" AND category = ").push_bind(category);
    }

    if !exclude.is_empty() {
        query_builder.push(" AND id NOT IN (");
        let mut separated = query_builder.separated(", ");
        for id in exclude {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
    }

    query_builder.push(" ORDER BY RANDOM() LIMIT 1");
    query_builder
}
