// src/db/sqlite.rs

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    Sqlite, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::{TriviaStore, random_question_query};
use crate::{
    error::AppError,
    models::{category::Category, question::{NewQuestion, Question}},
};

/// SQLite backend, used for local runs and the test suite.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to an in-memory database is a separate database,
        // so it must be a single connection that is never recycled.
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        tracing::info!("Running sqlite migrations...");
        sqlx::migrate!("./migrations/sqlite").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Fresh, migrated in-memory database.
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::connect("sqlite::memory:", 1).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for SqliteStore {
    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, AppError> {
        // SQLite treats a negative OFFSET as zero; fail the way Postgres does instead.
        if offset < 0 {
            return Err(AppError::InternalServerError(format!(
                "OFFSET must not be negative, got {}",
                offset
            )));
        }

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn count_questions(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let pattern = format!("%{}%", term);

        // LIKE is case-insensitive for ASCII in SQLite.
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question LIKE ?1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn questions_by_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question.as_str())
        .bind(new.answer.as_str())
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&mut *tx)
        .await;

        let question = match inserted {
            Ok(question) => question,
            Err(e) => {
                tracing::error!("Failed to insert question: {:?}", e);
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        tx.commit().await?;
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        let rows = match deleted {
            Ok(result) => result.rows_affected(),
            Err(e) => {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        tx.commit().await?;
        Ok(rows)
    }

    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Option<Question>, AppError> {
        let mut query_builder = random_question_query::<Sqlite>(category, exclude);

        let question = query_builder
            .build_query_as::<Question>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(question)
    }
}
