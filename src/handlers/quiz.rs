// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::quiz::{QuizRequest, QuizResponse},
    state::DynStore,
    utils::extract::AppJson,
};

/// Picks the next quiz question.
///
/// Chooses uniformly at random among the questions not yet asked, restricted to the
/// quiz category unless it is `0`. When nothing is left the response carries
/// `noquestion` instead of `question`.
pub async fn next_question(
    State(store): State<DynStore>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = req.quiz_category.filter();

    let next = store
        .random_question(category, &req.previous_questions)
        .await
        .map_err(|e| {
            tracing::error!("Failed to select quiz question: {:?}", e);
            e
        })?;

    if next.is_none() {
        tracing::debug!(
            "Quiz exhausted for category {:?} after {} questions",
            category,
            req.previous_questions.len()
        );
    }

    Ok(Json(QuizResponse::from(next)))
}
