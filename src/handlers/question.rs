// src/handlers/question.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::{
        category::category_map,
        question::{ListParams, NewQuestion, QuestionList, SearchRequest},
    },
    state::DynStore,
    utils::{
        extract::{AppJson, AppPath, AppQuery},
        params::{QUESTIONS_PER_PAGE, page_offset, path_id},
    },
};

/// Lists one page of questions together with the category map and the overall count.
///
/// * `?page=N` defaults to 1.
/// * A page past the end returns an empty list.
/// * A page below 1 fails in the store and surfaces as a 500.
pub async fn list_questions(
    State(store): State<DynStore>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let offset = page_offset(params.page.as_deref())?;

    let questions = store
        .questions_page(offset, QUESTIONS_PER_PAGE)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch question page at offset {}: {:?}", offset, e);
            e
        })?;
    let total_questions = store.count_questions().await?;
    let categories = category_map(store.categories().await?);

    Ok(Json(json!({
        "categories": categories,
        "total_questions": total_questions,
        "questions": questions,
    })))
}

/// Deletes a question by ID. Deleting an id that does not exist still succeeds.
pub async fn delete_question(
    State(store): State<DynStore>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(&id)?;

    let rows = store.delete_question(id).await?;
    if rows == 0 {
        tracing::debug!("Delete of question {} matched no rows", id);
    } else {
        tracing::info!("Deleted question {}", id);
    }

    Ok(Json(json!({ "result": "Deleted Sucessfully" })))
}

/// Creates a question and returns the stored row, including its new id.
pub async fn create_question(
    State(store): State<DynStore>,
    AppJson(payload): AppJson<NewQuestion>,
) -> Result<impl IntoResponse, AppError> {
    let question = store.insert_question(&payload).await?;
    tracing::info!("Created question {} in category {}", question.id, question.category);

    Ok(Json(json!({ "result": question })))
}

/// Case-insensitive substring search over question text. Not paginated.
pub async fn search_questions(
    State(store): State<DynStore>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.search_questions(&payload.search_term).await?;

    Ok(Json(QuestionList {
        total_questions: questions.len() as i64,
        questions,
    }))
}
