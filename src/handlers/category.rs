// src/handlers/category.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::category::category_map,
    state::DynStore,
    utils::{extract::AppPath, params::path_id},
};

/// Lists every category as an `{id: type}` object.
pub async fn list_categories(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let categories = store.categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        e
    })?;

    Ok(Json(category_map(categories)))
}

/// Lists the questions of one category.
///
/// An unknown category is not an error; it simply has no questions.
pub async fn questions_for_category(
    State(store): State<DynStore>,
    AppPath(category_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let category_id = path_id(&category_id)?;

    let questions = store.questions_by_category(category_id).await?;

    Ok(Json(json!({
        "current_category": category_id,
        "total_questions": questions.len(),
        "questions": questions,
    })))
}
