// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,

    /// Category id. Not checked against the categories table.
    pub category: i64,

    pub difficulty: i64,
}

/// DTO for creating a new question.
/// Numeric fields also accept numeric strings, as sent by form-driven clients.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub difficulty: i64,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Query parameters for the paginated listing.
/// `page` stays a raw string: coercion failures are reported as server errors, not 400s.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub total_questions: i64,
    pub questions: Vec<Question>,
}
