// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use super::question::Question;

/// Quiz category id meaning "no category filter".
pub const ALL_CATEGORIES: i64 = 0;

pub const NO_MORE_QUESTIONS: &str = "no more questions to load";

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// The client sends the whole category object; only `id` matters here.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
}

impl QuizCategory {
    /// `None` when the quiz spans every category.
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

/// Either the next question or the exhaustion signal, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Question { question: Question },
    Exhausted { noquestion: &'static str },
}

impl From<Option<Question>> for QuizResponse {
    fn from(next: Option<Question>) -> Self {
        match next {
            Some(question) => QuizResponse::Question { question },
            None => QuizResponse::Exhausted {
                noquestion: NO_MORE_QUESTIONS,
            },
        }
    }
}
