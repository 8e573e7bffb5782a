// src/routes.rs

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{category, question, quiz},
    state::AppState,
};

pub const API_PREFIX: &str = "/api";

const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";
const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// Assembles the main application router.
///
/// * Mounts every endpoint under `/api`.
/// * Answers unknown paths with 404 and unsupported verbs with 405, both as JSON.
/// * Applies global middleware (Trace, CORS) to every response, fallbacks included.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("true"),
        ]);

    // CorsLayer only advertises headers/methods on preflight; clients expect them everywhere.
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ));

    Router::new()
        .route(&api("/categories"), get(category::list_categories))
        .route(
            &api("/categories/{id}/questions"),
            get(category::questions_for_category),
        )
        .route(
            &api("/questions"),
            get(question::list_questions).post(question::create_question),
        )
        .route(&api("/questions/search"), post(question::search_questions))
        .route(&api("/questions/{id}"), delete(question::delete_question))
        .route(&api("/quizzes"), post(quiz::next_question))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(cors_headers)
        .with_state(state)
}

fn api(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

async fn not_found() -> AppError {
    AppError::NotFound("no route matched".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("route does not accept this method".to_string())
}
