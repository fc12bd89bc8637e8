//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use super::dto::*;
use super::state::AppState;

/// Results returned when the request doesn't specify a limit.
const DEFAULT_LIMIT: usize = 10;

/// Largest limit a request may ask for.
const MAX_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities/search", get(search_cities))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search cities by name.
async fn search_cities(
    State(state): State<AppState>,
    Query(req): Query<CitySearchRequest>,
) -> Result<Json<CitySearchResponse>, AppError> {
    let query = req.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest {
            message: "query parameter 'q' must not be empty".to_string(),
        });
    }

    let limit = req.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let matches = state.search.search(query, limit).await;

    let cities = matches.iter().map(CityResult::from_city).collect();

    Ok(Json(CitySearchResponse { cities }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(status = status.as_u16(), "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
