mod context;

use std::future::Future;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::Path;
use axum::middleware;
use axum::routing::post;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tokio::time::timeout;

use crate::error::AppError;
use crate::locales;
use crate::models::*;
use crate::services::profile;
use crate::state::AppState;

pub use context::REQUEST_ID_HEADER;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses", post(list_courses))
        .route("/api/terms", get(list_terms))
        .route("/api/person", get(person))
        .route("/api/mydetails", get(my_details))
        .route("/api/credits", get(credits))
        .route("/locales/{lng}/{ns}", get(language_strings))
        .layer(middleware::from_fn(context::request_context))
        .with_state(state)
}

async fn with_deadline<T, F>(limit: Duration, work: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    timeout(limit, work).await.map_err(|_| AppError::Timeout)?
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    with_deadline(state.request_timeout, async {
        sqlx::query("select 1").execute(&state.db).await?;
        Ok(())
    })
    .await?;
    Ok(StatusCode::OK)
}

// The body is parsed by hand so clients that omit a JSON content type are
// still served.
async fn list_courses(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CoursesResponse>, AppError> {
    let req: CoursesRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let courses = with_deadline(
        state.request_timeout,
        state.catalog.courses_by_term(req.term_code()),
    )
    .await?;
    Ok(Json(CoursesResponse { courses }))
}

async fn list_terms(State(state): State<AppState>) -> Result<Json<TermsResponse>, AppError> {
    let terms = with_deadline(state.request_timeout, state.catalog.all_terms()).await?;
    Ok(Json(TermsResponse { terms }))
}

async fn person() -> Json<PersonResponse> {
    Json(profile::person())
}

async fn my_details() -> Json<StudentDetailsResponse> {
    Json(profile::student_details())
}

async fn credits() -> Json<CreditsResponse> {
    Json(profile::credits())
}

async fn language_strings(Path((lng, _ns)): Path<(String, String)>) -> Json<LanguageStrings> {
    Json(locales::strings_for(&lng))
}
