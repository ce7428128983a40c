use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::courses::{Course, CourseStore};

use crate::errors::ApiError;

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct ServerState {
    pub courses: Arc<CourseStore>,
}

async fn home() -> &'static str {
    "📚 Welcome to the Course API"
}

async fn get_all(State(state): State<ServerState>) -> Json<Vec<Course>> {
    Json(state.courses.list().await)
}

async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let course = state.courses.get(&id).await?;
    Ok(Json(course))
}

/// Bodies arrive as raw bytes so the store's decode pipeline owns the whole
/// 400 taxonomy; a `Json` extractor would report rejections in its own
/// format and lose the empty-body case.
async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let course = state.courses.create(&body).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Course>, ApiError> {
    let course = state.courses.update(&id, &body).await?;
    Ok(Json(course))
}

async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.courses.delete(&id).await?;
    Ok(Json(
        serde_json::json!({"message": "Course deleted successfully"}),
    ))
}

/// Build the full application router with CORS and request tracing applied.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/getall", get(get_all))
        .route("/getone/:id", get(get_one))
        .route("/create", post(create))
        .route("/update/:id", put(update))
        .route("/delete/:id", delete(remove))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
