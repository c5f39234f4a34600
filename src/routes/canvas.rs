use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value as JsonValue;

use crate::{
    dto::canvas_dto::CanvasQuery, error::Result, services::canvas_service::CanvasResource,
    AppState,
};

#[axum::debug_handler]
pub async fn list_assignments(
    State(state): State<AppState>,
    query: Option<Query<CanvasQuery>>,
) -> Result<Json<JsonValue>> {
    relay(&state, CanvasResource::Assignments, query).await
}

#[axum::debug_handler]
pub async fn list_quizzes(
    State(state): State<AppState>,
    query: Option<Query<CanvasQuery>>,
) -> Result<Json<JsonValue>> {
    relay(&state, CanvasResource::Quizzes, query).await
}

#[axum::debug_handler]
pub async fn list_grades(
    State(state): State<AppState>,
    query: Option<Query<CanvasQuery>>,
) -> Result<Json<JsonValue>> {
    relay(&state, CanvasResource::Grades, query).await
}

async fn relay(
    state: &AppState,
    resource: CanvasResource,
    query: Option<Query<CanvasQuery>>,
) -> Result<Json<JsonValue>> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let (course_id, access_token) = query.into_credentials()?;
    let body = state
        .canvas_service
        .fetch(resource, &course_id, &access_token)
        .await?;
    Ok(Json(body))
}
