use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::quiz_log_dto::{QuizLogPayload, QuizLogResponse, SaveQuizLogResponse},
    error::{Error, Result},
    utils::flexible::JsonObject,
    AppState,
};

#[axum::debug_handler]
pub async fn create_quiz_log(
    State(state): State<AppState>,
    payload: std::result::Result<Json<JsonObject<QuizLogPayload>>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(JsonObject(payload)) = payload.map_err(reject_payload)?;

    let log = state.store.insert(payload.into()).await.map_err(|e| {
        tracing::error!(error = %e, "Error saving quiz data");
        e
    })?;

    tracing::info!(
        id = %log.id,
        quiz_id = ?log.quiz_id,
        questions = log.questions.len(),
        "Saved quiz data"
    );
    Ok((StatusCode::OK, Json(SaveQuizLogResponse::saved())))
}

#[axum::debug_handler]
pub async fn list_quiz_logs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let logs = state.store.list().await?;
    let body: Vec<QuizLogResponse> = logs.into_iter().map(QuizLogResponse::from).collect();
    Ok(Json(body))
}

/// Bodies that parse as JSON but cannot be coerced into a quiz log are a
/// rejected write, not a client syntax error.
fn reject_payload(rejection: JsonRejection) -> Error {
    match rejection {
        JsonRejection::JsonDataError(e) => Error::InvalidRecord(e.body_text()),
        other => Error::BadRequest(other.body_text()),
    }
}
