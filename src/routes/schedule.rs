use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::Result, services::schedule_service::build_schedule, AppState};

#[axum::debug_handler]
pub async fn get_schedule(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let logs = state.store.list().await?;
    let schedule = build_schedule(logs.iter().map(|log| log.time_spent));
    Ok(Json(schedule))
}
