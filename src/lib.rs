pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::database::quiz_log_store::QuizLogStore;
use crate::error::Result;
use crate::services::canvas_service::CanvasService;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuizLogStore>,
    pub canvas_service: CanvasService,
}

impl AppState {
    pub fn new(store: Arc<dyn QuizLogStore>, config: &Config) -> Result<Self> {
        let canvas_service = CanvasService::new(&config.canvas_base_url, config.canvas_timeout)?;
        Ok(Self {
            store,
            canvas_service,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/quiz-logs",
            get(routes::quiz_logs::list_quiz_logs).post(routes::quiz_logs::create_quiz_log),
        )
        .route("/api/schedule", get(routes::schedule::get_schedule))
        .route(
            "/api/canvas/assignments",
            get(routes::canvas::list_assignments),
        )
        .route("/api/canvas/quizzes", get(routes::canvas::list_quizzes))
        .route("/api/canvas/grades", get(routes::canvas::list_grades));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(api)
        .with_state(state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
