use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEntry {
    pub question_id: Option<String>,
    pub question_text: Option<String>,
    pub answer_value: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct QuizLog {
    pub id: Uuid,
    pub quiz_id: Option<String>,
    pub time_spent: Option<f64>,
    pub timestamp: Option<f64>,
    pub questions: Json<Vec<QuestionEntry>>,
    pub created_at: DateTime<Utc>,
}

/// A quiz log that has passed boundary coercion but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuizLog {
    pub quiz_id: Option<String>,
    pub time_spent: Option<f64>,
    pub timestamp: Option<f64>,
    pub questions: Vec<QuestionEntry>,
}
