use serde::{Deserialize, Serialize};

use crate::models::quiz_log::{NewQuizLog, QuestionEntry, QuizLog};
use crate::utils::flexible::{
    deserialize_number_flexible, deserialize_object_list, deserialize_string_flexible,
};

pub const SAVED_MESSAGE: &str = "Quiz data saved successfully";

/// Body of `POST /api/quiz-logs`. Every field is optional; unknown fields are
/// ignored. Decode it through `JsonObject` so arrays are refused.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizLogPayload {
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub quiz_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number_flexible")]
    pub time_spent: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_flexible")]
    pub timestamp: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_object_list")]
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub question_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub question_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub answer_value: Option<String>,
}

impl From<QuestionPayload> for QuestionEntry {
    fn from(q: QuestionPayload) -> Self {
        Self {
            question_id: q.question_id,
            question_text: q.question_text,
            answer_value: q.answer_value,
        }
    }
}

impl From<QuizLogPayload> for NewQuizLog {
    fn from(p: QuizLogPayload) -> Self {
        Self {
            quiz_id: p.quiz_id,
            time_spent: p.time_spent,
            timestamp: p.timestamp,
            questions: p.questions.into_iter().map(QuestionEntry::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveQuizLogResponse {
    pub message: String,
}

impl SaveQuizLogResponse {
    pub fn saved() -> Self {
        Self {
            message: SAVED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizLogResponse {
    pub quiz_id: Option<String>,
    pub time_spent: Option<f64>,
    pub timestamp: Option<f64>,
    pub questions: Vec<QuestionEntry>,
}

impl From<QuizLog> for QuizLogResponse {
    fn from(log: QuizLog) -> Self {
        Self {
            quiz_id: log.quiz_id,
            time_spent: log.time_spent,
            timestamp: log.timestamp,
            questions: log.questions.0,
        }
    }
}
