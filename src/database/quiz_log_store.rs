use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::quiz_log::{NewQuizLog, QuizLog};

/// Append-only storage for quiz logs.
#[async_trait]
pub trait QuizLogStore: Send + Sync {
    async fn insert(&self, log: NewQuizLog) -> Result<QuizLog>;

    /// All stored logs, oldest first.
    async fn list(&self) -> Result<Vec<QuizLog>>;

    async fn close(&self) {}
}

#[derive(Clone)]
pub struct PgQuizLogStore {
    pool: PgPool,
}

impl PgQuizLogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizLogStore for PgQuizLogStore {
    async fn insert(&self, log: NewQuizLog) -> Result<QuizLog> {
        let row = sqlx::query_as::<_, QuizLog>(
            r#"
            INSERT INTO quiz_logs (id, quiz_id, time_spent, "timestamp", questions)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, quiz_id, time_spent, "timestamp", questions, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(log.quiz_id)
        .bind(log.time_spent)
        .bind(log.timestamp)
        .bind(Json(log.questions))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<QuizLog>> {
        let rows = sqlx::query_as::<_, QuizLog>(
            r#"
            SELECT id, quiz_id, time_spent, "timestamp", questions, created_at
            FROM quiz_logs
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
