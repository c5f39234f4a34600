pub mod canvas;
pub mod health;
pub mod quiz_logs;
pub mod schedule;
