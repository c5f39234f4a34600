pub mod pool;
pub mod quiz_log_store;
