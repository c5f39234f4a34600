pub mod quiz_log;
