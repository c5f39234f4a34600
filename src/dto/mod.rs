pub mod canvas_dto;
pub mod quiz_log_dto;
pub mod schedule_dto;
