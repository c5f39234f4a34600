pub mod canvas_service;
pub mod schedule_service;
