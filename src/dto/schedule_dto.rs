use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub assignment_id: String,
    pub estimated_time: f64,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_time_spent: Option<f64>,
    pub schedule: Vec<ScheduleEntry>,
}
