use crate::dto::schedule_dto::{ScheduleEntry, ScheduleResponse};

pub const NO_LOGS_MESSAGE: &str = "No quiz logs found";
pub const GENERATED_MESSAGE: &str = "Schedule generated";

/// Placeholder assignments: (id, multiplier on the average time, due date).
const PLACEHOLDER_ASSIGNMENTS: [(&str, f64, &str); 2] = [
    ("assignment1", 1.0, "2025-03-15T12:00:00Z"),
    ("assignment2", 1.2, "2025-03-20T12:00:00Z"),
];

/// Naive study schedule from the time spent on every stored quiz. A log
/// without `timeSpent` counts as zero.
pub fn build_schedule<I>(time_spent: I) -> ScheduleResponse
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (count, total) = time_spent
        .into_iter()
        .fold((0usize, 0.0f64), |(count, total), t| {
            (count + 1, total + t.unwrap_or(0.0))
        });

    if count == 0 {
        return ScheduleResponse {
            message: NO_LOGS_MESSAGE.to_string(),
            average_time_spent: None,
            schedule: Vec::new(),
        };
    }

    let average = total / count as f64;
    let schedule = PLACEHOLDER_ASSIGNMENTS
        .iter()
        .map(|(id, factor, due)| ScheduleEntry {
            assignment_id: id.to_string(),
            estimated_time: average * factor,
            due_date: due.to_string(),
        })
        .collect();

    ScheduleResponse {
        message: GENERATED_MESSAGE.to_string(),
        average_time_spent: Some(average),
        schedule,
    }
}
