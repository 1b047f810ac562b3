use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskStatus};

use super::round_to_tenth;

/// Assumed delivery rate: tasks the team closes per day.
pub const VELOCITY_PER_DAY: u32 = 2;

/// Fallback label when a request names no project.
pub const DEFAULT_PROJECT_NAME: &str = "Project";

/// Schedule risk for the remaining work.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Response body for the timeline forecast endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineReport {
    pub project_name: String,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub todo_tasks: u32,
    /// Share of recognized tasks that are done, one decimal place.
    pub completion_percentage: f64,
    /// Remaining work divided by the assumed velocity, one decimal place.
    pub estimated_days_remaining: f64,
    /// Calendar date (`YYYY-MM-DD`) the remaining work lands on.
    pub predicted_completion_date: String,
    pub risk_level: RiskLevel,
    pub velocity_per_day: u32,
}

/// Projects when a set of tasks will be finished, assuming a fixed velocity.
///
/// Tasks are tallied by board column; anything whose status is not one of the
/// recognized literals is excluded from every figure, including the total.
/// The completion date is projected from the current local time, so a
/// fractional day can still land on today's date.
pub fn forecast_timeline(tasks: &[Task], project_name: &str) -> TimelineReport {
    forecast_at(tasks, project_name, Local::now())
}

fn forecast_at(tasks: &[Task], project_name: &str, now: DateTime<Local>) -> TimelineReport {
    let mut completed = 0u32;
    let mut in_progress = 0u32;
    let mut todo = 0u32;
    for task in tasks {
        match task.status().and_then(TaskStatus::parse) {
            Some(TaskStatus::Done) => completed += 1,
            Some(TaskStatus::InProgress) => in_progress += 1,
            Some(TaskStatus::Todo) => todo += 1,
            None => {}
        }
    }
    let total = completed + in_progress + todo;

    let completion = if total > 0 {
        f64::from(completed) / f64::from(total) * 100.0
    } else {
        0.0
    };

    let remaining = todo + in_progress;
    let estimated_days = if VELOCITY_PER_DAY > 0 {
        f64::from(remaining) / f64::from(VELOCITY_PER_DAY)
    } else {
        0.0
    };

    // Fractional days carry through to the date as whole seconds.
    let predicted = now + Duration::seconds((estimated_days * 86_400.0) as i64);

    let risk_level = if completion < 25.0 && remaining > 10 {
        RiskLevel::High
    } else if completion < 50.0 && remaining > 5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    TimelineReport {
        project_name: project_name.to_string(),
        total_tasks: total,
        completed_tasks: completed,
        in_progress_tasks: in_progress,
        todo_tasks: todo,
        completion_percentage: round_to_tenth(completion),
        estimated_days_remaining: round_to_tenth(estimated_days),
        predicted_completion_date: predicted.format("%Y-%m-%d").to_string(),
        risk_level,
        velocity_per_day: VELOCITY_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn with_status(status: &str) -> Task {
        Task {
            status: Some(status.to_string()),
            ..Task::default()
        }
    }

    fn tasks_by_column(done: usize, in_progress: usize, todo: usize) -> Vec<Task> {
        let mut tasks = Vec::new();
        tasks.extend((0..done).map(|_| with_status("Done")));
        tasks.extend((0..in_progress).map(|_| with_status("In Progress")));
        tasks.extend((0..todo).map(|_| with_status("To Do")));
        tasks
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap()
    }

    #[test_log::test]
    fn test_forecast_for_a_small_board() {
        let report = forecast_timeline(&tasks_by_column(2, 1, 2), "Apollo");

        assert_eq!(report.project_name, "Apollo");
        assert_eq!(report.total_tasks, 5);
        assert_eq!(report.completed_tasks, 2);
        assert_eq!(report.in_progress_tasks, 1);
        assert_eq!(report.todo_tasks, 2);
        assert_eq!(report.completion_percentage, 40.0);
        assert_eq!(report.estimated_days_remaining, 1.5);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.velocity_per_day, 2);
    }

    #[test]
    fn test_empty_board_completes_today() {
        let report = forecast_at(&[], "Apollo", fixed_now());

        assert_eq!(report.total_tasks, 0);
        assert_eq!(report.completed_tasks, 0);
        assert_eq!(report.completion_percentage, 0.0);
        assert_eq!(report.estimated_days_remaining, 0.0);
        assert_eq!(report.predicted_completion_date, "2025-06-02");
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_unrecognized_statuses_are_excluded_everywhere() {
        let mut tasks = tasks_by_column(1, 0, 1);
        tasks.push(with_status("Review"));
        tasks.push(with_status("done"));
        tasks.push(Task::default());

        let report = forecast_timeline(&tasks, "Apollo");

        assert_eq!(report.total_tasks, 2);
        assert_eq!(report.completed_tasks, 1);
        assert_eq!(report.todo_tasks, 1);
        assert_eq!(report.completion_percentage, 50.0);
    }

    #[test]
    fn test_capitalized_status_key_is_honored() {
        let tasks = vec![
            Task {
                status_alt: Some("Done".to_string()),
                ..Task::default()
            },
            Task {
                status: Some(String::new()),
                status_alt: Some("To Do".to_string()),
                ..Task::default()
            },
        ];

        let report = forecast_timeline(&tasks, "Apollo");

        assert_eq!(report.completed_tasks, 1);
        assert_eq!(report.todo_tasks, 1);
        assert_eq!(report.total_tasks, 2);
    }

    #[test]
    fn test_risk_is_medium_when_half_done_is_far_off() {
        // 2 of 8 done: 25% complete with 6 tasks left.
        let report = forecast_timeline(&tasks_by_column(2, 0, 6), "Apollo");

        assert_eq!(report.completion_percentage, 25.0);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_risk_is_high_when_barely_started() {
        // 1 of 12 done: 8.3% complete with 11 tasks left.
        let report = forecast_timeline(&tasks_by_column(1, 3, 8), "Apollo");

        assert_eq!(report.completion_percentage, 8.3);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_predicted_date_advances_by_estimated_days() {
        // 3 remaining at velocity 2 is a day and a half out.
        let report = forecast_at(&tasks_by_column(0, 1, 2), "Apollo", fixed_now());

        assert_eq!(report.estimated_days_remaining, 1.5);
        assert_eq!(report.predicted_completion_date, "2025-06-03");

        // 4 remaining is exactly two days out.
        let report = forecast_at(&tasks_by_column(0, 2, 2), "Apollo", fixed_now());
        assert_eq!(report.estimated_days_remaining, 2.0);
        assert_eq!(report.predicted_completion_date, "2025-06-04");
    }
}
