pub mod priority;
pub mod timeline;
pub mod workload;

use crate::models::{Task, User};
use serde::Deserialize;

// Re-export necessary items
pub use priority::{suggest_priority, PrioritySuggestion};
pub use timeline::{forecast_timeline, RiskLevel, TimelineReport};
pub use workload::{analyze_workload, LoadStatus, WorkloadEntry, WorkloadReport};

/// Represents the payload for a priority suggestion request.
#[derive(Debug, Deserialize)]
pub struct PrioritizeRequest {
    /// Task title; treated as empty text when absent.
    pub title: Option<String>,
    /// Task description; treated as empty text when absent.
    pub description: Option<String>,
}

/// Represents the payload for a workload analysis request.
#[derive(Debug, Deserialize)]
pub struct WorkloadRequest {
    /// Team members to aggregate tasks under; missing means nobody.
    #[serde(default)]
    pub users: Vec<User>,
    /// Tasks to distribute across the team; missing means none.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Represents the payload for a timeline forecast request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    /// Tasks whose statuses drive the forecast; missing means none.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Display name echoed back in the report.
    pub project_name: Option<String>,
}

/// Rounds to one decimal place, the precision every report figure is
/// published with.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
