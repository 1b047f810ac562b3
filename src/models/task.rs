use serde::{Deserialize, Serialize};

/// Represents the priority suggested for a task.
///
/// Serialized with capitalized labels (`"Low"`, `"Medium"`, `"High"`) as the
/// task-management clients expect them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Routine work with no urgency signal.
    Low,
    /// Work that should happen soon.
    Medium,
    /// Work carrying an urgency signal.
    High,
}

/// The board columns recognized when tallying tasks.
///
/// Only the exact literal strings `"To Do"`, `"In Progress"`, and `"Done"`
/// count; anything else (including an absent status) belongs to no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task is yet to be started.
    Todo,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Done,
}

impl TaskStatus {
    /// Maps a raw status string onto a board column, if it is one of the
    /// recognized literals. Matching is exact: no trimming, no case folding.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "To Do" => Some(TaskStatus::Todo),
            "In Progress" => Some(TaskStatus::InProgress),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// A task as submitted by a client for analysis.
///
/// Clients post their task objects as-is, so every field is optional and
/// unknown fields are ignored. Different clients disagree on the casing of
/// `status` and `assignee`; both casings are accepted, and the lowercase key
/// wins when it carries a non-empty value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "Status")]
    pub status_alt: Option<String>,
    pub assignee: Option<String>,
    #[serde(rename = "Assignee")]
    pub assignee_alt: Option<String>,
}

impl Task {
    /// The raw status string: `status`, then `Status`, first non-empty wins.
    pub fn status(&self) -> Option<&str> {
        ordered_fallback(&self.status, &self.status_alt)
    }

    /// The assignee name: `assignee`, then `Assignee`, first non-empty wins.
    pub fn assignee(&self) -> Option<&str> {
        ordered_fallback(&self.assignee, &self.assignee_alt)
    }
}

fn ordered_fallback<'a>(first: &'a Option<String>, second: &'a Option<String>) -> Option<&'a str> {
    non_empty(first).or_else(|| non_empty(second))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
