use crate::models::{Task, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::round_to_tenth;

/// How a user's task count compares to the team average.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Within half to one-and-a-half times the average.
    Balanced,
    /// More than 1.5x the average task count.
    Overloaded,
    /// Less than 0.5x the average task count.
    Underloaded,
}

/// Per-user line of the workload analysis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEntry {
    pub user: String,
    pub task_count: u32,
    pub status: LoadStatus,
    /// Task count as a percentage of the team average, one decimal place;
    /// 0 when the average itself is 0.
    pub percent_of_average: f64,
}

/// Response body for the workload analysis endpoint.
///
/// `average_tasks_per_user` and `total_tasks` are omitted entirely when no
/// users were supplied; clients distinguish that minimal shape from a normal
/// report by the missing keys.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadReport {
    pub analysis: Vec<WorkloadEntry>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_tasks_per_user: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<u32>,
}

/// Analyzes how tasks are distributed across a team and suggests
/// reassignments.
///
/// Every supplied user owns a bucket keyed by name (duplicates collapse into
/// one); each task increments the bucket its assignee names. Tasks whose
/// assignee is empty or matches no user are silently skipped. Users are then
/// classified against the team average and one suggestion is emitted for
/// every (overloaded, underloaded) pair.
///
/// Entries come back in first-occurrence order of the supplied users.
pub fn analyze_workload(users: &[User], tasks: &[Task]) -> WorkloadReport {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, u32> = HashMap::new();
    for user in users {
        let name = user.name();
        if buckets.insert(name.to_string(), 0).is_none() {
            order.push(name.to_string());
        }
    }

    // Count tasks per assignee, ignoring anyone outside the user list.
    for task in tasks {
        if let Some(assignee) = task.assignee() {
            if let Some(count) = buckets.get_mut(assignee) {
                *count += 1;
            }
        }
    }

    if buckets.is_empty() {
        return WorkloadReport {
            analysis: Vec::new(),
            recommendations: Vec::new(),
            average_tasks_per_user: None,
            total_tasks: None,
        };
    }

    let total_tasks: u32 = buckets.values().sum();
    let average = f64::from(total_tasks) / buckets.len() as f64;

    let mut analysis = Vec::with_capacity(order.len());
    let mut overloaded: Vec<String> = Vec::new();
    let mut underloaded: Vec<String> = Vec::new();

    for name in &order {
        let count = buckets[name];
        let status = if f64::from(count) > average * 1.5 {
            overloaded.push(name.clone());
            LoadStatus::Overloaded
        } else if f64::from(count) < average * 0.5 {
            underloaded.push(name.clone());
            LoadStatus::Underloaded
        } else {
            LoadStatus::Balanced
        };

        let percent_of_average = if average > 0.0 {
            round_to_tenth(f64::from(count) / average * 100.0)
        } else {
            0.0
        };

        analysis.push(WorkloadEntry {
            user: name.clone(),
            task_count: count,
            status,
            percent_of_average,
        });
    }

    // Full cross product: every overloaded user is paired with every
    // underloaded one, so the list grows multiplicatively.
    let mut recommendations = Vec::new();
    for from in &overloaded {
        for to in &underloaded {
            recommendations.push(format!("Consider reassigning tasks from {} to {}", from, to));
        }
    }

    WorkloadReport {
        analysis,
        recommendations,
        average_tasks_per_user: Some(round_to_tenth(average)),
        total_tasks: Some(total_tasks),
    }
}
