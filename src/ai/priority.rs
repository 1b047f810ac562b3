use crate::models::Priority;
use serde::{Deserialize, Serialize};

/// Keywords that mark a task as high priority when they appear anywhere in its
/// text. Plain substring matches, so "blockers" also triggers "blocker".
const HIGH_URGENCY_KEYWORDS: &[&str] = &["urgent", "critical", "asap", "immediately", "blocker"];

/// Keywords that mark a task as medium priority when no high-urgency keyword
/// is present.
const MEDIUM_URGENCY_KEYWORDS: &[&str] = &["update", "improve", "scheduled", "soon"];

/// Response body for the priority suggestion endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrioritySuggestion {
    pub suggested_priority: Priority,
}

/// Suggests a priority for a task from its title and description.
///
/// The two fields are joined with a single space, lowercased, and scanned for
/// urgency keywords: any high-urgency hit yields `High`, otherwise any medium
/// hit yields `Medium`, otherwise `Low`. Text without either field present
/// therefore comes out `Low`.
pub fn suggest_priority(title: &str, description: &str) -> Priority {
    let text = format!("{} {}", title, description).to_lowercase();

    if HIGH_URGENCY_KEYWORDS.iter().any(|word| text.contains(word)) {
        Priority::High
    } else if MEDIUM_URGENCY_KEYWORDS.iter().any(|word| text.contains(word)) {
        Priority::Medium
    } else {
        Priority::Low
    }
}
