use serde::{Deserialize, Serialize};

/// A user as submitted by a client for workload analysis.
///
/// Only the `name` matters here; it is the key tasks are aggregated under.
/// Extra fields on the client's user objects are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
}

impl User {
    /// The aggregation key, defaulting to empty text when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_defaults_to_empty() {
        assert_eq!(User::default().name(), "");
        let user = User {
            name: Some("Alice".to_string()),
        };
        assert_eq!(user.name(), "Alice");
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let user: User =
            serde_json::from_str(r#"{"name": "Dana", "email": "dana@example.com", "role": "PM"}"#)
                .expect("client user object should deserialize");
        assert_eq!(user.name(), "Dana");
    }
}
