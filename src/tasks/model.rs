//! Task domain types and fetch-response normalization.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Task priority, serialized as the wire tokens `HIGH`, `MEDIUM`, `LOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Must be done first.
    High,
    /// Default for new tasks.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// The wire token for this priority.
    #[must_use]
    pub fn as_token(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    /// Parses a priority case-insensitively from its wire token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            other => Err(format!("Unknown priority: {other}. Expected high, medium, or low.")),
        }
    }
}

/// A task record owned by the remote store.
///
/// The controller holds a read-only cached copy per fetch cycle; it is never
/// mutated locally, only replaced wholesale by a re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the store.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Priority; absent on stores without the priority capability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// In-progress edit buffer for one task's editable fields.
///
/// An absent entry in the controller's pending map means "display the
/// committed value"; a present entry means "display this buffer", which may
/// or may not differ from the committed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedTask {
    /// Edited name.
    pub name: String,
    /// Edited priority, when the capability is on.
    pub priority: Option<Priority>,
}

impl EditedTask {
    /// Seeds an edit buffer from a task's committed fields.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self { name: task.name.clone(), priority: task.priority }
    }

    /// Whether the buffer equals the committed fields field-for-field.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.name == task.name && self.priority == task.priority
    }
}

/// Draft fields for a task that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskDraft {
    /// Draft name; creation is refused while this is blank.
    pub name: String,
    /// Draft priority, when the capability is on.
    pub priority: Option<Priority>,
}

impl NewTaskDraft {
    /// Default draft for a store with the priority capability.
    #[must_use]
    pub fn with_priority() -> Self {
        Self { name: String::new(), priority: Some(Priority::Medium) }
    }

    /// Default draft for a store without priorities.
    #[must_use]
    pub fn plain() -> Self {
        Self { name: String::new(), priority: None }
    }
}

/// Normalizes a fetch response into an ordered task list.
///
/// The store may answer with a bare JSON array of tasks or with an envelope
/// object carrying a `tasks` field. Both normalize to the same sequence. Any
/// other shape, and any element that does not decode as a task, yields an
/// empty list.
#[must_use]
pub fn normalize_fetch_response(value: serde_json::Value) -> Vec<Task> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("tasks") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<Task>, _>>()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_bare_array() {
        let value = json!([{"id": 1, "name": "A", "priority": "LOW"}]);
        let tasks = normalize_fetch_response(value);
        assert_eq!(
            tasks,
            vec![Task { id: TaskId(1), name: "A".into(), priority: Some(Priority::Low) }]
        );
    }

    #[test]
    fn normalizes_envelope() {
        let value = json!({"tasks": [{"id": 2, "name": "B"}]});
        let tasks = normalize_fetch_response(value);
        assert_eq!(tasks, vec![Task { id: TaskId(2), name: "B".into(), priority: None }]);
    }

    #[test]
    fn unknown_shape_normalizes_to_empty() {
        assert!(normalize_fetch_response(json!({"items": []})).is_empty());
        assert!(normalize_fetch_response(json!("tasks")).is_empty());
        assert!(normalize_fetch_response(json!(42)).is_empty());
        assert!(normalize_fetch_response(json!(null)).is_empty());
    }

    #[test]
    fn undecodable_element_normalizes_to_empty() {
        let value = json!([{"id": 1, "name": "A"}, {"name": "missing id"}]);
        assert!(normalize_fetch_response(value).is_empty());
    }

    #[test]
    fn priority_round_trips_through_wire_tokens() {
        for (token, priority) in
            [("HIGH", Priority::High), ("MEDIUM", Priority::Medium), ("LOW", Priority::Low)]
        {
            assert_eq!(priority.as_token(), token);
            assert_eq!(token.to_lowercase().parse::<Priority>(), Ok(priority));
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn edited_task_matches_committed_fields() {
        let task = Task { id: TaskId(1), name: "A".into(), priority: Some(Priority::Low) };
        let mut edit = EditedTask::from_task(&task);
        assert!(edit.matches(&task));
        edit.name = "B".into();
        assert!(!edit.matches(&task));
    }
}
