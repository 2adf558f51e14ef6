//! Service context bundling the port trait objects.

use crate::adapters::live::HttpTaskStore;
use crate::adapters::memory::InMemoryTaskStore;
use crate::ports::TaskStore;
use crate::tasks::model::Task;

/// Bundles the port trait objects behind one construction point.
///
/// Constructors wire up different adapter implementations (live HTTP,
/// in-memory).
pub struct ServiceContext {
    /// Remote task store.
    pub store: Box<dyn TaskStore>,
}

impl ServiceContext {
    /// Creates a live context talking to the API named by `TASKPAD_API_URL`.
    #[must_use]
    pub fn live() -> Self {
        Self { store: Box::new(HttpTaskStore::from_env()) }
    }

    /// Creates an in-memory context seeded with the given tasks.
    #[must_use]
    pub fn in_memory(tasks: Vec<Task>) -> Self {
        Self { store: Box::new(InMemoryTaskStore::with_tasks(tasks)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::model::{TaskId, normalize_fetch_response};

    #[tokio::test]
    async fn in_memory_context_serves_seeded_tasks() {
        let ctx = ServiceContext::in_memory(vec![Task {
            id: TaskId(1),
            name: "A".into(),
            priority: None,
        }]);
        let value = ctx.store.fetch_tasks().await.unwrap();
        let tasks = normalize_fetch_response(value);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "A");
    }
}
