//! In-memory adapter for the `TaskStore` port.
//!
//! Serves a task collection from process memory, with optional failure
//! injection and a call log, so controller behavior can be exercised
//! deterministically without a live API.

use std::sync::Mutex;

use crate::ports::task_store::{StoreFuture, TaskPayload, TaskStore};
use crate::tasks::model::{Task, TaskId};

/// One recorded store call, for asserting call sequences in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    /// A `fetch_tasks` call.
    Fetch,
    /// A `create_task` call.
    Create,
    /// An `update_task` call with the payload that was sent.
    Update(TaskId, TaskPayload),
    /// A `delete_task` call.
    Delete(TaskId),
}

/// Which operations fail with an injected error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailureInjection {
    /// Fail `fetch_tasks`.
    pub fetch: bool,
    /// Fail `create_task`.
    pub create: bool,
    /// Fail `update_task`.
    pub update: bool,
    /// Fail `delete_task`.
    pub delete: bool,
}

struct Inner {
    tasks: Vec<Task>,
    next_id: u64,
    calls: Vec<StoreCall>,
    fail: FailureInjection,
    envelope: bool,
}

/// In-memory task store with failure injection and a call log.
pub struct InMemoryTaskStore {
    inner: Mutex<Inner>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Creates a store seeded with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                tasks,
                next_id,
                calls: Vec::new(),
                fail: FailureInjection::default(),
                envelope: false,
            }),
        }
    }

    /// Wraps list responses in a `{"tasks": [...]}` envelope instead of a
    /// bare array.
    pub fn use_envelope(&self, on: bool) {
        self.lock().envelope = on;
    }

    /// Configures which operations fail.
    pub fn inject_failures(&self, fail: FailureInjection) {
        self.lock().fail = fail;
    }

    /// Returns the calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Returns the current store contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("task store lock poisoned")
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

fn injected(op: &str) -> Box<dyn std::error::Error + Send + Sync> {
    format!("injected {op} failure").into()
}

impl TaskStore for InMemoryTaskStore {
    fn fetch_tasks(&self) -> StoreFuture<'_, serde_json::Value> {
        Box::pin(async move {
            let mut inner = self.lock();
            inner.calls.push(StoreCall::Fetch);
            if inner.fail.fetch {
                return Err(injected("fetch"));
            }
            let list = serde_json::to_value(&inner.tasks)?;
            if inner.envelope {
                Ok(serde_json::json!({ "tasks": list }))
            } else {
                Ok(list)
            }
        })
    }

    fn create_task(&self, payload: &TaskPayload) -> StoreFuture<'_, ()> {
        let payload = payload.clone();
        Box::pin(async move {
            let mut inner = self.lock();
            inner.calls.push(StoreCall::Create);
            if inner.fail.create {
                return Err(injected("create"));
            }
            let id = TaskId(inner.next_id);
            inner.next_id += 1;
            inner.tasks.push(Task { id, name: payload.name, priority: payload.priority });
            Ok(())
        })
    }

    fn update_task(&self, id: TaskId, payload: &TaskPayload) -> StoreFuture<'_, ()> {
        let payload = payload.clone();
        Box::pin(async move {
            let mut inner = self.lock();
            inner.calls.push(StoreCall::Update(id, payload.clone()));
            if inner.fail.update {
                return Err(injected("update"));
            }
            let task = inner
                .tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("no task with id {id}").into()
                })?;
            task.name = payload.name;
            if payload.priority.is_some() {
                task.priority = payload.priority;
            }
            Ok(())
        })
    }

    fn delete_task(&self, id: TaskId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let mut inner = self.lock();
            inner.calls.push(StoreCall::Delete(id));
            if inner.fail.delete {
                return Err(injected("delete"));
            }
            let before = inner.tasks.len();
            inner.tasks.retain(|t| t.id != id);
            if inner.tasks.len() == before {
                return Err(format!("no task with id {id}").into());
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::model::Priority;

    fn seed() -> Vec<Task> {
        vec![Task { id: TaskId(1), name: "A".into(), priority: Some(Priority::Low) }]
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let store = InMemoryTaskStore::with_tasks(seed());
        store
            .create_task(&TaskPayload { name: "B".into(), priority: None })
            .await
            .unwrap();
        let tasks = store.snapshot();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, TaskId(2));
    }

    #[tokio::test]
    async fn fetch_honors_envelope_toggle() {
        let store = InMemoryTaskStore::with_tasks(seed());
        let bare = store.fetch_tasks().await.unwrap();
        assert!(bare.is_array());
        store.use_envelope(true);
        let wrapped = store.fetch_tasks().await.unwrap();
        assert!(wrapped.get("tasks").is_some());
    }

    #[tokio::test]
    async fn injected_failures_are_errors_and_logged() {
        let store = InMemoryTaskStore::with_tasks(seed());
        store.inject_failures(FailureInjection { delete: true, ..FailureInjection::default() });
        assert!(store.delete_task(TaskId(1)).await.is_err());
        assert_eq!(store.calls(), vec![StoreCall::Delete(TaskId(1))]);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn update_of_missing_task_is_an_error() {
        let store = InMemoryTaskStore::new();
        let result = store
            .update_task(TaskId(9), &TaskPayload { name: "X".into(), priority: None })
            .await;
        assert!(result.is_err());
    }
}
