//! Remote task store port.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::tasks::model::{Priority, TaskId};

/// Boxed future type alias used by [`TaskStore`] to keep the trait dyn-compatible.
pub type StoreFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Editable fields sent to the store when creating or updating a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// The task name.
    pub name: String,
    /// The task priority; omitted from the wire when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Manages tasks in the remote store.
///
/// Abstracting the store allows deterministic controller tests without a
/// live API; the transport is an adapter concern.
pub trait TaskStore: Send + Sync {
    /// Requests the full task collection as raw JSON.
    ///
    /// The response shape is not guaranteed by the store; callers normalize
    /// it with [`crate::tasks::model::normalize_fetch_response`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be fetched.
    fn fetch_tasks(&self) -> StoreFuture<'_, serde_json::Value>;

    /// Creates a task with the given fields.
    ///
    /// The created record is not returned; callers re-fetch to observe it.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be created.
    fn create_task(&self, payload: &TaskPayload) -> StoreFuture<'_, ()>;

    /// Replaces the editable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be found or updated.
    fn update_task(&self, id: TaskId, payload: &TaskPayload) -> StoreFuture<'_, ()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be deleted.
    fn delete_task(&self, id: TaskId) -> StoreFuture<'_, ()>;
}
