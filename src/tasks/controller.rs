//! Edit-state reconciliation between local list state and the remote store.

use std::collections::HashMap;

use tracing::warn;

use super::model::{
    EditedTask, NewTaskDraft, Priority, Task, TaskId, normalize_fetch_response,
};
use crate::ports::task_store::{TaskPayload, TaskStore};

/// What to do with a pending edit when its commit fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitFailurePolicy {
    /// Keep the pending edit so the user can retry. Under this policy the
    /// pending entry is cleared iff the update call succeeds.
    #[default]
    RetainEdit,
    /// Drop the pending edit, reverting the display to the committed value.
    DiscardEdit,
}

/// When to reset the new-task draft during creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftResetPolicy {
    /// Reset only once the create call succeeds; a failed create leaves the
    /// draft as typed.
    #[default]
    OnSuccess,
    /// Reset before the outcome is known; a failed create loses the draft.
    Optimistic,
}

/// Capability and policy configuration for [`TaskListController`].
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Whether the store carries a priority field.
    pub supports_priority: bool,
    /// Pending-edit handling on a failed commit.
    pub commit_failure: CommitFailurePolicy,
    /// Draft reset timing during creation.
    pub draft_reset: DraftResetPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            supports_priority: true,
            commit_failure: CommitFailurePolicy::default(),
            draft_reset: DraftResetPolicy::default(),
        }
    }
}

impl ControllerConfig {
    /// Configuration for a store without the priority field.
    #[must_use]
    pub fn without_priority() -> Self {
        Self { supports_priority: false, ..Self::default() }
    }
}

/// Explicit per-task edit state.
///
/// Distinguishes "no edit" and "edit equal to the committed value" (both
/// `Clean`) from a genuine divergence (`Dirty`), which is the only state in
/// which a commit does any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No pending edit, or the pending edit equals the committed fields.
    Clean,
    /// The pending edit diverges from the committed fields.
    Dirty,
}

/// Owns the fetched task list, the per-task pending edits, and the new-task
/// draft, and issues store operations.
///
/// The store is the source of truth: every successful mutation is followed
/// by exactly one re-fetch, and the committed list is only ever replaced
/// wholesale by a fetch. Store failures are logged and swallowed; the
/// operation's effect is simply not applied.
pub struct TaskListController<'a> {
    store: &'a dyn TaskStore,
    config: ControllerConfig,
    tasks: Vec<Task>,
    pending: HashMap<TaskId, EditedTask>,
    draft: NewTaskDraft,
}

impl<'a> TaskListController<'a> {
    /// Creates a controller over the given store.
    #[must_use]
    pub fn new(store: &'a dyn TaskStore, config: ControllerConfig) -> Self {
        let draft = Self::default_draft(&config);
        Self { store, config, tasks: Vec::new(), pending: HashMap::new(), draft }
    }

    /// Requests the full task collection and reconciles local state to it.
    ///
    /// On success the committed list is replaced and the pending map is
    /// reseeded so every task's entry equals its committed fields, dropping
    /// stale edits from a previous render. On failure the list is cleared
    /// and the pending map is left alone.
    pub async fn fetch_all(&mut self) {
        match self.store.fetch_tasks().await {
            Ok(value) => {
                let tasks = normalize_fetch_response(value);
                self.pending =
                    tasks.iter().map(|t| (t.id, EditedTask::from_task(t))).collect();
                self.tasks = tasks;
            }
            Err(err) => {
                warn!(error = %err, "task fetch failed, clearing list");
                self.tasks.clear();
            }
        }
    }

    /// Creates a task from the current draft, then re-fetches.
    ///
    /// No-op while the draft name is blank. Draft reset timing follows the
    /// configured [`DraftResetPolicy`]. A failed create is logged and does
    /// not trigger a re-fetch.
    pub async fn create_task(&mut self) {
        if self.draft.name.trim().is_empty() {
            return;
        }
        let payload = TaskPayload {
            name: self.draft.name.clone(),
            priority: self.wire_priority(self.draft.priority),
        };
        if self.config.draft_reset == DraftResetPolicy::Optimistic {
            self.draft = Self::default_draft(&self.config);
        }
        match self.store.create_task(&payload).await {
            Ok(()) => {
                if self.config.draft_reset == DraftResetPolicy::OnSuccess {
                    self.draft = Self::default_draft(&self.config);
                }
                self.fetch_all().await;
            }
            Err(err) => warn!(error = %err, "task creation failed"),
        }
    }

    /// Commits the pending edit for `id` to the store, then re-fetches.
    ///
    /// No-op when the pending entry or the committed task is missing, or
    /// when the pending fields equal the committed fields — the same guard
    /// that drives the commit affordance. On success the pending entry is
    /// removed; on failure the configured [`CommitFailurePolicy`] applies
    /// and nothing is re-fetched.
    pub async fn commit_edit(&mut self, id: TaskId) {
        let Some(edit) = self.pending.get(&id) else { return };
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else { return };
        if edit.matches(task) {
            return;
        }
        let payload = TaskPayload {
            name: edit.name.clone(),
            priority: self.wire_priority(edit.priority),
        };
        match self.store.update_task(id, &payload).await {
            Ok(()) => {
                self.pending.remove(&id);
                self.fetch_all().await;
            }
            Err(err) => {
                warn!(task = %id, error = %err, "task update failed");
                if self.config.commit_failure == CommitFailurePolicy::DiscardEdit {
                    self.pending.remove(&id);
                }
            }
        }
    }

    /// Deletes the task with `id`, then re-fetches.
    ///
    /// A failed delete is logged and triggers no re-fetch; the task stays
    /// visible (stale) until the next successful fetch.
    pub async fn delete_task(&mut self, id: TaskId) {
        match self.store.delete_task(id).await {
            Ok(()) => self.fetch_all().await,
            Err(err) => warn!(task = %id, error = %err, "task deletion failed"),
        }
    }

    /// Stages a new name into the edit buffer for `id`.
    ///
    /// The first edit of an unseeded id starts from the committed fields.
    /// Ignored for ids not in the committed list.
    pub fn edit_name(&mut self, id: TaskId, name: &str) {
        if let Some(entry) = self.entry(id) {
            entry.name = name.to_string();
        }
    }

    /// Stages a new priority into the edit buffer for `id`.
    ///
    /// Ignored when the store has no priority field, and for ids not in the
    /// committed list.
    pub fn edit_priority(&mut self, id: TaskId, priority: Priority) {
        if !self.config.supports_priority {
            return;
        }
        if let Some(entry) = self.entry(id) {
            entry.priority = Some(priority);
        }
    }

    /// Sets the draft name for the next task to create.
    pub fn set_draft_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    /// Sets the draft priority; ignored when the store has no priority field.
    pub fn set_draft_priority(&mut self, priority: Priority) {
        if self.config.supports_priority {
            self.draft.priority = Some(priority);
        }
    }

    /// The committed task list from the last successful fetch.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The pending edit for `id`, if one exists.
    #[must_use]
    pub fn pending(&self, id: TaskId) -> Option<&EditedTask> {
        self.pending.get(&id)
    }

    /// The fields to display for `id`: the edit buffer when present,
    /// otherwise the committed fields.
    #[must_use]
    pub fn display_fields(&self, id: TaskId) -> Option<EditedTask> {
        if let Some(edit) = self.pending.get(&id) {
            return Some(edit.clone());
        }
        self.tasks.iter().find(|t| t.id == id).map(EditedTask::from_task)
    }

    /// The edit state for `id`. Ids outside the committed list are `Clean`.
    #[must_use]
    pub fn task_state(&self, id: TaskId) -> TaskState {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return TaskState::Clean;
        };
        match self.pending.get(&id) {
            Some(edit) if !edit.matches(task) => TaskState::Dirty,
            _ => TaskState::Clean,
        }
    }

    /// The current new-task draft.
    #[must_use]
    pub fn draft(&self) -> &NewTaskDraft {
        &self.draft
    }

    fn entry(&mut self, id: TaskId) -> Option<&mut EditedTask> {
        if !self.pending.contains_key(&id) {
            let task = self.tasks.iter().find(|t| t.id == id)?;
            self.pending.insert(id, EditedTask::from_task(task));
        }
        self.pending.get_mut(&id)
    }

    fn wire_priority(&self, priority: Option<Priority>) -> Option<Priority> {
        if self.config.supports_priority {
            priority
        } else {
            None
        }
    }

    fn default_draft(config: &ControllerConfig) -> NewTaskDraft {
        if config.supports_priority {
            NewTaskDraft::with_priority()
        } else {
            NewTaskDraft::plain()
        }
    }
}
