//! Task list core: domain types and the edit-reconciliation controller.

pub mod controller;
pub mod model;

pub use controller::{
    CommitFailurePolicy, ControllerConfig, DraftResetPolicy, TaskListController, TaskState,
};
pub use model::{EditedTask, NewTaskDraft, Priority, Task, TaskId};
