//! `taskpad remove` command.

use crate::context::ServiceContext;
use crate::render::render_task_table;
use crate::tasks::controller::{ControllerConfig, TaskListController};
use crate::tasks::model::TaskId;

/// Execute the `remove` command.
///
/// Issues the delete without a confirmation step, then renders the refreshed
/// list. A failed delete leaves the list as previously fetched.
///
/// # Errors
///
/// Currently always succeeds; delete failures are absorbed by the controller.
pub async fn run(ctx: &ServiceContext, config: ControllerConfig, id: u64) -> Result<(), String> {
    let mut controller = TaskListController::new(ctx.store.as_ref(), config);
    controller.delete_task(TaskId(id)).await;
    print!("{}", render_task_table(controller.tasks(), config.supports_priority));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::model::{Priority, Task};

    #[tokio::test]
    async fn remove_deletes_an_existing_task() {
        let ctx = ServiceContext::in_memory(vec![Task {
            id: TaskId(1),
            name: "A".into(),
            priority: Some(Priority::Low),
        }]);
        assert!(run(&ctx, ControllerConfig::default(), 1).await.is_ok());
    }

    #[tokio::test]
    async fn remove_of_a_missing_task_still_succeeds() {
        let ctx = ServiceContext::in_memory(Vec::new());
        assert!(run(&ctx, ControllerConfig::default(), 9).await.is_ok());
    }
}
