//! `taskpad list` command.

use crate::context::ServiceContext;
use crate::render::render_task_table;
use crate::tasks::controller::{ControllerConfig, TaskListController};

/// Execute the `list` command.
///
/// Fetches the collection and renders it as a table. A failed fetch renders
/// the same as an empty store.
///
/// # Errors
///
/// Currently always succeeds; fetch failures are absorbed by the controller.
pub async fn run(ctx: &ServiceContext, config: ControllerConfig) -> Result<(), String> {
    let mut controller = TaskListController::new(ctx.store.as_ref(), config);
    controller.fetch_all().await;
    print!("{}", render_task_table(controller.tasks(), config.supports_priority));
    Ok(())
}
