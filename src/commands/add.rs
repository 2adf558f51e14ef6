//! `taskpad add` command.

use crate::context::ServiceContext;
use crate::render::render_task_table;
use crate::tasks::controller::{ControllerConfig, TaskListController};
use crate::tasks::model::Priority;

/// Execute the `add` command.
///
/// Creates a task from the given fields, then renders the refreshed list.
///
/// # Errors
///
/// Returns an error for a blank name or an unknown priority token.
pub async fn run(
    ctx: &ServiceContext,
    config: ControllerConfig,
    name: &str,
    priority: Option<&str>,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Task name must not be blank.".to_string());
    }
    if priority.is_some() && !config.supports_priority {
        return Err("--priority is not available with --no-priority.".to_string());
    }
    let priority = priority.map(str::parse::<Priority>).transpose()?;

    let mut controller = TaskListController::new(ctx.store.as_ref(), config);
    controller.set_draft_name(name);
    if let Some(priority) = priority {
        controller.set_draft_priority(priority);
    }
    controller.create_task().await;
    print!("{}", render_task_table(controller.tasks(), config.supports_priority));
    Ok(())
}
