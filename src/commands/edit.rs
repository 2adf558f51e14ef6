//! `taskpad edit` command.

use crate::context::ServiceContext;
use crate::render::render_task_table;
use crate::tasks::controller::{ControllerConfig, TaskListController, TaskState};
use crate::tasks::model::{Priority, TaskId};

/// Execute the `edit` command.
///
/// Fetches the collection, stages the given fields into the task's edit
/// buffer, and commits. Committing is skipped when the staged fields equal
/// the committed ones.
///
/// # Errors
///
/// Returns an error when no field is given, the priority token is unknown,
/// or the task does not exist.
pub async fn run(
    ctx: &ServiceContext,
    config: ControllerConfig,
    id: u64,
    name: Option<&str>,
    priority: Option<&str>,
) -> Result<(), String> {
    if name.is_none() && priority.is_none() {
        return Err("Nothing to edit: pass --name and/or --priority.".to_string());
    }
    if priority.is_some() && !config.supports_priority {
        return Err("--priority is not available with --no-priority.".to_string());
    }
    let priority = priority.map(str::parse::<Priority>).transpose()?;

    let mut controller = TaskListController::new(ctx.store.as_ref(), config);
    controller.fetch_all().await;

    let id = TaskId(id);
    if !controller.tasks().iter().any(|t| t.id == id) {
        return Err(format!("No task with id {id}."));
    }
    if let Some(name) = name {
        controller.edit_name(id, name);
    }
    if let Some(priority) = priority {
        controller.edit_priority(id, priority);
    }
    if controller.task_state(id) == TaskState::Clean {
        println!("Task {id} is unchanged; nothing to commit.");
        return Ok(());
    }

    controller.commit_edit(id).await;
    print!("{}", render_task_table(controller.tasks(), config.supports_priority));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::model::Task;

    fn ctx() -> ServiceContext {
        ServiceContext::in_memory(vec![Task {
            id: TaskId(1),
            name: "A".into(),
            priority: Some(Priority::Low),
        }])
    }

    #[tokio::test]
    async fn edit_requires_at_least_one_field() {
        let result = run(&ctx(), ControllerConfig::default(), 1, None, None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Nothing to edit"));
    }

    #[tokio::test]
    async fn edit_rejects_unknown_ids() {
        let result = run(&ctx(), ControllerConfig::default(), 9, Some("B"), None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("No task with id 9"));
    }

    #[tokio::test]
    async fn edit_commits_a_name_change() {
        let result = run(&ctx(), ControllerConfig::default(), 1, Some("B"), None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn edit_with_identical_fields_is_reported_as_unchanged() {
        let result = run(&ctx(), ControllerConfig::default(), 1, Some("A"), Some("low")).await;
        assert!(result.is_ok());
    }
}
