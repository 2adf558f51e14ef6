//! Terminal rendering for task lists.

use crate::tasks::model::{Priority, Task};

/// Localized display label for a priority.
#[must_use]
pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "Haute",
        Priority::Medium => "Moyenne",
        Priority::Low => "Basse",
    }
}

/// Renders the task list as an aligned table, or "No tasks." when empty.
///
/// The priority column is omitted when `with_priority` is off.
#[must_use]
pub fn render_task_table(tasks: &[Task], with_priority: bool) -> String {
    if tasks.is_empty() {
        return "No tasks.\n".to_string();
    }

    let rows: Vec<(String, String, String)> = tasks
        .iter()
        .map(|task| {
            let priority = task.priority.map_or("", priority_label).to_string();
            (task.id.to_string(), task.name.clone(), priority)
        })
        .collect();

    // Column widths from the widest cell, floored at the header width.
    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let name_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(4).max(4);
    let priority_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(8).max(8);

    let mut out = String::new();
    if with_priority {
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<priority_width$}\n",
            "ID", "NAME", "PRIORITY",
        ));
        out.push_str(&format!(
            "{:-<id_width$}  {:-<name_width$}  {:-<priority_width$}\n",
            "", "", "",
        ));
        for (id, name, priority) in &rows {
            out.push_str(&format!(
                "{id:<id_width$}  {name:<name_width$}  {priority:<priority_width$}\n",
            ));
        }
    } else {
        out.push_str(&format!("{:<id_width$}  {:<name_width$}\n", "ID", "NAME"));
        out.push_str(&format!("{:-<id_width$}  {:-<name_width$}\n", "", ""));
        for (id, name, _) in &rows {
            out.push_str(&format!("{id:<id_width$}  {name:<name_width$}\n"));
        }
    }
    out.push_str(&format!("\n{} task(s) total.\n", rows.len()));
    out
}
