//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `taskpad`.
#[derive(Debug, Parser)]
#[command(name = "taskpad", version, about = "Manage tasks in a remote task list")]
pub struct Cli {
    /// Run against a store without the priority field.
    #[arg(long, global = true)]
    pub no_priority: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all tasks.
    List,
    /// Create a task.
    Add {
        /// Name of the task to create.
        name: String,
        /// Priority (high, medium, or low). Defaults to medium.
        #[arg(long)]
        priority: Option<String>,
    },
    /// Edit a task's fields and commit the change.
    Edit {
        /// Identifier of the task to edit.
        id: u64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New priority (high, medium, or low).
        #[arg(long)]
        priority: Option<String>,
    },
    /// Delete a task.
    Remove {
        /// Identifier of the task to delete.
        id: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_list_subcommand() {
        let cli = Cli::parse_from(["taskpad", "list"]);
        assert!(matches!(cli.command, Command::List));
        assert!(!cli.no_priority);
    }

    #[test]
    fn parses_add_with_priority() {
        let cli = Cli::parse_from(["taskpad", "add", "groceries", "--priority", "high"]);
        let Command::Add { name, priority } = cli.command else {
            panic!("expected add subcommand");
        };
        assert_eq!(name, "groceries");
        assert_eq!(priority.as_deref(), Some("high"));
    }

    #[test]
    fn parses_edit_with_partial_fields() {
        let cli = Cli::parse_from(["taskpad", "edit", "3", "--name", "renamed"]);
        let Command::Edit { id, name, priority } = cli.command else {
            panic!("expected edit subcommand");
        };
        assert_eq!(id, 3);
        assert_eq!(name.as_deref(), Some("renamed"));
        assert!(priority.is_none());
    }

    #[test]
    fn parses_global_no_priority_flag() {
        let cli = Cli::parse_from(["taskpad", "list", "--no-priority"]);
        assert!(cli.no_priority);
    }

    #[test]
    fn parses_remove_subcommand() {
        let cli = Cli::parse_from(["taskpad", "remove", "7"]);
        assert!(matches!(cli.command, Command::Remove { id: 7 }));
    }
}
