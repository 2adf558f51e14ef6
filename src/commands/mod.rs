//! Command dispatch and handlers.

pub mod add;
pub mod edit;
pub mod list;
pub mod remove;

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::tasks::controller::ControllerConfig;

/// Dispatch a parsed CLI invocation to its handler against the live store.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot start or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let ctx = ServiceContext::live();
    runtime.block_on(dispatch_with_context(cli, &ctx))
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch_with_context(cli: &Cli, ctx: &ServiceContext) -> Result<(), String> {
    let config = if cli.no_priority {
        ControllerConfig::without_priority()
    } else {
        ControllerConfig::default()
    };
    match &cli.command {
        Command::List => list::run(ctx, config).await,
        Command::Add { name, priority } => {
            add::run(ctx, config, name, priority.as_deref()).await
        }
        Command::Edit { id, name, priority } => {
            edit::run(ctx, config, *id, name.as_deref(), priority.as_deref()).await
        }
        Command::Remove { id } => remove::run(ctx, config, *id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn dispatch_routes_to_the_list_handler() {
        let cli = Cli::parse_from(["taskpad", "list"]);
        let ctx = ServiceContext::in_memory(Vec::new());
        assert!(dispatch_with_context(&cli, &ctx).await.is_ok());
    }

    #[tokio::test]
    async fn dispatch_applies_the_no_priority_flag() {
        let cli = Cli::parse_from(["taskpad", "add", "x", "--priority", "low", "--no-priority"]);
        let ctx = ServiceContext::in_memory(Vec::new());
        let result = dispatch_with_context(&cli, &ctx).await;
        assert!(result.is_err());
    }
}
