//! `apps` command

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{App, OpsWorksApi};
use crate::discovery;
use crate::error::{DiscoveryError, Result};
use crate::models::AppDisplay;
use crate::output;

/// Run the apps list command.
///
/// With `stack`, lists that stack only; otherwise walks every stack.
pub async fn list(opts: &GlobalOptions, stack: Option<&str>, format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let apps = fetch(&ctx.client, stack, ctx.config.concurrency).await?;

    let rows: Vec<AppDisplay> = apps.iter().map(AppDisplay::from).collect();
    output::print(&rows, format)
}

async fn fetch<A: OpsWorksApi + ?Sized>(
    api: &A,
    stack: Option<&str>,
    concurrency: usize,
) -> Result<Vec<App>> {
    match stack {
        Some(stack_id) => api.list_apps(stack_id).await.map_err(|source| {
            DiscoveryError::ListApps {
                stack_id: stack_id.to_string(),
                source,
            }
            .into()
        }),
        None => {
            let discovered = discovery::discover(api, concurrency).await?;
            Ok(discovery::flatten(&discovered).cloned().collect())
        }
    }
}
