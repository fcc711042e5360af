//! `stacks` command

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::OpsWorksApi;
use crate::error::Result;
use crate::models::StackDisplay;
use crate::output;

/// Run the stacks list command
pub async fn list(opts: &GlobalOptions, format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stacks = ctx.client.list_stacks().await?;

    let rows: Vec<StackDisplay> = stacks.iter().map(StackDisplay::from).collect();
    output::print(&rows, format)
}
