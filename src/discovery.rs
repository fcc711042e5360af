//! Stack and application discovery
//!
//! Walks OpsWorks top-down: one `list_stacks` call, then `list_apps` for each
//! stack in the order the stacks were returned. The first failure at either
//! level aborts the walk and nothing gathered so far is returned.

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};

use crate::client::{App, OpsWorksApi, Stack};
use crate::error::{DiscoveryError, Result};

/// One stack and the apps listed under it
#[derive(Debug, Clone, PartialEq)]
pub struct StackApps {
    pub stack: Stack,
    pub apps: Vec<App>,
}

/// Discover every stack and its apps.
///
/// With `concurrency <= 1` app listings run one at a time. A higher value
/// keeps up to that many `list_apps` calls in flight once the stack IDs are
/// known; results are still returned in stack order.
pub async fn discover<A>(api: &A, concurrency: usize) -> Result<Vec<StackApps>>
where
    A: OpsWorksApi + ?Sized,
{
    let stacks = api
        .list_stacks()
        .await
        .map_err(DiscoveryError::ListStacks)?;

    debug!("Found {} stacks", stacks.len());

    // Every stack must be addressable before any app listing starts.
    let scoped = stacks
        .into_iter()
        .enumerate()
        .map(|(position, stack)| match stack.stack_id.clone() {
            Some(id) => Ok((id, stack)),
            None => Err(DiscoveryError::MissingStackId(position)),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let discovered = if concurrency <= 1 {
        let mut discovered = Vec::with_capacity(scoped.len());
        for (stack_id, stack) in scoped {
            discovered.push(list_stack_apps(api, stack_id, stack).await?);
        }
        discovered
    } else {
        debug!(
            "Listing apps for {} stacks with max {} concurrent",
            scoped.len(),
            concurrency
        );
        stream::iter(scoped)
            .map(|(stack_id, stack)| list_stack_apps(api, stack_id, stack))
            .buffered(concurrency)
            .try_collect::<Vec<_>>()
            .await?
    };

    info!(
        "Discovered {} apps across {} stacks",
        discovered.iter().map(|s| s.apps.len()).sum::<usize>(),
        discovered.len()
    );

    Ok(discovered)
}

async fn list_stack_apps<A>(
    api: &A,
    stack_id: String,
    stack: Stack,
) -> std::result::Result<StackApps, DiscoveryError>
where
    A: OpsWorksApi + ?Sized,
{
    debug!("Listing apps for stack {}", stack_id);

    match api.list_apps(&stack_id).await {
        Ok(apps) => {
            debug!("Stack {} has {} apps", stack_id, apps.len());
            Ok(StackApps { stack, apps })
        }
        Err(source) => Err(DiscoveryError::ListApps { stack_id, source }),
    }
}

/// Flatten discovery output into apps, parent-then-child order.
pub fn flatten(discovered: &[StackApps]) -> impl Iterator<Item = &App> {
    discovered.iter().flat_map(|s| s.apps.iter())
}
