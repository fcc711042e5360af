//! Export pipeline: discover → map → encode

use log::debug;

use crate::client::OpsWorksApi;
use crate::discovery::{self, StackApps};
use crate::encode::Encoder;
use crate::error::Result;
use crate::resource::{self, OpsWorksApplication};

/// Knobs for a single export run
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    /// Maximum concurrent `list_apps` calls (1 = sequential)
    pub concurrency: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Map every discovered app, parent-then-child order.
pub fn map_apps(discovered: &[StackApps]) -> Vec<OpsWorksApplication> {
    discovery::flatten(discovered)
        .map(OpsWorksApplication::from)
        .collect()
}

/// Discover all apps and encode each as a resource block.
///
/// Returns the blocks in discovery order, or the first error; never a
/// partial list.
pub async fn export<A, E>(api: &A, encoder: &E, options: &ExportOptions) -> Result<Vec<String>>
where
    A: OpsWorksApi + ?Sized,
    E: Encoder,
{
    let discovered = discovery::discover(api, options.concurrency).await?;
    let records = map_apps(&discovered);

    debug!("Mapped {} apps", records.len());

    resource::emit(&records, encoder)
}
