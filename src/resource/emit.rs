//! Resource block aggregation
//!
//! Pairs mapped records with their Terraform kind and name, runs them through
//! an [`Encoder`] and keeps the blocks in input order.

use log::debug;

use super::application::OpsWorksApplication;
use crate::encode::Encoder;
use crate::error::{EmitError, Result};

/// Terraform resource type for OpsWorks applications
pub const RESOURCE_KIND: &str = "aws_opsworks_application";

/// A record ready for encoding
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    pub kind: &'static str,
    pub name: &'a str,
    pub payload: &'a OpsWorksApplication,
}

impl<'a> Resource<'a> {
    /// Wrap a mapped record. Fails if the record has no display name.
    pub fn new(payload: &'a OpsWorksApplication) -> Result<Self> {
        let name = payload
            .name
            .as_deref()
            .ok_or_else(|| EmitError::MissingName {
                app_id: payload.id.clone(),
                stack_id: payload.stack_id.clone(),
            })?;

        Ok(Self {
            kind: RESOURCE_KIND,
            name,
            payload,
        })
    }

    /// Render this resource with `encoder`.
    pub fn encode<E: Encoder>(&self, encoder: &E) -> Result<String> {
        encoder.encode(self.kind, self.name, self.payload)
    }
}

/// Encode every record, stopping at the first failure.
pub fn emit<E: Encoder>(
    records: &[OpsWorksApplication],
    encoder: &E,
) -> Result<Vec<String>> {
    let mut blocks = Vec::with_capacity(records.len());

    for record in records {
        let resource = Resource::new(record)?;
        debug!("Encoding {} \"{}\"", resource.kind, resource.name);
        blocks.push(resource.encode(encoder)?);
    }

    Ok(blocks)
}
