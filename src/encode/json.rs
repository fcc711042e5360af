//! Terraform JSON syntax encoder

use serde::Serialize;
use serde_json::json;

use super::Encoder;
use crate::error::Result;

/// Renders `{"resource": {"<kind>": {"<name>": {...}}}}` documents
/// (one `.tf.json` document per resource).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode<T: Serialize + ?Sized>(
        &self,
        kind: &str,
        name: &str,
        payload: &T,
    ) -> Result<String> {
        let body = serde_json::to_value(payload)?;
        let document = json!({ "resource": { kind: { name: body } } });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
