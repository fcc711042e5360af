//! Terraform native syntax (HCL) encoder
//!
//! The payload is serialized to a JSON value first and then laid out as a
//! `resource` block:
//!
//! - `null` members are omitted
//! - objects become nested blocks
//! - non-empty arrays of objects become repeated blocks, in order
//! - everything else becomes an attribute

use hcl::{Attribute, Block, Body, Expression, Number, Value as HclValue};
use serde::Serialize;
use serde_json::Value;

use super::Encoder;
use crate::error::{EmitError, Result};

/// Renders `resource "<kind>" "<name>" { ... }` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct HclEncoder;

impl Encoder for HclEncoder {
    fn encode<T: Serialize + ?Sized>(
        &self,
        kind: &str,
        name: &str,
        payload: &T,
    ) -> Result<String> {
        let fields = match serde_json::to_value(payload)? {
            Value::Object(fields) => fields,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(EmitError::Encode {
                    name: name.to_string(),
                    message: format!("payload must be an object, got {}", other),
                }
                .into());
            }
        };

        let (attributes, blocks) = split_members(&fields);
        let resource = Block::builder("resource")
            .add_label(kind)
            .add_label(name)
            .add_attributes(attributes)
            .add_blocks(blocks)
            .build();
        let body = Body::builder().add_block(resource).build();

        hcl::to_string(&body).map_err(|e| {
            EmitError::Encode {
                name: name.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Sort object members into attributes and nested blocks, keeping order.
fn split_members(fields: &serde_json::Map<String, Value>) -> (Vec<Attribute>, Vec<Block>) {
    let mut attributes = Vec::new();
    let mut blocks = Vec::new();

    for (key, value) in fields {
        match value {
            Value::Null => {}
            Value::Object(inner) => blocks.push(nested_block(key, inner)),
            Value::Array(items) if is_block_list(items) => {
                for item in items {
                    if let Value::Object(inner) = item {
                        blocks.push(nested_block(key, inner));
                    }
                }
            }
            other => attributes.push(Attribute::new(key.as_str(), to_expression(other))),
        }
    }

    (attributes, blocks)
}

fn is_block_list(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_object)
}

fn nested_block(identifier: &str, fields: &serde_json::Map<String, Value>) -> Block {
    let (attributes, blocks) = split_members(fields);
    Block::builder(identifier)
        .add_attributes(attributes)
        .add_blocks(blocks)
        .build()
}

fn to_expression(value: &Value) -> Expression {
    Expression::from(to_hcl_value(value))
}

fn to_hcl_value(value: &Value) -> HclValue {
    match value {
        Value::Null => HclValue::Null,
        Value::Bool(b) => HclValue::Bool(*b),
        Value::Number(n) => n
            .as_i64()
            .map(Number::from)
            .or_else(|| n.as_u64().map(Number::from))
            .or_else(|| n.as_f64().and_then(Number::from_f64))
            .map(HclValue::Number)
            .unwrap_or(HclValue::Null),
        Value::String(s) => HclValue::String(s.clone()),
        Value::Array(items) => HclValue::Array(items.iter().map(to_hcl_value).collect()),
        Value::Object(fields) => HclValue::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), to_hcl_value(v)))
                .collect(),
        ),
    }
}
