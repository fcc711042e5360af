//! Attribute bag projection
//!
//! OpsWorks returns stack-specific settings in a free-form `Attributes` map.
//! Only the keys listed in [`KNOWN_ATTRIBUTES`] mean anything for an
//! `aws_opsworks_application`; they are lifted into typed fields and every
//! other key is dropped.

use std::collections::HashMap;

use super::application::OpsWorksApplication;

/// Typed destination for a known attribute key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeField {
    DocumentRoot,
    AutoBundleOnDeploy,
    RailsEnv,
    AwsFlowRubySettings,
}

/// Attribute keys that are projected, and where they land.
pub static KNOWN_ATTRIBUTES: &[(&str, AttributeField)] = &[
    ("DocumentRoot", AttributeField::DocumentRoot),
    ("AutoBundleOnDeploy", AttributeField::AutoBundleOnDeploy),
    ("RailsEnv", AttributeField::RailsEnv),
    ("AwsFlowRubySettings", AttributeField::AwsFlowRubySettings),
];

/// Find the target field for an attribute key (exact, case-sensitive match).
pub fn lookup(key: &str) -> Option<AttributeField> {
    KNOWN_ATTRIBUTES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, field)| *field)
}

impl AttributeField {
    /// Store `value` verbatim in the matching field of `record`.
    pub fn assign(self, record: &mut OpsWorksApplication, value: &str) {
        match self {
            AttributeField::DocumentRoot => record.document_root = Some(value.to_string()),
            AttributeField::AutoBundleOnDeploy => {
                record.auto_bundle_on_deploy = Some(value.to_string())
            }
            AttributeField::RailsEnv => record.rails_env = Some(value.to_string()),
            AttributeField::AwsFlowRubySettings => {
                record.aws_flow_ruby_settings = Some(value.to_string())
            }
        }
    }
}

/// Copy the known attributes from `attributes` into `record`.
///
/// Keys with a `null` value leave their field unset.
pub fn project(attributes: &HashMap<String, Option<String>>, record: &mut OpsWorksApplication) {
    for (key, value) in attributes {
        if let (Some(field), Some(value)) = (lookup(key), value) {
            field.assign(record, value);
        }
    }
}
