//! `aws_opsworks_application` resource model
//!
//! [`OpsWorksApplication`] is the format-agnostic record an encoder renders.
//! Serializing it yields exactly the arguments of the Terraform resource:
//! `None` fields are skipped, present fields (even `""` or `false`) are kept.

use serde::Serialize;

use super::attributes;
use crate::client::models::{App, DataSource, EnvironmentVariable, Source, SslConfiguration};

/// Mapped OpsWorks application
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpsWorksApplication {
    /// Provider-assigned ID; computed, never rendered
    #[serde(skip)]
    pub id: Option<String>,

    /// Provider creation timestamp; computed, never rendered
    #[serde(skip)]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,

    /// Rendered as repeated blocks; an empty list renders nothing
    #[serde(skip_serializing_if = "no_blocks")]
    pub environment: Option<Vec<Environment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_source: Option<AppSource>,

    #[serde(skip_serializing_if = "no_blocks")]
    pub data_source: Option<Vec<DataSourceBinding>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssl: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_configuration: Option<SslConfigurationBlock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_root: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_bundle_on_deploy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rails_env: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_flow_ruby_settings: Option<String>,
}

/// Block lists have no "empty" rendering distinct from "absent".
fn no_blocks<T>(blocks: &Option<Vec<T>>) -> bool {
    blocks.as_ref().is_none_or(Vec::is_empty)
}

/// `environment` block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
}

/// `app_source` block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppSource {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

/// `ssl_configuration` block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SslConfigurationBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
}

/// `data_source` block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataSourceBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_database_name: Option<String>,
}

impl From<&EnvironmentVariable> for Environment {
    fn from(var: &EnvironmentVariable) -> Self {
        Self {
            key: var.key.clone(),
            value: var.value.clone(),
            secure: var.secure,
        }
    }
}

impl From<&Source> for AppSource {
    fn from(source: &Source) -> Self {
        Self {
            source_type: source.source_type.clone(),
            url: source.url.clone(),
            username: source.username.clone(),
            password: source.password.clone(),
            ssh_key: source.ssh_key.clone(),
            revision: source.revision.clone(),
        }
    }
}

impl From<&SslConfiguration> for SslConfigurationBlock {
    fn from(ssl: &SslConfiguration) -> Self {
        Self {
            private_key: ssl.private_key.clone(),
            certificate: ssl.certificate.clone(),
            chain: ssl.chain.clone(),
        }
    }
}

impl From<&DataSource> for DataSourceBinding {
    fn from(source: &DataSource) -> Self {
        Self {
            data_source_arn: source.arn.clone(),
            data_source_type: source.source_type.clone(),
            data_source_database_name: source.database_name.clone(),
        }
    }
}

/// Map each element of an optional collection, keeping absent as absent.
fn map_all<'a, S: 'a, T: From<&'a S>>(items: Option<&'a Vec<S>>) -> Option<Vec<T>> {
    items.map(|items| items.iter().map(T::from).collect())
}

impl From<&App> for OpsWorksApplication {
    fn from(app: &App) -> Self {
        let mut record = Self {
            id: app.app_id.clone(),
            created_at: app.created_at.clone(),
            name: app.name.clone(),
            short_name: app.shortname.clone(),
            stack_id: app.stack_id.clone(),
            app_type: app.app_type.clone(),
            description: app.description.clone(),
            domains: app.domains.clone(),
            environment: map_all(app.environment.as_ref()),
            app_source: app.app_source.as_ref().map(AppSource::from),
            data_source: map_all(app.data_sources.as_ref()),
            enable_ssl: app.enable_ssl,
            ssl_configuration: app
                .ssl_configuration
                .as_ref()
                .map(SslConfigurationBlock::from),
            ..Self::default()
        };

        if let Some(bag) = &app.attributes {
            attributes::project(bag, &mut record);
        }

        record
    }
}

impl From<App> for OpsWorksApplication {
    fn from(app: App) -> Self {
        Self::from(&app)
    }
}
