//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use std::collections::HashMap;

use super::models::{App, DataSource, EnvironmentVariable, Source, SslConfiguration, Stack};

// ============================================================================
// StackBuilder
// ============================================================================

/// Builder for creating test Stack instances.
///
/// # Example
/// ```ignore
/// let stack = StackBuilder::new("s-123")
///     .name("production")
///     .region("us-east-1")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct StackBuilder {
    stack: Stack,
}

impl StackBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            stack: Stack {
                name: Some(format!("Stack {}", &id)),
                stack_id: Some(id),
                ..Stack::default()
            },
        }
    }

    /// Set the stack name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.stack.name = Some(name.into());
        self
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.stack.region = Some(region.into());
        self
    }

    /// Remove the stack ID.
    pub fn without_id(mut self) -> Self {
        self.stack.stack_id = None;
        self
    }

    /// Build the Stack.
    pub fn build(self) -> Stack {
        self.stack
    }
}

// ============================================================================
// AppBuilder
// ============================================================================

/// Builder for creating test App instances.
///
/// Starts with ID, stack ID and a name; everything else is unset.
#[derive(Debug, Clone)]
pub struct AppBuilder {
    app: App,
}

impl AppBuilder {
    /// Create a new builder for an app in the given stack.
    pub fn new(id: impl Into<String>, stack_id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            app: App {
                name: Some(format!("app-{}", &id)),
                app_id: Some(id),
                stack_id: Some(stack_id.into()),
                ..App::default()
            },
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.app.name = Some(name.into());
        self
    }

    /// Remove the display name.
    pub fn without_name(mut self) -> Self {
        self.app.name = None;
        self
    }

    pub fn shortname(mut self, shortname: impl Into<String>) -> Self {
        self.app.shortname = Some(shortname.into());
        self
    }

    pub fn app_type(mut self, app_type: impl Into<String>) -> Self {
        self.app.app_type = Some(app_type.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.app.description = Some(description.into());
        self
    }

    pub fn enable_ssl(mut self, enabled: bool) -> Self {
        self.app.enable_ssl = Some(enabled);
        self
    }

    /// Set a git source at the given URL.
    pub fn git_source(mut self, url: impl Into<String>) -> Self {
        self.app.app_source = Some(Source {
            source_type: Some("git".to_string()),
            url: Some(url.into()),
            ..Source::default()
        });
        self
    }

    pub fn app_source(mut self, source: Source) -> Self {
        self.app.app_source = Some(source);
        self
    }

    pub fn ssl_configuration(mut self, ssl: SslConfiguration) -> Self {
        self.app.ssl_configuration = Some(ssl);
        self
    }

    /// Append a domain name.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.app
            .domains
            .get_or_insert_with(Vec::new)
            .push(domain.into());
        self
    }

    /// Append an environment variable.
    pub fn env(mut self, key: &str, value: &str, secure: bool) -> Self {
        self.app
            .environment
            .get_or_insert_with(Vec::new)
            .push(EnvironmentVariable {
                key: Some(key.to_string()),
                value: Some(value.to_string()),
                secure: Some(secure),
            });
        self
    }

    /// Append a data source binding.
    pub fn data_source(mut self, arn: &str, source_type: &str, database_name: &str) -> Self {
        self.app
            .data_sources
            .get_or_insert_with(Vec::new)
            .push(DataSource {
                arn: Some(arn.to_string()),
                source_type: Some(source_type.to_string()),
                database_name: Some(database_name.to_string()),
            });
        self
    }

    /// Set one entry in the attribute bag.
    pub fn attribute(mut self, key: &str, value: Option<&str>) -> Self {
        self.app
            .attributes
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.map(str::to_string));
        self
    }

    /// Build the App.
    pub fn build(self) -> App {
        self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_builder_defaults() {
        let stack = StackBuilder::new("s-1").build();
        assert_eq!(stack.stack_id.as_deref(), Some("s-1"));
        assert_eq!(stack.name.as_deref(), Some("Stack s-1"));
        assert_eq!(stack.region, None);
    }

    #[test]
    fn test_app_builder_collections_keep_order() {
        let app = AppBuilder::new("a-1", "s-1")
            .domain("a.example.com")
            .domain("b.example.com")
            .env("A", "1", false)
            .env("B", "2", true)
            .build();

        assert_eq!(
            app.domains.unwrap(),
            vec!["a.example.com".to_string(), "b.example.com".to_string()]
        );
        let keys: Vec<_> = app
            .environment
            .unwrap()
            .into_iter()
            .map(|e| e.key.unwrap())
            .collect();
        assert_eq!(keys, vec!["A", "B"]);
    }
}
