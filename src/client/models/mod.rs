//! OpsWorks API data models
//!
//! Shapes returned by the OpsWorks JSON API, organized by resource type.
//! Members keep the API's optionality: nothing is defaulted on the way in.

mod app;
mod stack;

pub use app::{App, DataSource, EnvironmentVariable, Source, SslConfiguration};
pub use stack::Stack;
