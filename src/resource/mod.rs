//! Terraform resource model for OpsWorks applications
//!
//! - [`application`] - the mapped record and its conversion from the API model
//! - [`attributes`] - the attribute bag lookup table
//! - [`emit`] - naming, encoding and ordering of resource blocks

pub mod application;
pub mod attributes;
pub mod emit;

pub use application::OpsWorksApplication;
pub use emit::emit;
