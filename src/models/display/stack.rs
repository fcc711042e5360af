//! Stack display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_missing;
use crate::client::models::Stack;

/// Stack display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StackDisplay {
    #[tabled(rename = "STACK ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "REGION")]
    pub region: String,

    #[tabled(rename = "VPC")]
    pub vpc_id: String,
}

impl From<&Stack> for StackDisplay {
    fn from(stack: &Stack) -> Self {
        Self {
            id: or_missing(stack.stack_id.as_deref()),
            name: or_missing(stack.name.as_deref()),
            region: or_missing(stack.region.as_deref()),
            vpc_id: or_missing(stack.vpc_id.as_deref()),
        }
    }
}
