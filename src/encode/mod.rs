//! Resource block encoders
//!
//! An [`Encoder`] turns `(kind, name, payload)` into the text of one
//! declarative resource block. The payload is anything `Serialize`; fields
//! the payload skips never reach the output.

use serde::Serialize;

use crate::error::Result;

pub mod json;
pub mod terraform;

pub use json::JsonEncoder;
pub use terraform::HclEncoder;

/// Renders one resource block
pub trait Encoder {
    /// Encode `payload` as a resource of type `kind` named `name`.
    fn encode<T: Serialize + ?Sized>(&self, kind: &str, name: &str, payload: &T)
    -> Result<String>;
}
