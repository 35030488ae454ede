//! Wire contract of the modeling service and translation to domain values.
//!
//! Every operation is a request/response message pair bound together by the
//! [`Rpc`] trait. [`codec`] converts between those messages and [`crate::models`];
//! [`kind`] holds the enum symbol tables both directions share.

pub mod codec;
pub mod kind;
pub mod messages;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::facade::validation::FieldError;

pub const PROJECTS_SERVICE: &str = "atelier.v1.Projects";
pub const ATTRIBUTE_TYPES_SERVICE: &str = "atelier.v1.AttributeTypes";

/// A request message together with the response it expects.
pub trait Rpc: Serialize + DeserializeOwned + Send + 'static {
    type Response: Serialize + DeserializeOwned + Send + 'static;

    const SERVICE: &'static str;
    const METHOD: &'static str;

    /// Route of the call relative to the service root, e.g. `/atelier.v1.Projects/GetProject`.
    fn path() -> String {
        format!("/{}/{}", Self::SERVICE, Self::METHOD)
    }
}

/// Error body returned by the service for any non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: StatusCode,
    pub message: String,
    /// Field violations; only set for `invalid_argument`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    InvalidArgument,
    NotFound,
    FailedPrecondition,
    Internal,
}
