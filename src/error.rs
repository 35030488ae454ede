//! Error taxonomy shared by the facade, both gateways and the config loader.

use std::fmt;

use thiserror::Error;

use crate::facade::validation::FieldError;

/// Errors surfaced by the gateway layer.
///
/// `Validation`, `NotFound` and `FailedPrecondition` are ordinary outcomes
/// callers are expected to branch on. `Transport` and `Protocol` mean the call
/// did not complete; nothing here retries them. `Config` only happens at startup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation failed: {}", FieldErrors(.0))]
    Validation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Protocol(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::FailedPrecondition(message.into())
    }

    /// Transport and malformed-response failures: the call never produced an answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Protocol(_))
    }
}

struct FieldErrors<'a>(&'a [FieldError]);

impl fmt::Display for FieldErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join(", "))
    }
}
