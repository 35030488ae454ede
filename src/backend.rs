//! Backend selection: one configuration value picks the gateway.

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::gateway::{Gateway, InMemoryGateway, RemoteGateway};
use crate::{Error, Result};

/// Supported gateway backends.
///
/// `grpc` is accepted as an older name for `remote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Remote,
    InMemory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::InMemory => "in_memory",
        }
    }

    /// Construct the gateway for this backend.
    pub fn build(self, config: &Config) -> Result<Box<dyn Gateway>> {
        let gateway: Box<dyn Gateway> = match self {
            Self::Remote => Box::new(RemoteGateway::connect(&config.server)?),
            Self::InMemory => Box::new(InMemoryGateway::new()),
        };
        tracing::info!(backend = self.as_str(), "Gateway ready");
        Ok(gateway)
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "remote" | "grpc" => Ok(Self::Remote),
            "in_memory" => Ok(Self::InMemory),
            other => Err(Error::Config(format!(
                "Unsupported backend '{}', expected one of: remote, in_memory",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the gateway named by `config.backend`.
///
/// An unsupported mode fails here, before any operation is attempted.
pub fn connect(config: &Config) -> Result<Box<dyn Gateway>> {
    config.backend.parse::<Backend>()?.build(config)
}
