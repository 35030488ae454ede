//! Atelier: gateway between domain objects and the remote modeling service.
//!
//! Callers work with [`facade::Workbench`], which validates input and then
//! delegates to a [`gateway::Gateway`] picked once at startup by
//! [`backend::connect`]. Wire messages stay behind the gateway boundary.

pub mod api;
pub mod backend;
pub mod config;
pub mod diagram;
pub mod error;
pub mod facade;
pub mod gateway;
pub mod models;
pub mod wire;

pub use error::{Error, Result};
