//! Infrastructure layer
//!
//! This module contains external integrations and adapters.

pub mod client;
mod config;
mod logging;

pub use client::{ApiEnvelope, FileSource, HttpSource, ProjectDefSource, project_def_url};
pub use config::{Config, ConfigError};
pub use logging::init_logging;
