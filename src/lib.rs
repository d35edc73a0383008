//! # doryctl - project definition client
//!
//! Library behind the `doryctl` command line tool. It retrieves a project's
//! definition tree from the platform (builds, packages, deploy containers,
//! custom steps, pipelines, ignore rules, custom operations), narrows it with
//! user selectors and renders it as tables, JSON or YAML.
//!
//! ## Layers
//!
//! - [`definition`]: document model, kind extraction, filtering and error
//!   aggregation. Pure and synchronous.
//! - [`render`]: value tree, sparse pruning and the three output projections.
//! - [`infrastructure`]: configuration, logging and definition sources.
//!
//! ## Example
//!
//! ```no_run
//! use doryctl::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc: ProjectDefinitionDocument =
//!     serde_json::from_str(&std::fs::read_to_string("project.json")?)?;
//! let filter = FilterSpec::new().with_kinds("build,pipeline")?;
//! let list = build_kind_list(&doc, &filter);
//! print!("{}", render(&list, RenderOptions::new(OutputFormat::Yaml))?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod definition;
pub mod infrastructure;
pub mod render;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use definition::{
    ApiError, DefinitionError, DefinitionItems, DefinitionKind, DefinitionKindList, FilterSpec,
    KindTag, Metadata, ProjectDefinitionDocument, ValidationError, build_kind_list,
};
pub use infrastructure::{Config, FileSource, HttpSource, ProjectDefSource};
pub use render::{OutputFormat, RenderOptions, Value, render};

/// Version of the doryctl crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
