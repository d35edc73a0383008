//! Prelude module for common imports

pub use crate::definition::errors::{ApiError, DefinitionError, ValidationError};
pub use crate::definition::filter::FilterSpec;
pub use crate::definition::kind::{
    DefinitionItems, DefinitionKind, DefinitionKindList, KindTag, Metadata, ProjectSummary,
};
pub use crate::definition::project::ProjectDefinitionDocument;
pub use crate::definition::{build_kind_list, collect_errors, extract_kinds};

pub use crate::render::{OutputFormat, RenderOptions, Value, prune, render};

pub use crate::infrastructure::{Config, FileSource, HttpSource, ProjectDefSource};
