//! Project definition domain: document model, kind extraction, filtering
//! and error aggregation

pub mod aggregate;
pub mod errors;
pub mod extract;
pub mod filter;
pub mod kind;
pub mod project;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod types_tests;

pub use aggregate::collect_errors;
pub use errors::{ApiError, DefinitionError, ValidationError};
pub use extract::{extract_kinds, summarize};
pub use filter::{ALL_KINDS_TOKEN, FilterSpec, KIND_TOKENS, kind_token_options};
pub use kind::{DefinitionItems, DefinitionKind, DefinitionKindList, KindTag, Metadata, ProjectSummary};
pub use project::ProjectDefinitionDocument;
pub use validate::{validate_module_name, validate_project_name};

/// Extracts, filters and aggregates errors in one pass.
///
/// This is the engine's single entry point: the result is independent of
/// the rendering target.
#[must_use]
pub fn build_kind_list(doc: &ProjectDefinitionDocument, filter: &FilterSpec) -> DefinitionKindList {
    let defs = extract_kinds(doc, filter);
    let error_messages = collect_errors(doc);

    tracing::debug!(
        kinds = defs.len(),
        errors = error_messages.len(),
        "Extracted project definition kinds"
    );

    DefinitionKindList::new(defs, error_messages)
}
