//! Output projections of a [`DefinitionKindList`]
//!
//! JSON and YAML go through the [`Value`] tree, pruned unless full output is
//! requested. The default table output reads the typed kinds directly.

pub mod prune;
pub mod table;
pub mod value;

use serde::Serialize;

use crate::definition::{DefinitionError, DefinitionKindList, ValidationError};

pub use prune::prune;
pub use table::{KindTable, kind_table, render_tables};
pub use value::Value;

/// Output format selected by `--output`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-kind tables
    #[default]
    Table,
    /// Indented JSON
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Parses the `--output` value; `None` or an empty string selects tables.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOutput`] for anything other than
    /// `yaml` or `json`.
    pub fn parse(output: Option<&str>) -> Result<Self, ValidationError> {
        match output.unwrap_or_default() {
            "" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(ValidationError::InvalidOutput(other.to_string())),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Skip pruning of structured output.
    pub full: bool,
}

impl RenderOptions {
    /// Creates options for `format`, pruned
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            full: false,
        }
    }

    /// Sets full (unpruned) output
    #[must_use]
    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }
}

/// Converts the list into the tree used by structured output
///
/// # Errors
///
/// Returns [`DefinitionError::Encode`] if the list cannot be re-encoded.
pub fn structured_tree(list: &DefinitionKindList, full: bool) -> Result<Value, DefinitionError> {
    let tree = Value::from_serializable(list)?;
    Ok(if full { tree } else { prune(tree) })
}

/// Renders the list in the requested format.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if encoding fails.
pub fn render(list: &DefinitionKindList, options: RenderOptions) -> Result<String, DefinitionError> {
    match options.format {
        OutputFormat::Table => Ok(render_tables(list)),
        OutputFormat::Json => {
            let tree = structured_tree(list, options.full)?;
            let mut text = serde_json::to_string_pretty(&tree)?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Yaml => {
            let tree = structured_tree(list, options.full)?;
            Ok(serde_yaml::to_string(&tree)?)
        }
    }
}
