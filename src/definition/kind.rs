//! Definition kinds
//!
//! A [`DefinitionKind`] is one categorized slice of a project definition.
//! Its tag is carried by the [`DefinitionItems`] variant, so a kind can never
//! hold items of another kind's shape.

#![allow(clippy::must_use_candidate)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::project::{
    BuildDef, CustomOpsDef, CustomStepConf, CustomStepModuleDef, DeployContainerDef, PackageDef,
    PipelineDef,
};

/// Label carrying the environment of an environment-scoped kind.
pub const LABEL_ENV_NAME: &str = "envName";
/// Label carrying the step name of a custom step kind.
pub const LABEL_STEP_NAME: &str = "stepName";
/// Label carrying the enable mode of a custom step kind.
pub const LABEL_ENABLE_MODE: &str = "enableMode";
/// Label carrying the branch of a pipeline kind.
pub const LABEL_BRANCH_NAME: &str = "branchName";

/// Pipeline annotation: comma-joined environments.
pub const ANNOTATION_ENVS: &str = "envs";
/// Pipeline annotation: comma-joined production environments.
pub const ANNOTATION_ENV_PRODUCTIONS: &str = "envProductions";
/// Pipeline annotation: default pipeline flag.
pub const ANNOTATION_IS_DEFAULT: &str = "isDefault";
/// Pipeline annotation: webhook push event flag.
pub const ANNOTATION_WEBHOOK_PUSH_EVENT: &str = "webhookPushEvent";
/// Pipeline annotation: image tag suffix.
pub const ANNOTATION_TAG_SUFFIX: &str = "tagSuffix";

/// Fixed set of kind tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KindTag {
    /// Derived summary of the whole project
    ProjectSummary,
    /// Build definitions
    BuildDefs,
    /// Package definitions
    PackageDefs,
    /// Deploy container definitions of one environment
    DeployContainerDefs,
    /// One custom step definition
    CustomStepDef,
    /// Pipeline of one branch
    PipelineDef,
    /// Docker ignore rules
    DockerIgnoreDefs,
    /// Custom operations
    CustomOpsDefs,
}

impl KindTag {
    /// Every tag, in extraction order.
    pub const ALL: [KindTag; 8] = [
        KindTag::ProjectSummary,
        KindTag::BuildDefs,
        KindTag::PackageDefs,
        KindTag::DeployContainerDefs,
        KindTag::CustomStepDef,
        KindTag::PipelineDef,
        KindTag::DockerIgnoreDefs,
        KindTag::CustomOpsDefs,
    ];

    /// Wire name of the tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectSummary => "projectSummary",
            Self::BuildDefs => "buildDefs",
            Self::PackageDefs => "packageDefs",
            Self::DeployContainerDefs => "deployContainerDefs",
            Self::CustomStepDef => "customStepDef",
            Self::PipelineDef => "pipelineDef",
            Self::DockerIgnoreDefs => "dockerIgnoreDefs",
            Self::CustomOpsDefs => "customOpsDefs",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-cutting view of a project, the single item of a `projectSummary` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSummary {
    /// Build environment names.
    pub build_envs: Vec<String>,
    /// Build names.
    pub build_names: Vec<String>,
    /// Custom step configurations.
    pub custom_step_confs: Vec<CustomStepConf>,
    /// Package names.
    pub package_names: Vec<String>,
    /// Branches that have a pipeline.
    pub branch_names: Vec<String>,
    /// Available environment names.
    pub env_names: Vec<String>,
    /// Node ports allocated to the project.
    pub node_ports: Vec<i64>,
}

/// Items of a kind, tagged by the kind they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum DefinitionItems {
    /// `projectSummary` items
    ProjectSummary(Vec<ProjectSummary>),
    /// `buildDefs` items
    BuildDefs(Vec<BuildDef>),
    /// `packageDefs` items
    PackageDefs(Vec<PackageDef>),
    /// `deployContainerDefs` items
    DeployContainerDefs(Vec<DeployContainerDef>),
    /// `customStepDef` items
    CustomStepDef(Vec<CustomStepModuleDef>),
    /// `pipelineDef` items
    PipelineDef(Vec<PipelineDef>),
    /// `dockerIgnoreDefs` items
    DockerIgnoreDefs(Vec<String>),
    /// `customOpsDefs` items
    CustomOpsDefs(Vec<CustomOpsDef>),
}

impl DefinitionItems {
    /// Tag of the kind these items belong to
    pub fn tag(&self) -> KindTag {
        match self {
            Self::ProjectSummary(_) => KindTag::ProjectSummary,
            Self::BuildDefs(_) => KindTag::BuildDefs,
            Self::PackageDefs(_) => KindTag::PackageDefs,
            Self::DeployContainerDefs(_) => KindTag::DeployContainerDefs,
            Self::CustomStepDef(_) => KindTag::CustomStepDef,
            Self::PipelineDef(_) => KindTag::PipelineDef,
            Self::DockerIgnoreDefs(_) => KindTag::DockerIgnoreDefs,
            Self::CustomOpsDefs(_) => KindTag::CustomOpsDefs,
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        match self {
            Self::ProjectSummary(v) => v.len(),
            Self::BuildDefs(v) => v.len(),
            Self::PackageDefs(v) => v.len(),
            Self::DeployContainerDefs(v) => v.len(),
            Self::CustomStepDef(v) => v.len(),
            Self::PipelineDef(v) => v.len(),
            Self::DockerIgnoreDefs(v) => v.len(),
            Self::CustomOpsDefs(v) => v.len(),
        }
    }

    /// Returns true if there are no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Context attached to a kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    /// Project the kind was extracted from.
    pub project_name: String,
    /// Scope labels, e.g. `envName`.
    pub labels: BTreeMap<String, String>,
    /// Extra pipeline context.
    pub annotations: BTreeMap<String, String>,
}

impl Metadata {
    /// Creates metadata for a project with no labels
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Adds a label.
    #[must_use]
    pub fn label(mut self, key: &str, value: impl Into<String>) -> Self {
        self.labels.insert(key.to_string(), value.into());
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn annotation(mut self, key: &str, value: impl Into<String>) -> Self {
        self.annotations.insert(key.to_string(), value.into());
        self
    }

    /// Label value, empty when absent
    pub fn label_value(&self, key: &str) -> &str {
        self.labels.get(key).map_or("", String::as_str)
    }

    /// Annotation value, empty when absent
    pub fn annotation_value(&self, key: &str) -> &str {
        self.annotations.get(key).map_or("", String::as_str)
    }
}

/// One categorized slice of a project definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionKind {
    /// Kind tag and items.
    #[serde(flatten)]
    pub items: DefinitionItems,
    /// Project, labels and annotations.
    #[serde(default)]
    pub metadata: Metadata,
    /// Error reported by the server for the source section.
    #[serde(default)]
    pub error_message: String,
}

impl DefinitionKind {
    /// Creates a kind with no error
    pub fn new(items: DefinitionItems, metadata: Metadata) -> Self {
        Self {
            items,
            metadata,
            error_message: String::new(),
        }
    }

    /// Attaches the source section's error.
    #[must_use]
    pub fn with_error(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = error_message.into();
        self
    }

    /// Tag of this kind
    pub fn tag(&self) -> KindTag {
        self.items.tag()
    }
}

/// Output of the engine, whatever the rendering target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionKindList {
    /// Always `list`.
    pub kind: String,
    /// Kinds in extraction order.
    #[serde(default)]
    pub defs: Vec<DefinitionKind>,
    /// Aggregated definition errors.
    #[serde(default)]
    pub error_messages: Vec<String>,
}

impl DefinitionKindList {
    /// Wraps extracted kinds and aggregated errors
    pub fn new(defs: Vec<DefinitionKind>, error_messages: Vec<String>) -> Self {
        Self {
            kind: "list".to_string(),
            defs,
            error_messages,
        }
    }
}
